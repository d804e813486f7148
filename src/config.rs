//! Base URL resolution for the LinkStash backend API.

/// Local-development fallback used when no env var is set.
pub const DEFAULT_API_URL: &str = "http://localhost:3001/api";

/// Resolve the API base URL from the environment.
///
/// Precedence: LINKSTASH_API_URL > VITE_API_URL > localhost default.
/// VITE_API_URL is honored so a desktop build can share its .env with
/// the web frontend.
pub fn api_base_url() -> String {
    // Load .env from the working directory if present.
    let _ = dotenvy::dotenv();

    std::env::var("LINKSTASH_API_URL")
        .or_else(|_| std::env::var("VITE_API_URL"))
        .unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}
