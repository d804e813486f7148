//! HTTP client with auth header injection for the LinkStash backend.
//!
//! All requests are JSON. When the session store holds a bearer token it is
//! attached to every outbound request until the session is cleared.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, CONTENT_TYPE};
use reqwest::{Client, Method, Request, Response};
use serde::de::DeserializeOwned;

use crate::config;
use crate::error::{error_message, ApiError};
use crate::session::SessionStore;

/// HTTP client wrapper for LinkStash API communication.
///
/// Owns the base URL and a handle to the session store; the store supplies
/// the bearer token for authenticated requests. No retries, no caching --
/// each call is independent apart from the shared token.
pub struct ApiClient {
    client: Client,
    base_url: String,
    session: Arc<SessionStore>,
}

impl ApiClient {
    /// Create a new API client with the given base URL and session store.
    pub fn new(base_url: &str, session: Arc<SessionStore>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
        }
    }

    /// Create a client with the base URL resolved from the environment.
    pub fn from_env(session: Arc<SessionStore>) -> Self {
        Self::new(&config::api_base_url(), session)
    }

    /// The session store backing this client's auth header.
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Send a request to a relative API path and decode the JSON response.
    ///
    /// `body`, when present, must already be serialized JSON text. Extra
    /// headers are applied after the defaults so callers win on conflict.
    /// Every failure is logged with the method and URL, then returned.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
        headers: Option<HeaderMap>,
    ) -> Result<T, ApiError> {
        let request = self.build_request(method, path, body, headers)?;
        let method = request.method().clone();
        let url = request.url().to_string();

        let response = self.client.execute(request).await.map_err(|e| {
            log::error!("{} {} failed: {}", method, url, e);
            ApiError::Transport(e)
        })?;

        decode_response(&method, &url, response).await
    }

    /// Assemble the outbound request: target URL, default headers, bearer
    /// token iff the session holds one, then caller-supplied headers.
    fn build_request(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
        headers: Option<HeaderMap>,
    ) -> Result<Request, ApiError> {
        let url = format!("{}{}", self.base_url, path);

        let mut builder = self
            .client
            .request(method, &url)
            .header(CONTENT_TYPE, "application/json");

        if let Some(token) = self.session.token() {
            builder = builder.bearer_auth(token);
        }
        if let Some(extra) = headers {
            builder = builder.headers(extra);
        }
        if let Some(body) = body {
            builder = builder.body(body);
        }

        Ok(builder.build()?)
    }
}

/// Decode a response: normalize non-success statuses into `ApiError::Api`,
/// otherwise parse the body as JSON for the expected type.
async fn decode_response<T: DeserializeOwned>(
    method: &Method,
    url: &str,
    response: Response,
) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let message = error_message(status.as_u16(), &body);
        log::error!("{} {} returned {}: {}", method, url, status, message);
        return Err(ApiError::Api {
            status: status.as_u16(),
            message,
        });
    }

    let body = response.text().await.map_err(|e| {
        log::error!("{} {}: failed to read response body: {}", method, url, e);
        ApiError::Transport(e)
    })?;
    serde_json::from_str(&body).map_err(|e| {
        log::error!("{} {}: response body is not valid JSON: {}", method, url, e);
        ApiError::Decode(e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{KeyValueStore, MemoryStore};
    use reqwest::header::{HeaderValue, AUTHORIZATION};

    fn anonymous_client() -> ApiClient {
        let session = Arc::new(SessionStore::new(Box::new(MemoryStore::new())));
        ApiClient::new("http://localhost:3001/api", session)
    }

    fn authenticated_client(token: &str) -> ApiClient {
        let store = MemoryStore::new();
        store.set("linkstash_token", token).unwrap();
        let session = Arc::new(SessionStore::new(Box::new(store)));
        ApiClient::new("http://localhost:3001/api", session)
    }

    #[test]
    fn target_is_base_url_plus_path() {
        let req = anonymous_client()
            .build_request(Method::GET, "/links", None, None)
            .unwrap();
        assert_eq!(req.url().as_str(), "http://localhost:3001/api/links");
        assert_eq!(req.method(), &Method::GET);
    }

    #[test]
    fn trailing_slash_on_base_url_is_trimmed() {
        let session = Arc::new(SessionStore::new(Box::new(MemoryStore::new())));
        let client = ApiClient::new("http://localhost:3001/api/", session);
        let req = client
            .build_request(Method::GET, "/links", None, None)
            .unwrap();
        assert_eq!(req.url().as_str(), "http://localhost:3001/api/links");
    }

    #[test]
    fn default_headers_include_content_type() {
        let req = anonymous_client()
            .build_request(Method::POST, "/links", Some("{}".to_string()), None)
            .unwrap();
        assert_eq!(
            req.headers().get(CONTENT_TYPE),
            Some(&HeaderValue::from_static("application/json"))
        );
    }

    #[test]
    fn authorization_header_absent_without_token() {
        let req = anonymous_client()
            .build_request(Method::GET, "/links", None, None)
            .unwrap();
        assert!(req.headers().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn authorization_header_present_with_stored_token() {
        let req = authenticated_client("tok-abc")
            .build_request(Method::GET, "/links", None, None)
            .unwrap();
        assert_eq!(
            req.headers().get(AUTHORIZATION),
            Some(&HeaderValue::from_static("Bearer tok-abc"))
        );
    }

    #[test]
    fn caller_headers_override_defaults() {
        let mut extra = HeaderMap::new();
        extra.insert(CONTENT_TYPE, HeaderValue::from_static("text/plain"));
        extra.insert(AUTHORIZATION, HeaderValue::from_static("Bearer other"));

        let req = authenticated_client("tok-abc")
            .build_request(Method::GET, "/links", None, Some(extra))
            .unwrap();
        assert_eq!(
            req.headers().get(CONTENT_TYPE),
            Some(&HeaderValue::from_static("text/plain"))
        );
        assert_eq!(
            req.headers().get(AUTHORIZATION),
            Some(&HeaderValue::from_static("Bearer other"))
        );
    }

    #[test]
    fn body_is_passed_through_verbatim() {
        let req = anonymous_client()
            .build_request(
                Method::POST,
                "/links",
                Some(r#"{"title":"t"}"#.to_string()),
                None,
            )
            .unwrap();
        let body = req.body().unwrap().as_bytes().unwrap();
        assert_eq!(body, br#"{"title":"t"}"#.as_slice());
    }
}
