//! Auth operations and session persistence.
//!
//! Login and registration capture the returned bearer token and hand it to
//! the session store, after which every outbound request carries it until
//! logout. Logout is purely local -- the backend keeps no session state.

use reqwest::Method;

use super::client::ApiClient;
use super::types::{AuthResponse, LoginRequest, RegisterRequest, UserProfile};
use crate::error::ApiError;

/// POST /auth/register -- create an account and persist the session.
pub async fn register(
    client: &ApiClient,
    username: &str,
    password: &str,
    email: &str,
) -> Result<AuthResponse, ApiError> {
    let body = serde_json::to_string(&RegisterRequest {
        username: username.to_string(),
        password: password.to_string(),
        email: email.to_string(),
    })
    .map_err(ApiError::Encode)?;

    let resp: AuthResponse = client
        .request(Method::POST, "/auth/register", Some(body), None)
        .await?;
    client.session().set_session(&resp.token, &resp.user)?;
    log::info!("Registered and stored session for {}", username);
    Ok(resp)
}

/// POST /auth/login -- authenticate and persist the session.
///
/// A fresh login overwrites any existing session without requiring an
/// intervening logout.
pub async fn login(
    client: &ApiClient,
    username: &str,
    password: &str,
) -> Result<AuthResponse, ApiError> {
    let body = serde_json::to_string(&LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    })
    .map_err(ApiError::Encode)?;

    let resp: AuthResponse = client
        .request(Method::POST, "/auth/login", Some(body), None)
        .await?;
    client.session().set_session(&resp.token, &resp.user)?;
    log::info!("Logged in and stored session for {}", username);
    Ok(resp)
}

/// GET /auth/me -- the profile of the currently authenticated user.
pub async fn current_user(client: &ApiClient) -> Result<UserProfile, ApiError> {
    client.request(Method::GET, "/auth/me", None, None).await
}

/// Clear the persisted session. No network call is made.
pub fn logout(client: &ApiClient) -> Result<(), ApiError> {
    log::info!("Logging out, clearing stored session");
    client.session().clear()?;
    Ok(())
}
