//! Site title operations.
//!
//! The title is a single global string setting; the backend wraps it as
//! `{"title": "..."}` and these operations unwrap it for the caller.

use reqwest::Method;

use super::client::ApiClient;
use super::types::{TitleRequest, TitleResponse};
use crate::error::ApiError;

/// GET /title -- the bare title string.
pub async fn get_title(client: &ApiClient) -> Result<String, ApiError> {
    let resp: TitleResponse = client.request(Method::GET, "/title", None, None).await?;
    Ok(resp.title)
}

/// PUT /title -- set the title, returns the stored bare string.
pub async fn update_title(client: &ApiClient, title: &str) -> Result<String, ApiError> {
    let body = serde_json::to_string(&TitleRequest {
        title: title.to_string(),
    })
    .map_err(ApiError::Encode)?;
    let resp: TitleResponse = client.request(Method::PUT, "/title", Some(body), None).await?;
    Ok(resp.title)
}
