//! Link CRUD operations.
//!
//! Thin wrappers over the client's request primitive: path templating and
//! JSON encode/decode only, no transformation of the DTOs.

use reqwest::Method;

use super::client::ApiClient;
use super::types::{Link, LinkInput};
use crate::error::ApiError;

/// GET /links -- all saved links.
pub async fn list_links(client: &ApiClient) -> Result<Vec<Link>, ApiError> {
    client.request(Method::GET, "/links", None, None).await
}

/// GET /links/{id} -- a single link by server-assigned id.
pub async fn get_link(client: &ApiClient, id: i64) -> Result<Link, ApiError> {
    client
        .request(Method::GET, &format!("/links/{id}"), None, None)
        .await
}

/// POST /links -- create a link, returns the created record with its id.
pub async fn create_link(client: &ApiClient, link: &LinkInput) -> Result<Link, ApiError> {
    let body = serde_json::to_string(link).map_err(ApiError::Encode)?;
    client
        .request(Method::POST, "/links", Some(body), None)
        .await
}

/// PUT /links/{id} -- replace a link with a full payload.
pub async fn update_link(client: &ApiClient, id: i64, link: &LinkInput) -> Result<Link, ApiError> {
    let body = serde_json::to_string(link).map_err(ApiError::Encode)?;
    client
        .request(Method::PUT, &format!("/links/{id}"), Some(body), None)
        .await
}

/// DELETE /links/{id} -- returns the backend's confirmation object.
pub async fn delete_link(client: &ApiClient, id: i64) -> Result<serde_json::Value, ApiError> {
    client
        .request(Method::DELETE, &format!("/links/{id}"), None, None)
        .await
}
