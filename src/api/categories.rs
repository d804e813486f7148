//! Category operations.
//!
//! Categories are keyed by name, and names are free-form user strings, so
//! the path segment is percent-encoded before URL construction.

use reqwest::Method;

use super::client::ApiClient;
use super::types::{Category, UpdateCategoryRequest};
use crate::error::ApiError;

/// GET /categories -- all categories.
pub async fn list_categories(client: &ApiClient) -> Result<Vec<Category>, ApiError> {
    client.request(Method::GET, "/categories", None, None).await
}

/// POST /categories -- create a category.
pub async fn create_category(client: &ApiClient, category: &Category) -> Result<Category, ApiError> {
    let body = serde_json::to_string(category).map_err(ApiError::Encode)?;
    client
        .request(Method::POST, "/categories", Some(body), None)
        .await
}

/// PUT /categories/{name} -- change a category's display color.
pub async fn update_category(
    client: &ApiClient,
    name: &str,
    color: &str,
) -> Result<Category, ApiError> {
    let body = serde_json::to_string(&UpdateCategoryRequest {
        color: color.to_string(),
    })
    .map_err(ApiError::Encode)?;
    client
        .request(Method::PUT, &category_path(name), Some(body), None)
        .await
}

/// DELETE /categories/{name} -- returns the backend's confirmation object.
pub async fn delete_category(
    client: &ApiClient,
    name: &str,
) -> Result<serde_json::Value, ApiError> {
    client
        .request(Method::DELETE, &category_path(name), None, None)
        .await
}

/// Percent-encode the category name into its path segment.
fn category_path(name: &str) -> String {
    format!("/categories/{}", urlencoding::encode(name))
}
