//! Request and response types for the LinkStash backend API.

use serde::{Deserialize, Serialize};

/// Backend user record. The client never inspects its fields -- it is
/// stored and returned verbatim.
pub type UserProfile = serde_json::Value;

/// A saved link as returned by the API. Identity is server-assigned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Link {
    pub id: i64,
    pub title: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Name of the category this link belongs to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Link payload for create and update (everything but the id).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkInput {
    pub title: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// A link category, keyed by name (not a numeric id).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub color: String,
}

/// Body for PUT /categories/{name} -- only the color can change.
#[derive(Debug, Serialize)]
pub struct UpdateCategoryRequest {
    pub color: String,
}

/// Body for PUT /title.
#[derive(Debug, Serialize)]
pub struct TitleRequest {
    pub title: String,
}

/// Response wrapper from GET /title and PUT /title. Domain operations
/// unwrap this to the bare string.
#[derive(Debug, Deserialize)]
pub struct TitleResponse {
    pub title: String,
}

/// Body for POST /auth/register.
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub email: String,
}

/// Body for POST /auth/login.
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response from POST /auth/login and POST /auth/register.
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserProfile,
}
