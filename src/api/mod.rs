//! API client module for the LinkStash backend.
//!
//! Provides the HTTP client with auth header injection, domain operations
//! for links, categories, the site title, and auth, plus request/response
//! types matching the backend's JSON format.

pub mod auth;
pub mod categories;
pub mod client;
pub mod links;
pub mod title;
pub mod types;
