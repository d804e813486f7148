//! Client library for the LinkStash bookmarking backend.
//!
//! Provides an HTTP client with bearer-token injection for the LinkStash
//! REST API (links, categories, site title, auth), plus a session store
//! that persists the auth token and user profile across restarts.
//!
//! The client is explicitly constructed -- no global singleton. Callers
//! create a [`session::SessionStore`] over a storage backend, hand it to
//! [`api::client::ApiClient`], and invoke the domain functions in
//! [`api::links`], [`api::categories`], [`api::title`], and [`api::auth`].

pub mod api;
pub mod config;
pub mod error;
pub mod session;

pub use api::client::ApiClient;
pub use api::types::{AuthResponse, Category, Link, LinkInput, UserProfile};
pub use error::ApiError;
pub use session::{KeyValueStore, KeyringStore, MemoryStore, SessionStore, StorageError};
