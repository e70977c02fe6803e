//! App-shell plumbing for the Parkwatch frontend
//!
//! Shared API client initialization and the declarative route table. The
//! main application view itself lives with the UI toolkit consuming this
//! crate.

pub mod client;
pub mod config;
pub mod routes;

pub use client::{create_authenticated_client, create_public_client, set_auth_token};
pub use config::{ApiConfig, AuthConfig};
pub use routes::{RouteEntry, RouteOutcome, RouteTable, app_routes};
