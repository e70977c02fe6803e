//! HTTP client for the Parkwatch API
//!
//! A thin wrapper over `reqwest` with a fixed base URL, default headers,
//! and request/response interceptor hooks. Typed endpoint methods live in
//! the [`client`] submodules.

pub mod client;
pub mod error;
pub mod types;

pub use client::{ApiClient, ApiClientBuilder, ClientConfig};
pub use error::ClientError;
