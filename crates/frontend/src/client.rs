//! Client configuration and initialization

use crate::config::ApiConfig;
use once_cell::sync::Lazy;
use parkwatch_http::client::intercept::StaticTokenProvider;
use parkwatch_http::{ApiClient, ClientError};
use std::sync::{Arc, Mutex};
use tracing::info;

/// Global client instances
static PUBLIC_CLIENT: Lazy<Mutex<Option<ApiClient>>> = Lazy::new(|| Mutex::new(None));
static AUTH_CLIENT: Lazy<Mutex<Option<ApiClient>>> = Lazy::new(|| Mutex::new(None));

/// Get the shared client instance (for unauthenticated endpoints)
pub fn create_public_client() -> Result<ApiClient, ClientError> {
    let mut client_lock = PUBLIC_CLIENT
        .lock()
        .expect("Failed to acquire public client lock");

    if client_lock.is_none() {
        let client = ApiClient::builder()
            .base_url(ApiConfig::base_url())
            .build()?;
        info!(base_url = client.base_url(), "initialized public API client");
        *client_lock = Some(client.clone());
        Ok(client)
    } else {
        Ok(client_lock
            .as_ref()
            .expect("Public client should be initialized")
            .clone())
    }
}

/// Get the authenticated client instance (returns None if not authenticated)
pub fn create_authenticated_client() -> Result<Option<ApiClient>, ClientError> {
    let client_lock = AUTH_CLIENT
        .lock()
        .expect("Failed to acquire auth client lock");
    Ok(client_lock.clone())
}

/// Update the shared clients with an authentication token
pub fn set_auth_token(token: Option<&str>) -> Result<(), ClientError> {
    let mut auth_lock = AUTH_CLIENT
        .lock()
        .expect("Failed to acquire auth client lock");

    if let Some(token) = token {
        let client = ApiClient::builder()
            .base_url(ApiConfig::base_url())
            .token_provider(Arc::new(StaticTokenProvider::new(token)))
            .build()?;
        info!("installed authenticated API client");
        *auth_lock = Some(client);
    } else {
        // Clear authenticated client
        *auth_lock = None;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AuthConfig;

    // One test owns the global slots so parallel test threads never race
    // on them.
    #[test]
    fn shared_client_lifecycle() {
        let public = create_public_client().unwrap();
        assert_eq!(public.base_url(), ApiConfig::DEFAULT_BASE_URL);

        // Same instance comes back on subsequent calls
        let again = create_public_client().unwrap();
        assert_eq!(again.base_url(), public.base_url());

        assert!(create_authenticated_client().unwrap().is_none());

        set_auth_token(Some(AuthConfig::PLACEHOLDER_TOKEN)).unwrap();
        let authed = create_authenticated_client().unwrap();
        assert!(authed.is_some());

        set_auth_token(None).unwrap();
        assert!(create_authenticated_client().unwrap().is_none());
    }
}
