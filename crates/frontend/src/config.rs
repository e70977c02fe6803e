//! Frontend configuration

/// API endpoint configuration
pub struct ApiConfig;

impl ApiConfig {
    /// Default base URL for the Parkwatch API
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:3000";

    /// Environment variable that overrides the API base URL
    pub const BASE_URL_ENV: &'static str = "PARKWATCH_API_URL";

    /// Resolve the base URL for API calls
    pub fn base_url() -> String {
        std::env::var(Self::BASE_URL_ENV).unwrap_or_else(|_| Self::DEFAULT_BASE_URL.to_string())
    }
}

/// Authentication configuration
pub struct AuthConfig;

impl AuthConfig {
    /// Token refresh interval in milliseconds
    pub const TOKEN_REFRESH_INTERVAL_MS: u32 = 60_000; // 1 minute

    /// Session storage key for auth state
    pub const AUTH_STATE_KEY: &'static str = "auth_state";

    /// Stand-in credential until a real token service is wired up
    pub const PLACEHOLDER_TOKEN: &'static str = "sample-token";
}
