//! Parkwatch API client

pub mod intercept;
pub mod posts;
pub mod spots;

use crate::error::ClientError;
use http::{HeaderMap, Method, header};
use intercept::{
    BearerAuth, RequestContext, RequestInterceptor, ResponseContext, ResponseInterceptor,
    StatusCheck, TokenProvider,
};
use reqwest::{Client, ClientBuilder};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Immutable client configuration
///
/// The base URL is fixed at construction; per-call header changes happen on
/// the call's [`RequestContext`], never here.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: String,
    default_headers: HeaderMap,
}

impl ClientConfig {
    /// Base URL requests are resolved against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Headers every outgoing request starts from
    pub fn default_headers(&self) -> &HeaderMap {
        &self.default_headers
    }
}

/// Parkwatch API client
///
/// One long-lived instance is shared per process; see the frontend crate
/// for the singleton wiring.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    config: ClientConfig,
    request_interceptors: Vec<Arc<dyn RequestInterceptor>>,
    response_interceptors: Vec<Arc<dyn ResponseInterceptor>>,
}

impl ApiClient {
    /// Create a new client with default configuration
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::builder().base_url(base_url).build()
    }

    /// Create a new client builder
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::new()
    }

    /// Client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    /// Create a per-call request context seeded with the default headers
    pub fn context(&self, method: Method, path: &str) -> RequestContext {
        RequestContext::new(method, path, self.config.default_headers.clone())
    }

    /// Run a context through the interceptor chains and execute it
    ///
    /// The augmented context is what goes on the wire. Request interceptor
    /// failures and non-2xx outcomes propagate unchanged to the caller.
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        mut ctx: RequestContext,
    ) -> Result<T, ClientError> {
        for interceptor in &self.request_interceptors {
            interceptor.on_request(&mut ctx)?;
        }

        let url = format!("{}{}", self.config.base_url, ctx.path());
        debug!(method = %ctx.method(), %url, "dispatching request");

        let (method, _, headers, body) = ctx.into_parts();
        let mut request = self.client.request(method, url).headers(headers);
        if let Some(body) = &body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let mut ctx = ResponseContext::read(response).await?;
        for interceptor in &self.response_interceptors {
            interceptor.on_response(&mut ctx)?;
        }
        ctx.json()
    }
}

/// Builder for [`ApiClient`]
pub struct ApiClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    default_headers: HeaderMap,
    token_provider: Option<Arc<dyn TokenProvider>>,
    request_interceptors: Vec<Arc<dyn RequestInterceptor>>,
    response_interceptors: Vec<Arc<dyn ResponseInterceptor>>,
}

impl ApiClientBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );
        Self {
            base_url: None,
            timeout: None,
            user_agent: None,
            default_headers,
            token_provider: None,
            request_interceptors: Vec::new(),
            response_interceptors: Vec::new(),
        }
    }

    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Add a header every request starts from
    pub fn default_header(mut self, name: header::HeaderName, value: header::HeaderValue) -> Self {
        self.default_headers.insert(name, value);
        self
    }

    /// Attach bearer credentials from `provider` to every request
    pub fn token_provider(mut self, provider: Arc<dyn TokenProvider>) -> Self {
        self.token_provider = Some(provider);
        self
    }

    /// Add a request interceptor
    pub fn request_interceptor(mut self, interceptor: Arc<dyn RequestInterceptor>) -> Self {
        self.request_interceptors.push(interceptor);
        self
    }

    /// Add a response interceptor
    pub fn response_interceptor(mut self, interceptor: Arc<dyn ResponseInterceptor>) -> Self {
        self.response_interceptors.push(interceptor);
        self
    }

    /// Build the client
    pub fn build(self) -> Result<ApiClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;

        // Ensure base_url ends without a trailing slash
        let base_url = base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url)
            .map_err(|e| ClientError::Configuration(format!("invalid base_url: {e}")))?;

        let mut client_builder = ClientBuilder::new();

        if let Some(timeout) = self.timeout {
            client_builder = client_builder.timeout(timeout);
        }

        if let Some(user_agent) = self.user_agent {
            client_builder = client_builder.user_agent(user_agent);
        } else {
            client_builder = client_builder.user_agent("parkwatch-client/0.1.0");
        }

        let client = client_builder.build()?;

        let mut request_interceptors: Vec<Arc<dyn RequestInterceptor>> = Vec::new();
        if let Some(provider) = self.token_provider {
            request_interceptors.push(Arc::new(BearerAuth::new(provider)));
        }
        request_interceptors.extend(self.request_interceptors);

        // Status mapping runs before any custom response hook so the rest of
        // the chain only ever sees successful responses.
        let mut response_interceptors = vec![Arc::new(StatusCheck) as Arc<dyn ResponseInterceptor>];
        response_interceptors.extend(self.response_interceptors);

        Ok(ApiClient {
            client,
            config: ClientConfig {
                base_url,
                default_headers: self.default_headers,
            },
            request_interceptors,
            response_interceptors,
        })
    }
}

impl Default for ApiClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
