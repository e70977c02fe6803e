//! Request and response interceptor hooks
//!
//! Interceptors run synchronously inside a call's lifecycle: request
//! interceptors mutate the per-call [`RequestContext`] before it is turned
//! into the outgoing request, response interceptors inspect the received
//! response and may short-circuit with an error.

use crate::error::ClientError;
use bytes::Bytes;
use http::{HeaderMap, Method, StatusCode, header};
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use std::sync::Arc;

/// Outgoing request descriptor
///
/// Created fresh for every call from the client's default headers, mutated
/// by the request interceptor chain, and consumed to build the request that
/// is actually sent.
#[derive(Debug, Clone)]
pub struct RequestContext {
    method: Method,
    path: String,
    headers: HeaderMap,
    body: Option<JsonValue>,
}

impl RequestContext {
    /// Create a context for `method` and `path` seeded with `headers`
    pub fn new(method: Method, path: impl Into<String>, headers: HeaderMap) -> Self {
        Self {
            method,
            path: path.into(),
            headers,
            body: None,
        }
    }

    /// Request method
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Request path relative to the client's base URL
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Request headers
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Mutable request headers
    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    /// Attach a JSON body
    pub fn json<B: serde::Serialize>(mut self, body: &B) -> Result<Self, ClientError> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// JSON body, if one was attached
    pub fn body(&self) -> Option<&JsonValue> {
        self.body.as_ref()
    }

    pub(crate) fn into_parts(self) -> (Method, String, HeaderMap, Option<JsonValue>) {
        (self.method, self.path, self.headers, self.body)
    }
}

/// Received response descriptor passed through the response chain
#[derive(Debug, Clone)]
pub struct ResponseContext {
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
}

impl ResponseContext {
    /// Buffer a response into a context the chain can inspect
    pub(crate) async fn read(response: reqwest::Response) -> Result<Self, ClientError> {
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?;
        Ok(Self {
            status,
            headers,
            body,
        })
    }

    /// Response status
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Response headers
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Raw response body
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Response body rendered as text
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Decode the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ClientError> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}

/// Hook run before a request is sent
pub trait RequestInterceptor: Send + Sync {
    /// Augment the outgoing request context
    ///
    /// An error here aborts the call before anything hits the network and
    /// propagates unchanged to the caller.
    fn on_request(&self, ctx: &mut RequestContext) -> Result<(), ClientError>;
}

/// Hook run after a response is received
pub trait ResponseInterceptor: Send + Sync {
    /// Inspect or transform the received response
    ///
    /// An error here replaces the response as the outcome of the call.
    fn on_response(&self, ctx: &mut ResponseContext) -> Result<(), ClientError>;
}

/// Source of the bearer credential attached to outgoing requests
pub trait TokenProvider: Send + Sync {
    /// Current bearer token
    fn bearer_token(&self) -> Result<String, ClientError>;
}

/// Token provider backed by a fixed string
///
/// Stands in for a real credential source; anything that can mint or
/// refresh tokens implements [`TokenProvider`] instead.
pub struct StaticTokenProvider {
    token: String,
}

impl StaticTokenProvider {
    /// Create a provider that always yields `token`
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl TokenProvider for StaticTokenProvider {
    fn bearer_token(&self) -> Result<String, ClientError> {
        Ok(self.token.clone())
    }
}

/// Request interceptor that sets the `Authorization` header
///
/// The header lands on the context that is actually sent, not on a copy.
pub struct BearerAuth {
    provider: Arc<dyn TokenProvider>,
}

impl BearerAuth {
    /// Create the interceptor from a credential source
    pub fn new(provider: Arc<dyn TokenProvider>) -> Self {
        Self { provider }
    }
}

impl RequestInterceptor for BearerAuth {
    fn on_request(&self, ctx: &mut RequestContext) -> Result<(), ClientError> {
        let token = self.provider.bearer_token()?;
        let value = header::HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|e| ClientError::RequestSetup(format!("invalid bearer token: {e}")))?;
        ctx.headers_mut().insert(header::AUTHORIZATION, value);
        Ok(())
    }
}

/// Response interceptor that maps non-2xx statuses to errors
///
/// Successful responses pass through unchanged.
pub struct StatusCheck;

impl ResponseInterceptor for StatusCheck {
    fn on_response(&self, ctx: &mut ResponseContext) -> Result<(), ClientError> {
        let status = ctx.status();
        if status.is_success() {
            return Ok(());
        }
        let message = match ctx.text() {
            m if m.is_empty() => status.to_string(),
            m => m,
        };
        Err(ClientError::from_status(status, message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> RequestContext {
        RequestContext::new(Method::GET, "/api/spots/", HeaderMap::new())
    }

    #[test]
    fn bearer_auth_sets_authorization_header() {
        let auth = BearerAuth::new(Arc::new(StaticTokenProvider::new("sample-token")));
        let mut ctx = context();

        auth.on_request(&mut ctx).unwrap();

        let value = ctx.headers().get(header::AUTHORIZATION).unwrap();
        assert_eq!(value, "Bearer sample-token");
    }

    #[test]
    fn bearer_auth_rejects_unencodable_token() {
        let auth = BearerAuth::new(Arc::new(StaticTokenProvider::new("bad\ntoken")));
        let mut ctx = context();

        let result = auth.on_request(&mut ctx);
        assert!(matches!(result, Err(ClientError::RequestSetup(_))));
    }

    #[test]
    fn status_check_passes_success_through() {
        let mut ctx = ResponseContext {
            status: StatusCode::OK,
            headers: HeaderMap::new(),
            body: Bytes::from_static(b"{\"message\":\"ok\"}"),
        };

        StatusCheck.on_response(&mut ctx).unwrap();
        assert_eq!(ctx.body(), b"{\"message\":\"ok\"}");
    }

    #[test]
    fn status_check_maps_error_statuses() {
        let mut ctx = ResponseContext {
            status: StatusCode::UNAUTHORIZED,
            headers: HeaderMap::new(),
            body: Bytes::from_static(b"Unauthorized"),
        };

        let result = StatusCheck.on_response(&mut ctx);
        assert!(matches!(result, Err(ClientError::AuthenticationFailed(_))));
    }
}
