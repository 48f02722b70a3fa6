use reqwest::{header::HeaderMap, Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use super::{
    events::AuthEvents,
    types::{ApiError, Session},
};
use crate::config::{self, BackendEndpoint};

/// HTTP client for the hosted auth-and-storage backend.
///
/// Clones share the underlying connection pool and the auth event bus, so a
/// single instance provided as context is what every view talks to.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    endpoint: Option<BackendEndpoint>,
    events: AuthEvents,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            endpoint: None,
            events: AuthEvents::default(),
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self::new_with_endpoint(BackendEndpoint::new(base_url, ""))
    }

    pub fn new_with_endpoint(endpoint: BackendEndpoint) -> Self {
        Self {
            client: Client::new(),
            endpoint: Some(endpoint),
            events: AuthEvents::default(),
        }
    }

    pub(super) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(super) fn events(&self) -> &AuthEvents {
        &self.events
    }

    pub(super) async fn resolved_endpoint(&self) -> BackendEndpoint {
        match &self.endpoint {
            Some(endpoint) => endpoint.clone(),
            None => config::await_endpoint().await,
        }
    }

    /// `apikey` plus a bearer token: the current session's, refreshed first
    /// if it has expired, otherwise the anonymous key.
    pub(super) async fn auth_headers(
        &self,
        endpoint: &BackendEndpoint,
    ) -> Result<HeaderMap, ApiError> {
        let session = self.current_session().await;
        Self::bearer_headers(endpoint, session.as_ref())
    }

    pub(super) fn bearer_headers(
        endpoint: &BackendEndpoint,
        session: Option<&Session>,
    ) -> Result<HeaderMap, ApiError> {
        let token = session
            .map(|session| session.access_token.clone())
            .unwrap_or_else(|| endpoint.anon_key.clone());
        let mut headers = Self::anon_headers(endpoint)?;
        headers.insert(
            reqwest::header::AUTHORIZATION,
            format!("Bearer {}", token)
                .parse()
                .map_err(|_| ApiError::unauthorized("Invalid token format"))?,
        );
        Ok(headers)
    }

    pub(super) fn anon_headers(endpoint: &BackendEndpoint) -> Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "apikey",
            endpoint
                .anon_key
                .parse()
                .map_err(|_| ApiError::unknown("Invalid anon key format"))?,
        );
        Ok(headers)
    }

    /// Sends the request and turns non-2xx responses into [`ApiError`].
    pub(super) async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::from_response(status.as_u16(), &body))
    }

    pub(super) async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        response
            .json()
            .await
            .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
    }
}
