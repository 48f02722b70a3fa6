use reqwest::StatusCode;
use serde_json::json;

use super::{
    client::ApiClient,
    events::AuthSubscription,
    types::{ApiError, AuthEvent, Identity, Session, SignInRequest},
};
use crate::utils::{storage, time::unix_now};

pub const SESSION_STORAGE_KEY: &str = "advisories.auth.session";

pub(crate) fn load_session() -> Option<Session> {
    let raw = storage::get_item(SESSION_STORAGE_KEY).ok().flatten()?;
    match serde_json::from_str(&raw) {
        Ok(session) => Some(session),
        Err(err) => {
            log::warn!("Discarding unreadable stored session: {}", err);
            clear_session();
            None
        }
    }
}

fn persist_session(session: &Session) -> Result<(), ApiError> {
    let raw = serde_json::to_string(session)
        .map_err(|e| ApiError::unknown(format!("Failed to serialize session: {}", e)))?;
    storage::set_item(SESSION_STORAGE_KEY, &raw).map_err(ApiError::unknown)
}

fn clear_session() {
    if let Err(err) = storage::remove_item(SESSION_STORAGE_KEY) {
        log::warn!("{}", err);
    }
}

impl ApiClient {
    /// Registers a listener for sign-in, sign-out and token refresh events.
    pub fn on_auth_state_change(
        &self,
        listener: impl Fn(AuthEvent, Option<Session>) + 'static,
    ) -> AuthSubscription {
        self.events().subscribe(listener)
    }

    /// Returns the stored session, refreshing it first when it has expired.
    /// A failed refresh signs the user out locally.
    pub async fn get_session(&self) -> Result<Option<Session>, ApiError> {
        Ok(self.current_session().await)
    }

    /// The session every authenticated request runs under. Expired sessions
    /// are refreshed here, so callers never send a stale access token.
    pub(super) async fn current_session(&self) -> Option<Session> {
        let session = load_session()?;
        if !session.is_expired(unix_now()) {
            return Some(session);
        }
        match self.refresh_session(&session.refresh_token).await {
            Ok(refreshed) => Some(refreshed),
            Err(err) => {
                // A concurrent request may have rotated the refresh token
                // while this one was waiting.
                if let Some(current) = load_session().filter(|s| !s.is_expired(unix_now())) {
                    return Some(current);
                }
                log::warn!("Session refresh failed: {}", err);
                clear_session();
                self.events().emit(AuthEvent::SignedOut, None);
                None
            }
        }
    }

    pub async fn refresh_session(&self, refresh_token: &str) -> Result<Session, ApiError> {
        let endpoint = self.resolved_endpoint().await;
        let response = self
            .send(
                self.http_client()
                    .post(format!(
                        "{}/auth/v1/token?grant_type=refresh_token",
                        endpoint.url
                    ))
                    .headers(Self::anon_headers(&endpoint)?)
                    .json(&json!({ "refresh_token": refresh_token })),
            )
            .await?;
        let session: Session = Self::parse_json(response).await?;
        let session = session.with_expiry_from(unix_now());
        persist_session(&session)?;
        self.events()
            .emit(AuthEvent::TokenRefreshed, Some(session.clone()));
        Ok(session)
    }

    pub async fn sign_in_with_password(&self, request: SignInRequest) -> Result<Session, ApiError> {
        let endpoint = self.resolved_endpoint().await;
        let response = self
            .send(
                self.http_client()
                    .post(format!("{}/auth/v1/token?grant_type=password", endpoint.url))
                    .headers(Self::anon_headers(&endpoint)?)
                    .json(&request),
            )
            .await?;
        let session: Session = Self::parse_json(response).await?;
        let session = session.with_expiry_from(unix_now());
        persist_session(&session)?;
        log::info!("Signed in as {}", session.user.id);
        self.events().emit(AuthEvent::SignedIn, Some(session.clone()));
        Ok(session)
    }

    /// Asks the backend who the stored token belongs to. Absence of a
    /// session, or a token the backend rejects, is `Ok(None)`.
    pub async fn get_user(&self) -> Result<Option<Identity>, ApiError> {
        let Some(session) = self.current_session().await else {
            return Ok(None);
        };
        let endpoint = self.resolved_endpoint().await;
        let response = self
            .http_client()
            .get(format!("{}/auth/v1/user", endpoint.url))
            .headers(Self::bearer_headers(&endpoint, Some(&session))?)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Ok(None);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_response(status.as_u16(), &body));
        }
        Self::parse_json(response).await.map(Some)
    }

    /// Revokes the session server-side. The local session is cleared and
    /// subscribers notified even when the request fails.
    pub async fn sign_out(&self) -> Result<(), ApiError> {
        let result = match load_session() {
            Some(session) => {
                let endpoint = self.resolved_endpoint().await;
                match Self::bearer_headers(&endpoint, Some(&session)) {
                    Ok(headers) => self
                        .send(
                            self.http_client()
                                .post(format!("{}/auth/v1/logout", endpoint.url))
                                .headers(headers),
                        )
                        .await
                        .map(|_| ()),
                    Err(err) => Err(err),
                }
            }
            None => Ok(()),
        };
        clear_session();
        self.events().emit(AuthEvent::SignedOut, None);
        result
    }
}
