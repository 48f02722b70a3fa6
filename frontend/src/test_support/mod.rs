#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{Advisory, Identity, Role, Session, Severity, SESSION_STORAGE_KEY};
    use crate::state::auth::AuthState;
    use chrono::{TimeZone, Utc};
    use leptos::*;
    use serde_json::json;

    pub fn identity() -> Identity {
        Identity {
            id: "u1".into(),
            email: Some("ada@example.com".into()),
        }
    }

    pub fn session(access_token: &str) -> Session {
        Session {
            access_token: access_token.into(),
            refresh_token: "refresh-1".into(),
            expires_in: Some(3600),
            expires_at: Some(i64::MAX / 2),
            user: identity(),
        }
    }

    pub fn session_json(access_token: &str, expires_in: i64) -> serde_json::Value {
        json!({
            "access_token": access_token,
            "token_type": "bearer",
            "expires_in": expires_in,
            "refresh_token": "refresh-1",
            "user": { "id": "u1", "email": "ada@example.com" }
        })
    }

    /// Writes a session straight into browser storage, bypassing sign-in.
    pub fn seed_session(access_token: &str, refresh_token: &str, expires_at: i64) {
        let stored = Session {
            refresh_token: refresh_token.into(),
            expires_at: Some(expires_at),
            ..session(access_token)
        };
        crate::utils::storage::set_item(
            SESSION_STORAGE_KEY,
            &serde_json::to_string(&stored).unwrap(),
        )
        .unwrap();
    }

    /// Host storage is per thread and test threads may be reused.
    pub fn clear_stored_session() {
        crate::utils::storage::remove_item(SESSION_STORAGE_KEY).unwrap();
    }

    pub fn advisory(id: &str, title: &str, description: &str, day: u32) -> Advisory {
        Advisory {
            id: id.into(),
            title: title.into(),
            severity: Severity::Medium,
            date: Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap(),
            description: description.into(),
            affected_systems: vec!["core".into()],
            created_by: Some("u1".into()),
        }
    }

    pub fn provide_auth(
        session: Option<Session>,
        role: Role,
    ) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let (auth, set_auth) = create_signal(AuthState {
            session,
            role,
            loading: false,
        });
        provide_context((auth, set_auth));
        (auth, set_auth)
    }
}
