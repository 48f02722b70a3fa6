#![cfg(not(coverage))]

use super::*;
use crate::test_support::helpers::{clear_stored_session, seed_session, session_json};
use httpmock::prelude::*;
use serde_json::json;
use std::{cell::RefCell, rc::Rc};

const ANON_KEY: &str = "anon-test-key";

fn client(server: &MockServer) -> ApiClient {
    ApiClient::new_with_endpoint(crate::config::BackendEndpoint::new(
        server.base_url(),
        ANON_KEY,
    ))
}

fn record_events(client: &ApiClient) -> (Rc<RefCell<Vec<AuthEvent>>>, AuthSubscription) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let subscription = client.on_auth_state_change(move |event, _| sink.borrow_mut().push(event));
    (seen, subscription)
}

fn advisory_json(id: &str, date: &str) -> serde_json::Value {
    json!({
        "id": id,
        "title": format!("Advisory {}", id),
        "severity": "high",
        "date": date,
        "description": "Remote code execution",
        "affected_systems": ["gateway"],
        "created_by": "u1"
    })
}

#[tokio::test]
async fn sign_in_persists_session_and_notifies_subscribers() {
    let server = MockServer::start_async().await;
    let token = server.mock(|when, then| {
        when.method(POST)
            .path("/auth/v1/token")
            .query_param("grant_type", "password")
            .header("apikey", ANON_KEY)
            .json_body(json!({ "email": "ada@example.com", "password": "secret" }));
        then.status(200).json_body(session_json("access-1", 3600));
    });

    let client = client(&server);
    let (seen, _subscription) = record_events(&client);
    let session = client
        .sign_in_with_password(SignInRequest {
            email: "ada@example.com".into(),
            password: "secret".into(),
        })
        .await
        .unwrap();

    token.assert();
    assert_eq!(session.user.id, "u1");
    assert!(session.expires_at.is_some());
    assert_eq!(*seen.borrow(), vec![AuthEvent::SignedIn]);
    let restored = client.get_session().await.unwrap().unwrap();
    assert_eq!(restored.access_token, "access-1");
}

#[tokio::test]
async fn sign_in_failure_surfaces_backend_message() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/auth/v1/token");
        then.status(400).json_body(json!({
            "error": "invalid_grant",
            "error_description": "Invalid login credentials"
        }));
    });

    let client = client(&server);
    let err = client
        .sign_in_with_password(SignInRequest {
            email: "ada@example.com".into(),
            password: "wrong".into(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.error, "Invalid login credentials");
    assert!(client.get_session().await.unwrap().is_none());
}

#[tokio::test]
async fn get_session_refreshes_expired_session() {
    let server = MockServer::start_async().await;
    let refresh = server.mock(|when, then| {
        when.method(POST)
            .path("/auth/v1/token")
            .query_param("grant_type", "refresh_token")
            .json_body(json!({ "refresh_token": "refresh-old" }));
        then.status(200).json_body(session_json("access-new", 3600));
    });
    seed_session("access-old", "refresh-old", 0);

    let client = client(&server);
    let (seen, _subscription) = record_events(&client);
    let session = client.get_session().await.unwrap().unwrap();

    refresh.assert();
    assert_eq!(session.access_token, "access-new");
    assert_eq!(*seen.borrow(), vec![AuthEvent::TokenRefreshed]);
}

#[tokio::test]
async fn get_session_with_valid_session_emits_nothing() {
    let server = MockServer::start_async().await;
    let refresh = server.mock(|when, then| {
        when.method(POST).path("/auth/v1/token");
        then.status(200).json_body(session_json("access-new", 3600));
    });
    seed_session("access-1", "refresh-1", i64::MAX / 2);

    let client = client(&server);
    let (seen, _subscription) = record_events(&client);
    let session = client.get_session().await.unwrap().unwrap();

    assert_eq!(session.access_token, "access-1");
    refresh.assert_hits(0);
    assert!(seen.borrow().is_empty());
}

#[tokio::test]
async fn failed_refresh_signs_out_locally() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/auth/v1/token");
        then.status(400)
            .json_body(json!({ "error": "invalid_grant", "error_description": "Refresh Token Not Found" }));
    });
    seed_session("access-old", "refresh-old", 0);

    let client = client(&server);
    let (seen, _subscription) = record_events(&client);
    assert!(client.get_session().await.unwrap().is_none());
    assert_eq!(*seen.borrow(), vec![AuthEvent::SignedOut]);
    assert!(client.get_session().await.unwrap().is_none());
}

#[tokio::test]
async fn get_user_uses_stored_token() {
    let server = MockServer::start_async().await;
    let user = server.mock(|when, then| {
        when.method(GET)
            .path("/auth/v1/user")
            .header("authorization", "Bearer access-1")
            .header("apikey", ANON_KEY);
        then.status(200)
            .json_body(json!({ "id": "u1", "email": "ada@example.com", "aud": "authenticated" }));
    });
    seed_session("access-1", "refresh-1", i64::MAX / 2);

    let identity = client(&server).get_user().await.unwrap().unwrap();
    user.assert();
    assert_eq!(identity.id, "u1");
    assert_eq!(identity.email.as_deref(), Some("ada@example.com"));
}

#[tokio::test]
async fn get_user_treats_rejected_token_as_absent() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/auth/v1/user");
        then.status(401).json_body(json!({ "code": 401, "msg": "invalid JWT" }));
    });
    seed_session("access-1", "refresh-1", i64::MAX / 2);

    assert!(client(&server).get_user().await.unwrap().is_none());
}

fn mock_refresh(server: &MockServer) -> httpmock::Mock<'_> {
    server.mock(|when, then| {
        when.method(POST)
            .path("/auth/v1/token")
            .query_param("grant_type", "refresh_token")
            .json_body(json!({ "refresh_token": "refresh-old" }));
        then.status(200).json_body(session_json("access-new", 3600));
    })
}

#[tokio::test]
async fn get_user_refreshes_expired_session_before_request() {
    let server = MockServer::start_async().await;
    let refresh = mock_refresh(&server);
    let stale = server.mock(|when, then| {
        when.method(GET)
            .path("/auth/v1/user")
            .header("authorization", "Bearer access-old");
        then.status(401).json_body(json!({ "msg": "JWT expired" }));
    });
    let fresh = server.mock(|when, then| {
        when.method(GET)
            .path("/auth/v1/user")
            .header("authorization", "Bearer access-new");
        then.status(200).json_body(json!({ "id": "u1" }));
    });
    seed_session("access-old", "refresh-old", 0);

    let client = client(&server);
    let (seen, _subscription) = record_events(&client);
    let identity = client.get_user().await.unwrap();

    assert_eq!(identity.map(|i| i.id).as_deref(), Some("u1"));
    refresh.assert_hits(1);
    stale.assert_hits(0);
    fresh.assert_hits(1);
    assert_eq!(*seen.borrow(), vec![AuthEvent::TokenRefreshed]);
}

#[tokio::test]
async fn record_requests_send_refreshed_token() {
    let server = MockServer::start_async().await;
    let refresh = mock_refresh(&server);
    let list = server.mock(|when, then| {
        when.method(GET)
            .path("/rest/v1/advisories")
            .header("authorization", "Bearer access-new");
        then.status(200).json_body(json!([]));
    });
    seed_session("access-old", "refresh-old", 0);

    let client = client(&server);
    assert!(client.list_advisories().await.unwrap().is_empty());
    refresh.assert_hits(1);
    list.assert_hits(1);

    // The refreshed session is persisted, so the next request reuses it.
    client.list_advisories().await.unwrap();
    refresh.assert_hits(1);
    list.assert_hits(2);
}

#[tokio::test]
async fn get_user_without_session_skips_request() {
    let server = MockServer::start_async().await;
    let user = server.mock(|when, then| {
        when.method(GET).path("/auth/v1/user");
        then.status(200).json_body(json!({ "id": "u1" }));
    });
    clear_stored_session();

    assert!(client(&server).get_user().await.unwrap().is_none());
    user.assert_hits(0);
}

#[tokio::test]
async fn sign_out_clears_session_even_when_request_fails() {
    let server = MockServer::start_async().await;
    let logout = server.mock(|when, then| {
        when.method(POST)
            .path("/auth/v1/logout")
            .header("authorization", "Bearer access-1");
        then.status(500).json_body(json!({ "msg": "upstream unavailable" }));
    });
    seed_session("access-1", "refresh-1", i64::MAX / 2);

    let client = client(&server);
    let (seen, _subscription) = record_events(&client);
    let err = client.sign_out().await.unwrap_err();

    logout.assert();
    assert_eq!(err.error, "upstream unavailable");
    assert_eq!(*seen.borrow(), vec![AuthEvent::SignedOut]);
    assert!(client.get_session().await.unwrap().is_none());
}

#[tokio::test]
async fn fetch_profile_requests_single_row_by_identity() {
    let server = MockServer::start_async().await;
    let profile = server.mock(|when, then| {
        when.method(GET)
            .path("/rest/v1/profiles")
            .query_param("select", "role")
            .query_param("id", "eq.u1")
            .header("accept", "application/vnd.pgrst.object+json");
        then.status(200).json_body(json!({ "role": "admin" }));
    });
    seed_session("access-1", "refresh-1", i64::MAX / 2);

    let fetched = client(&server).fetch_profile("u1").await.unwrap();
    profile.assert();
    assert_eq!(fetched.role, Role::Admin);
}

#[tokio::test]
async fn fetch_profile_without_row_is_an_error() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/rest/v1/profiles");
        then.status(406).json_body(json!({
            "code": "PGRST116",
            "details": "The result contains 0 rows",
            "hint": null,
            "message": "JSON object requested, multiple (or no) rows returned"
        }));
    });

    let err = client(&server).fetch_profile("u1").await.unwrap_err();
    assert_eq!(err.code, "PGRST116");
}

#[tokio::test]
async fn list_advisories_orders_by_date_descending() {
    let server = MockServer::start_async().await;
    let list = server.mock(|when, then| {
        when.method(GET)
            .path("/rest/v1/advisories")
            .query_param("select", "*")
            .query_param("order", "date.desc");
        then.status(200).json_body(json!([
            advisory_json("CVE-2", "2024-05-02T00:00:00+00:00"),
            advisory_json("CVE-1", "2024-05-01T00:00:00+00:00")
        ]));
    });

    let advisories = client(&server).list_advisories().await.unwrap();
    list.assert();
    let ids: Vec<&str> = advisories.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["CVE-2", "CVE-1"]);
}

#[tokio::test]
async fn insert_advisory_posts_single_record_array() {
    let server = MockServer::start_async().await;
    let insert = server.mock(|when, then| {
        when.method(POST)
            .path("/rest/v1/advisories")
            .header("prefer", "return=minimal")
            .json_body(json!([{
                "id": "CVE-2024-1",
                "title": "Overflow",
                "severity": "critical",
                "description": "Heap overflow",
                "affected_systems": ["A", "B"],
                "created_by": "u1"
            }]));
        then.status(201);
    });

    client(&server)
        .insert_advisory(&NewAdvisory {
            id: "CVE-2024-1".into(),
            title: "Overflow".into(),
            severity: Severity::Critical,
            description: "Heap overflow".into(),
            affected_systems: vec!["A".into(), "B".into()],
            created_by: "u1".into(),
        })
        .await
        .unwrap();
    insert.assert();
}

#[tokio::test]
async fn insert_advisory_returns_backend_message_verbatim() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/rest/v1/advisories");
        then.status(409).json_body(json!({
            "code": "23505",
            "details": "Key (id)=(CVE-2024-1) already exists.",
            "hint": null,
            "message": "duplicate key value violates unique constraint \"advisories_pkey\""
        }));
    });

    let err = client(&server)
        .insert_advisory(&NewAdvisory {
            id: "CVE-2024-1".into(),
            title: "Overflow".into(),
            severity: Severity::Low,
            description: "d".into(),
            affected_systems: vec![],
            created_by: "u1".into(),
        })
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "duplicate key value violates unique constraint \"advisories_pkey\""
    );
}
