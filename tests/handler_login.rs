mod common;

use account_login::prelude::*;
use axum::http::StatusCode;
use common::{EXTERNAL_COOKIE, FakeLoginManager, SESSION_COOKIE, alice, cookie_header, spawn_app};
use serde_json::json;

fn rejected(outcome: LoginOutcome) -> common::TestApp {
    spawn_app(FakeLoginManager::returning(outcome), true)
}

#[tokio::test]
async fn test_login_form_defaults_return_url_to_root() {
    let app = spawn_app(FakeLoginManager::returning(LoginOutcome::Success(alice())), false);

    let response = app.server.get("/Account/Login").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains(r#"name="returnUrl" value="/""#));
    assert!(!html.contains(r#"name="tenancyName""#));
}

#[tokio::test]
async fn test_login_form_keeps_return_url() {
    let app = spawn_app(FakeLoginManager::returning(LoginOutcome::Success(alice())), false);

    let response = app.server.get("/Account/Login?returnUrl=/reports").await;

    response.assert_status_ok();
    assert!(response.text().contains(r#"name="returnUrl" value="/reports""#));
}

#[tokio::test]
async fn test_login_form_blank_return_url_becomes_root() {
    let app = spawn_app(FakeLoginManager::returning(LoginOutcome::Success(alice())), false);

    let response = app.server.get("/Account/Login?returnUrl=").await;

    response.assert_status_ok();
    assert!(response.text().contains(r#"name="returnUrl" value="/""#));
}

#[tokio::test]
async fn test_login_form_shows_tenancy_field_when_multi_tenant() {
    let app = spawn_app(FakeLoginManager::returning(LoginOutcome::Success(alice())), true);

    let response = app.server.get("/Account/Login").await;

    response.assert_status_ok();
    assert!(response.text().contains(r#"name="tenancyName""#));
}

#[tokio::test]
async fn test_login_success_json() {
    let app = spawn_app(FakeLoginManager::returning(LoginOutcome::Success(alice())), true);

    let response = app
        .server
        .post("/Account/Login")
        .json(&json!({
            "usernameOrEmail": "alice",
            "password": "secret",
            "tenancyName": "Acme",
            "returnUrl": "/reports"
        }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>(), json!({ "targetUrl": "/reports" }));

    let cookie = response.cookie(SESSION_COOKIE);
    assert!(!cookie.value().is_empty());
    assert_eq!(cookie.http_only(), Some(true));
    assert!(cookie.max_age().is_none());

    let calls = app.login_manager.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].username_or_email, "alice");
    assert_eq!(calls[0].tenancy_name.as_deref(), Some("Acme"));
}

#[tokio::test]
async fn test_login_success_form_with_remember_me() {
    let app = spawn_app(FakeLoginManager::returning(LoginOutcome::Success(alice())), false);

    let response = app
        .server
        .post("/Account/Login")
        .form(&[
            ("usernameOrEmail", "alice"),
            ("password", "secret"),
            ("rememberMe", "true"),
            ("returnUrl", ""),
        ])
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>(), json!({ "targetUrl": "/" }));
    assert!(response.cookie(SESSION_COOKIE).max_age().is_some());
}

#[tokio::test]
async fn test_login_return_url_from_query() {
    let app = spawn_app(FakeLoginManager::returning(LoginOutcome::Success(alice())), false);

    let response = app
        .server
        .post("/Account/Login?returnUrl=/settings")
        .json(&json!({ "usernameOrEmail": "alice", "password": "secret" }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["targetUrl"], "/settings");
}

#[tokio::test]
async fn test_login_session_opens_home_page() {
    let app = spawn_app(FakeLoginManager::returning(LoginOutcome::Success(alice())), false);

    let login = app
        .server
        .post("/Account/Login")
        .json(&json!({ "usernameOrEmail": "alice", "password": "secret" }))
        .await;
    let cookie = login.cookie(SESSION_COOKIE);

    let response = app
        .server
        .get("/")
        .add_header("Cookie", cookie_header(&[(SESSION_COOKIE, cookie.value())]))
        .await;

    response.assert_status_ok();
    assert!(response.text().contains("Welcome, alice"));
}

#[tokio::test]
async fn test_login_success_clears_external_marker() {
    let app = spawn_app(FakeLoginManager::returning(LoginOutcome::Success(alice())), false);

    let response = app
        .server
        .post("/Account/Login")
        .add_header("Cookie", cookie_header(&[(EXTERNAL_COOKIE, "provider")]))
        .json(&json!({ "usernameOrEmail": "alice", "password": "secret" }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.cookie(EXTERNAL_COOKIE).value(), "");
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    for fault in [CredentialFault::UnknownUser, CredentialFault::WrongPassword] {
        let app = rejected(LoginOutcome::InvalidCredentials(fault));

        let response = app
            .server
            .post("/Account/Login")
            .json(&json!({ "usernameOrEmail": "alice", "password": "wrong", "tenancyName": "" }))
            .await;

        response.assert_status(StatusCode::UNAUTHORIZED);
        let json = response.json::<serde_json::Value>();
        assert_eq!(json["error"]["code"], "auth_error");
        assert_eq!(json["error"]["message"], "Invalid user name or password!");
        assert!(response.maybe_cookie(SESSION_COOKIE).is_none());

        let calls = app.login_manager.calls();
        assert_eq!(calls[0].tenancy_name, None);
    }
}

#[tokio::test]
async fn test_login_rejection_messages() {
    let cases = [
        (
            LoginOutcome::InvalidTenancy("Nope".to_string()),
            "No tenant with name: Nope",
        ),
        (
            LoginOutcome::TenantInactive("Acme".to_string()),
            "Tenant is not active: Acme",
        ),
        (
            LoginOutcome::UserInactive("alice".to_string()),
            "User is not active: alice",
        ),
        (
            LoginOutcome::EmailUnconfirmed,
            "Your email address is not confirmed!",
        ),
    ];

    for (outcome, message) in cases {
        let app = rejected(outcome);

        let response = app
            .server
            .post("/Account/Login")
            .json(&json!({ "usernameOrEmail": "alice", "password": "secret" }))
            .await;

        response.assert_status(StatusCode::UNAUTHORIZED);
        assert_eq!(response.json::<serde_json::Value>()["error"]["message"], message);
        assert!(response.maybe_cookie(SESSION_COOKIE).is_none());
    }
}

#[tokio::test]
async fn test_login_unknown_outcome() {
    let app = rejected(LoginOutcome::Unknown("LockedOut".to_string()));

    let response = app
        .server
        .post("/Account/Login")
        .json(&json!({ "usernameOrEmail": "alice", "password": "secret" }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "unknown_login_outcome");
    assert_eq!(json["error"]["message"], "Unknown problem with login: LockedOut");
    assert_eq!(json["error"]["details"]["code"], "LockedOut");
    assert!(response.maybe_cookie(SESSION_COOKIE).is_none());
}

#[tokio::test]
async fn test_login_validation_error() {
    let app = spawn_app(FakeLoginManager::returning(LoginOutcome::Success(alice())), false);

    let response = app
        .server
        .post("/Account/Login")
        .json(&json!({ "usernameOrEmail": "alice" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(json["error"]["message"], "Your form is invalid!");
    assert!(json["error"]["details"]["fields"]["password"].is_array());
    assert!(app.login_manager.calls().is_empty());
}

#[tokio::test]
async fn test_login_malformed_body() {
    let app = spawn_app(FakeLoginManager::returning(LoginOutcome::Success(alice())), false);

    let response = app
        .server
        .post("/Account/Login")
        .content_type("application/json")
        .bytes("{not json".into())
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["message"],
        "Your form is invalid!"
    );
    assert!(app.login_manager.calls().is_empty());
}

#[tokio::test]
async fn test_login_identity_service_unavailable() {
    let app = spawn_app(FakeLoginManager::unavailable(), false);

    let response = app
        .server
        .post("/Account/Login")
        .json(&json!({ "usernameOrEmail": "alice", "password": "secret" }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["code"],
        "internal_error"
    );
    assert!(response.maybe_cookie(SESSION_COOKIE).is_none());
}

#[tokio::test]
async fn test_login_whitespace_only_password_is_invalid() {
    let app = spawn_app(FakeLoginManager::returning(LoginOutcome::Success(alice())), false);

    let response = app
        .server
        .post("/Account/Login")
        .form(&[("usernameOrEmail", "alice"), ("password", "   ")])
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["message"],
        "Your form is invalid!"
    );
    assert!(app.login_manager.calls().is_empty());
}

#[tokio::test]
async fn test_login_short_tenancy_name_reaches_identity_service() {
    let app = rejected(LoginOutcome::InvalidTenancy("a".to_string()));

    let response = app
        .server
        .post("/Account/Login")
        .json(&json!({ "usernameOrEmail": "alice", "password": "secret", "tenancyName": "a" }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["message"],
        "No tenant with name: a"
    );
    assert_eq!(app.login_manager.calls()[0].tenancy_name.as_deref(), Some("a"));
}
