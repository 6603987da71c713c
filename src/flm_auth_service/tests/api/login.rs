use flm_application::{LoginForm, LoginResponse};
use flm_core::{ChatApi, NETWORK_ERROR_MESSAGE, Severity};
use secrecy::Secret;
use wiremock::{
    Mock, ResponseTemplate,
    matchers::{body_json, header, method, path},
};

use crate::helpers::{TestApp, context_for, unreachable_base_url};

#[tokio::test]
async fn token_from_login_is_sent_on_the_next_call() {
    let app = TestApp::spawn().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(serde_json::json!({ "username": "alice", "password": "secret" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "token": "t-42",
            "profile": { "id": 1, "username": "alice", "groups": [] }
        })))
        .expect(1)
        .mount(&app.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/fetch"))
        .and(header("Authorization", "Bearer t-42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "ok": true })))
        .expect(1)
        .mount(&app.server)
        .await;

    let mut form = LoginForm::new("alice", "secret");
    let response = app.login_use_case().execute(&mut form).await.unwrap();
    assert!(matches!(
        response,
        LoginResponse::Success(ref profile) if profile.username() == Some("alice")
    ));

    let payload = app.context.auth_service().test_route().await.unwrap();
    assert_eq!(payload["ok"], true);

    let records = app.notifications.snapshot().await;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].severity(), Severity::Success);
    assert_eq!(app.current_path().await.as_deref(), Some("/"));
}

#[tokio::test]
async fn wrong_password_is_reported_and_clears_the_form() {
    let app = TestApp::spawn().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(serde_json::json!({ "message": "Invalid credentials" })),
        )
        .mount(&app.server)
        .await;

    let mut form = LoginForm::new("alice", "wrong");
    let error = app.login_use_case().execute(&mut form).await.unwrap_err();

    assert_eq!(error.message(), "Invalid credentials");
    assert!(form.is_empty());

    let records = app.notifications.snapshot().await;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].severity(), Severity::Error);
    assert_eq!(records[0].message(), "Invalid credentials");

    assert!(app.context.session_store().get().await.unwrap().is_none());
    assert_eq!(app.current_path().await.as_deref(), Some("/login"));
}

#[tokio::test]
async fn server_rejection_message_is_used_verbatim() {
    let app = TestApp::spawn().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(serde_json::json!({ "message": "bad credentials" })),
        )
        .mount(&app.server)
        .await;

    let error = app
        .context
        .auth_service()
        .authenticate("alice", Secret::new("nope".to_string()))
        .await
        .unwrap_err();

    assert_eq!(error.message(), "bad credentials");
    assert_eq!(app.current_path().await, None);
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    let context = context_for(unreachable_base_url());

    let error = context
        .auth_service()
        .authenticate("alice", Secret::new("secret".to_string()))
        .await
        .unwrap_err();

    assert_eq!(error.message(), NETWORK_ERROR_MESSAGE);
    assert_eq!(error.message(), "Network Error: Could not connect to server");
}

#[tokio::test]
async fn register_does_not_sign_in() {
    let app = TestApp::spawn().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .and(body_json(serde_json::json!({
            "firstname": "Alice",
            "lastname": "Liddell",
            "email": "alice@example.com",
            "password": "password123"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({ "status": "created" })))
        .expect(1)
        .mount(&app.server)
        .await;

    let result = app
        .context
        .auth_service()
        .register(flm_core::Registration::new(
            "Alice",
            "Liddell",
            "alice@example.com",
            Secret::new("password123".to_string()),
        ))
        .await
        .unwrap();

    assert_eq!(result.status, "created");
    assert!(app.context.session_store().token().await.unwrap().is_none());
}
