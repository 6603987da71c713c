use flm_core::{ChatApi, GroupId, UserId};
use wiremock::{
    Mock, ResponseTemplate,
    matchers::{body_json, header, method, path},
};

use crate::helpers::TestApp;

#[tokio::test]
async fn unauthorized_response_ends_the_session_for_any_operation() {
    let app = TestApp::spawn().await;
    app.sign_in_as("stale", "alice").await;

    Mock::given(method("GET"))
        .and(path("/api/messages/g-1"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(serde_json::json!({ "message": "Token expired" })),
        )
        .expect(1)
        .mount(&app.server)
        .await;

    let error = app
        .context
        .auth_service()
        .fetch_messages(&GroupId::new("g-1"))
        .await
        .unwrap_err();

    // The caller still sees its own failure.
    assert_eq!(error.message(), "Token expired");
    assert!(app.context.session_store().get().await.unwrap().is_none());
    assert_eq!(app.current_path().await.as_deref(), Some("/login"));
}

#[tokio::test]
async fn requests_after_expiry_go_out_unauthenticated() {
    let app = TestApp::spawn().await;
    app.sign_in_as("stale", "alice").await;

    Mock::given(method("POST"))
        .and(path("/api/groups/g-1/members"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&app.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/fetch"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&app.server)
        .await;

    let service = app.context.auth_service();
    let _ = service
        .add_user_to_group(&UserId::new("7"), &GroupId::new("g-1"))
        .await;
    let _ = service.test_route().await;

    let requests = app.server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    assert!(requests[0].headers.contains_key("authorization"));
    assert!(!requests[1].headers.contains_key("authorization"));
}

#[tokio::test]
async fn authenticated_group_operations_use_the_stored_token() {
    let app = TestApp::spawn().await;
    app.sign_in_as("t-9", "alice").await;

    Mock::given(method("GET"))
        .and(path("/api/messages/g-1"))
        .and(header("Authorization", "Bearer t-9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "id": 1, "content": "hello" },
            { "id": 2, "content": "world" }
        ])))
        .expect(1)
        .mount(&app.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/groups/g-1/members"))
        .and(header("Authorization", "Bearer t-9"))
        .and(body_json(serde_json::json!({ "userId": "7" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "added": true })))
        .expect(1)
        .mount(&app.server)
        .await;

    let service = app.context.auth_service();
    let messages = service.fetch_messages(&GroupId::new("g-1")).await.unwrap();
    let membership = service
        .add_user_to_group(&UserId::new("7"), &GroupId::new("g-1"))
        .await
        .unwrap();

    assert_eq!(messages.len(), 2);
    assert_eq!(membership["added"], true);
    assert!(app.context.session_store().get().await.unwrap().is_some());
}
