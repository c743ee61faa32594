use crate::controller::test_helpers::create_test_controller;
use crate::controller::GOODBYE_MESSAGE;
use crate::error::Error;
use crate::session_store::SessionStore;
use crate::types::{Credentials, SessionPhase, View};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn login_rejects_short_username_without_a_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let ctx = create_test_controller(&server, None).await;
    let err = ctx
        .controller
        .login(Credentials::new("ab", "longenough"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Validation(_)));
    assert_eq!(ctx.controller.phase(), SessionPhase::Anonymous);
    assert_eq!(ctx.store.load().await.unwrap(), None);

    let status = ctx.controller.status();
    assert!(!status.busy);
    assert!(status.message.contains("at least 3"));
}

#[tokio::test]
async fn login_rejects_short_password_without_a_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let ctx = create_test_controller(&server, None).await;
    let err = ctx
        .controller
        .login(Credentials::new("abc", "short"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Validation(_)));
    assert!(!ctx.controller.status().busy);
}

#[tokio::test]
async fn login_validates_against_trimmed_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let ctx = create_test_controller(&server, None).await;
    // "ab " trims to two characters, below the threshold
    let err = ctx
        .controller
        .login(Credentials::new(" ab ", "longenough"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}

#[tokio::test]
async fn login_success_stores_token_and_redirects() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .and(body_json(json!({"username": "abc", "password": "longenough"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "t1",
            "message": "welcome"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let ctx = create_test_controller(&server, None).await;
    // Credentials arrive padded; the trimmed values must go on the wire
    ctx.controller
        .login(Credentials::new("  abc  ", "  longenough  "))
        .await
        .unwrap();

    assert_eq!(ctx.store.load().await.unwrap(), Some("t1".to_string()));
    assert_eq!(ctx.controller.phase(), SessionPhase::Authenticated);
    assert_eq!(ctx.navigator.last_view(), Some(View::Articles));

    let status = ctx.controller.status();
    assert!(!status.busy);
    assert_eq!(status.message, "welcome");
}

#[tokio::test]
async fn login_failure_leaves_session_anonymous() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(
            ResponseTemplate::new(403).set_body_json(json!({"message": "bad credentials"})),
        )
        .mount(&server)
        .await;

    let ctx = create_test_controller(&server, None).await;
    let err = ctx
        .controller
        .login(Credentials::new("abc", "longenough"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Server { status: 403, .. }));
    assert_eq!(ctx.store.load().await.unwrap(), None);
    assert_eq!(ctx.controller.phase(), SessionPhase::Anonymous);
    assert_eq!(ctx.navigator.views(), Vec::<View>::new());

    let status = ctx.controller.status();
    assert!(!status.busy);
    assert_eq!(status.message, "bad credentials");
}

#[tokio::test]
async fn login_transport_failure_surfaces_generic_message() {
    // An exclusive (non-pooled) server actually stops listening on drop
    let server = MockServer::builder().start().await;
    let ctx = create_test_controller(&server, None).await;
    // Nothing is mounted and the server is stopped, so the call cannot complete
    drop(server);

    let err = ctx
        .controller
        .login(Credentials::new("abc", "longenough"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Transport(_)));
    assert_eq!(ctx.controller.phase(), SessionPhase::Anonymous);

    let status = ctx.controller.status();
    assert!(!status.busy);
    assert_eq!(status.message, "Login failed, try again");
}

#[tokio::test]
async fn logout_clears_token_and_redirects() {
    let server = MockServer::start().await;
    let ctx = create_test_controller(&server, Some("t1")).await;
    assert_eq!(ctx.controller.phase(), SessionPhase::Authenticated);

    ctx.controller.logout().await.unwrap();

    assert_eq!(ctx.store.load().await.unwrap(), None);
    assert_eq!(ctx.controller.phase(), SessionPhase::Anonymous);
    assert_eq!(ctx.navigator.last_view(), Some(View::Login));

    let status = ctx.controller.status();
    assert!(!status.busy);
    assert_eq!(status.message, GOODBYE_MESSAGE);
}

#[tokio::test]
async fn logout_without_a_token_still_says_goodbye() {
    let server = MockServer::start().await;
    let ctx = create_test_controller(&server, None).await;

    ctx.controller.logout().await.unwrap();

    assert_eq!(ctx.controller.phase(), SessionPhase::Anonymous);
    assert_eq!(ctx.navigator.last_view(), Some(View::Login));
    assert_eq!(ctx.controller.status().message, GOODBYE_MESSAGE);
}

#[tokio::test]
async fn persisted_token_restores_an_authenticated_session() {
    let server = MockServer::start().await;

    let restored = create_test_controller(&server, Some("t-old")).await;
    assert_eq!(restored.controller.phase(), SessionPhase::Authenticated);

    let fresh = create_test_controller(&server, None).await;
    assert_eq!(fresh.controller.phase(), SessionPhase::Anonymous);
}
