//! End-to-end endpoint behaviour against a scripted backend.

mod common;

use std::sync::Arc;

use ava_auth::{CallContext, MemoryStore};
use ava_core::entities::{UserListFilter, UserLoginData};
use ava_gateway::{ErrorKind, GatewayError, MemoryNotifier};
use common::{MockBackend, Reply};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;

fn browser_with_token(token: &str) -> CallContext {
    CallContext::browser(Arc::new(MemoryStore::with_token(token)))
}

fn server_with_cookie(cookie: &str) -> CallContext {
    CallContext::server(Some(cookie.to_string()))
}

#[tokio::test]
async fn login_is_public_and_returns_data() {
    let backend = MockBackend::start(vec![Reply::ok(&json!({"id": 42, "token": "a.b.c"}))]);
    let client = backend.client();

    let credentials = UserLoginData {
        email: "ana@example.com".into(),
        password: "secret".into(),
    };
    let login = client
        .login(&browser_with_token("stale"), &credentials)
        .await
        .unwrap();

    assert_eq!(login.id, 42);
    let requests = backend.requests();
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].url, "/auth/login");
    assert_eq!(requests[0].authorization, None);
    assert_eq!(requests[0].content_type.as_deref(), Some("application/json"));
    assert!(requests[0].body_text().contains("\"email\":\"ana@example.com\""));
}

#[tokio::test]
async fn server_context_sends_cookie_token_as_bearer() {
    let backend = MockBackend::start(vec![Reply::ok(&json!([]))]);
    let ctx = server_with_cookie("theme=dark; token=%22Bearer%20abc.def.ghi%22");

    backend.client().list_courses(&ctx).await.unwrap();

    let requests = backend.requests();
    assert_eq!(requests[0].url, "/course");
    assert_eq!(
        requests[0].authorization.as_deref(),
        Some("Bearer abc.def.ghi")
    );
}

#[tokio::test]
async fn browser_context_sends_stored_token_as_bearer() {
    let backend = MockBackend::start(vec![Reply::ok(&json!({
        "pendingTasks": [], "waitingFeedbackTasks": [], "evaluatedTasks": []
    }))]);

    backend
        .client()
        .user_general_dashboard(&browser_with_token("xyz"))
        .await
        .unwrap();

    assert_eq!(
        backend.requests()[0].authorization.as_deref(),
        Some("Bearer xyz")
    );
}

#[tokio::test]
async fn required_auth_without_token_fails_before_sending() {
    let backend = MockBackend::start(vec![Reply::ok(&json!([]))]);
    let notifier = Arc::new(MemoryNotifier::new());
    let client = backend.client().with_notifier(notifier.clone());
    let ctx = CallContext::browser(Arc::new(MemoryStore::new()));

    let err = client.list_classes(&ctx).await.unwrap_err();

    assert!(matches!(err, GatewayError::NotAuthenticated));
    assert!(err.is_retryable());
    assert!(backend.requests().is_empty());
    assert_eq!(notifier.messages(), vec!["Unauthorized. Log in again.".to_string()]);
}

#[tokio::test]
async fn optional_auth_without_token_still_sends() {
    let backend = MockBackend::start(vec![Reply::empty(204)]);

    backend
        .client()
        .update_user_status(
            &CallContext::server(None),
            3,
            ava_core::enums::UserStatus::Inativo,
        )
        .await
        .unwrap();

    let requests = backend.requests();
    assert_eq!(requests[0].method, "PATCH");
    assert_eq!(requests[0].url, "/user/status/3");
    assert_eq!(requests[0].authorization, None);
    assert_eq!(requests[0].body_text(), r#"{"status":"INATIVO"}"#);
}

#[rstest]
#[case(400, "Invalid data. Check the submitted fields.", ErrorKind::Validation)]
#[case(401, "Unauthorized. Log in again.", ErrorKind::Unauthenticated)]
#[case(403, "You do not have permission to perform this action.", ErrorKind::Forbidden)]
#[case(409, "Conflict with the current state of the resource.", ErrorKind::Conflict)]
#[case(500, "Internal server error. Try again later.", ErrorKind::Server)]
#[case(504, "Request failed with status 504.", ErrorKind::Other)]
#[tokio::test]
async fn status_without_body_maps_to_fixed_message(
    #[case] status: u16,
    #[case] message: &str,
    #[case] kind: ErrorKind,
) {
    let backend = MockBackend::start(vec![Reply::empty(status)]);
    let err = backend
        .client()
        .class_summary(&server_with_cookie("token=t"), 7)
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), message);
    assert_eq!(err.kind(), kind);
    assert_eq!(err.status(), Some(status));
}

#[tokio::test]
async fn backend_message_overrides_fixed_message() {
    let backend = MockBackend::start(vec![Reply::json(
        400,
        &json!({"message": "Nome da turma é obrigatório"}),
    )]);

    let err = backend
        .client()
        .remove_class(&server_with_cookie("token=t"), 1)
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Nome da turma é obrigatório");
}

#[tokio::test]
async fn browser_failures_notify_and_server_failures_do_not() {
    let backend = MockBackend::start(vec![Reply::empty(403), Reply::empty(403)]);
    let notifier = Arc::new(MemoryNotifier::new());
    let client = backend.client().with_notifier(notifier.clone());

    let _ = client.get_user(&server_with_cookie("token=t"), 1).await;
    assert!(notifier.messages().is_empty());

    let _ = client.get_user(&browser_with_token("t"), 1).await;
    assert_eq!(
        notifier.messages(),
        vec!["You do not have permission to perform this action.".to_string()]
    );
}

#[tokio::test]
async fn list_endpoints_treat_404_as_empty() {
    let backend = MockBackend::start(vec![
        Reply::empty(404),
        Reply::json(404, &json!({"message": "Nenhum curso"})),
        Reply::empty(404),
    ]);
    let notifier = Arc::new(MemoryNotifier::new());
    let client = backend.client().with_notifier(notifier.clone());
    let ctx = browser_with_token("t");

    assert!(client.list_classes(&ctx).await.unwrap().is_empty());
    assert!(client.list_courses(&ctx).await.unwrap().is_empty());
    assert!(
        client
            .list_users(&ctx, &UserListFilter::default())
            .await
            .unwrap()
            .is_empty()
    );
    assert!(notifier.messages().is_empty());
}

#[tokio::test]
async fn non_list_endpoint_404_is_an_error() {
    let backend = MockBackend::start(vec![Reply::empty(404)]);
    let err = backend
        .client()
        .get_user(&server_with_cookie("token=t"), 99)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Resource not found.");
}

#[tokio::test]
async fn list_users_is_public_and_filtered() {
    let backend = MockBackend::start(vec![Reply::ok(&json!([{
        "id": 1, "nome": "Ana", "email": "a@x", "role": {"name": "USER"}
    }]))]);

    let filter = UserListFilter {
        name: Some("Ana Maria".into()),
        class_id: Some(4),
        ..Default::default()
    };
    let users = backend
        .client()
        .list_users(&browser_with_token("t"), &filter)
        .await
        .unwrap();

    assert_eq!(users.len(), 1);
    let request = &backend.requests()[0];
    assert_eq!(request.url, "/user/list-all?name=Ana%20Maria&idClass=4");
    assert_eq!(request.authorization, None);
}

#[tokio::test]
async fn ranking_repeats_trail_ids() {
    let backend = MockBackend::start(vec![Reply::ok(&json!([]))]);

    backend
        .client()
        .ranking_by_class(&server_with_cookie("token=t"), 3, &[5, 8])
        .await
        .unwrap();

    assert_eq!(
        backend.requests()[0].url,
        "/ranking/by-class/3?knowledgeTrailIds=5&knowledgeTrailIds=8"
    );
}

#[tokio::test]
async fn download_returns_bytes_and_mime_type() {
    let backend = MockBackend::start(vec![Reply::bytes(b"%PDF-1.4", "application/pdf")]);

    let download = backend
        .client()
        .fetch_user_response_content(&browser_with_token("t"), "responses/7/a b.pdf")
        .await
        .unwrap();

    assert_eq!(download.bytes, b"%PDF-1.4".to_vec());
    assert_eq!(download.mime_type, "application/pdf");
    assert_eq!(
        backend.requests()[0].url,
        "/user-response-content/find?filePath=responses%2F7%2Fa%20b.pdf"
    );
}

#[tokio::test]
async fn unreachable_backend_is_a_network_error() {
    let config = ava_config::ApiConfig {
        public_url: "http://127.0.0.1:9".into(),
        ..Default::default()
    };
    let client = ava_gateway::ApiClient::new(config).unwrap();

    let err = client
        .list_courses(&browser_with_token("t"))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Network);
    assert_eq!(
        err.to_string(),
        "Connection error. Check your connection and try again."
    );
}

#[tokio::test]
async fn missing_base_url_is_a_config_error() {
    let client = ava_gateway::ApiClient::new(ava_config::ApiConfig::default()).unwrap();
    let err = client
        .list_courses(&browser_with_token("t"))
        .await
        .unwrap_err();
    assert!(matches!(err, GatewayError::Config(_)));
}
