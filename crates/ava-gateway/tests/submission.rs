//! The multi-step task submission flow against a scripted backend.

mod common;

use std::sync::Arc;

use ava_auth::{CallContext, MemoryStore};
use ava_gateway::{Attachment, GatewayError, SubmissionStage, TaskSubmission};
use common::{MockBackend, Reply};
use pretty_assertions::assert_eq;
use serde_json::json;

fn ctx() -> CallContext {
    CallContext::browser(Arc::new(MemoryStore::with_token("tok")))
}

fn response_reply() -> Reply {
    Reply::ok(&json!({"id": 77, "comment": "segue", "taskUserId": 5, "contents": []}))
}

fn content_reply(id: i64, name: &str, content_type: &str) -> Reply {
    Reply::ok(&json!({
        "id": id,
        "contentUrl": format!("responses/77/{name}"),
        "contentType": content_type,
        "name": name,
        "userResponseId": 77
    }))
}

fn submission(files: Vec<Attachment>) -> TaskSubmission {
    TaskSubmission {
        task_user_id: 5,
        commentary: "segue".into(),
        files,
    }
}

#[tokio::test]
async fn comment_and_two_files_make_three_calls_in_order() {
    let backend = MockBackend::start(vec![
        response_reply(),
        content_reply(1, "relatorio.pdf", "PDF"),
        content_reply(2, "print.png", "PNG"),
    ]);

    let receipt = backend
        .client()
        .submit_task_response(
            &ctx(),
            &submission(vec![
                Attachment::new("relatorio.pdf", b"%PDF".to_vec()),
                Attachment::new("print.png", vec![0x89, b'P', b'N', b'G']).with_mime_type("image/png"),
            ]),
        )
        .await
        .unwrap();

    assert_eq!(receipt.response.id, 77);
    assert_eq!(
        receipt.contents.iter().map(|c| c.id).collect::<Vec<_>>(),
        vec![1, 2]
    );

    let requests = backend.requests();
    let urls: Vec<&str> = requests.iter().map(|r| r.url.as_str()).collect();
    assert_eq!(
        urls,
        vec![
            "/user-response",
            "/user-response-content/save",
            "/user-response-content/save",
        ]
    );
    assert_eq!(
        requests[0].body_text(),
        r#"{"taskUserId":5,"commentary":"segue"}"#
    );

    let first = requests[1].body_text();
    assert!(
        requests[1]
            .content_type
            .as_deref()
            .is_some_and(|c| c.starts_with("multipart/form-data"))
    );
    assert!(first.contains("name=\"userContentStr\""));
    assert!(first.contains(r#""userResponseId":77"#));
    assert!(first.contains(r#""contentType":"PDF""#));
    assert!(first.contains("filename=\"relatorio.pdf\""));

    let second = requests[2].body_text();
    assert!(second.contains(r#""contentType":"PNG""#));
    assert!(second.contains("Content-Type: image/png"));
}

#[tokio::test]
async fn unrecognised_file_is_sent_as_pdf() {
    let backend = MockBackend::start(vec![
        response_reply(),
        content_reply(1, "dados.xlsx", "PDF"),
    ]);

    backend
        .client()
        .submit_task_response(
            &ctx(),
            &submission(vec![Attachment::new("dados.xlsx", b"PK".to_vec())]),
        )
        .await
        .unwrap();

    assert!(backend.requests()[1].body_text().contains(r#""contentType":"PDF""#));
}

#[tokio::test]
async fn no_files_makes_only_the_response_call() {
    let backend = MockBackend::start(vec![response_reply()]);

    let receipt = backend
        .client()
        .submit_task_response(&ctx(), &submission(Vec::new()))
        .await
        .unwrap();

    assert!(receipt.contents.is_empty());
    assert_eq!(backend.requests().len(), 1);
}

#[tokio::test]
async fn failure_at_second_upload_stops_and_keeps_earlier_work() {
    let backend = MockBackend::start(vec![
        response_reply(),
        content_reply(1, "a.pdf", "PDF"),
        Reply::json(400, &json!({"message": "Arquivo muito grande"})),
        content_reply(3, "c.pdf", "PDF"),
    ]);

    let err = backend
        .client()
        .submit_task_response(
            &ctx(),
            &submission(vec![
                Attachment::new("a.pdf", b"a".to_vec()),
                Attachment::new("b.pdf", b"b".to_vec()),
                Attachment::new("c.pdf", b"c".to_vec()),
            ]),
        )
        .await
        .unwrap_err();

    assert_eq!(
        err.stage,
        SubmissionStage::Upload {
            index: 1,
            file_name: "b.pdf".into()
        }
    );
    assert_eq!(err.response.map(|r| r.id), Some(77));
    assert_eq!(err.uploaded.len(), 1);
    assert_eq!(err.source.to_string(), "Arquivo muito grande");
    assert_eq!(backend.requests().len(), 3);
}

#[tokio::test]
async fn failure_creating_response_uploads_nothing() {
    let backend = MockBackend::start(vec![Reply::empty(401)]);

    let err = backend
        .client()
        .submit_task_response(
            &ctx(),
            &submission(vec![Attachment::new("a.pdf", b"a".to_vec())]),
        )
        .await
        .unwrap_err();

    assert_eq!(err.stage, SubmissionStage::CreateResponse);
    assert!(err.response.is_none());
    assert!(matches!(err.source, GatewayError::Api { status: 401, .. }));
    assert_eq!(backend.requests().len(), 1);
}
