//! Chat exchanges against a wiremock backend.

mod common;

use ragdesk::chat::UpdateKind;
use ragdesk::config::DEFAULT_USER_ID;
use ragdesk::models::Sender;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{config_for, workspace_for};

#[tokio::test]
async fn test_streamed_reply_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/doc-eval/chat"))
        .and(body_json(json!({
            "query": "What is in folder X?",
            "user_id": DEFAULT_USER_ID,
            "query_id": "query_1",
            "file_id_list": ["f1", "f2"],
            "stream": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string("Folder X holds two quarterly reports."))
        .expect(1)
        .mount(&server)
        .await;

    let (mut workspace, notifier) = workspace_for(&config_for(&server));
    workspace.selection_mut().toggle_file_selection("f1");
    workspace.selection_mut().toggle_file_selection("f2");
    assert!(workspace.submit("What is in folder X?").is_started());

    let updates = workspace.chat_mut().run_until_settled().await;
    for update in &updates {
        if let UpdateKind::Piece(piece) = &update.kind {
            assert!(piece.chars().count() <= 10);
        }
    }

    let messages = workspace.chat().transcript().messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[1].sender, Sender::System);
    assert_eq!(messages[1].content, "Folder X holds two quarterly reports.");
    assert!(!messages[1].streaming);
    assert!(notifier.notifications().is_empty());
}

#[tokio::test]
async fn test_multibyte_reply_survives_rechunking() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/doc-eval/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Résumé für Zoë – 日本語のテキスト"))
        .mount(&server)
        .await;

    let (mut workspace, _) = workspace_for(&config_for(&server));
    workspace.submit("q");
    workspace.chat_mut().run_until_settled().await;

    assert_eq!(
        workspace.chat().transcript().last().unwrap().content,
        "Résumé für Zoë – 日本語のテキスト"
    );
}

#[tokio::test]
async fn test_server_error_appends_notice() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/doc-eval/chat"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal"))
        .mount(&server)
        .await;

    let (mut workspace, notifier) = workspace_for(&config_for(&server));
    workspace.submit("q");
    let updates = workspace.chat_mut().run_until_settled().await;

    assert!(matches!(
        updates.last().map(|u| &u.kind),
        Some(UpdateKind::Failed { .. })
    ));
    let messages = workspace.chat().transcript().messages();
    assert_eq!(messages.len(), 3);
    assert!(messages[1].failed);
    assert_eq!(
        messages[2].content,
        "An error occurred: The server returned an error (HTTP 500)."
    );
    assert_eq!(notifier.errors()[0].description, "Failed to send message");
    assert!(!workspace.chat().is_loading());
}

#[tokio::test]
async fn test_non_streaming_reply_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/doc-eval/chat"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"final_response": "Two reports."})),
        )
        .mount(&server)
        .await;

    let config = config_for(&server).with_stream(false);
    let (mut workspace, _) = workspace_for(&config);
    workspace.submit("q");
    workspace.chat_mut().run_until_settled().await;

    assert_eq!(
        workspace.chat().transcript().last().unwrap().content,
        "Two reports."
    );
}
