//! Subcommand execution.
//!
//! Commands write their primary output to `out`. Failures the backend
//! reported have already reached the user through the notifier, so they
//! are returned as `Ok(false)`; only local errors come back as `Err`.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use super::args::Command;
use crate::chat::UpdateKind;
use crate::config::ClientConfig;
use crate::error::DeskResult;
use crate::models::{visible_rows, FolderNode, OpenFolders, SelectedFileIds, TreeRow};
use crate::traits::{HttpClient, Notifier};
use crate::workspace::Workspace;

/// Run one subcommand. Returns whether it succeeded.
pub async fn run_command<W: Write>(
    command: Command,
    http: Arc<dyn HttpClient>,
    notifier: Arc<dyn Notifier>,
    config: &ClientConfig,
    out: &mut W,
) -> DeskResult<bool> {
    let mut workspace = Workspace::new(http, notifier, config);

    match command {
        Command::Files => list_files(&mut workspace, out).await,
        Command::Ask { query, files, .. } => ask(&mut workspace, &query, &files, out).await,
        Command::Upload { folder, paths } => upload(&workspace, &folder, paths, out).await,
        Command::Index { folder, file_id } => {
            let mut documents = workspace.documents();
            Ok(documents.create_rag(&file_id, &folder).await.is_ok())
        }
        Command::Delete { folder, file_id } => {
            let mut documents = workspace.documents();
            Ok(documents.delete_file(&file_id, &folder).await.is_ok())
        }
    }
}

async fn list_files<W: Write>(workspace: &mut Workspace, out: &mut W) -> DeskResult<bool> {
    if workspace.refresh_files().await.is_err() {
        return Ok(false);
    }

    let tree = workspace.selection().tree();
    if tree.file_count() == 0 {
        writeln!(out, "No files.")?;
    } else {
        out.write_all(render_tree(tree).as_bytes())?;
    }
    Ok(true)
}

async fn ask<W: Write>(
    workspace: &mut Workspace,
    query: &str,
    files: &[String],
    out: &mut W,
) -> DeskResult<bool> {
    for file_id in files {
        if !workspace.selection().selected().contains(file_id) {
            workspace.selection_mut().toggle_file_selection(file_id);
        }
    }

    if !workspace.submit(query).is_started() {
        return Ok(false);
    }

    let mut streamed = false;
    while let Some(update) = workspace.chat_mut().next_update().await {
        match update.kind {
            UpdateKind::Piece(piece) => {
                streamed = true;
                out.write_all(piece.as_bytes())?;
                out.flush()?;
            }
            UpdateKind::Completed => {
                if !streamed {
                    if let Some(reply) = workspace.chat().transcript().get(update.message) {
                        out.write_all(reply.content.as_bytes())?;
                    }
                }
                writeln!(out)?;
                return Ok(true);
            }
            UpdateKind::Failed { .. } => {
                if streamed {
                    writeln!(out)?;
                }
                return Ok(false);
            }
        }
    }

    Ok(false)
}

async fn upload<W: Write>(
    workspace: &Workspace,
    folder: &str,
    paths: Vec<PathBuf>,
    out: &mut W,
) -> DeskResult<bool> {
    let mut documents = workspace.documents();
    for path in &paths {
        documents.queue_upload_path(folder, path).await?;
    }

    match documents.upload_documents(folder).await {
        Ok(count) => {
            let uploaded = documents.files_in(folder);
            for file in &uploaded[uploaded.len().saturating_sub(count)..] {
                writeln!(out, "{}  [{}]", file.file_name, file.file_id)?;
            }
            Ok(true)
        }
        Err(_) => Ok(false),
    }
}

/// Render every folder expanded, two spaces per level.
pub fn render_tree(tree: &FolderNode) -> String {
    let mut open = OpenFolders::default();
    for path in tree.folder_paths() {
        open.toggle(&path);
    }

    let mut rendered = String::new();
    for row in visible_rows(tree, &open, &SelectedFileIds::default()) {
        let indent = "  ".repeat(row.depth());
        match row {
            TreeRow::Folder { name, .. } => {
                rendered.push_str(&format!("{}{}/\n", indent, name));
            }
            TreeRow::File {
                file_id,
                display_name,
                rag_status,
                ..
            } => {
                let marker = if rag_status { " (indexed)" } else { "" };
                rendered.push_str(&format!(
                    "{}{}  [{}]{}\n",
                    indent, display_name, file_id, marker
                ));
            }
        }
    }
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{MockHttpClient, MockResponse, RecordingNotifier};
    use crate::models::{build_folder_tree, FileRecord};
    use crate::traits::HttpError;
    use serde_json::json;

    fn config() -> ClientConfig {
        ClientConfig::new().with_base_url("http://api.test")
    }

    async fn run(http: &MockHttpClient, command: Command) -> (DeskResult<bool>, String) {
        let mut out = Vec::new();
        let result = run_command(
            command,
            Arc::new(http.clone()),
            Arc::new(RecordingNotifier::new()),
            &config(),
            &mut out,
        )
        .await;
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_render_tree() {
        let tree = build_folder_tree(&[
            FileRecord::new("f1", "docs/contract.pdf", "legal/2024").with_rag_status(true),
            FileRecord::new("f2", "readme.txt", ""),
        ]);

        assert_eq!(
            render_tree(&tree),
            "legal/\n  2024/\n    contract.pdf  [f1] (indexed)\nreadme.txt  [f2]\n"
        );
    }

    #[tokio::test]
    async fn test_ask_prints_streamed_answer() {
        let http = MockHttpClient::new();
        http.set_response(
            "http://api.test/doc-eval/chat",
            MockResponse::text_stream(&["The ", "answer."]),
        );

        let command = Command::Ask {
            query: "What is in folder X?".to_string(),
            files: vec!["f1".to_string(), "f2".to_string()],
            no_stream: false,
        };
        let (result, out) = run(&http, command).await;

        assert!(result.unwrap());
        assert_eq!(out, "The answer.\n");
        let body = http.requests_to("doc-eval/chat")[0].json_body().unwrap();
        assert_eq!(body["file_id_list"], json!(["f1", "f2"]));
    }

    #[tokio::test]
    async fn test_ask_repeated_file_stays_selected() {
        let http = MockHttpClient::new();
        http.set_response(
            "http://api.test/doc-eval/chat",
            MockResponse::text_stream(&["ok"]),
        );

        let command = Command::Ask {
            query: "q".to_string(),
            files: vec!["f1".to_string(), "f1".to_string()],
            no_stream: false,
        };
        let (result, _) = run(&http, command).await;

        assert!(result.unwrap());
        let body = http.requests_to("doc-eval/chat")[0].json_body().unwrap();
        assert_eq!(body["file_id_list"], json!(["f1"]));
    }

    #[tokio::test]
    async fn test_ask_failure_reports_false() {
        let http = MockHttpClient::new();
        http.set_response(
            "http://api.test/doc-eval/chat",
            MockResponse::Error(HttpError::ConnectionFailed("refused".to_string())),
        );

        let command = Command::Ask {
            query: "q".to_string(),
            files: Vec::new(),
            no_stream: false,
        };
        let (result, out) = run(&http, command).await;
        assert!(!result.unwrap());
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_files_lists_tree() {
        let http = MockHttpClient::new();
        http.set_response(
            "http://api.test/doc-eval/get-final-files",
            MockResponse::json(json!({
                "status_code": 200,
                "data": [{"file_id": "f1", "file_name": "a.pdf", "folder_name": "x"}]
            })),
        );

        let (result, out) = run(&http, Command::Files).await;
        assert!(result.unwrap());
        assert_eq!(out, "x/\n  a.pdf  [f1]\n");
    }

    #[tokio::test]
    async fn test_upload_missing_path_is_error() {
        let http = MockHttpClient::new();
        let command = Command::Upload {
            folder: "docs".to_string(),
            paths: vec![PathBuf::from("/definitely/not/here.pdf")],
        };

        let (result, _) = run(&http, command).await;
        assert!(result.is_err());
        assert!(http.get_requests().is_empty());
    }

    #[tokio::test]
    async fn test_index_reports_backend_outcome() {
        let http = MockHttpClient::new();
        http.set_response(
            "http://api.test/doc-eval/create-knowledge-base",
            MockResponse::json(json!({"status": "success"})),
        );

        let command = Command::Index {
            folder: "legal".to_string(),
            file_id: "f1".to_string(),
        };
        let (result, _) = run(&http, command).await;
        assert!(result.unwrap());
    }
}
