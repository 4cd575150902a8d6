//! Document management state: folders, uploads, indexing and deletion.
//!
//! [`DocumentManager`] owns every map it exposes. Operations talk to the
//! backend through [`DocumentApi`], report their outcome through the
//! [`Notifier`] and only touch local state once the backend has agreed.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use bytes::Bytes;
use futures::future::try_join_all;

use super::loading::LoadingFlags;
use crate::api::DocumentApi;
use crate::error::{DeskError, DeskResult};
use crate::models::{build_folder_tree, path_segments, FileRecord, FolderNode, UploadFileSpec};
use crate::traits::{Notification, Notifier};

/// Folder path → files stored directly in it.
pub type FilesByFolder = BTreeMap<String, Vec<FileRecord>>;

/// Nested folder names, without files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FolderStructure {
    children: BTreeMap<String, FolderStructure>,
}

impl FolderStructure {
    /// Create every segment of `path` that does not exist yet.
    pub fn insert_path(&mut self, path: &str) {
        let mut level = self;
        for segment in path_segments(path) {
            level = level.children.entry(segment.to_string()).or_default();
        }
    }

    pub fn get(&self, path: &str) -> Option<&FolderStructure> {
        path_segments(path).try_fold(self, |level, segment| level.children.get(segment))
    }

    fn get_mut(&mut self, path: &str) -> Option<&mut FolderStructure> {
        path_segments(path).try_fold(self, |level, segment| level.children.get_mut(segment))
    }

    pub fn contains_path(&self, path: &str) -> bool {
        path_segments(path).next().is_some() && self.get(path).is_some()
    }

    pub fn children(&self) -> &BTreeMap<String, FolderStructure> {
        &self.children
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// A local file waiting to be uploaded into a folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingUpload {
    pub file_name: String,
    pub content_type: String,
    pub body: Bytes,
}

impl PendingUpload {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        body: impl Into<Bytes>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            body: body.into(),
        }
    }

    /// Read `path`, guessing the content type from its extension.
    pub async fn from_path(path: &Path) -> DeskResult<Self> {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| {
                DeskError::Validation(format!("Not a file path: {}", path.display()))
            })?;
        let body = tokio::fs::read(path).await?;
        let content_type = mime_guess::from_path(path)
            .first_or_octet_stream()
            .essence_str()
            .to_string();

        Ok(Self::new(file_name, content_type, body))
    }

    fn spec(&self) -> UploadFileSpec {
        UploadFileSpec {
            file_name: self.file_name.clone(),
            file_type: self.content_type.clone(),
        }
    }
}

/// Error text for a notification: the server's message when it sent one.
fn failure_description(error: &DeskError, fallback: &str) -> String {
    match error {
        DeskError::Rejected { message, .. } if !message.is_empty() => message.clone(),
        _ => fallback.to_string(),
    }
}

pub struct DocumentManager {
    api: DocumentApi,
    notifier: Arc<dyn Notifier>,
    files_by_folder: FilesByFolder,
    folders: FolderStructure,
    pending_uploads: BTreeMap<String, Vec<PendingUpload>>,
    loading_upload: LoadingFlags,
    loading_rag: LoadingFlags,
    loading_delete: LoadingFlags,
    loading_files: bool,
    collapsed: BTreeMap<String, bool>,
}

impl std::fmt::Debug for DocumentManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentManager")
            .field("folders", &self.files_by_folder.len())
            .field("loading_files", &self.loading_files)
            .finish()
    }
}

impl DocumentManager {
    /// `loading_files` starts true and clears when the first fetch settles.
    pub fn new(api: DocumentApi, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            api,
            notifier,
            files_by_folder: FilesByFolder::new(),
            folders: FolderStructure::default(),
            pending_uploads: BTreeMap::new(),
            loading_upload: LoadingFlags::new(),
            loading_rag: LoadingFlags::new(),
            loading_delete: LoadingFlags::new(),
            loading_files: true,
            collapsed: BTreeMap::new(),
        }
    }

    /// Reload files from the combined listing.
    pub async fn fetch(&mut self) -> DeskResult<usize> {
        self.loading_files = true;
        let result = self.api.list_files_and_folders().await;
        self.loading_files = false;

        match result {
            Ok(files) => {
                let count = files.len();
                self.apply_listing(files);
                Ok(count)
            }
            Err(error) => {
                tracing::warn!(code = error.error_code(), "Fetching documents failed: {}", error);
                self.notify_error(failure_description(&error, "Failed to fetch files"));
                Err(error)
            }
        }
    }

    fn apply_listing(&mut self, files: Vec<FileRecord>) {
        let mut files_by_folder = FilesByFolder::new();
        let mut folders = FolderStructure::default();

        for file in files {
            folders.insert_path(&file.folder_name);
            files_by_folder
                .entry(file.folder_name.clone())
                .or_default()
                .push(file);
        }

        self.files_by_folder = files_by_folder;
        self.folders = folders;
    }

    /// Register an empty top-level folder.
    pub fn create_folder(&mut self, name: &str) -> DeskResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(self.reject("Folder name cannot be empty"));
        }
        if self.folders.children.contains_key(name) {
            return Err(self.reject("Folder already exists"));
        }

        self.folders.insert_path(name);
        self.files_by_folder.insert(name.to_string(), Vec::new());
        self.notify_success(format!("Folder \"{}\" created successfully!", name));
        Ok(())
    }

    /// Register an empty folder under an existing one.
    pub fn create_child_folder(&mut self, parent: Option<&str>, name: &str) -> DeskResult<()> {
        let name = name.trim();
        let parent = match parent {
            Some(parent) if !name.is_empty() && self.folders.contains_path(parent) => parent,
            _ => {
                return Err(self.reject(
                    "Child folder name cannot be empty and parent folder must be selected",
                ))
            }
        };

        let path = format!("{}/{}", parent, name);
        if self.files_by_folder.contains_key(&path) || self.folders.contains_path(&path) {
            return Err(self.reject("Folder already exists at this path"));
        }

        if let Some(level) = self.folders.get_mut(parent) {
            level.children.insert(name.to_string(), FolderStructure::default());
        }
        self.files_by_folder.insert(path, Vec::new());
        self.notify_success(format!(
            "Folder \"{}\" created successfully inside \"{}\"!",
            name, parent
        ));
        Ok(())
    }

    pub fn queue_upload(&mut self, folder: &str, upload: PendingUpload) {
        self.pending_uploads
            .entry(folder.to_string())
            .or_default()
            .push(upload);
    }

    pub async fn queue_upload_path(&mut self, folder: &str, path: &Path) -> DeskResult<()> {
        let upload = PendingUpload::from_path(path).await?;
        tracing::debug!(
            "Queued {} ({}, {} bytes) for {}",
            upload.file_name,
            upload.content_type,
            upload.body.len(),
            folder
        );
        self.queue_upload(folder, upload);
        Ok(())
    }

    /// Upload every pending file of `folder`.
    ///
    /// On success the new records join the folder and the pending list is
    /// cleared. Any failure leaves both as they were.
    pub async fn upload_documents(&mut self, folder: &str) -> DeskResult<usize> {
        let pending = match self.pending_uploads.get(folder) {
            Some(pending) if !pending.is_empty() => pending.clone(),
            _ => return Ok(0),
        };

        self.loading_upload.set(folder, true);
        let result = self.upload_all(folder, &pending).await;
        self.loading_upload.set(folder, false);

        match result {
            Ok(records) => {
                let count = records.len();
                self.files_by_folder
                    .entry(folder.to_string())
                    .or_default()
                    .extend(records);
                self.folders.insert_path(folder);
                self.pending_uploads.insert(folder.to_string(), Vec::new());
                tracing::info!("Uploaded {} files to {}", count, folder);
                self.notify_success("Files uploaded successfully!");
                Ok(count)
            }
            Err(error) => {
                tracing::warn!(code = error.error_code(), "Upload to {} failed: {}", folder, error);
                self.notify_error(failure_description(&error, "Failed to upload files"));
                Err(error)
            }
        }
    }

    async fn upload_all(
        &self,
        folder: &str,
        pending: &[PendingUpload],
    ) -> DeskResult<Vec<FileRecord>> {
        let specs = pending.iter().map(PendingUpload::spec).collect();
        let targets = self.api.request_presigned_urls(folder, specs).await?;

        let uploads = targets.iter().zip(pending).map(|(target, upload)| async move {
            self.api
                .upload_to_presigned(target, upload.body.clone(), &upload.content_type)
                .await?;
            Ok::<_, DeskError>(FileRecord {
                file_id: target.file_id.clone(),
                file_name: upload.file_name.clone(),
                folder_name: folder.to_string(),
                rag_status: false,
                s3_file_url: Some(target.file_url.clone()),
            })
        });

        try_join_all(uploads).await
    }

    /// Index one file for retrieval.
    pub async fn create_rag(&mut self, file_id: &str, folder: &str) -> DeskResult<()> {
        self.loading_rag.set(file_id, true);
        let result = self.api.create_rag(file_id, folder).await;
        self.loading_rag.set(file_id, false);

        match result {
            Ok(()) => {
                if let Some(files) = self.files_by_folder.get_mut(folder) {
                    files
                        .iter_mut()
                        .filter(|file| file.file_id == file_id)
                        .for_each(|file| file.rag_status = true);
                }
                self.notify_success("RAG created successfully!");
                Ok(())
            }
            Err(error) => {
                tracing::warn!(code = error.error_code(), "RAG creation for {} failed: {}", file_id, error);
                self.notify_error(failure_description(&error, "Failed to create RAG"));
                Err(error)
            }
        }
    }

    pub async fn delete_file(&mut self, file_id: &str, folder: &str) -> DeskResult<()> {
        self.loading_delete.set(file_id, true);
        let result = self.api.delete_file(file_id, folder).await;
        self.loading_delete.set(file_id, false);

        match result {
            Ok(()) => {
                if let Some(files) = self.files_by_folder.get_mut(folder) {
                    files.retain(|file| file.file_id != file_id);
                }
                self.notify_success("File deleted successfully!");
                Ok(())
            }
            Err(error) => {
                tracing::warn!(code = error.error_code(), "Deleting {} failed: {}", file_id, error);
                self.notify_error(failure_description(&error, "Failed to delete file"));
                Err(error)
            }
        }
    }

    /// Returns the folder's new collapsed state.
    pub fn toggle_collapsed(&mut self, folder: &str) -> bool {
        let entry = self.collapsed.entry(folder.to_string()).or_insert(false);
        *entry = !*entry;
        *entry
    }

    pub fn is_collapsed(&self, folder: &str) -> bool {
        self.collapsed.get(folder).copied().unwrap_or(false)
    }

    pub fn files_by_folder(&self) -> &FilesByFolder {
        &self.files_by_folder
    }

    pub fn files_in(&self, folder: &str) -> &[FileRecord] {
        self.files_by_folder
            .get(folder)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Folder that currently holds `file_id`, if any.
    pub fn folder_of(&self, file_id: &str) -> Option<&str> {
        self.files_by_folder
            .iter()
            .find(|(_, files)| files.iter().any(|file| file.file_id == file_id))
            .map(|(folder, _)| folder.as_str())
    }

    pub fn folders(&self) -> &FolderStructure {
        &self.folders
    }

    /// Hierarchy of every known file.
    pub fn tree(&self) -> FolderNode {
        let files: Vec<FileRecord> = self.files_by_folder.values().flatten().cloned().collect();
        build_folder_tree(&files)
    }

    pub fn pending_uploads(&self, folder: &str) -> &[PendingUpload] {
        self.pending_uploads
            .get(folder)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn loading_upload(&self) -> &LoadingFlags {
        &self.loading_upload
    }

    pub fn loading_rag(&self) -> &LoadingFlags {
        &self.loading_rag
    }

    pub fn loading_delete(&self) -> &LoadingFlags {
        &self.loading_delete
    }

    pub fn loading_files(&self) -> bool {
        self.loading_files
    }

    fn reject(&self, message: &str) -> DeskError {
        self.notify_error(message);
        DeskError::Validation(message.to_string())
    }

    fn notify_success(&self, message: impl Into<String>) {
        self.notifier.notify(Notification::success(message));
    }

    fn notify_error(&self, message: impl Into<String>) {
        self.notifier.notify(Notification::error(message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{MockHttpClient, MockResponse, RecordingNotifier};
    use crate::config::{ClientConfig, DEFAULT_USER_ID};
    use crate::traits::{HttpError, Response};
    use serde_json::json;

    const BASE: &str = "http://api.test";
    const LISTING_URL: &str = "http://api.test/doc-eval/get-files-and-folders";
    const PRESIGN_URL: &str = "http://api.test/doc-eval/get-presigned-urls";
    const RAG_URL: &str = "http://api.test/doc-eval/create-knowledge-base";
    const DELETE_URL: &str = "http://api.test/doc-eval/delete-file";
    const STORAGE: &str = "https://storage.test/";

    fn manager() -> (DocumentManager, MockHttpClient, RecordingNotifier) {
        let http = MockHttpClient::new();
        let notifier = RecordingNotifier::new();
        let api = DocumentApi::new(
            Arc::new(http.clone()),
            &ClientConfig::new().with_base_url(BASE),
        );
        let manager = DocumentManager::new(api, Arc::new(notifier.clone()));
        (manager, http, notifier)
    }

    fn listing() -> serde_json::Value {
        json!({
            "status": "success",
            "data": [
                {"file_id": "f1", "file_name": "a.pdf", "folder_name": "legal/contracts",
                 "rag_status": false, "s3_file_url": "https://storage.test/a.pdf"},
                {"file_id": "f2", "file_name": "b.pdf", "folder_name": "legal", "rag_status": true},
                {"file_id": "f3", "file_name": "c.pdf", "folder_name": "hr", "rag_status": false}
            ]
        })
    }

    async fn loaded() -> (DocumentManager, MockHttpClient, RecordingNotifier) {
        let (mut manager, http, notifier) = manager();
        http.set_response(LISTING_URL, MockResponse::json(listing()));
        manager.fetch().await.unwrap();
        (manager, http, notifier)
    }

    fn presign_response() -> MockResponse {
        MockResponse::json(json!({
            "status_code": 200,
            "urls": [
                {"presigned_url": "https://storage.test/put/1", "file_url": "https://storage.test/1",
                 "file_id": "n1"},
                {"presigned_url": "https://storage.test/put/2", "file_url": "https://storage.test/2",
                 "file_id": "n2"}
            ]
        }))
    }

    #[tokio::test]
    async fn test_fetch_groups_files_and_structure() {
        let (manager, _http, notifier) = loaded().await;

        assert!(!manager.loading_files());
        assert_eq!(manager.files_in("legal").len(), 1);
        assert_eq!(manager.files_in("legal/contracts")[0].file_id, "f1");
        assert!(manager.folders().contains_path("legal/contracts"));
        assert!(manager.folders().contains_path("hr"));
        assert_eq!(manager.tree().file_count(), 3);
        assert!(notifier.notifications().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_failure_keeps_state() {
        let (mut manager, http, notifier) = loaded().await;
        http.set_response(
            LISTING_URL,
            MockResponse::json(json!({"status": "error", "message": "index offline"})),
        );

        assert!(manager.fetch().await.is_err());
        assert_eq!(manager.files_by_folder().len(), 3);
        assert_eq!(notifier.errors()[0].description, "index offline");
        assert!(!manager.loading_files());
    }

    #[test]
    fn test_create_folder_validation() {
        let (mut manager, _http, notifier) = manager();

        assert!(manager.create_folder("   ").is_err());
        assert!(manager.create_folder("reports").is_ok());
        assert!(manager.create_folder("reports").is_err());

        let descriptions: Vec<_> = notifier
            .notifications()
            .into_iter()
            .map(|n| n.description)
            .collect();
        assert_eq!(
            descriptions,
            vec![
                "Folder name cannot be empty",
                "Folder \"reports\" created successfully!",
                "Folder already exists",
            ]
        );
        assert!(manager.files_in("reports").is_empty());
        assert!(manager.files_by_folder().contains_key("reports"));
    }

    #[tokio::test]
    async fn test_create_child_folder() {
        let (mut manager, _http, notifier) = loaded().await;

        assert!(manager.create_child_folder(None, "drafts").is_err());
        assert!(manager.create_child_folder(Some("legal"), " ").is_err());
        assert!(manager.create_child_folder(Some("missing"), "x").is_err());
        assert!(manager.create_child_folder(Some("legal"), "contracts").is_err());
        assert_eq!(
            notifier.last().unwrap().description,
            "Folder already exists at this path"
        );

        manager.create_child_folder(Some("legal"), "drafts").unwrap();
        assert!(manager.folders().contains_path("legal/drafts"));
        assert!(manager.files_by_folder().contains_key("legal/drafts"));
        assert_eq!(
            notifier.last().unwrap().description,
            "Folder \"drafts\" created successfully inside \"legal\"!"
        );
    }

    #[tokio::test]
    async fn test_upload_documents_appends_records() {
        let (mut manager, http, notifier) = loaded().await;
        http.set_response(PRESIGN_URL, presign_response());
        http.set_response(STORAGE, MockResponse::Success(Response::new(200, Bytes::new())));

        manager.queue_upload("hr", PendingUpload::new("one.pdf", "application/pdf", "1"));
        manager.queue_upload("hr", PendingUpload::new("two.txt", "text/plain", "2"));

        assert_eq!(manager.upload_documents("hr").await.unwrap(), 2);
        let files = manager.files_in("hr");
        assert_eq!(files.len(), 3);
        assert_eq!(files[1].file_id, "n1");
        assert_eq!(files[1].file_name, "one.pdf");
        assert_eq!(files[2].s3_file_url.as_deref(), Some("https://storage.test/2"));
        assert!(!files[2].rag_status);
        assert!(manager.pending_uploads("hr").is_empty());
        assert!(!manager.loading_upload().is_loading("hr"));
        assert_eq!(notifier.last().unwrap().description, "Files uploaded successfully!");

        let presign = &http.requests_to("get-presigned-urls")[0];
        assert_eq!(
            presign.json_body().unwrap(),
            json!({
                "user_id": DEFAULT_USER_ID,
                "files": [
                    {"fileName": "one.pdf", "fileType": "application/pdf"},
                    {"fileName": "two.txt", "fileType": "text/plain"}
                ],
                "folder_name": "hr",
                "thread_id": "hr"
            })
        );

        let put = &http.requests_to("put/2")[0];
        assert_eq!(put.method, "PUT");
        assert_eq!(put.headers.get("Content-Type").map(String::as_str), Some("text/plain"));
        assert_eq!(put.body.as_deref(), Some("2"));
    }

    #[tokio::test]
    async fn test_upload_without_pending_is_noop() {
        let (mut manager, http, notifier) = loaded().await;
        http.clear_requests();

        assert_eq!(manager.upload_documents("hr").await.unwrap(), 0);
        assert!(http.get_requests().is_empty());
        assert!(notifier.notifications().is_empty());
    }

    #[tokio::test]
    async fn test_failed_put_leaves_state_unchanged() {
        let (mut manager, http, notifier) = loaded().await;
        http.set_response(PRESIGN_URL, presign_response());
        http.set_response(
            "https://storage.test/put/1",
            MockResponse::Success(Response::new(200, Bytes::new())),
        );
        http.set_response(
            "https://storage.test/put/2",
            MockResponse::Error(HttpError::ConnectionFailed("reset".to_string())),
        );

        manager.queue_upload("hr", PendingUpload::new("one.pdf", "application/pdf", "1"));
        manager.queue_upload("hr", PendingUpload::new("two.pdf", "application/pdf", "2"));

        assert!(manager.upload_documents("hr").await.is_err());
        assert_eq!(manager.files_in("hr").len(), 1);
        assert_eq!(manager.pending_uploads("hr").len(), 2);
        assert!(!manager.loading_upload().is_loading("hr"));
        assert_eq!(notifier.last().unwrap().description, "Failed to upload files");
    }

    #[tokio::test]
    async fn test_rejected_presign_uses_server_message() {
        let (mut manager, http, notifier) = loaded().await;
        http.set_response(
            PRESIGN_URL,
            MockResponse::json(json!({"status_code": 403, "message": "quota exceeded"})),
        );
        manager.queue_upload("hr", PendingUpload::new("one.pdf", "application/pdf", "1"));

        assert!(manager.upload_documents("hr").await.is_err());
        assert_eq!(notifier.last().unwrap().description, "quota exceeded");
        assert!(http.requests_to("put/1").is_empty());
    }

    #[tokio::test]
    async fn test_queue_upload_path_guesses_type() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "meeting notes").unwrap();

        let (mut manager, _http, _) = manager();
        manager.queue_upload_path("hr", &path).await.unwrap();

        let pending = &manager.pending_uploads("hr")[0];
        assert_eq!(pending.file_name, "notes.txt");
        assert_eq!(pending.content_type, "text/plain");
        assert_eq!(pending.body, Bytes::from("meeting notes"));
    }

    #[tokio::test]
    async fn test_queue_upload_path_missing_file() {
        let (mut manager, _http, _) = manager();
        let result = manager
            .queue_upload_path("hr", Path::new("/definitely/not/here.pdf"))
            .await;
        assert!(matches!(result, Err(DeskError::Io(_))));
        assert!(manager.pending_uploads("hr").is_empty());
    }

    #[tokio::test]
    async fn test_create_rag_marks_file_indexed() {
        let (mut manager, http, notifier) = loaded().await;
        http.set_response(RAG_URL, MockResponse::json(json!({"status": "success"})));

        manager.create_rag("f1", "legal/contracts").await.unwrap();
        assert!(manager.files_in("legal/contracts")[0].rag_status);
        assert!(!manager.loading_rag().is_loading("f1"));
        assert_eq!(notifier.last().unwrap().description, "RAG created successfully!");

        let body = http.requests_to("create-knowledge-base")[0].json_body().unwrap();
        assert_eq!(body["thread_id"], "legal");
        assert_eq!(body["upload_type"], "file");
        assert_eq!(body["file_id_list"], json!(["f1"]));
    }

    #[tokio::test]
    async fn test_create_rag_failure() {
        let (mut manager, http, notifier) = loaded().await;
        http.set_response(RAG_URL, MockResponse::json(json!({"status": "error"})));

        assert!(manager.create_rag("f1", "legal/contracts").await.is_err());
        assert!(!manager.files_in("legal/contracts")[0].rag_status);
        assert_eq!(notifier.last().unwrap().description, "Failed to create RAG");
    }

    #[tokio::test]
    async fn test_delete_file() {
        let (mut manager, http, notifier) = loaded().await;
        http.set_response(DELETE_URL, MockResponse::json(json!({"status": 200})));

        manager.delete_file("f2", "legal").await.unwrap();
        assert!(manager.files_in("legal").is_empty());
        assert!(manager.folder_of("f2").is_none());
        assert!(!manager.loading_delete().is_loading("f2"));
        assert_eq!(notifier.last().unwrap().description, "File deleted successfully!");
    }

    #[tokio::test]
    async fn test_delete_file_failure_keeps_file() {
        let (mut manager, http, notifier) = loaded().await;
        http.set_response(
            DELETE_URL,
            MockResponse::Error(HttpError::Timeout("30s".to_string())),
        );

        assert!(manager.delete_file("f2", "legal").await.is_err());
        assert_eq!(manager.folder_of("f2"), Some("legal"));
        assert_eq!(notifier.last().unwrap().description, "Failed to delete file");
    }

    #[test]
    fn test_toggle_collapsed() {
        let (mut manager, _http, _) = manager();
        assert!(!manager.is_collapsed("hr"));
        assert!(manager.toggle_collapsed("hr"));
        assert!(manager.is_collapsed("hr"));
        assert!(!manager.toggle_collapsed("hr"));
    }
}
