//! Client for the document backend.
//!
//! Thin request/response glue: builds the JSON bodies, checks the status
//! envelope each endpoint uses, and maps failures into [`DeskError`].

use std::sync::Arc;

use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ClientConfig;
use crate::error::{DeskError, DeskResult};
use crate::models::{
    thread_id_for, ChatRequest, ChatResponse, CreateRagRequest, DeleteFileRequest, FileRecord,
    FilesAndFoldersResponse, FinalFilesResponse, PresignedUrl, PresignedUrlRequest,
    PresignedUrlResponse, StatusResponse, UploadFileSpec,
};
use crate::traits::{json_headers, ByteStream, Headers, HttpClient, Response};

pub const FINAL_FILES_PATH: &str = "doc-eval/get-final-files";
pub const FILES_AND_FOLDERS_PATH: &str = "doc-eval/get-files-and-folders";
pub const PRESIGNED_URLS_PATH: &str = "doc-eval/get-presigned-urls";
pub const CREATE_RAG_PATH: &str = "doc-eval/create-knowledge-base";
pub const DELETE_FILE_PATH: &str = "doc-eval/delete-file";
pub const CHAT_PATH: &str = "doc-eval/chat";

/// Upload type sent with RAG creation requests.
const RAG_UPLOAD_TYPE: &str = "file";

/// Document backend client.
#[derive(Clone)]
pub struct DocumentApi {
    http: Arc<dyn HttpClient>,
    base_url: String,
    user_id: String,
}

impl std::fmt::Debug for DocumentApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentApi")
            .field("base_url", &self.base_url)
            .field("user_id", &self.user_id)
            .finish()
    }
}

impl DocumentApi {
    pub fn new(http: Arc<dyn HttpClient>, config: &ClientConfig) -> Self {
        Self {
            http,
            base_url: config.base_url.clone(),
            user_id: config.user_id.clone(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Files available for chat scoping.
    pub async fn list_final_files(&self) -> DeskResult<Vec<FileRecord>> {
        let endpoint = "get-final-files";
        let response = self
            .http
            .get(&self.url(FINAL_FILES_PATH), &Headers::new())
            .await
            .map_err(|e| DeskError::http(endpoint, e))?;

        let envelope: FinalFilesResponse = decode(endpoint, &response)?;
        if envelope.status_code != 200 {
            return Err(DeskError::rejected(
                endpoint,
                envelope.status_code.to_string(),
                envelope
                    .message
                    .unwrap_or_else(|| "Failed to fetch files".to_string()),
            ));
        }

        tracing::debug!("Fetched {} files", envelope.data.len());
        Ok(envelope.data)
    }

    /// Files for the document manager, including storage URLs.
    pub async fn list_files_and_folders(&self) -> DeskResult<Vec<FileRecord>> {
        let endpoint = "get-files-and-folders";
        let response = self
            .http
            .get(&self.url(FILES_AND_FOLDERS_PATH), &Headers::new())
            .await
            .map_err(|e| DeskError::http(endpoint, e))?;

        let envelope: FilesAndFoldersResponse = decode(endpoint, &response)?;
        if !envelope.status.is_success() {
            return Err(DeskError::rejected(
                endpoint,
                envelope.status.to_string(),
                envelope
                    .message
                    .unwrap_or_else(|| "Failed to fetch files".to_string()),
            ));
        }

        Ok(envelope.data)
    }

    /// Ask for one upload URL per file, returned in request order.
    pub async fn request_presigned_urls(
        &self,
        folder_path: &str,
        files: Vec<UploadFileSpec>,
    ) -> DeskResult<Vec<PresignedUrl>> {
        let endpoint = "get-presigned-urls";
        let expected = files.len();
        let body = PresignedUrlRequest {
            user_id: self.user_id.clone(),
            files,
            folder_name: folder_path.to_string(),
            thread_id: thread_id_for(folder_path).to_string(),
        };

        let response = self.post_json(endpoint, PRESIGNED_URLS_PATH, &body).await?;
        let envelope: PresignedUrlResponse = decode(endpoint, &response)?;

        if envelope.status_code != 200 {
            return Err(DeskError::rejected(
                endpoint,
                envelope.status_code.to_string(),
                envelope.message.unwrap_or_else(|| "Upload failed".to_string()),
            ));
        }
        if envelope.urls.len() != expected {
            return Err(DeskError::rejected(
                endpoint,
                envelope.status_code.to_string(),
                format!(
                    "Expected {} upload URLs, received {}",
                    expected,
                    envelope.urls.len()
                ),
            ));
        }

        Ok(envelope.urls)
    }

    /// PUT raw file bytes to a presigned storage URL.
    pub async fn upload_to_presigned(
        &self,
        target: &PresignedUrl,
        body: Bytes,
        content_type: &str,
    ) -> DeskResult<()> {
        let endpoint = "presigned-upload";
        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), content_type.to_string());

        let response = self
            .http
            .put(&target.presigned_url, body, &headers)
            .await
            .map_err(|e| DeskError::http(endpoint, e))?;

        if !response.is_success() {
            return Err(DeskError::rejected(
                endpoint,
                response.status.to_string(),
                response
                    .text()
                    .unwrap_or_else(|_| "Failed to upload files".to_string()),
            ));
        }

        tracing::debug!("Uploaded file {} to storage", target.file_id);
        Ok(())
    }

    /// Trigger indexing for one file.
    pub async fn create_rag(&self, file_id: &str, folder_path: &str) -> DeskResult<()> {
        let endpoint = "create-knowledge-base";
        let body = CreateRagRequest {
            file_id_list: vec![file_id.to_string()],
            thread_id: thread_id_for(folder_path).to_string(),
            upload_type: RAG_UPLOAD_TYPE.to_string(),
            user_id: self.user_id.clone(),
        };

        let response = self.post_json(endpoint, CREATE_RAG_PATH, &body).await?;
        expect_status(endpoint, &response, "Failed to create RAG")
    }

    pub async fn delete_file(&self, file_id: &str, folder_path: &str) -> DeskResult<()> {
        let endpoint = "delete-file";
        let body = DeleteFileRequest {
            file_id: file_id.to_string(),
            thread_id: thread_id_for(folder_path).to_string(),
        };

        let response = self.post_json(endpoint, DELETE_FILE_PATH, &body).await?;
        expect_status(endpoint, &response, "Failed to delete file")
    }

    /// Open a streamed chat answer. The body is raw answer text.
    pub async fn chat_stream(&self, request: &ChatRequest) -> DeskResult<ByteStream> {
        let endpoint = "chat";
        let body = encode(endpoint, request)?;

        tracing::debug!(
            "Opening chat stream: {} scoped files, query_id={}",
            request.file_id_list.len(),
            request.query_id
        );

        self.http
            .post_stream(&self.url(CHAT_PATH), &body, &json_headers())
            .await
            .map_err(|e| DeskError::http(endpoint, e))
    }

    /// Non-streamed chat answer.
    pub async fn chat(&self, request: &ChatRequest) -> DeskResult<ChatResponse> {
        let endpoint = "chat";
        let response = self.post_json(endpoint, CHAT_PATH, request).await?;

        if !response.is_success() {
            return Err(DeskError::rejected(
                endpoint,
                response.status.to_string(),
                "Network response was not ok",
            ));
        }

        decode(endpoint, &response)
    }

    async fn post_json<T: Serialize>(
        &self,
        endpoint: &'static str,
        path: &str,
        body: &T,
    ) -> DeskResult<Response> {
        let body = encode(endpoint, body)?;
        self.http
            .post(&self.url(path), &body, &json_headers())
            .await
            .map_err(|e| DeskError::http(endpoint, e))
    }
}

fn encode<T: Serialize>(endpoint: &'static str, body: &T) -> DeskResult<String> {
    serde_json::to_string(body).map_err(|e| DeskError::decode(endpoint, e))
}

/// Decode a JSON envelope. An undecodable non-2xx body is reported as a
/// rejection carrying the HTTP status.
fn decode<T: DeserializeOwned>(endpoint: &'static str, response: &Response) -> DeskResult<T> {
    match response.json::<T>() {
        Ok(value) => Ok(value),
        Err(_) if !response.is_success() => Err(DeskError::rejected(
            endpoint,
            response.status.to_string(),
            response
                .text()
                .unwrap_or_default()
                .chars()
                .take(200)
                .collect::<String>(),
        )),
        Err(e) => Err(DeskError::decode(endpoint, e)),
    }
}

fn expect_status(endpoint: &'static str, response: &Response, fallback: &str) -> DeskResult<()> {
    let envelope: StatusResponse = decode(endpoint, response)?;
    if envelope.status.is_success() {
        Ok(())
    } else {
        Err(DeskError::rejected(
            endpoint,
            envelope.status.to_string(),
            envelope.message.unwrap_or_else(|| fallback.to_string()),
        ))
    }
}
