//! Request bodies and response envelopes for the document backend.

use serde::{Deserialize, Serialize};

use super::file::FileRecord;

/// Body of `POST /doc-eval/chat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub query: String,
    pub user_id: String,
    pub query_id: String,
    /// Files to scope retrieval to; empty means unscoped
    pub file_id_list: Vec<String>,
    pub stream: bool,
}

/// Non-streamed chat answer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub final_response: Option<String>,
}

/// `GET /doc-eval/get-final-files`.
#[derive(Debug, Clone, Deserialize)]
pub struct FinalFilesResponse {
    pub status_code: u16,
    #[serde(default)]
    pub data: Vec<FileRecord>,
    #[serde(default)]
    pub message: Option<String>,
}

/// `status` discriminator, which the backend sends as a word or a number.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ApiStatus {
    Code(u16),
    Text(String),
}

impl ApiStatus {
    /// `"success"` or `200`.
    pub fn is_success(&self) -> bool {
        match self {
            ApiStatus::Code(code) => *code == 200,
            ApiStatus::Text(text) => text == "success",
        }
    }
}

impl std::fmt::Display for ApiStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiStatus::Code(code) => write!(f, "{}", code),
            ApiStatus::Text(text) => write!(f, "{}", text),
        }
    }
}

/// Generic `{status, message}` envelope (RAG creation, deletion).
#[derive(Debug, Clone, Deserialize)]
pub struct StatusResponse {
    pub status: ApiStatus,
    #[serde(default)]
    pub message: Option<String>,
}

/// `GET /doc-eval/get-files-and-folders`.
#[derive(Debug, Clone, Deserialize)]
pub struct FilesAndFoldersResponse {
    pub status: ApiStatus,
    #[serde(default)]
    pub data: Vec<FileRecord>,
    #[serde(default)]
    pub message: Option<String>,
}

/// One file announced to the presigned-URL endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadFileSpec {
    #[serde(rename = "fileName")]
    pub file_name: String,
    #[serde(rename = "fileType")]
    pub file_type: String,
}

/// Body of `POST /doc-eval/get-presigned-urls`.
#[derive(Debug, Clone, Serialize)]
pub struct PresignedUrlRequest {
    pub user_id: String,
    pub files: Vec<UploadFileSpec>,
    pub folder_name: String,
    pub thread_id: String,
}

/// Upload target for one announced file, in request order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PresignedUrl {
    pub presigned_url: String,
    pub file_url: String,
    pub file_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PresignedUrlResponse {
    pub status_code: u16,
    #[serde(default)]
    pub urls: Vec<PresignedUrl>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of `POST /doc-eval/create-knowledge-base`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateRagRequest {
    pub file_id_list: Vec<String>,
    pub thread_id: String,
    pub upload_type: String,
    pub user_id: String,
}

/// Body of `POST /doc-eval/delete-file`.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteFileRequest {
    pub file_id: String,
    pub thread_id: String,
}
