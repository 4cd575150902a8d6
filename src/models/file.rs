//! Document records as returned by the file listing endpoints.

use serde::{Deserialize, Serialize};

/// One uploaded document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Opaque unique identifier
    pub file_id: String,
    /// Display name; may itself contain `/`
    pub file_name: String,
    /// Slash-delimited logical folder path, e.g. `"a/b/c"`
    #[serde(default)]
    pub folder_name: String,
    /// True once the file has been indexed for retrieval
    #[serde(default)]
    pub rag_status: bool,
    /// Storage location, present on the combined listing and after upload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s3_file_url: Option<String>,
}

impl FileRecord {
    pub fn new(
        file_id: impl Into<String>,
        file_name: impl Into<String>,
        folder_name: impl Into<String>,
    ) -> Self {
        Self {
            file_id: file_id.into(),
            file_name: file_name.into(),
            folder_name: folder_name.into(),
            rag_status: false,
            s3_file_url: None,
        }
    }

    pub fn with_rag_status(mut self, indexed: bool) -> Self {
        self.rag_status = indexed;
        self
    }

    /// Last `/` segment of the file name.
    pub fn display_name(&self) -> &str {
        self.file_name.rsplit('/').next().unwrap_or(&self.file_name)
    }

    /// First segment of the folder path, used as the backend thread id.
    pub fn thread_id(&self) -> &str {
        thread_id_for(&self.folder_name)
    }
}

/// First `/` segment of a folder path.
pub fn thread_id_for(folder_path: &str) -> &str {
    folder_path.split('/').next().unwrap_or(folder_path)
}
