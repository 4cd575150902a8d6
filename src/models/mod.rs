//! Data types shared by the selection model, the document manager and the
//! chat controller.

pub mod file;
pub mod folder;
pub mod message;
pub mod request;
pub mod selection;

pub use file::{thread_id_for, FileRecord};
pub use folder::{build_folder_tree, path_prefixes, path_segments, visible_rows, FolderNode, TreeRow};
pub use message::{Message, MessageId, Sender};
pub use request::{
    ApiStatus, ChatRequest, ChatResponse, CreateRagRequest, DeleteFileRequest,
    FilesAndFoldersResponse, FinalFilesResponse, PresignedUrl, PresignedUrlRequest,
    PresignedUrlResponse, StatusResponse, UploadFileSpec,
};
pub use selection::{OpenFolders, SelectedFileIds};
