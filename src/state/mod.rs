//! State owners for the chat and document views.
//!
//! - [`SelectionModel`] - chat-side file list, tree, expansion and selection
//! - [`DocumentManager`] - folders, uploads, indexing and deletion
//! - [`LoadingFlags`] - copy-on-write per-key progress flags

pub mod documents;
pub mod loading;
pub mod selection;

pub use documents::{DocumentManager, FilesByFolder, FolderStructure, PendingUpload};
pub use loading::LoadingFlags;
pub use selection::SelectionModel;
