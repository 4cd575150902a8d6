//! Chat-side file selection: the file list, its folder tree, expansion
//! flags and the ids that scope the next query.

use crate::api::DocumentApi;
use crate::error::{DeskError, DeskResult};
use crate::models::{
    build_folder_tree, visible_rows, FileRecord, FolderNode, OpenFolders, SelectedFileIds, TreeRow,
};
use crate::traits::{Notification, Notifier};

const FETCH_FAILED_NOTICE: &str = "Failed to fetch files";

#[derive(Debug, Clone, Default)]
pub struct SelectionModel {
    files: Vec<FileRecord>,
    tree: FolderNode,
    open_folders: OpenFolders,
    selected: SelectedFileIds,
}

impl SelectionModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reload the file list from `get-final-files`.
    ///
    /// A rejected envelope empties the list; a transport or decode failure
    /// keeps the previous one. Both raise an error notification.
    pub async fn refresh(
        &mut self,
        api: &DocumentApi,
        notifier: &dyn Notifier,
    ) -> DeskResult<usize> {
        match api.list_final_files().await {
            Ok(files) => {
                let count = files.len();
                self.apply_files(files);
                tracing::debug!("Loaded {} files for selection", count);
                Ok(count)
            }
            Err(error) => {
                tracing::warn!(code = error.error_code(), "File listing failed: {}", error);
                if matches!(error, DeskError::Rejected { .. }) {
                    self.apply_files(Vec::new());
                }
                notifier.notify(Notification::error(FETCH_FAILED_NOTICE));
                Err(error)
            }
        }
    }

    /// Replace the file list, rebuild the tree and register folder paths.
    ///
    /// Selection and existing expansion flags are left untouched.
    pub fn apply_files(&mut self, files: Vec<FileRecord>) {
        self.open_folders.register_paths(&files);
        self.tree = build_folder_tree(&files);
        self.files = files;
    }

    /// Returns the folder's new open state.
    pub fn toggle_folder(&mut self, path: &str) -> bool {
        self.open_folders.toggle(path)
    }

    /// Returns whether the file is now selected.
    pub fn toggle_file_selection(&mut self, file_id: &str) -> bool {
        self.selected.toggle(file_id)
    }

    pub fn files(&self) -> &[FileRecord] {
        &self.files
    }

    pub fn tree(&self) -> &FolderNode {
        &self.tree
    }

    pub fn open_folders(&self) -> &OpenFolders {
        &self.open_folders
    }

    pub fn selected(&self) -> &SelectedFileIds {
        &self.selected
    }

    /// Copy of the selected ids for an outgoing request.
    pub fn selection_snapshot(&self) -> Vec<String> {
        self.selected.snapshot()
    }

    pub fn rows(&self) -> Vec<TreeRow> {
        visible_rows(&self.tree, &self.open_folders, &self.selected)
    }
}
