//! Expansion and selection state for the folder tree.

use std::collections::BTreeMap;

use super::file::FileRecord;
use super::folder::path_prefixes;

/// Folder path → expanded flag. Unknown paths read as collapsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpenFolders {
    entries: BTreeMap<String, bool>,
}

impl OpenFolders {
    pub fn is_open(&self, path: &str) -> bool {
        self.entries.get(path).copied().unwrap_or(false)
    }

    /// Flip the flag for `path`; an unseen path opens.
    pub fn toggle(&mut self, path: &str) -> bool {
        let entry = self.entries.entry(path.to_string()).or_insert(false);
        *entry = !*entry;
        *entry
    }

    /// Register every folder prefix of `files` as collapsed, keeping any
    /// flag already recorded.
    pub fn register_paths(&mut self, files: &[FileRecord]) {
        for file in files {
            for path in path_prefixes(&file.folder_name) {
                self.entries.entry(path).or_insert(false);
            }
        }
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.entries.iter().map(|(path, open)| (path.as_str(), *open))
    }
}

/// File ids that scope the next chat query, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectedFileIds {
    ids: Vec<String>,
}

impl SelectedFileIds {
    pub fn new(ids: Vec<String>) -> Self {
        let mut selected = Self::default();
        for id in ids {
            if !selected.contains(&id) {
                selected.ids.push(id);
            }
        }
        selected
    }

    pub fn contains(&self, file_id: &str) -> bool {
        self.ids.iter().any(|id| id == file_id)
    }

    /// Remove `file_id` if selected, otherwise append it.
    ///
    /// Returns true when the id is selected afterwards.
    pub fn toggle(&mut self, file_id: &str) -> bool {
        if let Some(index) = self.ids.iter().position(|id| id == file_id) {
            self.ids.remove(index);
            false
        } else {
            self.ids.push(file_id.to_string());
            true
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn as_slice(&self) -> &[String] {
        &self.ids
    }

    /// Owned copy for attaching to an outgoing request.
    pub fn snapshot(&self) -> Vec<String> {
        self.ids.clone()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
