//! Folder hierarchy derived from flat file records.
//!
//! The tree is rebuilt from scratch by [`build_folder_tree`] whenever the file
//! list changes; nothing mutates it incrementally.

use std::collections::BTreeMap;

use super::file::FileRecord;
use super::selection::{OpenFolders, SelectedFileIds};

/// Name of the synthetic root node.
pub const ROOT_NAME: &str = "root";

/// A node in the derived folder hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderNode {
    /// Last path segment (`"root"` for the root)
    pub name: String,
    /// Full slash-joined path; `None` for the root
    pub path: Option<String>,
    /// Child folders keyed by segment name
    pub children: BTreeMap<String, FolderNode>,
    /// Files whose `folder_name` resolves exactly to this node
    pub files: Vec<FileRecord>,
}

impl FolderNode {
    pub fn root() -> Self {
        Self {
            name: ROOT_NAME.to_string(),
            path: None,
            children: BTreeMap::new(),
            files: Vec::new(),
        }
    }

    fn child(name: &str, path: String) -> Self {
        Self {
            name: name.to_string(),
            path: Some(path),
            children: BTreeMap::new(),
            files: Vec::new(),
        }
    }

    pub fn is_root(&self) -> bool {
        self.path.is_none()
    }

    /// Follow `path` segment by segment from this node.
    ///
    /// An empty path resolves to `self`.
    pub fn find(&self, path: &str) -> Option<&FolderNode> {
        path_segments(path).try_fold(self, |node, segment| node.children.get(segment))
    }

    /// Every folder path below this node, depth first, in name order.
    pub fn folder_paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        self.collect_paths(&mut paths);
        paths
    }

    fn collect_paths(&self, out: &mut Vec<String>) {
        for child in self.children.values() {
            if let Some(path) = &child.path {
                out.push(path.clone());
            }
            child.collect_paths(out);
        }
    }

    /// Number of files in this node and all descendants.
    pub fn file_count(&self) -> usize {
        self.files.len()
            + self
                .children
                .values()
                .map(FolderNode::file_count)
                .sum::<usize>()
    }
}

impl Default for FolderNode {
    fn default() -> Self {
        Self::root()
    }
}

/// Non-empty segments of a slash-delimited path (`"a//b"` → `a`, `b`).
pub fn path_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

/// Cumulative prefixes of a path: `"a/b/c"` → `a`, `a/b`, `a/b/c`.
pub fn path_prefixes(path: &str) -> Vec<String> {
    let mut prefixes = Vec::new();
    let mut current = String::new();
    for segment in path_segments(path) {
        if !current.is_empty() {
            current.push('/');
        }
        current.push_str(segment);
        prefixes.push(current.clone());
    }
    prefixes
}

/// Build the folder hierarchy for `files`.
///
/// Every distinct `folder_name` maps to exactly one node; each file lands in
/// the node matching its folder exactly, or in the root when the folder name
/// has no segments.
pub fn build_folder_tree(files: &[FileRecord]) -> FolderNode {
    files.iter().fold(FolderNode::root(), |mut root, file| {
        let mut current = &mut root;
        let mut cumulative = String::new();

        for segment in path_segments(&file.folder_name) {
            if !cumulative.is_empty() {
                cumulative.push('/');
            }
            cumulative.push_str(segment);

            current = current
                .children
                .entry(segment.to_string())
                .or_insert_with(|| FolderNode::child(segment, cumulative.clone()));
        }

        current.files.push(file.clone());
        root
    })
}

/// One visible line of a folder tree view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeRow {
    Folder {
        depth: usize,
        name: String,
        path: String,
        open: bool,
    },
    File {
        depth: usize,
        file_id: String,
        display_name: String,
        rag_status: bool,
        selected: bool,
    },
}

impl TreeRow {
    pub fn depth(&self) -> usize {
        match self {
            TreeRow::Folder { depth, .. } | TreeRow::File { depth, .. } => *depth,
        }
    }
}

/// Flatten `tree` into the rows a view would show.
///
/// Child folders are listed in name order; a folder's subfolders come before
/// its files, and both only appear while the folder is open. Root-level files
/// are always listed, at depth 0, after the top-level folders.
pub fn visible_rows(
    tree: &FolderNode,
    open: &OpenFolders,
    selected: &SelectedFileIds,
) -> Vec<TreeRow> {
    let mut rows = Vec::new();
    push_rows(tree, 0, open, selected, &mut rows);
    push_files(tree, 0, selected, &mut rows);
    rows
}

fn push_rows(
    node: &FolderNode,
    depth: usize,
    open: &OpenFolders,
    selected: &SelectedFileIds,
    rows: &mut Vec<TreeRow>,
) {
    for child in node.children.values() {
        let path = child.path.clone().unwrap_or_default();
        let is_open = open.is_open(&path);
        rows.push(TreeRow::Folder {
            depth,
            name: child.name.clone(),
            path,
            open: is_open,
        });

        if is_open {
            push_rows(child, depth + 1, open, selected, rows);
            push_files(child, depth + 1, selected, rows);
        }
    }
}

fn push_files(node: &FolderNode, depth: usize, selected: &SelectedFileIds, rows: &mut Vec<TreeRow>) {
    for file in &node.files {
        rows.push(TreeRow::File {
            depth,
            file_id: file.file_id.clone(),
            display_name: file.display_name().to_string(),
            rag_status: file.rag_status,
            selected: selected.contains(&file.file_id),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(id: &str, folder: &str) -> FileRecord {
        FileRecord::new(id, format!("{}.pdf", id), folder)
    }

    #[test]
    fn test_nested_path_attaches_only_at_leaf() {
        let tree = build_folder_tree(&[file("f1", "a/b/c")]);

        let a = &tree.children["a"];
        let b = &a.children["b"];
        let c = &b.children["c"];

        assert!(a.files.is_empty());
        assert!(b.files.is_empty());
        assert_eq!(c.files.len(), 1);
        assert_eq!(c.files[0].file_id, "f1");
        assert_eq!(a.path.as_deref(), Some("a"));
        assert_eq!(b.path.as_deref(), Some("a/b"));
        assert_eq!(c.path.as_deref(), Some("a/b/c"));
        assert_eq!(c.name, "c");
    }

    #[test]
    fn test_empty_folder_name_goes_to_root() {
        let tree = build_folder_tree(&[file("f1", "")]);
        assert!(tree.children.is_empty());
        assert_eq!(tree.files.len(), 1);
        assert!(tree.is_root());
        assert_eq!(tree.name, ROOT_NAME);
    }

    #[test]
    fn test_empty_segments_are_dropped() {
        let tree = build_folder_tree(&[file("f1", "a//b"), file("f2", "/a/b/")]);
        let b = tree.find("a/b").unwrap();
        assert_eq!(b.path.as_deref(), Some("a/b"));
        assert_eq!(b.files.len(), 2);
        assert_eq!(tree.children.len(), 1);
        assert_eq!(tree.children["a"].children.len(), 1);
    }

    #[test]
    fn test_same_folder_keeps_duplicates() {
        let duplicate = file("f1", "docs");
        let tree = build_folder_tree(&[duplicate.clone(), duplicate]);
        assert_eq!(tree.children["docs"].files.len(), 2);
    }

    #[test]
    fn test_rebuild_is_idempotent() {
        let files = vec![
            file("f1", "a/b"),
            file("f2", "a"),
            file("f3", ""),
            file("f4", "z/y/x"),
            file("f5", "a/b"),
        ];
        assert_eq!(build_folder_tree(&files), build_folder_tree(&files));
    }

    #[test]
    fn test_find_and_paths() {
        let tree = build_folder_tree(&[file("f1", "a/b"), file("f2", "c")]);
        assert!(tree.find("a/b").is_some());
        assert!(tree.find("a/x").is_none());
        assert_eq!(tree.find("").unwrap(), &tree);
        assert_eq!(tree.folder_paths(), vec!["a", "a/b", "c"]);
        assert_eq!(tree.file_count(), 2);
    }

    #[test]
    fn test_path_prefixes() {
        assert_eq!(path_prefixes("a/b/c"), vec!["a", "a/b", "a/b/c"]);
        assert_eq!(path_prefixes("a//b"), vec!["a", "a/b"]);
        assert!(path_prefixes("").is_empty());
    }

    #[test]
    fn test_visible_rows_respects_open_state() {
        let tree = build_folder_tree(&[
            FileRecord::new("f1", "scans/report.pdf", "a/b"),
            file("f2", "a"),
            file("f3", ""),
        ]);
        let mut open = OpenFolders::default();
        let mut selected = SelectedFileIds::default();

        let rows = visible_rows(&tree, &open, &selected);
        assert_eq!(rows.len(), 2);
        assert!(matches!(&rows[0], TreeRow::Folder { name, open: false, .. } if name == "a"));
        assert!(matches!(&rows[1], TreeRow::File { file_id, depth: 0, .. } if file_id == "f3"));

        open.toggle("a");
        open.toggle("a/b");
        selected.toggle("f1");
        let rows = visible_rows(&tree, &open, &selected);

        let depths: Vec<usize> = rows.iter().map(TreeRow::depth).collect();
        assert_eq!(depths, vec![0, 1, 2, 1, 0]);
        assert_eq!(
            rows[2],
            TreeRow::File {
                depth: 2,
                file_id: "f1".to_string(),
                display_name: "report.pdf".to_string(),
                rag_status: false,
                selected: true,
            }
        );
    }
}
