//! Folder/file tree derived from slash-delimited solution paths.
//!
//! The tree has an implicit unnamed root; `build_tree` returns its children.
//! Every level stays sorted after each insertion, folders first and names in
//! case-sensitive lexical order, so the same records produce the same tree
//! whatever order they arrive in.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::InvalidPathError;
use crate::model::solution::SolutionRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TreeNode {
    File {
        name: String,
        /// Equal to the originating record's `filename`.
        path: String,
        rating: Option<u8>,
    },
    Folder {
        name: String,
        /// Slash-joined segments leading to this folder.
        path: String,
        children: Vec<TreeNode>,
    },
}

impl TreeNode {
    pub fn name(&self) -> &str {
        match self {
            TreeNode::File { name, .. } | TreeNode::Folder { name, .. } => name,
        }
    }

    pub fn path(&self) -> &str {
        match self {
            TreeNode::File { path, .. } | TreeNode::Folder { path, .. } => path,
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, TreeNode::Folder { .. })
    }

    /// Identity among siblings. A file and a folder may share a path, so the
    /// variant is part of the key.
    pub fn key(&self) -> String {
        let kind = if self.is_folder() { "d" } else { "f" };
        format!("{}:{}", kind, self.path())
    }

    pub fn children(&self) -> &[TreeNode] {
        match self {
            TreeNode::Folder { children, .. } => children,
            TreeNode::File { .. } => &[],
        }
    }
}

/// Folders first, then case-sensitive lexical order of the name.
fn sibling_order(a: &TreeNode, b: &TreeNode) -> Ordering {
    b.is_folder()
        .cmp(&a.is_folder())
        .then_with(|| a.name().cmp(b.name()))
}

/// Builds the tree for `records`.
///
/// A later record with the same filename replaces the earlier file node. Fails
/// on the first filename that is empty or has an empty segment.
pub fn build_tree(records: &[SolutionRecord]) -> Result<Vec<TreeNode>, InvalidPathError> {
    let mut root = Vec::new();
    for record in records {
        insert(&mut root, record)?;
    }
    Ok(root)
}

fn insert(root: &mut Vec<TreeNode>, record: &SolutionRecord) -> Result<(), InvalidPathError> {
    let filename = record.filename.as_str();
    if filename.is_empty() {
        return Err(InvalidPathError::new(filename, "empty filename"));
    }
    let segments: Vec<&str> = filename.split('/').collect();
    if segments.iter().any(|s| s.is_empty()) {
        return Err(InvalidPathError::new(filename, "empty path segment"));
    }

    let (file_name, folders) = match segments.split_last() {
        Some(parts) => parts,
        None => return Err(InvalidPathError::new(filename, "empty filename")),
    };

    let mut level = root;
    for (depth, folder) in folders.iter().enumerate() {
        let index = match level.iter().position(|n| n.is_folder() && n.name() == *folder) {
            Some(index) => index,
            None => insert_sorted(
                level,
                TreeNode::Folder {
                    name: folder.to_string(),
                    path: segments[..=depth].join("/"),
                    children: Vec::new(),
                },
            ),
        };
        level = match &mut level[index] {
            TreeNode::Folder { children, .. } => children,
            TreeNode::File { .. } => unreachable!("index points at a folder"),
        };
    }

    let file = TreeNode::File {
        name: file_name.to_string(),
        path: filename.to_string(),
        rating: record.rating,
    };
    match level
        .iter_mut()
        .find(|n| !n.is_folder() && n.name() == *file_name)
    {
        Some(existing) => *existing = file,
        None => {
            insert_sorted(level, file);
        }
    }
    Ok(())
}

/// Inserts `node` at its sorted position and returns that position.
fn insert_sorted(level: &mut Vec<TreeNode>, node: TreeNode) -> usize {
    let index = level.partition_point(|n| sibling_order(n, &node) == Ordering::Less);
    level.insert(index, node);
    index
}

/// Every folder path in `nodes`, at any depth.
pub fn folder_paths(nodes: &[TreeNode]) -> BTreeSet<String> {
    let mut paths = BTreeSet::new();
    collect_folders(nodes, &mut paths);
    paths
}

fn collect_folders(nodes: &[TreeNode], paths: &mut BTreeSet<String>) {
    for node in nodes {
        if let TreeNode::Folder { path, children, .. } = node {
            paths.insert(path.clone());
            collect_folders(children, paths);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(filename: &str, rating: Option<u8>) -> SolutionRecord {
        SolutionRecord::new(filename, rating)
    }

    fn sample() -> Vec<SolutionRecord> {
        vec![
            record("arrays/two-sum", Some(3)),
            record("arrays/three-sum", None),
            record("dp/climb-stairs", Some(5)),
        ]
    }

    fn names(nodes: &[TreeNode]) -> Vec<&str> {
        nodes.iter().map(TreeNode::name).collect()
    }

    #[test]
    fn groups_files_under_sorted_folders() {
        let tree = build_tree(&sample()).unwrap();

        assert_eq!(names(&tree), vec!["arrays", "dp"]);
        assert_eq!(names(tree[0].children()), vec!["three-sum", "two-sum"]);
        assert_eq!(tree[0].path(), "arrays");
        assert_eq!(
            tree[0].children()[1],
            TreeNode::File {
                name: "two-sum".into(),
                path: "arrays/two-sum".into(),
                rating: Some(3),
            }
        );
        assert_eq!(tree[1].children()[0].path(), "dp/climb-stairs");
    }

    #[test]
    fn folders_sort_before_files_and_case_matters() {
        let records = vec![
            record("zeta.py", None),
            record("b/x.py", None),
            record("Alpha.py", None),
            record("a/y.py", None),
            record("B/z.py", None),
        ];
        let tree = build_tree(&records).unwrap();
        assert_eq!(names(&tree), vec!["B", "a", "b", "Alpha.py", "zeta.py"]);
    }

    #[test]
    fn output_does_not_depend_on_input_order() {
        let records = vec![
            record("graphs/bfs/islands", Some(2)),
            record("graphs/dfs", Some(4)),
            record("arrays/two-sum", Some(3)),
            record("graphs/bfs/rotting-oranges", None),
            record("top-level", Some(1)),
            record("arrays/sliding/max-window", None),
        ];
        let expected = build_tree(&records).unwrap();

        let mut reversed = records.clone();
        reversed.reverse();
        assert_eq!(build_tree(&reversed).unwrap(), expected);

        for shift in 1..records.len() {
            let mut rotated = records.clone();
            rotated.rotate_left(shift);
            assert_eq!(build_tree(&rotated).unwrap(), expected, "rotation {}", shift);
        }
    }

    #[test]
    fn nested_folder_paths_are_prefixes() {
        let tree = build_tree(&[record("a/b/c/file", None)]).unwrap();
        let b = &tree[0].children()[0];
        let c = &b.children()[0];
        assert_eq!(b.path(), "a/b");
        assert_eq!(c.path(), "a/b/c");
        assert_eq!(c.children()[0].path(), "a/b/c/file");
    }

    #[test]
    fn duplicate_filename_keeps_last_rating() {
        let tree = build_tree(&[record("a/x", Some(1)), record("a/x", Some(4))]).unwrap();
        assert_eq!(tree[0].children().len(), 1);
        assert!(matches!(
            tree[0].children()[0],
            TreeNode::File { rating: Some(4), .. }
        ));
    }

    #[test]
    fn file_and_folder_may_share_a_name() {
        let tree = build_tree(&[record("a", None), record("a/b", None)]).unwrap();
        assert_eq!(tree.len(), 2);
        assert!(tree[0].is_folder());
        assert!(!tree[1].is_folder());
        assert_eq!(tree[0].path(), tree[1].path());
        assert_ne!(tree[0].key(), tree[1].key());
        assert_eq!(tree[0].key(), "d:a");
        assert_eq!(tree[1].key(), "f:a");
    }

    #[test]
    fn empty_segments_are_rejected() {
        for bad in ["", "/a", "a/", "a//b"] {
            let err = build_tree(&[record(bad, None)]).unwrap_err();
            assert_eq!(err.path, bad);
        }
    }

    #[test]
    fn folder_paths_walks_every_level() {
        let records = vec![record("a/b/c/file", None), record("d/e", None), record("f", None)];
        let tree = build_tree(&records).unwrap();
        let paths: Vec<String> = folder_paths(&tree).into_iter().collect();
        assert_eq!(paths, vec!["a", "a/b", "a/b/c", "d"]);
    }

    #[test]
    fn serializes_with_type_tag() {
        let tree = build_tree(&[record("dp/climb", Some(5))]).unwrap();
        let json = serde_json::to_value(&tree).unwrap();
        assert_eq!(json[0]["type"], "folder");
        assert_eq!(json[0]["children"][0]["type"], "file");
        assert_eq!(json[0]["children"][0]["rating"], 5);
    }
}
