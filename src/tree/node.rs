//! In-memory tree representation

use std::path::{Path, PathBuf};

use serde::Serialize;

/// One entry in a built directory tree.
///
/// Nodes are constructed once by [`TreeWalker`](super::TreeWalker) and never
/// mutated afterwards; formatters and stats collection only borrow them.
/// Within a directory, `children` holds all subdirectories first, then all
/// files, each group sorted by name.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TreeNode {
    File {
        name: String,
        icon: &'static str,
        path: PathBuf,
    },
    Directory {
        name: String,
        icon: &'static str,
        path: PathBuf,
        children: Vec<TreeNode>,
    },
}

impl TreeNode {
    pub fn name(&self) -> &str {
        match self {
            TreeNode::File { name, .. } | TreeNode::Directory { name, .. } => name,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            TreeNode::File { icon, .. } | TreeNode::Directory { icon, .. } => icon,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            TreeNode::File { path, .. } | TreeNode::Directory { path, .. } => path,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, TreeNode::Directory { .. })
    }

    /// Children of a directory node; `None` for files.
    pub fn children(&self) -> Option<&[TreeNode]> {
        match self {
            TreeNode::File { .. } => None,
            TreeNode::Directory { children, .. } => Some(children),
        }
    }
}
