//! TreeWalker - builds the directory tree in memory

use std::cmp::Ordering;
use std::fs;
use std::path::Path;

use tracing::warn;

use crate::icons::icon_for;

use super::config::WalkerConfig;
use super::node::TreeNode;

/// Walks a filesystem subtree and builds a [`TreeNode`] tree, applying the
/// visibility, exclusion, and depth policy from its [`WalkerConfig`].
pub struct TreeWalker {
    config: WalkerConfig,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Build the tree rooted at `root`.
    ///
    /// Returns `None` when the root is unreadable, excluded by the config,
    /// or pruned by `max_depth == Some(0)`. An unreadable descendant only
    /// prunes that descendant (after a diagnostic on the tracing channel);
    /// its siblings are unaffected.
    pub fn walk(&self, root: &Path) -> Option<TreeNode> {
        self.walk_entry(root, 0)
    }

    fn walk_entry(&self, path: &Path, depth: usize) -> Option<TreeNode> {
        if self.config.max_depth.is_some_and(|max| depth >= max) {
            return None;
        }

        let metadata = match fs::metadata(path) {
            Ok(m) => m,
            Err(e) => {
                warn!("cannot read '{}': {}", path.display(), e);
                return None;
            }
        };

        let name = path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| ".".to_string());

        if !self.config.show_hidden && name.starts_with('.') {
            return None;
        }
        if self.config.exclude_patterns.iter().any(|p| p.is_match(&name)) {
            return None;
        }

        if !metadata.is_dir() {
            return Some(TreeNode::File {
                icon: icon_for(&name, false),
                name,
                path: path.to_path_buf(),
            });
        }

        let entries = match fs::read_dir(path) {
            Ok(e) => e,
            Err(e) => {
                warn!("cannot read directory '{}': {}", path.display(), e);
                return None;
            }
        };

        // read_dir order is filesystem-dependent; the sort below is what
        // callers may rely on
        let mut children = Vec::new();
        for entry in entries.filter_map(|e| e.ok()) {
            if let Some(child) = self.walk_entry(&entry.path(), depth + 1) {
                children.push(child);
            }
        }
        children.sort_by(dirs_first);

        Some(TreeNode::Directory {
            icon: icon_for(&name, true),
            name,
            path: path.to_path_buf(),
            children,
        })
    }
}

/// Directories before files, then by name within each group.
fn dirs_first(a: &TreeNode, b: &TreeNode) -> Ordering {
    match (a.is_dir(), b.is_dir()) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => a.name().cmp(b.name()),
    }
}
