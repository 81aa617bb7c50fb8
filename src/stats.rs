//! File and directory counts for a built tree

use serde::Serialize;

use crate::tree::TreeNode;

/// Aggregate counts over a built tree.
///
/// Every node counts exactly once: directories count themselves even when
/// empty, so `files + directories` equals the total node count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TreeStats {
    pub files: usize,
    pub directories: usize,
}

impl TreeStats {
    /// Count files and directories in `tree`. `None` yields zero counts.
    pub fn collect(tree: Option<&TreeNode>) -> Self {
        let mut stats = Self::default();
        if let Some(node) = tree {
            stats.add(node);
        }
        stats
    }

    fn add(&mut self, node: &TreeNode) {
        match node {
            TreeNode::File { .. } => self.files += 1,
            TreeNode::Directory { children, .. } => {
                self.directories += 1;
                for child in children {
                    self.add(child);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn file(name: &str) -> TreeNode {
        TreeNode::File {
            name: name.to_string(),
            icon: "📄",
            path: PathBuf::from(name),
        }
    }

    fn dir(name: &str, children: Vec<TreeNode>) -> TreeNode {
        TreeNode::Directory {
            name: name.to_string(),
            icon: "📁",
            path: PathBuf::from(name),
            children,
        }
    }

    #[test]
    fn test_none_is_zero() {
        assert_eq!(TreeStats::collect(None), TreeStats::default());
    }

    #[test]
    fn test_single_file() {
        let stats = TreeStats::collect(Some(&file("a.txt")));
        assert_eq!(stats, TreeStats { files: 1, directories: 0 });
    }

    #[test]
    fn test_empty_directory_counts_itself() {
        let stats = TreeStats::collect(Some(&dir("empty", Vec::new())));
        assert_eq!(stats, TreeStats { files: 0, directories: 1 });
    }

    #[test]
    fn test_nested_counts() {
        let tree = dir(
            "root",
            vec![
                dir("src", vec![file("main.rs"), file("lib.rs")]),
                dir("empty", Vec::new()),
                file("Cargo.toml"),
            ],
        );
        let stats = TreeStats::collect(Some(&tree));
        assert_eq!(stats, TreeStats { files: 3, directories: 3 });
    }

    #[test]
    fn test_counts_sum_to_node_count() {
        fn node_count(node: &TreeNode) -> usize {
            1 + node
                .children()
                .map(|cs| cs.iter().map(node_count).sum())
                .unwrap_or(0)
        }

        let tree = dir(
            "root",
            vec![dir("a", vec![file("1"), dir("b", vec![file("2")])]), file("3")],
        );
        let stats = TreeStats::collect(Some(&tree));
        assert_eq!(stats.files + stats.directories, node_count(&tree));
    }
}
