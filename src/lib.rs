//! Dendro - Display a directory tree with file type icons
//!
//! The library builds an in-memory tree from a filesystem path
//! ([`TreeWalker`]), renders it with branch connectors ([`TreeFormatter`]),
//! and aggregates file/directory counts ([`TreeStats`]). Icon classification
//! ([`icons`]) is exposed for callers doing their own filtering or rendering.

pub mod icons;
pub mod output;
pub mod stats;
pub mod tree;

pub use icons::{FileKind, classify, icon_for};
pub use output::{OutputConfig, TreeFormatter, print_json};
pub use stats::TreeStats;
pub use tree::{TreeNode, TreeWalker, WalkerConfig};

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
