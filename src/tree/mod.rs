//! Directory tree construction
//!
//! [`TreeWalker`] recursively walks a filesystem subtree and produces an
//! immutable [`TreeNode`] tree. Visibility, exclusion, and depth policy come
//! from [`WalkerConfig`]; each node is decorated with its icon at build time.

mod config;
mod node;
mod walker;

pub use config::WalkerConfig;
pub use node::TreeNode;
pub use walker::TreeWalker;
