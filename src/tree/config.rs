//! Configuration for tree walking

use regex::Regex;

/// Configuration for tree walking behavior.
///
/// A config is captured once per build; the walker never re-reads it
/// mid-traversal.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Maximum depth to descend, with the root at depth 0.
    /// `None` means unbounded; `Some(0)` prunes even the root.
    pub max_depth: Option<usize>,
    /// Include entries whose name starts with `.`
    pub show_hidden: bool,
    /// Entries whose base name matches any pattern are pruned,
    /// subtree included. Tested in list order.
    pub exclude_patterns: Vec<Regex>,
}

impl WalkerConfig {
    /// Compile raw pattern strings into exclusion regexes.
    ///
    /// Fails on the first invalid pattern, before any traversal happens.
    pub fn compile_patterns(patterns: &[String]) -> Result<Vec<Regex>, regex::Error> {
        patterns.iter().map(|p| Regex::new(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WalkerConfig::default();
        assert_eq!(config.max_depth, None);
        assert!(!config.show_hidden);
        assert!(config.exclude_patterns.is_empty());
    }

    #[test]
    fn test_compile_patterns() {
        let patterns = vec!["^node_modules$".to_string(), r"\.log$".to_string()];
        let compiled = WalkerConfig::compile_patterns(&patterns).unwrap();
        assert_eq!(compiled.len(), 2);
        assert!(compiled[0].is_match("node_modules"));
        assert!(!compiled[0].is_match("node_modules_2"));
        assert!(compiled[1].is_match("debug.log"));
    }

    #[test]
    fn test_compile_patterns_rejects_invalid() {
        let patterns = vec!["[unclosed".to_string()];
        assert!(WalkerConfig::compile_patterns(&patterns).is_err());
    }
}
