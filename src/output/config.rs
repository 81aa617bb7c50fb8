//! Output configuration types

/// Configuration for tree rendering.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Prefix each entry with its file type glyph
    pub show_icons: bool,
    /// Append the resolved path after each entry name
    pub show_paths: bool,
    pub use_color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            show_icons: true,
            show_paths: false,
            use_color: true,
        }
    }
}
