//! File type classification and icon lookup
//!
//! Maps a base filename (and whether it names a directory) to a semantic
//! [`FileKind`] and its display glyph. Classification is a pure function of
//! the name: well-known filenames win over extensions, and anything else
//! falls back to [`FileKind::Other`].

use std::path::Path;

/// Semantic category of a tree entry, used to pick its display glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Directory,
    JavaScript,
    TypeScript,
    Json,
    Markdown,
    Text,
    Image,
    Video,
    Audio,
    Pdf,
    Archive,
    Executable,
    Config,
    Css,
    Html,
    Database,
    Lock,
    Git,
    Other,
}

impl FileKind {
    /// The display glyph for this kind.
    pub fn glyph(self) -> &'static str {
        match self {
            FileKind::Directory => "📁",
            FileKind::JavaScript => "📜",
            FileKind::TypeScript => "📘",
            FileKind::Json => "📋",
            FileKind::Markdown => "📝",
            FileKind::Text => "📄",
            FileKind::Image => "🖼️",
            FileKind::Video => "🎬",
            FileKind::Audio => "🎵",
            FileKind::Pdf => "📕",
            FileKind::Archive => "🗜️",
            FileKind::Executable | FileKind::Config => "⚙️",
            FileKind::Css => "🎨",
            FileKind::Html => "🌐",
            FileKind::Database => "🗄️",
            FileKind::Lock => "🔒",
            FileKind::Git => "📦",
            FileKind::Other => "📄",
        }
    }
}

/// Classify a tree entry by its base name.
///
/// Directories are always [`FileKind::Directory`] regardless of name. For
/// files, an exact filename match (case-sensitive) takes precedence over the
/// extension lookup, so `package-lock.json` classifies as a lock file, not
/// JSON.
pub fn classify(name: &str, is_directory: bool) -> FileKind {
    if is_directory {
        return FileKind::Directory;
    }

    if let Some(kind) = by_filename(name) {
        return kind;
    }

    // A bare dotfile like ".lock" has no extension here, same as basename
    // semantics on every platform we care about.
    let ext = Path::new(name)
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase());

    ext.and_then(|e| by_extension(&e)).unwrap_or(FileKind::Other)
}

/// Resolve the display glyph for a tree entry by its base name.
pub fn icon_for(name: &str, is_directory: bool) -> &'static str {
    classify(name, is_directory).glyph()
}

/// Well-known filenames that override extension-based classification.
fn by_filename(name: &str) -> Option<FileKind> {
    let kind = match name {
        ".gitignore" | ".gitattributes" | ".gitmodules" => FileKind::Git,
        "package.json" => FileKind::Json,
        "package-lock.json" | "yarn.lock" | "pnpm-lock.yaml" | "Cargo.lock" => FileKind::Lock,
        ".env" | ".env.local" | ".env.development" | ".env.production" => FileKind::Config,
        "Dockerfile" | "docker-compose.yml" => FileKind::Config,
        "Cargo.toml" => FileKind::Config,
        "README.md" => FileKind::Markdown,
        _ => return None,
    };
    Some(kind)
}

/// Extension lookup, keyed by the lower-cased extension without its dot.
fn by_extension(ext: &str) -> Option<FileKind> {
    let kind = match ext {
        "js" | "jsx" | "mjs" | "cjs" => FileKind::JavaScript,
        "ts" | "tsx" => FileKind::TypeScript,
        "json" => FileKind::Json,
        "yaml" | "yml" | "xml" | "toml" | "ini" => FileKind::Config,
        "md" | "mdx" => FileKind::Markdown,
        "txt" => FileKind::Text,
        "pdf" => FileKind::Pdf,
        "html" | "htm" => FileKind::Html,
        "css" | "scss" | "sass" | "less" => FileKind::Css,
        "png" | "jpg" | "jpeg" | "gif" | "svg" | "webp" | "ico" | "bmp" => FileKind::Image,
        "mp4" | "avi" | "mov" | "mkv" | "webm" => FileKind::Video,
        "mp3" | "wav" | "ogg" | "m4a" | "flac" => FileKind::Audio,
        "zip" | "tar" | "gz" | "rar" | "7z" => FileKind::Archive,
        "db" | "sqlite" | "sql" => FileKind::Database,
        "exe" | "sh" | "bat" | "cmd" => FileKind::Executable,
        "lock" => FileKind::Lock,
        _ => return None,
    };
    Some(kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_ignores_name() {
        assert_eq!(classify("package-lock.json", true), FileKind::Directory);
        assert_eq!(classify("anything", true), FileKind::Directory);
        assert_eq!(icon_for("src", true), "📁");
    }

    #[test]
    fn test_filename_beats_extension() {
        // package-lock.json ends in .json but is a lock file
        assert_eq!(classify("package-lock.json", false), FileKind::Lock);
        assert_ne!(
            icon_for("package-lock.json", false),
            icon_for("data.json", false)
        );
        assert_eq!(classify("README.md", false), FileKind::Markdown);
        assert_eq!(classify("yarn.lock", false), FileKind::Lock);
    }

    #[test]
    fn test_extension_lookup() {
        assert_eq!(classify("app.js", false), FileKind::JavaScript);
        assert_eq!(classify("app.tsx", false), FileKind::TypeScript);
        assert_eq!(classify("notes.md", false), FileKind::Markdown);
        assert_eq!(classify("photo.jpeg", false), FileKind::Image);
        assert_eq!(classify("backup.tar", false), FileKind::Archive);
        assert_eq!(classify("deps.lock", false), FileKind::Lock);
    }

    #[test]
    fn test_extension_is_case_insensitive() {
        assert_eq!(classify("PHOTO.PNG", false), FileKind::Image);
        assert_eq!(classify("Readme.MD", false), FileKind::Markdown);
    }

    #[test]
    fn test_filename_match_is_case_sensitive() {
        // "readme.md" is not the well-known "README.md", but still
        // classifies as markdown via its extension
        assert_eq!(classify("readme.md", false), FileKind::Markdown);
        assert_eq!(classify("dockerfile", false), FileKind::Other);
    }

    #[test]
    fn test_bare_dotfile_has_no_extension() {
        // ".lock" is a hidden file with no extension, not a .lock file
        assert_eq!(classify(".lock", false), FileKind::Other);
        assert_eq!(classify(".bashrc", false), FileKind::Other);
    }

    #[test]
    fn test_unknown_falls_back_to_default() {
        assert_eq!(classify("data.xyz", false), FileKind::Other);
        assert_eq!(classify("Makefile", false), FileKind::Other);
        assert_eq!(icon_for("data.xyz", false), "📄");
    }

    #[test]
    fn test_no_dot_means_no_extension() {
        assert_eq!(classify("LICENSE", false), FileKind::Other);
    }
}
