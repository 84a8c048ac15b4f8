//! Source language detection and classification
//!
//! This module provides a centralized Language enum and the extension-to-language
//! mapping that decides which import scanner runs on a file.

use crate::paths::extension_of;

/// Languages with an import scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    JavaScript,
    TypeScript,
    Python,
    Css,
}

impl Language {
    /// Detect language from a file extension.
    ///
    /// Returns `None` if the extension has no import scanner.
    ///
    /// # Examples
    ///
    /// ```
    /// use pith::language::Language;
    ///
    /// assert_eq!(Language::from_extension("jsx"), Some(Language::JavaScript));
    /// assert_eq!(Language::from_extension("SCSS"), Some(Language::Css));
    /// assert_eq!(Language::from_extension("rs"), None);
    /// ```
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "js" | "jsx" => Some(Language::JavaScript),
            "ts" | "tsx" => Some(Language::TypeScript),
            "py" => Some(Language::Python),
            "css" | "scss" | "sass" => Some(Language::Css),
            _ => None,
        }
    }

    /// Detect language from a file path string.
    ///
    /// # Examples
    ///
    /// ```
    /// use pith::language::Language;
    ///
    /// assert_eq!(Language::from_path("/proj/src/App.tsx"), Some(Language::TypeScript));
    /// assert_eq!(Language::from_path("/proj/main.py"), Some(Language::Python));
    /// assert_eq!(Language::from_path("/proj/README.md"), None);
    /// ```
    pub fn from_path(path: &str) -> Option<Self> {
        Self::from_extension(extension_of(path)?)
    }

    /// Code-fence tag for a file, used when embedding its content in a bundle.
    ///
    /// Covers common text formats beyond the scanned languages; unknown
    /// extensions yield an empty tag.
    pub fn fence_tag(path: &str) -> &'static str {
        let Some(ext) = extension_of(path) else {
            return "";
        };
        match ext.to_lowercase().as_str() {
            "js" | "mjs" | "cjs" => "javascript",
            "jsx" => "jsx",
            "ts" | "mts" | "cts" => "typescript",
            "tsx" => "tsx",
            "py" | "pyi" => "python",
            "css" => "css",
            "scss" => "scss",
            "sass" => "sass",
            "html" | "htm" => "html",
            "json" => "json",
            "md" | "markdown" => "markdown",
            "rs" => "rust",
            "go" => "go",
            "java" => "java",
            "rb" => "ruby",
            "php" => "php",
            "c" | "h" => "c",
            "cpp" | "cc" | "cxx" | "hpp" => "cpp",
            "cs" => "csharp",
            "sh" | "bash" | "zsh" => "bash",
            "yml" | "yaml" => "yaml",
            "toml" => "toml",
            "sql" => "sql",
            "xml" => "xml",
            "vue" => "vue",
            "svelte" => "svelte",
            _ => "",
        }
    }
}
