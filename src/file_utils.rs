//! Shared file reading utilities for the project scanner
//!
//! Reads candidate files with a size limit and classifies their content as
//! text or binary before anything tries to scan it.

use std::fs;
use std::path::Path;

use crate::paths::extension_of;

/// Default maximum file size for reading file content (1MB).
/// Files larger than this are listed but their content is not loaded.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1_000_000;

/// Number of leading bytes inspected for NUL bytes when sniffing binary content.
const BINARY_SNIFF_LEN: usize = 8000;

/// Extensions treated as binary without looking at the content.
const BINARY_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "bmp", "ico", "webp", "tiff", "psd", "pdf", "zip", "gz", "tgz",
    "tar", "rar", "7z", "bz2", "xz", "exe", "dll", "so", "dylib", "bin", "o", "a", "class", "jar",
    "wasm", "pyc", "woff", "woff2", "ttf", "otf", "eot", "mp3", "mp4", "wav", "ogg", "flac", "mov",
    "avi", "mkv", "webm", "sqlite", "db",
];

/// Outcome of reading one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    Text(String),
    Binary,
    /// File exceeds the size limit; carries its size in bytes.
    TooLarge(u64),
    /// File could not be read or is not valid UTF-8.
    Unreadable,
}

/// Check whether a path has a well-known binary extension (case-insensitive).
pub fn has_binary_extension(path: &str) -> bool {
    extension_of(path).is_some_and(|ext| {
        let ext = ext.to_lowercase();
        BINARY_EXTENSIONS.contains(&ext.as_str())
    })
}

/// Check whether raw bytes look binary (a NUL byte near the start).
pub fn looks_binary(bytes: &[u8]) -> bool {
    bytes.iter().take(BINARY_SNIFF_LEN).any(|&b| b == 0)
}

/// Read a file if it meets size requirements and classify its content.
///
/// Files larger than `max_size` are not read. Files with a binary extension
/// or binary-looking bytes are reported as [`FileContent::Binary`].
pub fn read_file_content(path: &Path, max_size: u64) -> FileContent {
    let size = match path.metadata() {
        Ok(metadata) => metadata.len(),
        Err(err) => {
            log::debug!("cannot stat {}: {}", path.display(), err);
            return FileContent::Unreadable;
        }
    };
    if size > max_size {
        return FileContent::TooLarge(size);
    }

    if has_binary_extension(&path.to_string_lossy()) {
        return FileContent::Binary;
    }

    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            log::debug!("cannot read {}: {}", path.display(), err);
            return FileContent::Unreadable;
        }
    };
    if looks_binary(&bytes) {
        return FileContent::Binary;
    }

    match String::from_utf8(bytes) {
        Ok(text) => FileContent::Text(text),
        Err(_) => {
            log::debug!("{} is not valid UTF-8", path.display());
            FileContent::Unreadable
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_read_text_file() {
        let dir = TempDir::new().unwrap();
        let file_path = dir.path().join("app.ts");
        fs::write(&file_path, "import a from './a';").unwrap();

        assert_eq!(
            read_file_content(&file_path, DEFAULT_MAX_FILE_SIZE),
            FileContent::Text("import a from './a';".to_string())
        );
    }

    #[test]
    fn test_read_nonexistent() {
        assert_eq!(
            read_file_content(Path::new("/nonexistent/file.ts"), DEFAULT_MAX_FILE_SIZE),
            FileContent::Unreadable
        );
    }

    #[test]
    fn test_file_at_max_size_boundary() {
        let dir = TempDir::new().unwrap();
        let file_path = dir.path().join("boundary.js");
        let limit = 50_000u64;

        // Exactly at the limit is read (uses > not >=)
        fs::write(&file_path, "x".repeat(limit as usize)).unwrap();
        assert!(matches!(
            read_file_content(&file_path, limit),
            FileContent::Text(_)
        ));

        fs::write(&file_path, "x".repeat(limit as usize + 1)).unwrap();
        assert_eq!(
            read_file_content(&file_path, limit),
            FileContent::TooLarge(limit + 1)
        );
    }

    #[test]
    fn test_binary_by_extension() {
        let dir = TempDir::new().unwrap();
        let file_path = dir.path().join("logo.PNG");
        fs::write(&file_path, "not really a png").unwrap();

        assert_eq!(
            read_file_content(&file_path, DEFAULT_MAX_FILE_SIZE),
            FileContent::Binary
        );
    }

    #[test]
    fn test_binary_by_content() {
        let dir = TempDir::new().unwrap();
        let file_path = dir.path().join("blob.dat");
        fs::write(&file_path, [0x7F, 0x45, 0x00, 0x01]).unwrap();

        assert_eq!(
            read_file_content(&file_path, DEFAULT_MAX_FILE_SIZE),
            FileContent::Binary
        );
    }

    #[test]
    fn test_invalid_utf8_is_unreadable() {
        let dir = TempDir::new().unwrap();
        let file_path = dir.path().join("latin1.js");
        fs::write(&file_path, [0x63, 0x61, 0x66, 0xE9]).unwrap();

        assert_eq!(
            read_file_content(&file_path, DEFAULT_MAX_FILE_SIZE),
            FileContent::Unreadable
        );
    }

    #[test]
    fn test_empty_file_is_text() {
        let dir = TempDir::new().unwrap();
        let file_path = dir.path().join("empty.ts");
        fs::write(&file_path, "").unwrap();

        assert_eq!(
            read_file_content(&file_path, DEFAULT_MAX_FILE_SIZE),
            FileContent::Text(String::new())
        );
    }

    #[test]
    fn test_looks_binary_only_sniffs_prefix() {
        let mut bytes = vec![b'a'; BINARY_SNIFF_LEN];
        bytes.push(0);
        assert!(!looks_binary(&bytes));
        assert!(looks_binary(b"ab\0cd"));
    }

    #[test]
    fn test_has_binary_extension() {
        assert!(has_binary_extension("/p/font.woff2"));
        assert!(has_binary_extension("/p/IMG.JPG"));
        assert!(!has_binary_extension("/p/app.ts"));
        assert!(!has_binary_extension("/p/Makefile"));
    }
}
