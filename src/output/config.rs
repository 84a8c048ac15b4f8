//! Output configuration types

/// Configuration for console output.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub use_color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { use_color: true }
    }
}

/// Configuration for assembling a context bundle.
#[derive(Debug, Clone)]
pub struct BundleConfig {
    /// Emit the `<file_map>` block
    pub include_tree: bool,
    /// Text for the `<user_instructions>` block; blank means no block
    pub instructions: Option<String>,
}

impl BundleConfig {
    /// Instructions with surrounding whitespace removed, if any remain.
    pub fn trimmed_instructions(&self) -> Option<&str> {
        self.instructions
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }
}

impl Default for BundleConfig {
    fn default() -> Self {
        Self {
            include_tree: true,
            instructions: None,
        }
    }
}
