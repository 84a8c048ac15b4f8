//! Context bundle assembly
//!
//! Concatenates a file map, the selected files' contents and optional user
//! instructions into one tagged text document for pasting into a prompt.

use crate::language::Language;
use crate::paths::relative_to;
use crate::project::FileRecord;

use super::config::BundleConfig;
use super::tree::format_file_tree;

const OMITTED_NOTICE: &str = "(binary or unreadable file omitted)";

/// Path of `file` as shown in the bundle.
fn display_path(project_root: &str, file: &FileRecord) -> String {
    relative_to(project_root, &file.path).unwrap_or_else(|| file.path.clone())
}

/// Assemble the bundle for `files`, in the order given.
pub fn assemble_bundle(project_root: &str, files: &[&FileRecord], config: &BundleConfig) -> String {
    let mut output = String::new();
    let display: Vec<String> = files
        .iter()
        .map(|file| display_path(project_root, file))
        .collect();

    if config.include_tree {
        output.push_str("<file_map>\n");
        output.push_str(&format_file_tree(project_root, &display));
        output.push_str("</file_map>\n\n");
    }

    output.push_str("<file_contents>\n");
    for (file, path) in files.iter().zip(&display) {
        output.push_str("File: ");
        output.push_str(path);
        output.push('\n');

        match file.text() {
            Some(content) => {
                output.push_str("```");
                output.push_str(Language::fence_tag(&file.path));
                output.push('\n');
                output.push_str(content);
                if !content.is_empty() && !content.ends_with('\n') {
                    output.push('\n');
                }
                output.push_str("```\n\n");
            }
            None => {
                output.push_str(OMITTED_NOTICE);
                output.push_str("\n\n");
            }
        }
    }
    output.push_str("</file_contents>\n");

    if let Some(instructions) = config.trimmed_instructions() {
        output.push_str("\n<user_instructions>\n");
        output.push_str(instructions);
        output.push_str("\n</user_instructions>\n");
    }

    output
}

/// Rough token count: one token per four characters, rounded up.
pub fn estimate_tokens(text: &str) -> usize {
    text.chars().count().div_ceil(4)
}
