//! ASCII tree rendering of a file list
//!
//! Builds a directory tree from relative paths and renders it with the usual
//! `├── `, `└── ` and `│   ` connectors. Directories come before files at
//! every level; each group is sorted by name.

use std::collections::{BTreeMap, BTreeSet};

/// Directory node assembled from path segments.
#[derive(Debug, Default)]
struct DirNode {
    dirs: BTreeMap<String, DirNode>,
    files: BTreeSet<String>,
}

impl DirNode {
    fn insert(&mut self, relative_path: &str) {
        let mut segments: Vec<&str> = relative_path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();
        let Some(file) = segments.pop() else {
            return;
        };

        let mut node = self;
        for segment in segments {
            node = node.dirs.entry(segment.to_string()).or_default();
        }
        node.files.insert(file.to_string());
    }

    fn format(&self, output: &mut String, prefix: &str) {
        let total = self.dirs.len() + self.files.len();
        let mut index = 0;

        for (name, child) in &self.dirs {
            index += 1;
            let is_last = index == total;
            let connector = if is_last { "└── " } else { "├── " };
            output.push_str(prefix);
            output.push_str(connector);
            output.push_str(name);
            output.push('\n');

            let new_prefix = if is_last {
                format!("{}    ", prefix)
            } else {
                format!("{}│   ", prefix)
            };
            child.format(output, &new_prefix);
        }

        for name in &self.files {
            index += 1;
            let connector = if index == total { "└── " } else { "├── " };
            output.push_str(prefix);
            output.push_str(connector);
            output.push_str(name);
            output.push('\n');
        }
    }
}

/// Render `relative_paths` as a tree under a `root_label` line.
///
/// Every line, including the last, ends with a newline.
pub fn format_file_tree<S: AsRef<str>>(root_label: &str, relative_paths: &[S]) -> String {
    let mut root = DirNode::default();
    for path in relative_paths {
        root.insert(path.as_ref());
    }

    let mut output = String::new();
    output.push_str(root_label);
    output.push('\n');
    root.format(&mut output, "");
    output
}
