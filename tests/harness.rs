//! Test harness for pith integration tests

#![allow(dead_code)]

use std::path::Path;
use std::process::Command;

pub use pith::test_utils::TestProject;

/// A small TypeScript project with nested relative imports and a cycle.
pub fn sample_project() -> TestProject {
    let project = TestProject::new();
    project.add_file(
        "src/components/App.ts",
        "import helper from './utils/helper';\nimport { X } from '../shared/constants';\nimport React from 'react';\n",
    );
    project.add_file(
        "src/components/utils/helper.ts",
        "import { X } from '../../shared/constants';\nexport default X;\n",
    );
    project.add_file(
        "src/shared/constants.ts",
        "import { setup } from './setup';\nexport const X = 1;\n",
    );
    project.add_file(
        "src/shared/setup.ts",
        "import { X } from './constants';\nexport const setup = () => X;\n",
    );
    project.add_file("src/unused.ts", "export const unused = true;\n");
    project
}

pub fn run_pith(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = env!("CARGO_BIN_EXE_pith");
    let output = Command::new(binary)
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run pith");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_creates_temp_dir() {
        let project = TestProject::new();
        assert!(project.path().exists());
    }

    #[test]
    fn test_harness_add_file() {
        let project = TestProject::new();
        let file_path = project.add_file("src/main.ts", "export {};");
        assert!(file_path.exists());
    }

    #[test]
    fn test_sample_project_layout() {
        let project = sample_project();
        assert!(project.path().join("src/shared/setup.ts").exists());
    }
}
