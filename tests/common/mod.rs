#![allow(dead_code)]

use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the csloc binary.
#[macro_export]
macro_rules! csloc {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("csloc"))
    };
}

/// A C++ file with 1 blank, 2 comment and 3 code lines.
pub const SAMPLE_CPP: &str = "\
// entry point
#include <cstdio>

/* prints a greeting */
int main() {
  return std::puts(\"/* hi */\");
";

/// A C header with 2 comment and 2 code lines.
pub const SAMPLE_H: &str = "\
#pragma once
/**
 */
int add(int a, int b); // declaration
";

pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file (and its parent directories) under the fixture root.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    pub fn create_dir(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn join(&self, relative_path: &str) -> PathBuf {
        self.dir.path().join(relative_path)
    }

    pub fn create_config(&self, content: &str) {
        self.create_file(".csloc.toml", content);
    }

    /// Creates a C file with `code_lines` statements.
    pub fn create_c_file(&self, relative_path: &str, code_lines: usize) {
        let mut content = String::new();
        for i in 0..code_lines {
            let _ = writeln!(content, "int var_{i} = {i};");
        }
        self.create_file(relative_path, &content);
    }

    /// A small mixed tree: two C++ files, one header, one C file, and
    /// files the counter must ignore.
    pub fn create_sample_tree(&self) {
        self.create_file("src/main.cpp", SAMPLE_CPP);
        self.create_file("src/util/math.h", SAMPLE_H);
        self.create_c_file("src/legacy/old.c", 4);
        self.create_file("src/extra.cc", SAMPLE_CPP);
        self.create_file("README.md", "# readme\n");
        self.create_file("build.sh", "make\n");
    }
}
