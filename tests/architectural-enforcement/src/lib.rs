//! Architectural Enforcement Integration Tests
//!
//! This package contains integration tests that enforce repository
//! principles over the menukit source tree:
//! - The core stays tick-driven: no blocking sleeps in production code
//! - Every module file carries module-level documentation
//!
//! These tests are designed to catch violations early in the
//! development cycle.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Collect every Rust source file under `dir`.
pub fn rust_sources(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "rs"))
        .map(|entry| entry.path().to_path_buf())
        .collect()
}

/// The production portion of a source file: everything before its
/// `#[cfg(test)]` module, or the whole file when there is none.
pub fn production_source(contents: &str) -> &str {
    contents.split("#[cfg(test)]").next().unwrap_or(contents)
}

/// Path to the menukit-core source tree, relative to this package.
pub fn core_src_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../menukit/core/src")
}
