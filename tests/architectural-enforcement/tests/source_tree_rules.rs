//! Source-tree rules for the menukit core
//!
//! The orchestration core is single-threaded and tick-driven; blocking
//! the thread would stall every page at once. These tests scan the
//! source tree so a violation fails CI instead of surfacing as a frozen
//! menu.

use std::fs;

use architectural_enforcement::{core_src_dir, production_source, rust_sources};

#[test]
fn core_sources_exist() {
    let sources = rust_sources(&core_src_dir());
    assert!(
        !sources.is_empty(),
        "no Rust sources found under {}",
        core_src_dir().display()
    );
}

#[test]
fn no_blocking_sleeps_in_production_code() {
    for path in rust_sources(&core_src_dir()) {
        let contents = fs::read_to_string(&path).unwrap();
        let production = production_source(&contents);
        assert!(
            !production.contains("thread::sleep"),
            "{} blocks the scheduler thread with a sleep",
            path.display()
        );
    }
}

#[test]
fn every_module_file_carries_module_docs() {
    for path in rust_sources(&core_src_dir()) {
        let contents = fs::read_to_string(&path).unwrap();
        let first_line = contents
            .lines()
            .find(|line| !line.trim().is_empty())
            .unwrap_or("");
        assert!(
            first_line.starts_with("//!"),
            "{} is missing module-level documentation",
            path.display()
        );
    }
}

#[test]
fn core_has_no_ui_framework_dependencies() {
    let manifest_path = core_src_dir().join("../Cargo.toml");
    let manifest = fs::read_to_string(manifest_path).unwrap();
    for forbidden in ["ratatui", "crossterm", "egui", "winit"] {
        assert!(
            !manifest.contains(forbidden),
            "menukit-core must stay UI-framework free, found {forbidden}"
        );
    }
}
