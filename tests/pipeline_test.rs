//! Integration tests for the build pipeline.

use lintgate::config::FilterOptions;
use lintgate::filter::{SharedBuffer, ValidationFilter};
use lintgate::pipeline::{BuildSummary, DirectoryTree, FileList, FilterTree};
use lintgate::GateError;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn source_tree(files: &[(&str, &str)]) -> TempDir {
    let temp = TempDir::new().unwrap();
    for (path, content) in files {
        let full = temp.path().join(path);
        fs::create_dir_all(full.parent().unwrap()).unwrap();
        fs::write(full, content).unwrap();
    }
    temp
}

fn validation_filter(config: &Path) -> (ValidationFilter, SharedBuffer) {
    let output = SharedBuffer::new();
    let filter = ValidationFilter::new(
        FilterOptions::new()
            .with_config(config)
            .with_format("compact"),
    )
    .unwrap()
    .with_writer(output.clone());
    (filter, output)
}

#[test]
fn build_copies_tree_and_passes_js_through() {
    let input = source_tree(&[
        ("index.js", "start();\n"),
        ("lib/util.js", "function f() {\n  return 1;\n}\n"),
        ("assets/logo.svg", "<svg/>"),
    ]);
    let config = source_tree(&[("lint.json", r#"{"semi": 2, "eqeqeq": 2}"#)]);
    let output = TempDir::new().unwrap();
    let (filter, messages) = validation_filter(&config.path().join("lint.json"));

    let summary = FilterTree::new(DirectoryTree::new(input.path()), filter)
        .build(output.path())
        .unwrap();

    assert_eq!(
        summary,
        BuildSummary {
            processed: 2,
            copied: 1,
            failed: 0
        }
    );
    assert_eq!(
        fs::read_to_string(output.path().join("lib/util.js")).unwrap(),
        "function f() {\n  return 1;\n}\n"
    );
    assert_eq!(
        fs::read_to_string(output.path().join("assets/logo.svg")).unwrap(),
        "<svg/>"
    );
    assert!(messages.contents().is_empty());
}

#[test]
fn build_halts_on_first_failing_file() {
    let input = source_tree(&[("a.js", "a()\n"), ("b.js", "b()\n")]);
    let config = source_tree(&[("lint.json", r#"{"semi": 2}"#)]);
    let output = TempDir::new().unwrap();
    let (filter, messages) = validation_filter(&config.path().join("lint.json"));

    let err = FilterTree::new(DirectoryTree::new(input.path()), filter)
        .build(output.path())
        .unwrap_err();

    assert!(matches!(err, GateError::SevereRuleErrors));
    let text = messages.contents();
    assert!(text.contains("a.js: line 1, col 4, Error - Missing semicolon. (semi)"));
    assert!(!text.contains("b.js"));
}

#[test]
fn check_reports_every_failing_file() {
    let input = source_tree(&[("a.js", "a()\n"), ("b.js", "b();\n"), ("c.js", "c()\n")]);
    let config = source_tree(&[("lint.json", r#"{"semi": 2}"#)]);
    let (filter, messages) = validation_filter(&config.path().join("lint.json"));

    let err = FilterTree::new(FileList::new([input.path()]), filter)
        .check()
        .unwrap_err();

    assert!(matches!(err, GateError::SevereRuleErrors));
    let text = messages.contents();
    assert!(text.contains("a.js"));
    assert!(!text.contains("b.js"));
    assert!(text.contains("c.js"));
}
