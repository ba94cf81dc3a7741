//! Drive a source tree through a filter.

use std::fs;
use std::path::Path;

use super::tree::SourceTree;
use crate::error::{GateError, Result};
use crate::filter::Filter;

/// Counts from a pipeline run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildSummary {
    /// Files passed through the filter.
    pub processed: usize,
    /// Files copied without filtering.
    pub copied: usize,
    /// Files that failed with severe rule errors (check mode only).
    pub failed: usize,
}

/// Runs every matching file of a source tree through a filter.
pub struct FilterTree<T, F> {
    input: T,
    filter: F,
}

impl<T: SourceTree, F: Filter> FilterTree<T, F> {
    pub fn new(input: T, filter: F) -> Self {
        Self { input, filter }
    }

    pub fn filter(&self) -> &F {
        &self.filter
    }

    /// Write the tree to `output`.
    ///
    /// Matching files are written through the filter under the target
    /// extension; other files are copied verbatim. Stops at the first error.
    pub fn build(&self, output: &Path) -> Result<BuildSummary> {
        let mut summary = BuildSummary::default();

        for entry in self.input.entries()? {
            if self.filter.can_process(&entry.relative_path) {
                let content = entry.read_text()?;
                let result = self.filter.process_string(&content, &entry.relative_path)?;
                let target = output.join(self.filter.target_path(&entry.relative_path));
                write_file(&target, result.as_bytes())?;
                summary.processed += 1;
            } else {
                write_file(&output.join(&entry.relative_path), &entry.read_bytes()?)?;
                summary.copied += 1;
            }
        }

        tracing::info!(
            "Built {}: {} processed, {} copied",
            output.display(),
            summary.processed,
            summary.copied
        );
        Ok(summary)
    }

    /// Run matching files through the filter without writing anything.
    ///
    /// Unlike [`FilterTree::build`], severe rule errors do not stop the run:
    /// every file is checked and `SevereRuleErrors` is returned at the end
    /// if any file failed. Other errors stop immediately.
    pub fn check(&self) -> Result<BuildSummary> {
        let mut summary = BuildSummary::default();

        for entry in self.input.entries()? {
            if !self.filter.can_process(&entry.relative_path) {
                continue;
            }

            let content = entry.read_text()?;
            match self.filter.process_string(&content, &entry.relative_path) {
                Ok(_) => {}
                Err(GateError::SevereRuleErrors) => summary.failed += 1,
                Err(e) => return Err(e),
            }
            summary.processed += 1;
        }

        tracing::info!(
            "Checked {} file(s), {} failed",
            summary.processed,
            summary.failed
        );
        if summary.failed > 0 {
            return Err(GateError::SevereRuleErrors);
        }
        Ok(summary)
    }
}

fn write_file(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::DirectoryTree;
    use std::sync::Mutex;
    use tempfile::TempDir;

    /// Fails any file whose content contains `FAIL`; records what it saw.
    #[derive(Default)]
    struct Recording {
        seen: Mutex<Vec<String>>,
    }

    impl Filter for Recording {
        fn extensions(&self) -> &[&str] {
            &["js"]
        }
        fn target_extension(&self) -> &str {
            "js"
        }
        fn process_string(&self, content: &str, relative_path: &str) -> Result<String> {
            self.seen.lock().unwrap().push(relative_path.to_string());
            if content.contains("FAIL") {
                Err(GateError::SevereRuleErrors)
            } else {
                Ok(content.to_string())
            }
        }
    }

    fn source_tree(files: &[(&str, &str)]) -> TempDir {
        let temp = TempDir::new().unwrap();
        for (path, content) in files {
            let full = temp.path().join(path);
            fs::create_dir_all(full.parent().unwrap()).unwrap();
            fs::write(full, content).unwrap();
        }
        temp
    }

    #[test]
    fn build_filters_and_copies() {
        let input = source_tree(&[("a.js", "a();"), ("lib/b.js", "b();"), ("style.css", "x{}")]);
        let output = TempDir::new().unwrap();

        let tree = FilterTree::new(DirectoryTree::new(input.path()), Recording::default());
        let summary = tree.build(output.path()).unwrap();

        assert_eq!(
            summary,
            BuildSummary {
                processed: 2,
                copied: 1,
                failed: 0
            }
        );
        assert_eq!(fs::read_to_string(output.path().join("lib/b.js")).unwrap(), "b();");
        assert_eq!(fs::read_to_string(output.path().join("style.css")).unwrap(), "x{}");
    }

    #[test]
    fn build_stops_at_first_error() {
        let input = source_tree(&[("a.js", "FAIL"), ("b.js", "ok")]);
        let output = TempDir::new().unwrap();

        let tree = FilterTree::new(DirectoryTree::new(input.path()), Recording::default());
        let err = tree.build(output.path()).unwrap_err();

        assert!(matches!(err, GateError::SevereRuleErrors));
        assert_eq!(*tree.filter().seen.lock().unwrap(), vec!["a.js".to_string()]);
        assert!(!output.path().join("b.js").exists());
    }

    #[test]
    fn check_visits_every_file_then_fails() {
        let input = source_tree(&[("a.js", "FAIL"), ("b.js", "ok"), ("c.txt", "FAIL")]);

        let tree = FilterTree::new(DirectoryTree::new(input.path()), Recording::default());
        let err = tree.check().unwrap_err();

        assert!(matches!(err, GateError::SevereRuleErrors));
        assert_eq!(tree.filter().seen.lock().unwrap().len(), 2);
    }

    #[test]
    fn check_passes_clean_tree() {
        let input = source_tree(&[("a.js", "ok")]);

        let tree = FilterTree::new(DirectoryTree::new(input.path()), Recording::default());

        assert_eq!(tree.check().unwrap().processed, 1);
    }
}
