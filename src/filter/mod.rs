//! Per-file filters for build pipelines.
//!
//! A [`Filter`] declares which files it handles by extension and transforms
//! their text one file at a time. [`ValidationFilter`] is the lint gate: it
//! passes content through unchanged and fails on severe findings.

pub mod sink;
pub mod validation;

pub use sink::SharedBuffer;
pub use validation::ValidationFilter;

use crate::error::Result;

/// A per-file transformation keyed by file extension.
pub trait Filter: Send + Sync {
    /// Extensions (without the dot) this filter processes.
    fn extensions(&self) -> &[&str];

    /// Extension written for processed files.
    fn target_extension(&self) -> &str;

    /// Transform the content of one file.
    fn process_string(&self, content: &str, relative_path: &str) -> Result<String>;

    /// Whether `relative_path` has one of this filter's extensions.
    fn can_process(&self, relative_path: &str) -> bool {
        extension_of(relative_path).is_some_and(|ext| self.extensions().contains(&ext))
    }

    /// Output path for a processed file.
    fn target_path(&self, relative_path: &str) -> String {
        match extension_of(relative_path) {
            Some(ext) => format!(
                "{}{}",
                &relative_path[..relative_path.len() - ext.len()],
                self.target_extension()
            ),
            None => relative_path.to_string(),
        }
    }
}

fn extension_of(relative_path: &str) -> Option<&str> {
    let name = relative_path.rsplit('/').next().unwrap_or(relative_path);
    match name.rfind('.') {
        Some(0) | None => None,
        Some(idx) => Some(&name[idx + 1..]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Upper;

    impl Filter for Upper {
        fn extensions(&self) -> &[&str] {
            &["txt", "text"]
        }
        fn target_extension(&self) -> &str {
            "out"
        }
        fn process_string(&self, content: &str, _relative_path: &str) -> Result<String> {
            Ok(content.to_uppercase())
        }
    }

    #[test]
    fn can_process_matches_extension() {
        assert!(Upper.can_process("a/b.txt"));
        assert!(Upper.can_process("notes.text"));
        assert!(!Upper.can_process("a/b.js"));
        assert!(!Upper.can_process("a.dir/README"));
        assert!(!Upper.can_process(".txt"));
    }

    #[test]
    fn target_path_swaps_extension() {
        assert_eq!(Upper.target_path("a/b.txt"), "a/b.out");
        assert_eq!(Upper.target_path("a/b"), "a/b");
    }
}
