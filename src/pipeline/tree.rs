//! Source trees: where a pipeline reads its input files from.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GateError, Result};

/// One input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEntry {
    /// Path relative to the tree root, using `/` separators.
    pub relative_path: String,
    /// Location on disk.
    pub path: PathBuf,
}

impl SourceEntry {
    /// Read the file as UTF-8 text.
    pub fn read_text(&self) -> Result<String> {
        let bytes = fs::read(&self.path)?;
        String::from_utf8(bytes).map_err(|_| {
            GateError::Other(anyhow::anyhow!(
                "{} is not valid UTF-8",
                self.path.display()
            ))
        })
    }

    /// Read the raw bytes of the file.
    pub fn read_bytes(&self) -> Result<Vec<u8>> {
        Ok(fs::read(&self.path)?)
    }
}

/// A set of input files.
pub trait SourceTree {
    /// All entries, in the order they should be processed.
    fn entries(&self) -> Result<Vec<SourceEntry>>;
}

/// Every file below a directory, in sorted relative-path order.
#[derive(Debug, Clone)]
pub struct DirectoryTree {
    root: PathBuf,
}

impl DirectoryTree {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl SourceTree for DirectoryTree {
    fn entries(&self) -> Result<Vec<SourceEntry>> {
        if !self.root.is_dir() {
            return Err(GateError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("input directory not found: {}", self.root.display()),
            )));
        }

        let mut entries = Vec::new();
        walk(&self.root, "", &mut entries)?;
        entries.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
        Ok(entries)
    }
}

fn walk(dir: &Path, prefix: &str, entries: &mut Vec<SourceEntry>) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();
        let relative = if prefix.is_empty() {
            name
        } else {
            format!("{}/{}", prefix, name)
        };

        // Symlinked directories are not followed, so link cycles cannot recurse.
        let file_type = entry.file_type()?;
        if file_type.is_dir() {
            walk(&path, &relative, entries)?;
        } else if file_type.is_symlink() && path.is_dir() {
            tracing::debug!("Skipping symlinked directory {}", path.display());
        } else if path.is_file() {
            entries.push(SourceEntry {
                relative_path: relative,
                path,
            });
        }
    }
    Ok(())
}

/// Explicit files and directories, as given on a command line.
///
/// Files keep their given path as the relative path. Directories expand to
/// their files with the directory path as prefix.
#[derive(Debug, Clone, Default)]
pub struct FileList {
    paths: Vec<PathBuf>,
}

impl FileList {
    pub fn new(paths: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }
}

impl SourceTree for FileList {
    fn entries(&self) -> Result<Vec<SourceEntry>> {
        let mut entries = Vec::new();

        for path in &self.paths {
            let display = path.to_string_lossy().replace('\\', "/");
            if path.is_dir() {
                let prefix = display.trim_end_matches('/');
                for entry in DirectoryTree::new(path).entries()? {
                    entries.push(SourceEntry {
                        relative_path: format!("{}/{}", prefix, entry.relative_path),
                        path: entry.path,
                    });
                }
            } else if path.is_file() {
                entries.push(SourceEntry {
                    relative_path: display,
                    path: path.clone(),
                });
            } else {
                return Err(GateError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("no such file or directory: {}", path.display()),
                )));
            }
        }

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn relative_paths(entries: &[SourceEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.relative_path.as_str()).collect()
    }

    #[test]
    fn directory_tree_walks_sorted() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("lib/util")).unwrap();
        fs::write(temp.path().join("z.js"), "").unwrap();
        fs::write(temp.path().join("lib/b.js"), "").unwrap();
        fs::write(temp.path().join("lib/util/a.js"), "").unwrap();
        fs::write(temp.path().join("a.css"), "").unwrap();

        let entries = DirectoryTree::new(temp.path()).entries().unwrap();

        assert_eq!(
            relative_paths(&entries),
            vec!["a.css", "lib/b.js", "lib/util/a.js", "z.js"]
        );
    }

    #[cfg(unix)]
    #[test]
    fn directory_tree_skips_symlinked_directories() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src");
        fs::create_dir(&src).unwrap();
        fs::write(src.join("a.js"), "").unwrap();
        fs::write(temp.path().join("shared.js"), "").unwrap();
        std::os::unix::fs::symlink(&src, src.join("loop")).unwrap();
        std::os::unix::fs::symlink(temp.path().join("shared.js"), src.join("linked.js")).unwrap();

        let entries = DirectoryTree::new(&src).entries().unwrap();

        assert_eq!(relative_paths(&entries), vec!["a.js", "linked.js"]);
    }

    #[test]
    fn directory_tree_missing_root_errors() {
        let temp = TempDir::new().unwrap();
        assert!(DirectoryTree::new(temp.path().join("missing")).entries().is_err());
    }

    #[test]
    fn file_list_expands_directories() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("src")).unwrap();
        fs::write(temp.path().join("src/a.js"), "").unwrap();
        fs::write(temp.path().join("main.js"), "").unwrap();

        let list = FileList::new([temp.path().join("main.js"), temp.path().join("src")]);
        let entries = list.entries().unwrap();

        assert_eq!(entries.len(), 2);
        assert!(entries[0].relative_path.ends_with("main.js"));
        assert!(entries[1].relative_path.ends_with("src/a.js"));
    }

    #[test]
    fn file_list_missing_path_errors() {
        let temp = TempDir::new().unwrap();
        let list = FileList::new([temp.path().join("nope.js")]);
        assert!(list.entries().is_err());
    }

    #[test]
    fn read_text_rejects_invalid_utf8() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bin.js");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();
        let entry = SourceEntry {
            relative_path: "bin.js".to_string(),
            path,
        };

        assert!(entry.read_text().is_err());
        assert_eq!(entry.read_bytes().unwrap().len(), 3);
    }
}
