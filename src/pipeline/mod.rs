//! Build pipeline driving source trees through filters.

pub mod filter_tree;
pub mod tree;

pub use filter_tree::{BuildSummary, FilterTree};
pub use tree::{DirectoryTree, FileList, SourceEntry, SourceTree};
