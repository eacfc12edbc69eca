//! Content and file store seams
//!
//! The listing helpers never reach for a global query runtime; callers hand
//! them a store at call time.

use std::path::PathBuf;

use thiserror::Error;

use super::{ContentNode, FileNode};

/// Errors raised while querying a store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to walk {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

/// Source of page nodes
pub trait ContentStore {
    /// All page nodes, in store order
    fn content_nodes(&self) -> Result<Vec<ContentNode>, StoreError>;
}

/// Source of static file nodes
pub trait FileStore {
    /// All file nodes under the downloads convention, in store order
    fn file_nodes(&self) -> Result<Vec<FileNode>, StoreError>;
}

/// A store over already materialised nodes
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub pages: Vec<ContentNode>,
    /// `None` stands for a file query that returned nothing at all
    pub files: Option<Vec<FileNode>>,
}

impl MemoryStore {
    pub fn new(pages: Vec<ContentNode>, files: Vec<FileNode>) -> Self {
        Self {
            pages,
            files: Some(files),
        }
    }
}

impl ContentStore for MemoryStore {
    fn content_nodes(&self) -> Result<Vec<ContentNode>, StoreError> {
        Ok(self.pages.clone())
    }
}

impl FileStore for MemoryStore {
    fn file_nodes(&self) -> Result<Vec<FileNode>, StoreError> {
        Ok(self.files.clone().unwrap_or_default())
    }
}
