//! Content module - page and file nodes and the stores that yield them

mod frontmatter;
pub mod loader;
mod node;
pub mod store;

pub use frontmatter::FrontMatter;
pub use loader::ContentLoader;
pub use node::{ContentNode, FileNode};
pub use store::{ContentStore, FileStore, MemoryStore, StoreError};
