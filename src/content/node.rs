//! Content and file node models

use serde::{Deserialize, Serialize};

/// A page node from the content store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentNode {
    /// URL-safe identifier; empty for the home page
    pub slug: String,

    /// Page title from metadata
    #[serde(default)]
    pub title: Option<String>,

    /// Raw, unparsed date from metadata
    #[serde(default)]
    pub date: Option<String>,

    /// Page description from metadata
    #[serde(default)]
    pub description: Option<String>,
}

impl ContentNode {
    /// Create a node with only a slug
    pub fn new(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            title: None,
            date: None,
            description: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Whether this node is the site's home page
    pub fn is_home(&self) -> bool {
        self.slug.is_empty()
    }
}

/// A static file node from the file store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileNode {
    /// Unique node id
    pub id: String,

    /// File name without extension
    pub name: String,

    /// Extension without the leading dot
    pub extension: String,

    /// Directory relative to the source root, `/`-separated
    #[serde(rename = "relativeDirectory")]
    pub relative_directory: String,

    /// URL the file is served from
    #[serde(rename = "publicURL")]
    pub public_url: String,
}

impl FileNode {
    /// Build a node from a `/`-separated path relative to the source root
    pub fn from_relative_path(relative_path: &str, public_url: String) -> Self {
        let (relative_directory, file_name) = match relative_path.rsplit_once('/') {
            Some((dir, file)) => (dir.to_string(), file),
            None => (String::new(), relative_path),
        };

        // Dotfiles like ".env" have no extension, mirroring Path::extension
        let (name, extension) = match file_name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => (stem.to_string(), ext.to_string()),
            _ => (file_name.to_string(), String::new()),
        };

        Self {
            id: relative_path.to_string(),
            name,
            extension,
            relative_directory,
            public_url,
        }
    }

    /// File name including the extension
    pub fn file_name(&self) -> String {
        if self.extension.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.name, self.extension)
        }
    }
}
