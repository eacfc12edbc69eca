//! Content loader - reads page and file nodes from the source directory

use std::fs;
use std::path::{Component, Path};

use walkdir::WalkDir;

use super::store::{ContentStore, FileStore, StoreError};
use super::{ContentNode, FileNode, FrontMatter};
use crate::helpers::{encode_path, url_for};
use crate::Blog;

/// Filesystem-backed content and file store
pub struct ContentLoader<'a> {
    blog: &'a Blog,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(blog: &'a Blog) -> Self {
        Self { blog }
    }

    /// Load all page nodes from the source directory
    pub fn load_pages(&self) -> Result<Vec<ContentNode>, StoreError> {
        let mut pages = Vec::new();

        for path in self.walk_files()? {
            let relative = self.relative_path(&path);
            if !is_content_file(&path) || self.is_download(&relative) {
                continue;
            }

            match self.load_page(&path, &relative) {
                Ok(page) => pages.push(page),
                Err(e) => {
                    tracing::warn!("Failed to load page {:?}: {}", path, e);
                }
            }
        }

        tracing::debug!("Loaded {} pages from {:?}", pages.len(), self.blog.source_dir);
        Ok(pages)
    }

    /// Load a single page node from a file
    fn load_page(&self, path: &Path, relative: &str) -> Result<ContentNode, StoreError> {
        let content = fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let (fm, _) = FrontMatter::parse(&content);

        Ok(ContentNode {
            slug: page_slug_for(relative),
            title: fm.title,
            date: fm.date,
            description: fm.description,
        })
    }

    /// Load all file nodes that live under a downloads directory
    pub fn load_files(&self) -> Result<Vec<FileNode>, StoreError> {
        let config = &self.blog.config;

        let files: Vec<FileNode> = self
            .walk_files()?
            .into_iter()
            .map(|path| self.relative_path(&path))
            .filter(|relative| self.is_download(relative))
            .map(|relative| {
                let public_url = url_for(
                    config,
                    &format!("{}/{}", config.static_dir, encode_path(&relative)),
                );
                FileNode::from_relative_path(&relative, public_url)
            })
            .collect();

        tracing::debug!("Found {} download files", files.len());
        Ok(files)
    }

    /// Regular files under the source directory, sorted by name per directory
    fn walk_files(&self) -> Result<Vec<std::path::PathBuf>, StoreError> {
        let source_dir = &self.blog.source_dir;
        if !source_dir.exists() {
            tracing::debug!("Source directory {:?} does not exist", source_dir);
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(source_dir)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(source) if source.depth() == 0 => {
                    return Err(StoreError::Walk {
                        path: source_dir.clone(),
                        source,
                    });
                }
                Err(e) => {
                    tracing::warn!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };

            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }

        Ok(files)
    }

    /// `/`-separated path relative to the source directory
    fn relative_path(&self, path: &Path) -> String {
        let relative = path.strip_prefix(&self.blog.source_dir).unwrap_or(path);
        relative
            .components()
            .filter_map(|c| match c {
                Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Whether a relative file path sits under a nested downloads directory
    ///
    /// A top-level `downloads/` belongs to no post and is not matched.
    fn is_download(&self, relative: &str) -> bool {
        let downloads_dir = self.blog.config.downloads_dir.as_str();
        match relative.rsplit_once('/') {
            Some((dir, _)) => dir.split('/').skip(1).any(|part| part == downloads_dir),
            None => false,
        }
    }
}

impl ContentStore for ContentLoader<'_> {
    fn content_nodes(&self) -> Result<Vec<ContentNode>, StoreError> {
        self.load_pages()
    }
}

impl FileStore for ContentLoader<'_> {
    fn file_nodes(&self) -> Result<Vec<FileNode>, StoreError> {
        self.load_files()
    }
}

/// Check if a file is a markdown or MDX page
fn is_content_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "mdx" || e == "markdown")
        .unwrap_or(false)
}

/// Slug of a page from its path relative to the source directory
///
/// `post.mdx` -> `post`, `post/index.mdx` -> `post/`, `index.mdx` -> ``
fn page_slug_for(relative: &str) -> String {
    let without_ext = match relative.rsplit_once('.') {
        Some((stem, _)) if !stem.ends_with('/') && !stem.is_empty() => stem,
        _ => relative,
    };

    if without_ext == "index" {
        String::new()
    } else if let Some(dir) = without_ext.strip_suffix("/index") {
        format!("{}/", dir)
    } else {
        without_ext.to_string()
    }
}
