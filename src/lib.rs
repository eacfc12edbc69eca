//! blog-index: post listing and download attachments for an MDX blog
//!
//! This crate answers the questions a blog layout asks at render time:
//! which posts exist and in what order, which files are attached to a post,
//! and how a post's date is displayed. Content comes from a store passed in
//! by the caller; [`content::ContentLoader`] reads one from disk.

pub mod commands;
pub mod config;
pub mod content;
pub mod generator;
pub mod helpers;

use anyhow::Result;
use std::path::{Path, PathBuf};

use content::{ContentLoader, FileNode};
use generator::{Generator, PostPage};
use helpers::{NavEntry, PostListItem};

/// A blog site on disk
#[derive(Debug, Clone)]
pub struct Blog {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Source (content) directory
    pub source_dir: PathBuf,
}

impl Blog {
    /// Open a site directory, reading `_config.yml` when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let config_path = base_dir.as_ref().join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Open a site directory with an explicit configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let source_dir = base_dir.join(&config.source_dir);

        Self {
            config,
            base_dir,
            source_dir,
        }
    }

    /// Filesystem store over this site's source directory
    pub fn loader(&self) -> ContentLoader<'_> {
        ContentLoader::new(self)
    }

    /// All posts, oldest first
    pub fn posts(&self) -> Result<Vec<PostListItem>> {
        Ok(helpers::list_posts(&self.loader())?)
    }

    /// Files attached to a post
    pub fn attachments(&self, post_slug: &str) -> Result<Vec<FileNode>> {
        Ok(helpers::list_site_attachments(
            &self.config,
            &self.loader(),
            post_slug,
        )?)
    }

    /// Navigation drawer entries
    pub fn navigation(&self) -> Result<Vec<NavEntry>> {
        let loader = self.loader();
        Ok(Generator::new(&self.config, &loader, &loader).navigation()?)
    }

    /// Post page data for a page path
    pub fn post_page(&self, path: &str) -> Result<Option<PostPage>> {
        let loader = self.loader();
        Ok(Generator::new(&self.config, &loader, &loader).post_page(path)?)
    }
}
