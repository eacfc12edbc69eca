//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub description: String,

    // URL
    pub root: String,

    // Directory
    pub source_dir: String,
    pub static_dir: String,
    pub downloads_dir: String,

    // Navigation
    pub home_title: String,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            description: String::new(),

            root: "/".to_string(),

            source_dir: "content".to_string(),
            static_dir: "static".to_string(),
            downloads_dir: "downloads".to_string(),

            home_title: "Home".to_string(),

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        tracing::debug!("Loaded site config from {:?}", path.as_ref());
        Ok(config)
    }

    /// Directory token under which a post keeps its attachments
    ///
    /// # Examples
    /// ```ignore
    /// config.downloads_dir_for("foo") // -> "foo/downloads"
    /// ```
    pub fn downloads_dir_for(&self, post_slug: &str) -> String {
        format!("{}/{}", post_slug, self.downloads_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.source_dir, "content");
        assert_eq!(config.downloads_dir, "downloads");
        assert_eq!(config.home_title, "Home");
        assert_eq!(config.root, "/");
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: Sabeast Notes
description: Guides and write-ups
source_dir: src/pages
root: /blog/
analytics: UA-1234
author: zaksabeast
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.description, "Guides and write-ups");
        assert!(config.extra.contains_key("title"));
        assert_eq!(config.source_dir, "src/pages");
        assert_eq!(config.root, "/blog/");
        assert_eq!(config.static_dir, "static");
        assert!(config.extra.contains_key("analytics"));
        assert!(config.extra.contains_key("author"));
    }

    #[test]
    fn test_downloads_dir_for() {
        let config = SiteConfig::default();
        assert_eq!(config.downloads_dir_for("foo"), "foo/downloads");
    }

    #[test]
    fn test_load_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(SiteConfig::load(dir.path().join("_config.yml")).is_err());
    }
}
