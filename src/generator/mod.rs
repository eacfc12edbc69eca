//! Generator module - assembles what a post page and the navigation render

use serde::Serialize;

use crate::config::SiteConfig;
use crate::content::{ContentStore, FileNode, FileStore, StoreError};
use crate::helpers::{
    download_button, html_escape, list_posts, list_site_attachments, meta_tags, nav_list,
    navigation, page_slug, post_timestamp, NavEntry, NO_TITLE,
};

/// Everything the post layout shows around the post body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostPage {
    pub slug: String,
    pub title: String,
    pub description: String,
    /// Display date, empty when the post has none
    pub timestamp: String,
    pub downloads: Vec<FileNode>,
}

impl PostPage {
    /// Render the page head and the pieces surrounding the post body
    pub fn render(&self) -> String {
        let mut html = meta_tags(&self.title, &self.description);
        html.push('\n');
        html.push_str(&format!(
            r#"<p class="timestamp">{}</p>"#,
            html_escape(&self.timestamp)
        ));

        for download in &self.downloads {
            html.push('\n');
            html.push_str(&download_button(download));
        }

        html
    }
}

/// Builds page data from a content store and a file store
pub struct Generator<'a, C: ?Sized, F: ?Sized> {
    config: &'a SiteConfig,
    content: &'a C,
    files: &'a F,
}

impl<'a, C, F> Generator<'a, C, F>
where
    C: ContentStore + ?Sized,
    F: FileStore + ?Sized,
{
    /// Create a new generator
    pub fn new(config: &'a SiteConfig, content: &'a C, files: &'a F) -> Self {
        Self {
            config,
            content,
            files,
        }
    }

    /// Build the post page served at `path`, if a page lives there
    pub fn post_page(&self, path: &str) -> Result<Option<PostPage>, StoreError> {
        let slug = page_slug(path);

        let Some(node) = self
            .content
            .content_nodes()?
            .into_iter()
            .find(|node| page_slug(&node.slug) == slug)
        else {
            tracing::debug!("No page found for {:?}", path);
            return Ok(None);
        };

        let downloads = list_site_attachments(self.config, self.files, &slug)?;

        Ok(Some(PostPage {
            title: node
                .title
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| NO_TITLE.to_string()),
            description: node
                .description
                .unwrap_or_else(|| self.config.description.clone()),
            timestamp: post_timestamp(node.date.as_deref()),
            downloads,
            slug,
        }))
    }

    /// Navigation entries for the drawer
    pub fn navigation(&self) -> Result<Vec<NavEntry>, StoreError> {
        let posts = list_posts(self.content)?;
        Ok(navigation(self.config, &posts))
    }

    /// Rendered navigation drawer list
    pub fn render_navigation(&self) -> Result<String, StoreError> {
        Ok(nav_list(&self.navigation()?))
    }
}
