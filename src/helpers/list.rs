//! List helpers: post listing, per-post attachments and navigation

use serde::Serialize;

use super::date::PostDate;
use super::url::{nav_link, url_for};
use crate::config::SiteConfig;
use crate::content::{ContentNode, ContentStore, FileNode, FileStore, StoreError};

/// Title used for posts whose metadata has none
pub const NO_TITLE: &str = "No title";

/// A post as shown in the post list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostListItem {
    pub title: String,
    pub date: PostDate,
    pub slug: String,
}

impl From<&ContentNode> for PostListItem {
    fn from(node: &ContentNode) -> Self {
        let title = node
            .title
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(NO_TITLE)
            .to_string();

        Self {
            title,
            date: PostDate::parse(node.date.as_deref()),
            slug: node.slug.clone(),
        }
    }
}

/// Project page nodes into the ordered post list
///
/// The home page is left out. Posts are ordered oldest first; the sort is
/// stable, so posts sharing a date (or both lacking one) keep store order.
pub fn posts_from_nodes(nodes: &[ContentNode]) -> Vec<PostListItem> {
    let mut posts: Vec<PostListItem> = nodes
        .iter()
        .filter(|node| !node.is_home())
        .map(PostListItem::from)
        .collect();

    posts.sort_by(|a, b| a.date.cmp(&b.date));
    posts
}

/// Query a content store and return its ordered post list
pub fn list_posts<S: ContentStore + ?Sized>(store: &S) -> Result<Vec<PostListItem>, StoreError> {
    let nodes = store.content_nodes()?;
    let posts = posts_from_nodes(&nodes);
    tracing::debug!("Listed {} posts from {} pages", posts.len(), nodes.len());
    Ok(posts)
}

/// Files attached to a post, in store order
pub fn attachments_for(post_slug: &str, files: &[FileNode]) -> Vec<FileNode> {
    attachments_in(&format!("{}/downloads", post_slug), files)
}

/// Files whose directory equals `download_directory` exactly
fn attachments_in(download_directory: &str, files: &[FileNode]) -> Vec<FileNode> {
    files
        .iter()
        .filter(|file| file.relative_directory == download_directory)
        .cloned()
        .collect()
}

/// Query a file store for the attachments of one post
pub fn list_attachments<S: FileStore + ?Sized>(
    store: &S,
    post_slug: &str,
) -> Result<Vec<FileNode>, StoreError> {
    let files = store.file_nodes()?;
    let attachments = attachments_for(post_slug, &files);
    tracing::debug!(
        "Found {} attachments for {:?} among {} files",
        attachments.len(),
        post_slug,
        files.len()
    );
    Ok(attachments)
}

/// Like [`list_attachments`], using the site's configured downloads directory
pub fn list_site_attachments<S: FileStore + ?Sized>(
    config: &SiteConfig,
    store: &S,
    post_slug: &str,
) -> Result<Vec<FileNode>, StoreError> {
    let files = store.file_nodes()?;
    Ok(attachments_in(&config.downloads_dir_for(post_slug), &files))
}

/// An entry in the navigation drawer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub title: String,
    pub link: String,
}

/// Navigation entries: the home page, then every post in list order
pub fn navigation(config: &SiteConfig, posts: &[PostListItem]) -> Vec<NavEntry> {
    let mut entries = Vec::with_capacity(posts.len() + 1);
    entries.push(NavEntry {
        title: config.home_title.clone(),
        link: url_for(config, "/"),
    });

    entries.extend(posts.iter().map(|post| NavEntry {
        title: post.title.clone(),
        link: url_for(config, nav_link(&post.slug)),
    }));

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::MemoryStore;

    fn file(id: &str, relative_directory: &str) -> FileNode {
        FileNode {
            id: id.to_string(),
            name: id.to_string(),
            extension: "zip".to_string(),
            relative_directory: relative_directory.to_string(),
            public_url: format!("/static/{}.zip", id),
        }
    }

    #[test]
    fn test_home_page_excluded() {
        let store = MemoryStore::new(
            vec![
                ContentNode::new("").with_title("Home"),
                ContentNode::new("post/").with_title("Post"),
            ],
            Vec::new(),
        );

        let first = list_posts(&store).unwrap();
        let second = list_posts(&store).unwrap();
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].slug, "post/");
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_title() {
        let posts = posts_from_nodes(&[
            ContentNode::new("a"),
            ContentNode::new("b").with_title(""),
        ]);
        assert!(posts.iter().all(|p| p.title == NO_TITLE));
    }

    #[test]
    fn test_sorted_by_date() {
        let posts = posts_from_nodes(&[
            ContentNode::new("c").with_date("2021-03-01"),
            ContentNode::new("a").with_date("2020-01-01"),
            ContentNode::new("b").with_date("2021-01-05"),
        ]);

        let slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["a", "b", "c"]);
        assert!(posts.windows(2).all(|w| w[0].date <= w[1].date));
    }

    #[test]
    fn test_ties_keep_store_order() {
        let posts = posts_from_nodes(&[
            ContentNode::new("second").with_date("2021-01-05"),
            ContentNode::new("first").with_date("2021-01-05"),
        ]);
        assert_eq!(posts[0].slug, "second");
        assert_eq!(posts[1].slug, "first");
    }

    #[test]
    fn test_invalid_dates_sort_first_and_are_kept() {
        let posts = posts_from_nodes(&[
            ContentNode::new("dated").with_date("2021-01-05"),
            ContentNode::new("garbage").with_date("not-a-date"),
            ContentNode::new("undated"),
        ]);

        let slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["garbage", "undated", "dated"]);
        assert_eq!(posts[0].date, PostDate::Invalid);
    }

    #[test]
    fn test_loose_dates_sort_in_date_order() {
        let posts = posts_from_nodes(&[
            ContentNode::new("year").with_date("2021"),
            ContentNode::new("month").with_date("2020-06"),
            ContentNode::new("words").with_date("Jan 5 2021"),
            ContentNode::new("offset").with_date("2020-01-01 10:00:00 +0000"),
        ]);

        let slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["offset", "month", "year", "words"]);
        assert!(posts.iter().all(|p| p.date != PostDate::Invalid));
    }

    #[test]
    fn test_attachments_for_post() {
        let foo = file("foo-save", "foo/downloads");
        let store = MemoryStore::new(Vec::new(), vec![foo.clone(), file("bar-save", "bar/downloads")]);

        let attachments = list_attachments(&store, "foo").unwrap();
        assert_eq!(attachments, vec![foo]);
    }

    #[test]
    fn test_attachments_keep_store_order() {
        let files = vec![
            file("z", "foo/downloads"),
            file("m", "foo/downloads/nested"),
            file("a", "foo/downloads"),
            file("c", "Foo/downloads"),
        ];

        let ids: Vec<_> = attachments_for("foo", &files)
            .into_iter()
            .map(|f| f.id)
            .collect();
        assert_eq!(ids, vec!["z", "a"]);
    }

    #[test]
    fn test_attachments_empty_store() {
        assert!(list_attachments(&MemoryStore::default(), "foo")
            .unwrap()
            .is_empty());
        assert!(attachments_for("foo", &[]).is_empty());
    }

    #[test]
    fn test_site_attachments_use_configured_dir() {
        let mut config = SiteConfig::default();
        config.downloads_dir = "files".to_string();
        let store = MemoryStore::new(
            Vec::new(),
            vec![file("a", "foo/files"), file("b", "foo/downloads")],
        );

        let ids: Vec<_> = list_site_attachments(&config, &store, "foo")
            .unwrap()
            .into_iter()
            .map(|f| f.id)
            .collect();
        assert_eq!(ids, vec!["a"]);
    }

    #[test]
    fn test_navigation() {
        let mut config = SiteConfig::default();
        config.root = "/blog/".to_string();
        let posts = posts_from_nodes(&[
            ContentNode::new("guide/").with_title("Guide").with_date("2021-01-01"),
            ContentNode::new("notes").with_title("Notes").with_date("2021-02-01"),
        ]);

        let nav = navigation(&config, &posts);
        assert_eq!(nav.len(), 3);
        assert_eq!(nav[0].title, "Home");
        assert_eq!(nav[0].link, "/blog/");
        assert_eq!(nav[1].link, "/blog/guide");
        assert_eq!(nav[2].link, "/blog/notes");
    }
}
