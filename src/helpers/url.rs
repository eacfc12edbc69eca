//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::config::SiteConfig;

/// Characters escaped inside a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'/');

/// Generate a URL with the root path
///
/// # Examples
/// ```ignore
/// url_for(&config, "/css/style.css") // -> "/blog/css/style.css"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    let root = config.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Percent-encode a `/`-separated path, segment by segment
pub fn encode_path(path: &str) -> String {
    path.split('/')
        .map(|segment| utf8_percent_encode(segment, PATH_SEGMENT).to_string())
        .collect::<Vec<_>>()
        .join("/")
}

/// Navigation link for a post slug: one trailing slash is dropped
pub fn nav_link(slug: &str) -> &str {
    slug.strip_suffix('/').unwrap_or(slug)
}

/// Slug used to look up a page's attachments: every `/` is removed
///
/// # Examples
/// ```ignore
/// page_slug("/dumping-saves/") // -> "dumping-saves"
/// ```
pub fn page_slug(path: &str) -> String {
    path.replace('/', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SiteConfig {
        let mut config = SiteConfig::default();
        config.root = "/blog/".to_string();
        config
    }

    #[test]
    fn test_url_for() {
        let config = test_config();
        assert_eq!(url_for(&config, "/css/style.css"), "/blog/css/style.css");
        assert_eq!(url_for(&config, "about/"), "/blog/about/");
        assert_eq!(url_for(&config, "/"), "/blog/");
    }

    #[test]
    fn test_encode_path() {
        assert_eq!(encode_path("foo/downloads/a b.zip"), "foo/downloads/a%20b.zip");
        assert_eq!(encode_path("foo/downloads/#1.txt"), "foo/downloads/%231.txt");
        assert_eq!(encode_path("plain-name_1.tar.gz"), "plain-name_1.tar.gz");
    }

    #[test]
    fn test_nav_link() {
        assert_eq!(nav_link("guide/"), "guide");
        assert_eq!(nav_link("guide"), "guide");
        assert_eq!(nav_link("a/b/"), "a/b");
    }

    #[test]
    fn test_page_slug() {
        assert_eq!(page_slug("/dumping-saves/"), "dumping-saves");
        assert_eq!(page_slug("dumping-saves"), "dumping-saves");
        assert_eq!(page_slug("/a/b/"), "ab");
    }
}
