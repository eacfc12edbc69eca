//! HTML helper functions

use super::list::NavEntry;
use crate::content::FileNode;

/// Generate the page title plus description, Open Graph and Twitter meta tags
pub fn meta_tags(title: &str, description: &str) -> String {
    let title = html_escape(title);
    let description = html_escape(description);

    [
        format!("<title>{}</title>", title),
        format!(r#"<meta name="title" content="{}">"#, title),
        format!(r#"<meta name="description" content="{}">"#, description),
        r#"<meta property="og:type" content="website">"#.to_string(),
        format!(r#"<meta property="og:title" content="{}">"#, title),
        format!(r#"<meta property="og:description" content="{}">"#, description),
        r#"<meta property="twitter:card" content="summary_large_image">"#.to_string(),
        format!(r#"<meta property="twitter:title" content="{}">"#, title),
        format!(
            r#"<meta property="twitter:description" content="{}">"#,
            description
        ),
    ]
    .join("\n")
}

/// Label of a download button
pub fn download_label(file: &FileNode) -> String {
    format!("Download {}", file.file_name())
}

/// Generate a download anchor for an attached file
///
/// # Examples
/// ```ignore
/// download_button(&file) // -> <a href="/static/foo/downloads/a.zip" download="a.zip">Download a.zip</a>
/// ```
pub fn download_button(file: &FileNode) -> String {
    format!(
        r#"<a class="download-button" href="{}" download="{}">{}</a>"#,
        html_escape(&file.public_url),
        html_escape(&file.file_name()),
        html_escape(&download_label(file))
    )
}

/// Generate the navigation list
pub fn nav_list(entries: &[NavEntry]) -> String {
    let mut html = r#"<nav><ul class="nav-list">"#.to_string();

    for entry in entries {
        html.push_str(&format!(
            r#"<li class="nav-list-item"><a class="nav-list-link" href="{}" role="link">{}</a></li>"#,
            html_escape(&entry.link),
            html_escape(&entry.title)
        ));
    }

    html.push_str("</ul></nav>");
    html
}

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn save_file() -> FileNode {
        FileNode::from_relative_path(
            "foo/downloads/save.sav",
            "/static/foo/downloads/save.sav".to_string(),
        )
    }

    #[test]
    fn test_meta_tags() {
        let tags = meta_tags("Dumping saves", "Back up & restore");
        assert!(tags.starts_with("<title>Dumping saves</title>"));
        assert!(tags.contains(r#"<meta name="description" content="Back up &amp; restore">"#));
        assert!(tags.contains(r#"<meta property="og:type" content="website">"#));
        assert!(tags.contains(r#"<meta property="twitter:card" content="summary_large_image">"#));
        assert_eq!(tags.lines().count(), 9);
    }

    #[test]
    fn test_download_button() {
        let html = download_button(&save_file());
        assert_eq!(
            html,
            r#"<a class="download-button" href="/static/foo/downloads/save.sav" download="save.sav">Download save.sav</a>"#
        );
    }

    #[test]
    fn test_nav_list() {
        let html = nav_list(&[NavEntry {
            title: "<Home>".to_string(),
            link: "/".to_string(),
        }]);
        assert!(html.contains(r#"href="/""#));
        assert!(html.contains("&lt;Home&gt;"));
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape(r#"a<b>"c"&'d'"#), "a&lt;b&gt;&quot;c&quot;&amp;&#39;d&#39;");
    }
}
