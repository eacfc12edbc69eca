//! Show what a post page renders around its body

use anyhow::Result;

use crate::Blog;

/// Print the post page at `path` as JSON or as an HTML fragment
pub fn run(blog: &Blog, path: &str, json: bool) -> Result<()> {
    let Some(page) = blog.post_page(path)? else {
        anyhow::bail!("No page found at {}", path);
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&page)?);
    } else {
        println!("{}", page.render());
    }

    Ok(())
}
