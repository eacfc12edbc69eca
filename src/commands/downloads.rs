//! List the files attached to a post

use anyhow::Result;

use crate::helpers::{download_label, page_slug};
use crate::Blog;

/// Print the attachments of the post at `target` (a slug or a page path)
pub fn run(blog: &Blog, target: &str, json: bool) -> Result<()> {
    let slug = page_slug(target);
    if slug.is_empty() {
        anyhow::bail!("Expected a post slug or path, got {:?}", target);
    }

    let attachments = blog.attachments(&slug)?;
    tracing::info!("Found {} downloads for {}", attachments.len(), slug);

    if json {
        println!("{}", serde_json::to_string_pretty(&attachments)?);
        return Ok(());
    }

    println!("Downloads for {} ({}):", slug, attachments.len());
    for file in attachments {
        println!("  {} <{}>", download_label(&file), file.public_url);
    }

    Ok(())
}
