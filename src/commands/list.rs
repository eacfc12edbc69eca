//! List site content

use anyhow::Result;

use crate::Blog;

/// List site content by type
pub fn run(blog: &Blog, content_type: &str, json: bool) -> Result<()> {
    match content_type {
        "post" | "posts" => {
            let posts = blog.posts()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&posts)?);
                return Ok(());
            }

            println!("Posts ({}):", posts.len());
            for post in posts {
                println!("  {} - {} [{}]", post.date, post.title, post.slug);
            }
        }
        "nav" | "navigation" => {
            let entries = blog.navigation()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
                return Ok(());
            }

            for entry in entries {
                println!("  {} -> {}", entry.title, entry.link);
            }
        }
        _ => {
            anyhow::bail!("Unknown type: {}. Available: post, nav", content_type);
        }
    }

    Ok(())
}
