//! CLI entry point for blog-index

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "blog-index")]
#[command(version)]
#[command(about = "Post listing, download attachments and date display for an MDX blog", long_about = None)]
struct Cli {
    /// Set the site directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List site information
    #[command(alias = "ls")]
    List {
        /// Type of content to list (post, nav)
        #[arg(default_value = "post")]
        r#type: String,
    },

    /// List the files attached to a post
    Downloads {
        /// Post slug or page path (e.g. `dumping-saves` or `/dumping-saves/`)
        target: String,
    },

    /// Format a date the way post pages display it
    Date {
        /// Raw date string
        value: String,
    },

    /// Show the head, timestamp and download buttons of a post page
    Page {
        /// Page path
        path: String,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "blog_index=debug,info"
    } else {
        "blog_index=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to read current directory")?,
    };

    match cli.command {
        Commands::List { r#type } => {
            let blog = blog_index::Blog::new(&base_dir)?;
            tracing::debug!("Listing {} in {:?}", r#type, blog.source_dir);
            blog_index::commands::list::run(&blog, &r#type, cli.json)?;
        }

        Commands::Downloads { target } => {
            let blog = blog_index::Blog::new(&base_dir)?;
            blog_index::commands::downloads::run(&blog, &target, cli.json)?;
        }

        Commands::Date { value } => {
            blog_index::commands::date::run(&value);
        }

        Commands::Page { path } => {
            let blog = blog_index::Blog::new(&base_dir)?;
            blog_index::commands::page::run(&blog, &path, cli.json)?;
        }

        Commands::Version => {
            println!("blog-index version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
