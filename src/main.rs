//! CLI entry point for inkpress

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "inkpress")]
#[command(version)]
#[command(about = "A small markdown blog engine with SEO head metadata assembly", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a page and print its SEO head tags
    Meta {
        /// Name of the page document (without .md)
        page: String,

        /// URL path to use instead of the front-matter slug
        #[arg(short, long)]
        path: Option<String>,

        /// Print the tag bundle as JSON instead of head markup
        #[arg(long)]
        json: bool,
    },

    /// List available page documents
    List,

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "inkpress=debug,info"
    } else {
        "inkpress=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = cli.cwd.unwrap_or_else(|| std::env::current_dir().unwrap());

    match cli.command {
        Commands::Meta { page, path, json } => {
            let site = inkpress::Site::new(&base_dir)?;
            let loader = site.loader();

            let doc = loader
                .load(&page)
                .await
                .map_err(|e| anyhow!("{} (status {})", e, e.status()))?;

            let url_path = path.as_deref().unwrap_or("");
            let bundle = inkpress::seo::head_tags_for(&doc.front_matter, url_path, &site.config);

            if json {
                println!("{}", serde_json::to_string_pretty(&bundle)?);
            } else {
                println!("{}", inkpress::seo::render_head(&bundle));
            }
        }

        Commands::List => {
            let site = inkpress::Site::new(&base_dir)?;
            for name in site.loader().list()? {
                println!("{}", name);
            }
        }

        Commands::Version => {
            println!("inkpress version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
