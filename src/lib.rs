//! inkpress: a small markdown blog engine
//!
//! This crate loads markdown page documents with YAML front-matter,
//! renders them to HTML with syntax-highlighted code blocks, and
//! assembles SEO head metadata from front-matter merged with the
//! site-wide configuration.

pub mod config;
pub mod content;
pub mod seo;

use anyhow::Result;
use std::path::Path;

/// The main site handle
#[derive(Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Directory containing markdown page documents
    pub pages_dir: std::path::PathBuf,
}

impl Site {
    /// Create a new Site instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let pages_dir = base_dir.join(&config.pages_dir);

        Ok(Self {
            config,
            base_dir,
            pages_dir,
        })
    }

    /// Create a loader for this site's page documents
    pub fn loader(&self) -> content::PageLoader<'_> {
        content::PageLoader::new(self)
    }
}
