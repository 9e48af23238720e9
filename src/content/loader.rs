//! Page document loader

use anyhow::Result;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

use super::{FrontMatter, MarkdownRenderer};
use crate::Site;

/// Failure surfaced when a named page document cannot be loaded
#[derive(Debug, Error)]
pub enum LoadError {
    /// The document is missing or unreadable
    #[error("Could not find {page} page")]
    NotFound { page: String },
}

impl LoadError {
    /// HTTP-style status code for this failure
    pub fn status(&self) -> u16 {
        match self {
            LoadError::NotFound { .. } => 404,
        }
    }
}

/// A loaded page document
#[derive(Debug, Clone)]
pub struct Document {
    /// Raw front-matter from the source
    pub front_matter: FrontMatter,
    /// Rendered HTML content
    pub html: String,
    /// Source file path
    pub source: PathBuf,
}

impl Document {
    /// Document title, falling back to the file stem
    pub fn title(&self) -> &str {
        match self.front_matter.title.as_deref() {
            Some(title) => title,
            None => self
                .source
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("Untitled"),
        }
    }
}

/// Loads named page documents from the site's pages directory
pub struct PageLoader<'a> {
    site: &'a Site,
    renderer: MarkdownRenderer,
}

impl<'a> PageLoader<'a> {
    /// Create a new page loader
    pub fn new(site: &'a Site) -> Self {
        let renderer = MarkdownRenderer::with_options(
            &site.config.highlight.theme,
            site.config.highlight.line_number,
        );
        Self { site, renderer }
    }

    /// Load a named page document and render its markdown body.
    ///
    /// Any failure (missing file, bad front-matter) collapses to
    /// `NotFound`, the only caller-visible error.
    pub async fn load(&self, name: &str) -> Result<Document, LoadError> {
        let path = self.site.pages_dir.join(format!("{}.md", name));
        match self.load_document(&path).await {
            Ok(doc) => Ok(doc),
            Err(e) => {
                tracing::debug!("Failed to load page {:?}: {}", path, e);
                Err(LoadError::NotFound {
                    page: name.to_string(),
                })
            }
        }
    }

    async fn load_document(&self, path: &Path) -> Result<Document> {
        let raw = tokio::fs::read_to_string(path).await?;
        let (front_matter, body) = FrontMatter::parse(&raw)?;
        let html = self.renderer.render(body)?;

        Ok(Document {
            front_matter,
            html,
            source: path.to_path_buf(),
        })
    }

    /// List the names of available page documents, sorted
    pub fn list(&self) -> Result<Vec<String>> {
        if !self.site.pages_dir.exists() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in WalkDir::new(&self.site.pages_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if path.is_file() && is_markdown_file(path) {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    names.push(stem.to_string());
                }
            }
        }

        names.sort();
        Ok(names)
    }
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn site_with_pages(pages: &[(&str, &str)]) -> (tempfile::TempDir, Site) {
        let dir = tempfile::tempdir().unwrap();
        let pages_dir = dir.path().join("pages");
        fs::create_dir_all(&pages_dir).unwrap();
        for (name, content) in pages {
            fs::write(pages_dir.join(format!("{}.md", name)), content).unwrap();
        }
        let site = Site::new(dir.path()).unwrap();
        (dir, site)
    }

    #[tokio::test]
    async fn test_load_page() {
        let (_dir, site) = site_with_pages(&[(
            "about",
            "---\ntitle: About Me\ndescription: who I am\n---\n\n# Hello\n",
        )]);

        let loader = site.loader();
        let doc = loader.load("about").await.unwrap();
        assert_eq!(doc.title(), "About Me");
        assert!(doc.html.contains("Hello"));
        assert_eq!(doc.front_matter.description, Some("who I am".to_string()));
    }

    #[tokio::test]
    async fn test_missing_page_is_not_found() {
        let (_dir, site) = site_with_pages(&[]);

        let loader = site.loader();
        let err = loader.load("contact").await.unwrap_err();
        assert_eq!(err.status(), 404);
        assert_eq!(err.to_string(), "Could not find contact page");
    }

    #[tokio::test]
    async fn test_bad_frontmatter_is_not_found() {
        let (_dir, site) = site_with_pages(&[("broken", "---\ntitle: [oops\n---\nbody\n")]);

        let loader = site.loader();
        let err = loader.load("broken").await.unwrap_err();
        assert_eq!(err.status(), 404);
    }

    #[tokio::test]
    async fn test_title_falls_back_to_file_stem() {
        let (_dir, site) = site_with_pages(&[("contact", "Just content, no front-matter.\n")]);

        let loader = site.loader();
        let doc = loader.load("contact").await.unwrap();
        assert_eq!(doc.title(), "contact");
    }

    #[test]
    fn test_list_pages_sorted() {
        let (_dir, site) = site_with_pages(&[("contact", "c"), ("about", "a")]);

        let loader = site.loader();
        assert_eq!(loader.list().unwrap(), vec!["about", "contact"]);
    }

    #[test]
    fn test_list_empty_when_no_pages_dir() {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::new(dir.path()).unwrap();
        assert!(site.loader().list().unwrap().is_empty());
    }
}
