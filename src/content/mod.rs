//! Content module - page documents, front-matter, and markdown rendering

mod frontmatter;
mod loader;
mod markdown;

pub use frontmatter::{parse_date_string, FrontMatter};
pub use loader::{Document, LoadError, PageLoader};
pub use markdown::MarkdownRenderer;
