//! SEO head metadata assembly
//!
//! Front-matter is normalized into per-page [`SeoProps`], then merged
//! with site-wide defaults into a [`SeoTagBundle`] ready for head
//! markup rendering.

mod head;
mod props;
mod tags;

pub use head::render_head;
pub use props::{ContentKind, SeoProps};
pub use tags::{ArticleOg, OpenGraph, SeoTagBundle, TwitterCard, WebsiteOg, THEME_COLOR};

use crate::config::SiteConfig;
use crate::content::FrontMatter;

/// Derive SEO properties from front-matter and build the final bundle
pub fn head_tags_for(fm: &FrontMatter, url_path: &str, config: &SiteConfig) -> SeoTagBundle {
    SeoTagBundle::build(&SeoProps::from_front_matter(fm, url_path), config)
}
