//! SEO properties derived from front-matter

use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};

use crate::content::{parse_date_string, FrontMatter};

/// Content classification for Open Graph
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    #[default]
    Website,
    Article,
}

impl ContentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Website => "website",
            ContentKind::Article => "article",
        }
    }
}

/// SEO properties for a single page render.
///
/// Every field is optional; absent fields take site-wide defaults when
/// the tag bundle is built.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeoProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<ContentKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub noindex: Option<bool>,
}

impl SeoProps {
    /// Derive SEO properties from front-matter.
    ///
    /// A non-empty `url_path` wins over the front-matter slug. Blank
    /// titles and descriptions are omitted entirely so the builder
    /// applies site defaults. An unparseable date drops the published
    /// time without surfacing an error.
    pub fn from_front_matter(fm: &FrontMatter, url_path: &str) -> Self {
        let url = if !url_path.is_empty() {
            url_path.to_string()
        } else if let Some(slug) = fm.slug.as_deref() {
            format!("/{}", slug)
        } else {
            String::new()
        };

        // Presence of categories, even an empty list, marks an article
        let kind = if fm.categories.is_some() {
            ContentKind::Article
        } else {
            ContentKind::Website
        };

        let mut props = SeoProps {
            url: Some(url),
            kind: Some(kind),
            tags: Some(fm.categories.clone().unwrap_or_default()),
            ..Default::default()
        };

        if let Some(title) = fm.title.as_deref() {
            let title = title.trim();
            if !title.is_empty() {
                props.title = Some(title.to_string());
            }
        }

        if let Some(description) = fm.description.as_deref() {
            let description = description.trim();
            if !description.is_empty() {
                props.description = Some(description.to_string());
            }
        }

        if let Some(date) = fm.date.as_deref() {
            match parse_date_string(date) {
                Some(dt) => {
                    props.published_time =
                        Some(dt.to_rfc3339_opts(SecondsFormat::Millis, true));
                }
                None => {
                    // Malformed dates are dropped, not surfaced
                    tracing::debug!("Ignoring unparseable date {:?}", date);
                }
            }
        }

        props
    }
}
