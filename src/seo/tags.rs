//! SEO tag bundle assembly

use serde::Serialize;

use super::props::{ContentKind, SeoProps};
use crate::config::SiteConfig;

/// Theme color emitted on every page
pub const THEME_COLOR: &str = "#000000";

/// Twitter card kind used for every page
const TWITTER_CARD: &str = "summary_large_image";

/// The final tag bundle consumed by the head-rendering layer
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoTagBundle {
    pub title: String,
    pub description: String,
    /// Always an absolute URL
    pub canonical_url: String,
    pub robots: String,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
    pub author: String,
    pub theme_color: String,
}

/// Open Graph record with two fixed shapes.
///
/// Article-only fields exist only on the `Article` shape, so website
/// pages can never leak them as present-but-empty keys.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OpenGraph {
    Website(WebsiteOg),
    Article(ArticleOg),
}

impl OpenGraph {
    pub fn kind(&self) -> ContentKind {
        match self {
            OpenGraph::Website(_) => ContentKind::Website,
            OpenGraph::Article(_) => ContentKind::Article,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebsiteOg {
    #[serde(rename = "type")]
    pub kind: ContentKind,
    pub url: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub site_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleOg {
    #[serde(rename = "type")]
    pub kind: ContentKind,
    pub url: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub site_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_time: Option<String>,
    pub author: String,
    pub tags: Vec<String>,
}

/// Twitter card sub-record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TwitterCard {
    pub card: String,
    pub title: String,
    pub description: String,
    pub image: String,
}

impl SeoTagBundle {
    /// Assemble the tag bundle, filling absent properties from the
    /// site configuration. Total over any well-formed properties.
    pub fn build(props: &SeoProps, config: &SiteConfig) -> Self {
        let title = props.title.clone().unwrap_or_else(|| config.title.clone());
        let description = props
            .description
            .clone()
            .unwrap_or_else(|| config.description.clone());
        let image = props
            .image
            .clone()
            .unwrap_or_else(|| format!("{}/favicon.png", config.base_url()));
        let url = props.url.clone().unwrap_or_default();
        let kind = props.kind.unwrap_or_default();
        let author = props.author.clone().unwrap_or_else(|| config.author.clone());
        let tags = props.tags.clone().unwrap_or_default();
        let noindex = props.noindex.unwrap_or(false);

        let canonical_url = if url.is_empty() {
            config.base_url().to_string()
        } else {
            format!("{}{}", config.base_url(), url)
        };

        // The bare site title gets no suffix
        let full_title = if title == config.title {
            title
        } else {
            format!("{} | {}", title, config.title)
        };

        let robots = if noindex {
            "noindex, follow"
        } else {
            "index, follow"
        }
        .to_string();

        let open_graph = match kind {
            ContentKind::Website => OpenGraph::Website(WebsiteOg {
                kind,
                url: canonical_url.clone(),
                title: full_title.clone(),
                description: description.clone(),
                image: image.clone(),
                site_name: config.title.clone(),
            }),
            ContentKind::Article => OpenGraph::Article(ArticleOg {
                kind,
                url: canonical_url.clone(),
                title: full_title.clone(),
                description: description.clone(),
                image: image.clone(),
                site_name: config.title.clone(),
                published_time: props.published_time.clone(),
                modified_time: props.modified_time.clone(),
                author: author.clone(),
                tags,
            }),
        };

        let twitter = TwitterCard {
            card: TWITTER_CARD.to_string(),
            title: full_title.clone(),
            description: description.clone(),
            image: image.clone(),
        };

        SeoTagBundle {
            title: full_title,
            description,
            canonical_url,
            robots,
            open_graph,
            twitter,
            author,
            theme_color: THEME_COLOR.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SiteConfig {
        SiteConfig {
            title: "My Site".to_string(),
            description: "A site about things".to_string(),
            author: "Jane Writer".to_string(),
            url: "https://my.site".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults_from_config() {
        let bundle = SeoTagBundle::build(&SeoProps::default(), &config());
        assert_eq!(bundle.title, "My Site");
        assert_eq!(bundle.description, "A site about things");
        assert_eq!(bundle.canonical_url, "https://my.site");
        assert_eq!(bundle.robots, "index, follow");
        assert_eq!(bundle.author, "Jane Writer");
        assert_eq!(bundle.theme_color, THEME_COLOR);
        assert_eq!(bundle.twitter.card, "summary_large_image");
        assert_eq!(bundle.twitter.image, "https://my.site/favicon.png");
        assert_eq!(bundle.open_graph.kind(), ContentKind::Website);
    }

    #[test]
    fn test_title_suffix() {
        let props = SeoProps {
            title: Some("A Post".to_string()),
            ..Default::default()
        };
        let bundle = SeoTagBundle::build(&props, &config());
        assert_eq!(bundle.title, "A Post | My Site");
    }

    #[test]
    fn test_site_title_not_suffixed() {
        let props = SeoProps {
            title: Some("My Site".to_string()),
            ..Default::default()
        };
        let bundle = SeoTagBundle::build(&props, &config());
        assert_eq!(bundle.title, "My Site");
    }

    #[test]
    fn test_canonical_url_with_path() {
        let props = SeoProps {
            url: Some("/posts/hello".to_string()),
            ..Default::default()
        };
        let bundle = SeoTagBundle::build(&props, &config());
        assert_eq!(bundle.canonical_url, "https://my.site/posts/hello");
    }

    #[test]
    fn test_noindex_robots() {
        let props = SeoProps {
            noindex: Some(true),
            ..Default::default()
        };
        let bundle = SeoTagBundle::build(&props, &config());
        assert_eq!(bundle.robots, "noindex, follow");
    }

    #[test]
    fn test_website_og_has_no_article_keys() {
        let props = SeoProps {
            published_time: Some("2024-01-01T00:00:00.000Z".to_string()),
            tags: Some(vec!["go".to_string()]),
            ..Default::default()
        };
        let bundle = SeoTagBundle::build(&props, &config());

        let json = serde_json::to_value(&bundle.open_graph).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj["type"], "website");
        assert!(!obj.contains_key("publishedTime"));
        assert!(!obj.contains_key("modifiedTime"));
        assert!(!obj.contains_key("author"));
        assert!(!obj.contains_key("tags"));
    }

    #[test]
    fn test_article_og_carries_article_fields() {
        let props = SeoProps {
            kind: Some(ContentKind::Article),
            published_time: Some("2024-01-01T00:00:00.000Z".to_string()),
            tags: Some(vec!["go".to_string(), "web".to_string()]),
            ..Default::default()
        };
        let bundle = SeoTagBundle::build(&props, &config());

        let OpenGraph::Article(og) = &bundle.open_graph else {
            panic!("expected article open graph");
        };
        assert_eq!(og.published_time.as_deref(), Some("2024-01-01T00:00:00.000Z"));
        assert_eq!(og.author, "Jane Writer");
        assert_eq!(og.tags, vec!["go", "web"]);
        assert_eq!(og.url, bundle.canonical_url);
    }
}
