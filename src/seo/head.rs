//! Head markup rendering for a tag bundle

use super::tags::{OpenGraph, SeoTagBundle};

/// Render a tag bundle as document head markup
pub fn render_head(bundle: &SeoTagBundle) -> String {
    let mut lines = Vec::new();

    lines.push(format!("<title>{}</title>", escape(&bundle.title)));
    lines.push(meta("description", &bundle.description));
    lines.push(format!(
        r#"<link rel="canonical" href="{}">"#,
        escape(&bundle.canonical_url)
    ));
    lines.push(meta("robots", &bundle.robots));
    lines.push(meta("author", &bundle.author));
    lines.push(meta("theme-color", &bundle.theme_color));

    match &bundle.open_graph {
        OpenGraph::Website(og) => {
            lines.push(property("og:type", og.kind.as_str()));
            lines.push(property("og:url", &og.url));
            lines.push(property("og:title", &og.title));
            lines.push(property("og:description", &og.description));
            lines.push(property("og:image", &og.image));
            lines.push(property("og:site_name", &og.site_name));
        }
        OpenGraph::Article(og) => {
            lines.push(property("og:type", og.kind.as_str()));
            lines.push(property("og:url", &og.url));
            lines.push(property("og:title", &og.title));
            lines.push(property("og:description", &og.description));
            lines.push(property("og:image", &og.image));
            lines.push(property("og:site_name", &og.site_name));
            if let Some(published) = &og.published_time {
                lines.push(property("article:published_time", published));
            }
            if let Some(modified) = &og.modified_time {
                lines.push(property("article:modified_time", modified));
            }
            lines.push(property("article:author", &og.author));
            for tag in &og.tags {
                lines.push(property("article:tag", tag));
            }
        }
    }

    lines.push(meta("twitter:card", &bundle.twitter.card));
    lines.push(meta("twitter:title", &bundle.twitter.title));
    lines.push(meta("twitter:description", &bundle.twitter.description));
    lines.push(meta("twitter:image", &bundle.twitter.image));

    lines.join("\n")
}

fn meta(name: &str, content: &str) -> String {
    format!(r#"<meta name="{}" content="{}">"#, name, escape(content))
}

fn property(prop: &str, content: &str) -> String {
    format!(
        r#"<meta property="{}" content="{}">"#,
        prop,
        escape(content)
    )
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
