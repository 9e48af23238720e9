//! Markdown rendering with syntax highlighting, heading ids, and
//! table-of-contents insertion

use anyhow::Result;
use lazy_static::lazy_static;
use pulldown_cmark::{html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};
use std::collections::HashMap;
use syntect::highlighting::ThemeSet;
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

lazy_static! {
    /// Process-wide syntax definitions, loaded once on first use
    static ref SYNTAX_SET: SyntaxSet = SyntaxSet::load_defaults_newlines();
    /// Process-wide highlighting themes, loaded once on first use
    static ref THEME_SET: ThemeSet = ThemeSet::load_defaults();
}

/// Heading slugs that trigger table-of-contents insertion
const TOC_SLUGS: [&str; 3] = ["table-of-contents", "toc", "contents"];

/// Markdown renderer with syntax highlighting
pub struct MarkdownRenderer {
    theme_name: String,
    line_numbers: bool,
}

/// A heading collected during rendering
struct HeadingRef {
    level: usize,
    id: String,
    text: String,
    /// Index of the heading's End event in the event stream
    end_index: usize,
}

impl MarkdownRenderer {
    /// Create a new markdown renderer
    pub fn new() -> Self {
        Self {
            theme_name: "base16-ocean.dark".to_string(),
            line_numbers: false,
        }
    }

    /// Create with custom settings
    pub fn with_options(theme: &str, line_numbers: bool) -> Self {
        Self {
            theme_name: theme.to_string(),
            line_numbers,
        }
    }

    /// Render markdown to HTML
    pub fn render(&self, markdown: &str) -> Result<String> {
        // Enable most options but NOT YAML metadata blocks,
        // front-matter is handled separately in FrontMatter::parse()
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_SMART_PUNCTUATION
            | Options::ENABLE_HEADING_ATTRIBUTES
            | Options::ENABLE_GFM;
        let parser = Parser::new_ext(markdown, options);

        let mut events: Vec<Event> = Vec::new();
        let mut code_block_lang: Option<String> = None;
        let mut code_block_content = String::new();
        let mut in_code_block = false;

        for event in parser {
            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    in_code_block = true;
                    code_block_lang = match kind {
                        CodeBlockKind::Fenced(lang) => {
                            let lang = lang.to_string();
                            if lang.is_empty() {
                                None
                            } else {
                                Some(lang)
                            }
                        }
                        CodeBlockKind::Indented => None,
                    };
                    code_block_content.clear();
                }
                Event::End(TagEnd::CodeBlock) => {
                    in_code_block = false;
                    let highlighted =
                        self.highlight_code(&code_block_content, code_block_lang.as_deref());
                    events.push(Event::Html(CowStr::from(highlighted)));
                    code_block_lang = None;
                }
                Event::Text(text) if in_code_block => {
                    code_block_content.push_str(&text);
                }
                other => events.push(other),
            }
        }

        let headings = assign_heading_ids(&mut events);
        insert_toc(&mut events, &headings);

        let mut html_output = String::new();
        html::push_html(&mut html_output, events.into_iter());

        Ok(html_output)
    }

    /// Highlight a code block
    fn highlight_code(&self, code: &str, lang: Option<&str>) -> String {
        let lang = lang.unwrap_or("text");

        // Try to find syntax for the language
        let syntax = SYNTAX_SET
            .find_syntax_by_token(lang)
            .or_else(|| SYNTAX_SET.find_syntax_by_extension(lang))
            .unwrap_or_else(|| SYNTAX_SET.find_syntax_plain_text());

        let theme = THEME_SET.themes.get(&self.theme_name).unwrap_or_else(|| {
            THEME_SET
                .themes
                .values()
                .next()
                .expect("No themes available")
        });

        match highlighted_html_for_string(code, &SYNTAX_SET, syntax, theme) {
            Ok(highlighted) => {
                if self.line_numbers {
                    self.add_line_numbers(&highlighted, lang)
                } else {
                    format!(r#"<div class="highlight {}">{}</div>"#, lang, highlighted)
                }
            }
            Err(_) => {
                // Fallback to plain code block
                let escaped = html_escape(code);
                format!(
                    r#"<pre><code class="language-{}">{}</code></pre>"#,
                    lang, escaped
                )
            }
        }
    }

    /// Add line numbers to highlighted code
    fn add_line_numbers(&self, code: &str, lang: &str) -> String {
        let lines: Vec<&str> = code.lines().collect();
        let line_count = lines.len();

        let mut gutter = String::new();
        let mut code_lines = String::new();

        for (i, line) in lines.iter().enumerate() {
            gutter.push_str(&format!(r#"<span class="line-number">{}</span>"#, i + 1));
            if i < line_count - 1 {
                gutter.push('\n');
            }

            code_lines.push_str(line);
            if i < line_count - 1 {
                code_lines.push('\n');
            }
        }

        format!(
            r#"<figure class="highlight {}"><table><tr><td class="gutter"><pre>{}</pre></td><td class="code"><pre>{}</pre></td></tr></table></figure>"#,
            lang, gutter, code_lines
        )
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Assign a slugified id to every heading that lacks one.
/// Duplicate slugs get -1, -2, ... suffixes.
fn assign_heading_ids(events: &mut [Event]) -> Vec<HeadingRef> {
    let mut used: HashMap<String, usize> = HashMap::new();
    let mut headings = Vec::new();

    let mut i = 0;
    while i < events.len() {
        let (level, explicit_id) = match &events[i] {
            Event::Start(Tag::Heading { level, id, .. }) => {
                (*level as usize, id.as_ref().map(|c| c.to_string()))
            }
            _ => {
                i += 1;
                continue;
            }
        };

        // Collect the heading's inner text up to the matching End
        let start = i;
        let mut text = String::new();
        let mut j = i + 1;
        while j < events.len() {
            match &events[j] {
                Event::End(TagEnd::Heading(_)) => break,
                Event::Text(t) => text.push_str(t),
                Event::Code(t) => text.push_str(t),
                _ => {}
            }
            j += 1;
        }

        let slug = explicit_id.unwrap_or_else(|| unique_slug(&text, &mut used));
        if let Event::Start(Tag::Heading { id, .. }) = &mut events[start] {
            *id = Some(CowStr::from(slug.clone()));
        }

        headings.push(HeadingRef {
            level,
            id: slug,
            text,
            end_index: j,
        });
        i = j + 1;
    }

    headings
}

fn unique_slug(text: &str, used: &mut HashMap<String, usize>) -> String {
    let base = slug::slugify(text);
    let count = used.entry(base.clone()).or_insert(0);
    let slug = if *count == 0 {
        base.clone()
    } else {
        format!("{}-{}", base, count)
    };
    *count += 1;
    slug
}

/// Insert a tight list of links to subsequent headings after a heading
/// named "Table of Contents" (or "toc"/"contents")
fn insert_toc(events: &mut Vec<Event>, headings: &[HeadingRef]) {
    let Some(pos) = headings
        .iter()
        .position(|h| TOC_SLUGS.contains(&h.id.as_str()))
    else {
        return;
    };

    let entries = &headings[pos + 1..];
    if entries.is_empty() {
        return;
    }

    let toc = toc_html(entries);
    events.insert(headings[pos].end_index + 1, Event::Html(CowStr::from(toc)));
}

fn toc_html(entries: &[HeadingRef]) -> String {
    let base = entries.iter().map(|h| h.level).min().unwrap_or(2);
    let mut out = String::from(r#"<ul class="toc">"#);
    let mut depth = base;
    let mut open_item = false;

    for heading in entries {
        let level = heading.level.max(base);
        if level > depth {
            // Nested list stays inside the open item
            while depth < level {
                out.push_str("<ul>");
                depth += 1;
            }
        } else {
            if open_item {
                out.push_str("</li>");
            }
            while depth > level {
                out.push_str("</ul></li>");
                depth -= 1;
            }
        }
        out.push_str(&format!(
            r##"<li><a href="#{}">{}</a>"##,
            heading.id,
            html_escape(&heading.text)
        ));
        open_item = true;
    }

    if open_item {
        out.push_str("</li>");
    }
    while depth > base {
        out.push_str("</ul></li>");
        depth -= 1;
    }
    out.push_str("</ul>");
    out
}

/// Simple HTML escaping
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
