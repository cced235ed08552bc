//! Markdown → HTML report rendering.

mod template;

use crate::error::Result;
use pulldown_cmark::{html, Options, Parser};
use std::fs;
use std::path::Path;
use template::REPORT_CSS;

/// Header text of the static report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportMeta {
    pub title: String,
    pub subtitle: String,
}

impl Default for ReportMeta {
    fn default() -> Self {
        Self {
            title: "🚀 Health Package Analysis".to_string(),
            subtitle: "AI comparison of scraped checkup packages".to_string(),
        }
    }
}

impl ReportMeta {
    /// Default title with the page URL as subtitle.
    pub fn for_source(url: &str) -> Self {
        Self {
            subtitle: format!("Source: {url}"),
            ..Self::default()
        }
    }
}

/// Convert markdown to an HTML fragment (tables and fenced code enabled).
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, options);
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

/// Render a complete, self-contained HTML document around the markdown.
pub fn render_report(markdown: &str, meta: &ReportMeta) -> String {
    let body = markdown_to_html(markdown);
    let title = html_escape::encode_text(&meta.title);
    let subtitle = html_escape::encode_text(&meta.subtitle);

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
    <style>{REPORT_CSS}    </style>
</head>
<body>
    <h1>{title}</h1>
    <p class="subtitle">{subtitle}</p>

    <div class="section-title">🧠 AI Analysis &amp; Recommendations</div>
    <div class="llm-box">
{body}    </div>
</body>
</html>
"#
    )
}

/// Render and write the report, creating parent directories as needed.
pub fn write_report(path: &Path, markdown: &str, meta: &ReportMeta) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, render_report(markdown, meta))?;
    Ok(())
}
