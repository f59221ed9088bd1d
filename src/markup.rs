//! Markup stripping for EPUB content documents.
//!
//! Thin capability layer over `scraper` so the extractor never touches HTML
//! directly: plain-text extraction and first-heading lookup.

use scraper::{Html, Selector};

/// Extract the plain text of an HTML document, whitespace-normalized.
pub fn extract_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let raw: String = document.root_element().text().collect();
    normalize_whitespace(&raw)
}

/// Text of the first heading element (`h1`–`h6`) in document order, if any.
pub fn first_heading(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("h1, h2, h3, h4, h5, h6").ok()?;
    let element = document.select(&selector).next()?;

    let title = element
        .text()
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string();
    (!title.is_empty()).then_some(title)
}

fn normalize_whitespace(text: &str) -> String {
    let mut result = text
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n");

    // Collapse runs of blank lines down to a single blank line
    while result.contains("\n\n\n") {
        result = result.replace("\n\n\n", "\n\n");
    }

    result.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_tags_and_keeps_text() {
        let html = "<html><body><p>山中无岁月，<strong>寒来</strong>暑往。</p></body></html>";
        assert_eq!(extract_text(html), "山中无岁月，寒来暑往。");
    }

    #[test]
    fn collapses_blank_line_runs() {
        let html = "<html><body><p>one</p>\n\n\n\n<p>two</p></body></html>";
        let text = extract_text(html);
        assert!(!text.contains("\n\n\n"));
        assert!(text.contains("one"));
        assert!(text.contains("two"));
    }

    #[test]
    fn empty_document_extracts_to_empty_string() {
        assert_eq!(extract_text(""), "");
        assert_eq!(extract_text("<html><body></body></html>"), "");
    }

    #[test]
    fn finds_first_heading_in_document_order() {
        let html = "<html><body><h1>第一章 入山</h1><p>正文。</p></body></html>";
        assert_eq!(first_heading(html).as_deref(), Some("第一章 入山"));
    }

    #[test]
    fn lower_level_headings_count_too() {
        let html = "<html><body><h3>Prologue</h3><p>Text.</p></body></html>";
        assert_eq!(first_heading(html).as_deref(), Some("Prologue"));
    }

    #[test]
    fn document_order_beats_heading_level() {
        let html = "<html><body><h2>楔子</h2><h1>第一章</h1></body></html>";
        assert_eq!(first_heading(html).as_deref(), Some("楔子"));
    }

    #[test]
    fn no_heading_yields_none() {
        let html = "<html><body><p>没有标题的页面。</p></body></html>";
        assert_eq!(first_heading(html), None);
    }

    #[test]
    fn whitespace_only_heading_yields_none() {
        let html = "<html><body><h1>   </h1><p>text</p></body></html>";
        assert_eq!(first_heading(html), None);
    }
}
