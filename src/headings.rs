//! Chapter-heading pattern library.
//!
//! One ordered list shared by the flat-text segmenter and the EPUB title
//! inference. Order is the tie-break: earlier patterns win over later ones.

use once_cell::sync::Lazy;
use regex::Regex;

/// Patterns in priority order: CJK numbered chapters, "Chapter N" markers,
/// generic section markers, volume markers, then an OCR-damaged variant.
static HEADING_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"第[零一二三四五六七八九十百千两\d]+[章节回部篇]",
        r"Chapter\s+\d+",
        r"chapter\s+\d+",
        r"正文",
        r"序章",
        r"引子",
        r"楔子",
        r"尾声",
        r"第[零一二三四五六七八九十百千两\d]+卷",
        r"新第[零一二三四五六七八九十百千两\d]+[章节回部篇]",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("heading pattern must compile"))
    .collect()
});

/// All heading patterns, in priority order.
pub fn patterns() -> &'static [Regex] {
    &HEADING_PATTERNS
}

/// First match of the highest-priority pattern that matches anywhere in
/// `text`, trimmed. Priority is pattern order, not match position.
pub fn find_heading(text: &str) -> Option<String> {
    HEADING_PATTERNS
        .iter()
        .find_map(|pattern| pattern.find(text))
        .map(|m| m.as_str().trim().to_string())
}
