//! Heuristic chapter segmentation for flat-text manuscripts.
//!
//! A pattern is accepted only when it matches at least twice; the first
//! accepted pattern (in priority order) partitions the whole text. Anything
//! before the first heading is front matter and is discarded.

use log::debug;

use crate::document::Chapter;
use crate::headings;

/// Title of the single fallback chapter when no pattern yields chapters.
pub const FALLBACK_TITLE: &str = "正文";

/// Minimum number of heading matches before a pattern is trusted.
const MIN_HEADING_MATCHES: usize = 2;

/// Split decoded text into titled chapters.
///
/// Never returns an empty list: when no heading pattern produces usable
/// chapters, the whole trimmed input becomes a single chapter.
pub fn segment(text: &str) -> Vec<Chapter> {
    for pattern in headings::patterns() {
        let marks: Vec<regex::Match<'_>> = pattern.find_iter(text).collect();
        if marks.len() < MIN_HEADING_MATCHES {
            continue;
        }

        debug!(
            "selected heading pattern {:?} ({} matches)",
            pattern.as_str(),
            marks.len()
        );

        let mut chapters = Vec::new();
        for (i, mark) in marks.iter().enumerate() {
            let body_end = marks.get(i + 1).map_or(text.len(), |next| next.start());
            let content = text[mark.end()..body_end].trim();
            // Headings with nothing between them carry no chapter body.
            if content.is_empty() {
                continue;
            }
            chapters.push(Chapter {
                title: mark.as_str().trim().to_string(),
                content: content.to_string(),
                position: chapters.len() + 1,
            });
        }

        if !chapters.is_empty() {
            return chapters;
        }
    }

    vec![Chapter {
        title: FALLBACK_TITLE.to_string(),
        content: text.trim().to_string(),
        position: 1,
    }]
}
