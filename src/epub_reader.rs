use anyhow::{Context, Result};
use rbook::prelude::*;
use rbook::Epub;
use std::path::Path;

use crate::document::{Chapter, Document};
use crate::error::ParseError;
use crate::headings;
use crate::markup;

/// How much of a document's text the heading-pattern fallback inspects.
const TITLE_SCAN_CHARS: usize = 200;

pub struct EpubData {
    epub: Epub,
}

impl EpubData {
    pub fn open(path: &Path) -> Result<Self> {
        let epub = Epub::options()
            .strict(false)
            .open(path)
            .with_context(|| format!("Failed to open EPUB: {}", path.display()))?;
        Ok(Self { epub })
    }

    pub fn title(&self) -> Option<String> {
        self.epub
            .metadata()
            .title()
            .map(|t| t.value().to_string())
    }

    pub fn author(&self) -> Option<String> {
        self.epub
            .metadata()
            .creators()
            .next()
            .map(|c| c.value().to_string())
    }

    /// Raw markup of every content document, in spine order.
    pub fn content_documents(&self) -> Result<Vec<String>> {
        let mut documents = Vec::new();
        let mut reader = self.epub.reader();

        while let Some(result) = reader.read_next() {
            let data = result.context("Failed to read content document")?;
            documents.push(data.content().to_string());
        }

        Ok(documents)
    }
}

/// Parse an EPUB container into a normalized document.
///
/// Any failure opening or reading the container is a malformed-container
/// error; missing metadata is not a failure.
pub fn parse_epub(path: &Path) -> Result<Document, ParseError> {
    extract(path).map_err(ParseError::MalformedContainer)
}

fn extract(path: &Path) -> Result<Document> {
    let epub = EpubData::open(path)?;
    let documents = epub.content_documents()?;

    Ok(assemble(
        epub.title().unwrap_or_default(),
        epub.author().unwrap_or_default(),
        &documents,
    ))
}

/// Build the document from package metadata and spine-ordered markup.
///
/// Every spine document becomes a chapter; position is the 1-based spine
/// index. Zero documents is a valid, degenerate result.
fn assemble(title: String, author: String, documents: &[String]) -> Document {
    let chapters = documents
        .iter()
        .enumerate()
        .map(|(i, html)| {
            let position = i + 1;
            let content = markup::extract_text(html);
            let title = infer_chapter_title(html, &content, position);
            Chapter {
                title,
                content,
                position,
            }
        })
        .collect();

    Document {
        title,
        author,
        chapters,
    }
}

/// Chapter title, in order of preference: first heading element, heading
/// pattern near the start of the text, positional default.
fn infer_chapter_title(html: &str, content: &str, position: usize) -> String {
    if let Some(title) = markup::first_heading(html) {
        return title;
    }

    let prefix: String = content.chars().take(TITLE_SCAN_CHARS).collect();
    if let Some(title) = headings::find_heading(&prefix) {
        return title;
    }

    format!("第{position}章")
}
