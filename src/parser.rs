//! Format dispatch and envelope assembly.
//!
//! `parse` turns a path into a `Document` or a `ParseError`; `run` is the
//! caller-facing boundary that always produces a well-formed envelope.

use log::{debug, info};
use std::fs;
use std::path::Path;

use crate::cli::Cli;
use crate::document::Document;
use crate::encoding;
use crate::envelope::Envelope;
use crate::epub_reader;
use crate::error::ParseError;
use crate::segmenter;

/// Parse the file at `path` into a normalized document.
pub fn parse(path: &Path) -> Result<Document, ParseError> {
    if !path.is_file() {
        return Err(ParseError::NotFound(path.to_path_buf()));
    }

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "epub" => epub_reader::parse_epub(path),
        "txt" => parse_txt(path),
        _ => Err(ParseError::UnsupportedFormat(format!(".{extension}"))),
    }
}

/// Flat-text path: read bytes, decode with the detected encoding, segment.
/// The title comes from the file name; flat text carries no author.
fn parse_txt(path: &Path) -> Result<Document, ParseError> {
    let bytes = fs::read(path).map_err(ParseError::Decode)?;
    let (text, detected) = encoding::decode(&bytes);
    debug!("decoded {} bytes as {}", bytes.len(), detected.name());

    let title = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(Document {
        title,
        author: String::new(),
        chapters: segmenter::segment(&text),
    })
}

/// Parse, optionally persist, and fold every outcome into an envelope.
pub fn run(cli: &Cli) -> Envelope {
    let document = match parse(&cli.input) {
        Ok(document) => document,
        Err(err) => return Envelope::failure(err.to_string()),
    };

    let chapters = document.chapters.len();
    let envelope = Envelope::success(document);

    if let Some(output) = &cli.output {
        if let Err(source) = envelope.write_pretty(output) {
            let err = ParseError::Persistence { chapters, source };
            return Envelope::failure(err.to_string());
        }
        info!("wrote result to {}", output.display());
    }

    envelope
}
