use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong between a file path and a finished envelope.
///
/// All variants are converted into the failure envelope at the `parser::run`
/// boundary; none of them propagate past it.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Input path does not exist or is not a regular file.
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Extension outside the two supported formats.
    #[error("unsupported file format: {0} (supported: .epub, .txt)")]
    UnsupportedFormat(String),

    /// The EPUB container could not be opened or read.
    #[error("malformed container: {0:#}")]
    MalformedContainer(anyhow::Error),

    /// Reading the input bytes failed. Decoding itself is lossy and never
    /// fails, so this only surfaces on I/O errors.
    #[error("failed to read input: {0}")]
    Decode(#[source] io::Error),

    /// Parsing succeeded but writing the result envelope did not.
    #[error("parsed {chapters} chapters, but writing output failed: {source}")]
    Persistence {
        chapters: usize,
        #[source]
        source: io::Error,
    },
}
