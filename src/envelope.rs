use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

use crate::document::Document;

/// The success/failure envelope handed to the host process.
///
/// Exactly one of `error` and `data` is set. Compact on stdout; the same
/// envelope goes to the output file pretty-printed.
#[derive(Debug, Serialize, Deserialize)]
pub struct Envelope {
    pub success: bool,
    pub error: Option<String>,
    pub data: Option<Document>,
}

impl Envelope {
    pub fn success(document: Document) -> Self {
        Self {
            success: true,
            error: None,
            data: Some(document),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
            data: None,
        }
    }

    /// Write the envelope to `path` as pretty-printed UTF-8 JSON.
    pub fn write_pretty(&self, path: &Path) -> io::Result<()> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        fs::write(path, json)
    }
}
