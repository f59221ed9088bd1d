use serde::{Deserialize, Serialize};

/// Normalized parse result handed to the host process.
///
/// Field order matters: it is the wire order of the JSON the host consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Book title; empty when undiscoverable.
    pub title: String,
    /// Author name; empty when undiscoverable.
    pub author: String,
    /// Chapters in reading order.
    pub chapters: Vec<Chapter>,
}

/// A single chapter with its 1-based position in reading order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub title: String,
    pub content: String,
    pub position: usize,
}
