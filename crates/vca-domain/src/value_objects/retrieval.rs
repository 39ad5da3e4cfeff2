//! Nearest-neighbor retrieval results

use serde::{Deserialize, Serialize};

/// A single nearest-neighbor match from the vector index
///
/// Slot ids are assigned in insertion order at build time and are always in
/// `[0, ntotal)`. Distance is squared Euclidean; smaller is closer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RetrievalMatch {
    /// Index slot the match came from (insertion order)
    pub slot: usize,
    /// Species/category label attached to the slot
    pub label: String,
    /// Squared Euclidean distance to the query vector
    pub distance: f32,
}

/// A corpus document, slot-aligned with the vector index
///
/// Document `i` is the source text of index slot `i`, so a retrieval match
/// resolves to the guidance text that was embedded at build time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CorpusDocument {
    /// Species/category the document belongs to
    pub species: String,
    /// The guidance text that was embedded
    pub text: String,
}

impl CorpusDocument {
    /// Create a corpus document
    pub fn new<S: Into<String>, T: Into<String>>(species: S, text: T) -> Self {
        Self {
            species: species.into(),
            text: text.into(),
        }
    }
}
