//! Chunk types - the unified output records of the extraction pipeline
//!
//! Every emitted chunk carries the same field set, with absent metadata
//! serialized as explicit `null` rather than omitted. Fragments produced by
//! splitting one oversized function body carry metadata identical to their
//! main chunk.

use serde::{Deserialize, Serialize};

/// Structural metadata attached to a chunk.
///
/// `sub_type` is the constant `"function"` for every chunk the pipeline
/// currently emits; the remaining fields are populated only when the
/// language family supports them (Java-like class-based grammars).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChunkMeta {
    /// Chunk category, `"function"` for all emitted chunks
    pub sub_type: Option<String>,
    /// Nearest enclosing type declaration's identifier
    pub class_name: Option<String>,
    /// The member's own identifier (constructors reuse the class name)
    pub method_name: Option<String>,
    /// Synthesized `Class#method` identifier, never an empty string
    pub api_name: Option<String>,
    /// Leading documentation block recovered from the raw source
    pub doc_summary: Option<String>,
}

/// One emitted unit of output: a function/method/constructor body or a
/// fixed-size fragment thereof, plus metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// `chunk:<N>` with N a 1-based, gapless counter scoped to one request
    pub id: String,
    /// The resolved language tag
    pub language: String,
    #[serde(flatten)]
    pub meta: ChunkMeta,
    /// Exact source text of the node span, or one fragment of it
    pub content: String,
}

impl Chunk {
    /// Build a chunk from a counter value, sharing metadata by clone
    pub fn new(id: u64, language: &str, meta: ChunkMeta, content: impl Into<String>) -> Self {
        Self {
            id: format!("chunk:{}", id),
            language: language.to_string(),
            meta,
            content: content.into(),
        }
    }
}
