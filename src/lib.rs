//! # Astchunk - AST Chunk Service
//!
//! Splits source-code files into self-contained, function-level chunks
//! suitable for indexing or retrieval.
//!
//! Astchunk provides:
//! - A per-language grammar registry of chunkable node kinds
//! - Tree-sitter based atom collection in source order
//! - Enclosing-class / API-name metadata for class-based languages
//! - Heuristic leading-comment attachment over raw source text
//! - Deterministic fixed-size splitting of oversized function bodies
//! - An HTTP shell exposing the extraction pipeline

pub mod assemble;
pub mod chunk;
pub mod comment;
pub mod config;
pub mod extract;
pub mod language;
pub mod metadata;
pub mod server;
pub mod walker;

// Re-exports for convenient access
pub use chunk::{Chunk, ChunkMeta};
pub use extract::{DEFAULT_MAX_CHARS, extract_chunks};
pub use language::LanguageSpec;

/// Result type alias for Astchunk operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Astchunk operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The language tag is not a key in the grammar registry (client input error)
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// The grammar for a recognized tag could not be loaded into the parser
    #[error("Parser unavailable: {0}")]
    ParserUnavailable(String),

    /// The parser rejected or could not process the source buffer
    #[error("Parse error: {0}")]
    Parse(String),
}

impl Error {
    /// True for errors caused by the request rather than the service
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::UnsupportedLanguage(_))
    }
}
