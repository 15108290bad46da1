//! Extraction pipeline
//!
//! One request is a pure computation: parse the buffer, collect atoms,
//! filter to function-category nodes, assemble chunks. No locks, no shared
//! mutable state; the parse tree lives only for the duration of the call.

use crate::assemble::assemble;
use crate::chunk::Chunk;
use crate::language::{grammar_for, spec_for};
use crate::walker::collect_atoms;
use crate::{Error, Result};
use tree_sitter::{Node, Parser};

/// Default split threshold, in characters, for oversized function bodies.
pub const DEFAULT_MAX_CHARS: usize = 2000;

/// Extract function-level chunks from a source buffer.
///
/// Returns an empty list (not an error) when the source contains no
/// function-category atoms.
pub fn extract_chunks(language: &str, code: &str, max_chars: usize) -> Result<Vec<Chunk>> {
    let spec = spec_for(language)?;
    let grammar = grammar_for(language)?;

    let mut parser = Parser::new();
    parser
        .set_language(&grammar)
        .map_err(|e| Error::ParserUnavailable(format!("{}: {}", language, e)))?;

    let tree = parser
        .parse(code, None)
        .ok_or_else(|| Error::Parse(format!("parser produced no tree for {}", language)))?;

    let atoms = collect_atoms(tree.root_node(), spec);
    let func_nodes: Vec<Node> = atoms
        .into_iter()
        .filter(|n| spec.is_func(n.kind()))
        .collect();
    tracing::debug!(
        language,
        functions = func_nodes.len(),
        "collected function atoms"
    );

    if func_nodes.is_empty() {
        return Ok(Vec::new());
    }

    Ok(assemble(language, spec, code, &func_nodes, max_chars))
}
