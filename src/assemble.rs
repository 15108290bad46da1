//! Chunk Assembler
//!
//! Converts function-category nodes into emitted chunk records, in source
//! order, with a single id counter scoped to one invocation. Oversized
//! bodies additionally get fixed-size fragment chunks; the whole-body main
//! chunk is retained alongside the fragments so a single chunk covering the
//! full member always exists.

use crate::chunk::Chunk;
use crate::language::LanguageSpec;
use crate::metadata::resolve;
use tree_sitter::Node;

/// Emit chunks for the given function nodes (already in source order).
///
/// Ids form the contiguous sequence `chunk:1..chunk:K` across the whole
/// invocation, never resetting per node. Metadata is resolved once per node
/// and cloned onto every fragment, so all chunks derived from one node carry
/// identical metadata.
pub fn assemble(
    language: &str,
    spec: &LanguageSpec,
    code: &str,
    func_nodes: &[Node],
    max_chars: usize,
) -> Vec<Chunk> {
    let mut out = Vec::new();
    let mut next_id: u64 = 0;

    for node in func_nodes {
        let main_text = &code[node.start_byte()..node.end_byte()];
        let meta = resolve(language, spec, *node, code);

        next_id += 1;
        out.push(Chunk::new(next_id, language, meta.clone(), main_text));

        if main_text.chars().count() > max_chars {
            for part in split_fixed(main_text, max_chars) {
                next_id += 1;
                out.push(Chunk::new(next_id, language, meta.clone(), part));
            }
        }
    }

    out
}

/// Split text into consecutive fragments of exactly `max_chars` characters,
/// the last possibly shorter. Boundaries fall on char boundaries; for
/// non-ASCII text a fragment may span more than `max_chars` bytes.
fn split_fixed(text: &str, max_chars: usize) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut count = 0;
    for (idx, _) in text.char_indices() {
        if count == max_chars {
            parts.push(&text[start..idx]);
            start = idx;
            count = 0;
        }
        count += 1;
    }
    if start < text.len() {
        parts.push(&text[start..]);
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::{grammar_for, spec_for};
    use crate::walker::collect_atoms;
    use tree_sitter::Parser;

    fn assemble_java(code: &str, max_chars: usize) -> Vec<Chunk> {
        let mut parser = Parser::new();
        parser.set_language(&grammar_for("java").unwrap()).unwrap();
        let tree = parser.parse(code, None).unwrap();
        let spec = spec_for("java").unwrap();
        let atoms = collect_atoms(tree.root_node(), spec);
        let funcs: Vec<Node> = atoms
            .into_iter()
            .filter(|n| spec.is_func(n.kind()))
            .collect();
        assemble("java", spec, code, &funcs, max_chars)
    }

    /// A method whose body pads the node text to at least `len` chars.
    fn java_with_body_of(len: usize) -> String {
        let mut body = String::new();
        while body.len() < len {
            body.push_str("int v = 0; ");
        }
        format!("class Big {{\n    void run() {{ {} }}\n}}\n", body)
    }

    #[test]
    fn test_short_method_single_chunk() {
        let chunks = assemble_java("class A { void f() {} }", 2000);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].id, "chunk:1");
        assert_eq!(chunks[0].content, "void f() {}");
    }

    #[test]
    fn test_oversized_method_emits_main_and_fragments() {
        let max_chars = 200;
        let code = java_with_body_of(500);
        let chunks = assemble_java(&code, max_chars);

        let main = &chunks[0];
        let total = main.content.chars().count();
        assert!(total > max_chars);

        let expected_fragments = total.div_ceil(max_chars);
        assert_eq!(chunks.len(), 1 + expected_fragments);

        // Ids are contiguous from 1.
        for (i, chunk) in chunks.iter().enumerate() {
            assert_eq!(chunk.id, format!("chunk:{}", i + 1));
        }

        // All fragments except the last have exactly max_chars chars.
        let fragments = &chunks[1..];
        for frag in &fragments[..fragments.len() - 1] {
            assert_eq!(frag.content.chars().count(), max_chars);
        }
        assert!(
            fragments.last().unwrap().content.chars().count() <= max_chars
        );

        // Concatenating fragments reconstructs the main body exactly.
        let rebuilt: String = fragments.iter().map(|c| c.content.as_str()).collect();
        assert_eq!(rebuilt, main.content);
    }

    #[test]
    fn test_fragments_share_identical_metadata() {
        let code = java_with_body_of(450);
        let chunks = assemble_java(&code, 100);
        assert!(chunks.len() > 1);
        for chunk in &chunks {
            assert_eq!(chunk.meta, chunks[0].meta);
            assert_eq!(chunk.language, "java");
        }
        assert_eq!(chunks[0].meta.api_name.as_deref(), Some("Big#run"));
    }

    #[test]
    fn test_counter_spans_multiple_nodes() {
        let code = "class A { void f() {} void g() {} }";
        let chunks = assemble_java(code, 2000);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].id, "chunk:1");
        assert_eq!(chunks[1].id, "chunk:2");
        assert_eq!(chunks[0].meta.method_name.as_deref(), Some("f"));
        assert_eq!(chunks[1].meta.method_name.as_deref(), Some("g"));
    }

    #[test]
    fn test_no_nodes_yields_empty() {
        let chunks = assemble_java("import java.util.List;", 2000);
        assert!(chunks.is_empty());
    }

    #[test]
    fn test_split_fixed_exact_sizes() {
        let text = "abcdefghij";
        assert_eq!(split_fixed(text, 4), vec!["abcd", "efgh", "ij"]);
        assert_eq!(split_fixed(text, 5), vec!["abcde", "fghij"]);
        assert_eq!(split_fixed(text, 20), vec!["abcdefghij"]);
    }

    #[test]
    fn test_split_fixed_counts_chars_not_bytes() {
        let text = "ééééé";
        let parts = split_fixed(text, 2);
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0].chars().count(), 2);
        assert_eq!(parts[2].chars().count(), 1);
        assert_eq!(parts.concat(), text);
    }
}
