//! Metadata Resolver
//!
//! Derives structural metadata for a function-category node: the nearest
//! enclosing type declaration, the member's own identifier, and a
//! synthesized `Class#method` API name.
//!
//! Full metadata is currently extracted for the Java family only; other
//! languages keep the unified field set but populate `doc_summary` alone.
//! Extending another class-based family means reusing the same ancestor
//! walk with that language's `klass` kinds from the registry.

use crate::chunk::ChunkMeta;
use crate::comment::leading_comment;
use crate::language::LanguageSpec;
use tree_sitter::Node;

/// Chunk category for every emitted chunk.
pub const SUB_TYPE_FUNCTION: &str = "function";

/// Resolve the unified metadata for one function-category node.
pub fn resolve(language: &str, spec: &LanguageSpec, node: Node, code: &str) -> ChunkMeta {
    let mut meta = ChunkMeta {
        sub_type: Some(SUB_TYPE_FUNCTION.to_string()),
        class_name: None,
        method_name: None,
        api_name: None,
        doc_summary: leading_comment(code, node.start_byte()),
    };

    if language == "java" {
        let class_name = enclosing_class(node, spec).and_then(|c| identifier_of(c, code));
        // Constructor identifiers equal the enclosing class name in the
        // grammar, so one extraction covers methods and constructors.
        let method_name = identifier_of(node, code);
        meta.api_name = match (&class_name, &method_name) {
            (Some(c), Some(m)) => Some(format!("{}#{}", c, m)),
            (None, Some(m)) => Some(m.clone()),
            (Some(c), None) => Some(c.clone()),
            (None, None) => None,
        };
        meta.class_name = class_name;
        meta.method_name = method_name;
    }

    meta
}

/// Walk ancestors until a type-declaration node is found.
fn enclosing_class<'tree>(node: Node<'tree>, spec: &LanguageSpec) -> Option<Node<'tree>> {
    let mut cur = Some(node);
    while let Some(n) = cur {
        if spec.is_klass(n.kind()) {
            return Some(n);
        }
        cur = n.parent();
    }
    None
}

/// The first direct child of plain-identifier kind, as source text.
fn identifier_of(node: Node, code: &str) -> Option<String> {
    for i in 0..node.child_count() {
        let child = node.child(i)?;
        if child.kind() == "identifier" {
            return child.utf8_text(code.as_bytes()).ok().map(str::to_string);
        }
    }
    None
}
