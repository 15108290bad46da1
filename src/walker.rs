//! Tree Walker
//!
//! Collects every atom node from the full parse tree and returns them in
//! ascending start-byte order. The traversal visits all descendants, not
//! just top-level declarations: nested functions are atoms too, and nested
//! classes are allowed to contain function atoms.

use crate::language::LanguageSpec;
use tree_sitter::Node;

/// Collect all nodes whose kind is in the spec's `atom` set, ordered by
/// ascending start byte.
///
/// Collect-then-sort rather than relying on traversal order: the walk is
/// not guaranteed to visit nodes in byte order, sorting is the correctness
/// guarantee for "chunks appear in source order". The sort is stable, so
/// two atoms sharing a start byte keep an unspecified but deterministic
/// relative order.
pub fn collect_atoms<'tree>(root: Node<'tree>, spec: &LanguageSpec) -> Vec<Node<'tree>> {
    let mut atoms = Vec::new();
    let mut stack = vec![root];

    while let Some(node) = stack.pop() {
        if spec.is_atom(node.kind()) {
            atoms.push(node);
        }
        for i in (0..node.child_count()).rev() {
            if let Some(child) = node.child(i) {
                stack.push(child);
            }
        }
    }

    atoms.sort_by_key(|n| n.start_byte());
    atoms
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::{grammar_for, spec_for};
    use tree_sitter::Parser;

    fn parse(tag: &str, code: &str) -> tree_sitter::Tree {
        let mut parser = Parser::new();
        parser.set_language(&grammar_for(tag).unwrap()).unwrap();
        parser.parse(code, None).unwrap()
    }

    #[test]
    fn test_atoms_in_source_order() {
        let code = r#"
class A {
    void first() {}
    void second() {}
}
class B {
    void third() {}
}
"#;
        let tree = parse("java", code);
        let spec = spec_for("java").unwrap();
        let atoms = collect_atoms(tree.root_node(), spec);

        let kinds: Vec<&str> = atoms.iter().map(|n| n.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                "class_declaration",
                "method_declaration",
                "method_declaration",
                "class_declaration",
                "method_declaration",
            ]
        );
        for pair in atoms.windows(2) {
            assert!(pair[0].start_byte() <= pair[1].start_byte());
        }
    }

    #[test]
    fn test_nested_class_methods_are_collected() {
        let code = r#"
class Outer {
    class Inner {
        void deep() {}
    }
    void shallow() {}
}
"#;
        let tree = parse("java", code);
        let spec = spec_for("java").unwrap();
        let atoms = collect_atoms(tree.root_node(), spec);

        let methods = atoms
            .iter()
            .filter(|n| spec.is_func(n.kind()))
            .count();
        assert_eq!(methods, 2);
    }

    #[test]
    fn test_head_nodes_are_not_atoms() {
        let code = "import java.util.List;\nclass A { void f() {} }\n";
        let tree = parse("java", code);
        let spec = spec_for("java").unwrap();
        let atoms = collect_atoms(tree.root_node(), spec);

        assert!(atoms.iter().all(|n| n.kind() != "import_declaration"));
    }

    #[test]
    fn test_no_atoms_in_header_only_file() {
        let code = "package com.example;\nimport java.util.List;\n";
        let tree = parse("java", code);
        let spec = spec_for("java").unwrap();
        let atoms = collect_atoms(tree.root_node(), spec);
        assert!(atoms.is_empty());
    }
}
