//! Grammar Registry
//!
//! Static table mapping a language tag to the node-kind categories the
//! extraction pipeline cares about:
//! - `atom`: nodes eligible to become chunks
//! - `func`: callable members (subset of `atom`)
//! - `klass`: type/container declarations (subset of `atom`)
//! - `head`: import/using nodes, informational only, never emitted
//!
//! The table is the single source of truth for what counts as a chunkable
//! atom per language. Adding a language means adding one entry here, never
//! touching traversal or assembly logic.

use crate::{Error, Result};

/// Node-kind categories for one supported language.
#[derive(Debug, Clone, Copy)]
pub struct LanguageSpec {
    /// Nodes eligible to become chunk boundaries
    pub atom: &'static [&'static str],
    /// Callable members: functions, methods, constructors
    pub func: &'static [&'static str],
    /// Type/container declarations
    pub klass: &'static [&'static str],
    /// Import/using nodes, never emitted as chunks
    pub head: &'static [&'static str],
}

impl LanguageSpec {
    /// Check if a node kind is a chunkable atom
    pub fn is_atom(&self, kind: &str) -> bool {
        self.atom.contains(&kind)
    }

    /// Check if a node kind is a callable member
    pub fn is_func(&self, kind: &str) -> bool {
        self.func.contains(&kind)
    }

    /// Check if a node kind is a type/container declaration
    pub fn is_klass(&self, kind: &str) -> bool {
        self.klass.contains(&kind)
    }

    /// Check if a node kind is an import/using header
    pub fn is_head(&self, kind: &str) -> bool {
        self.head.contains(&kind)
    }
}

static JAVA: LanguageSpec = LanguageSpec {
    atom: &[
        "class_declaration",
        "interface_declaration",
        "enum_declaration",
        "method_declaration",
        "constructor_declaration",
    ],
    func: &["method_declaration", "constructor_declaration"],
    klass: &[
        "class_declaration",
        "interface_declaration",
        "enum_declaration",
    ],
    head: &["package_declaration", "import_declaration"],
};

static PYTHON: LanguageSpec = LanguageSpec {
    atom: &["class_definition", "function_definition"],
    func: &["function_definition"],
    klass: &["class_definition"],
    head: &["import_statement", "import_from_statement"],
};

static JAVASCRIPT: LanguageSpec = LanguageSpec {
    atom: &["class_declaration", "function_declaration", "method_definition"],
    func: &["function_declaration", "method_definition"],
    klass: &["class_declaration"],
    head: &["import_statement"],
};

static TYPESCRIPT: LanguageSpec = LanguageSpec {
    atom: &["class_declaration", "function_declaration", "method_definition"],
    func: &["function_declaration", "method_definition"],
    klass: &["class_declaration"],
    head: &["import_statement"],
};

static GO: LanguageSpec = LanguageSpec {
    atom: &["type_declaration", "function_declaration", "method_declaration"],
    func: &["function_declaration", "method_declaration"],
    klass: &["type_declaration"],
    head: &["import_declaration"],
};

static C: LanguageSpec = LanguageSpec {
    atom: &["function_definition"],
    func: &["function_definition"],
    klass: &[],
    head: &["preproc_include"],
};

static CPP: LanguageSpec = LanguageSpec {
    atom: &["class_specifier", "function_definition"],
    func: &["function_definition"],
    klass: &["class_specifier"],
    head: &["preproc_include", "namespace_definition"],
};

static C_SHARP: LanguageSpec = LanguageSpec {
    atom: &[
        "class_declaration",
        "struct_declaration",
        "interface_declaration",
        "method_declaration",
        "constructor_declaration",
    ],
    func: &["method_declaration", "constructor_declaration"],
    klass: &[
        "class_declaration",
        "struct_declaration",
        "interface_declaration",
    ],
    head: &["using_directive", "namespace_declaration"],
};

static RUST: LanguageSpec = LanguageSpec {
    atom: &[
        "struct_item",
        "enum_item",
        "trait_item",
        "impl_item",
        "function_item",
    ],
    func: &["function_item"],
    klass: &["struct_item", "enum_item", "trait_item", "impl_item"],
    head: &["use_declaration", "extern_crate_declaration", "mod_item"],
};

/// All language tags recognized by the registry
pub fn supported_languages() -> &'static [&'static str] {
    &[
        "java",
        "python",
        "javascript",
        "typescript",
        "go",
        "c",
        "cpp",
        "c_sharp",
        "rust",
    ]
}

/// Look up the node-kind categories for a language tag
pub fn spec_for(tag: &str) -> Result<&'static LanguageSpec> {
    match tag {
        "java" => Ok(&JAVA),
        "python" => Ok(&PYTHON),
        "javascript" => Ok(&JAVASCRIPT),
        "typescript" => Ok(&TYPESCRIPT),
        "go" => Ok(&GO),
        "c" => Ok(&C),
        "cpp" => Ok(&CPP),
        "c_sharp" => Ok(&C_SHARP),
        "rust" => Ok(&RUST),
        _ => Err(Error::UnsupportedLanguage(tag.to_string())),
    }
}

/// Get the Tree-sitter grammar for a recognized language tag
pub fn grammar_for(tag: &str) -> Result<tree_sitter::Language> {
    match tag {
        "java" => Ok(tree_sitter_java::LANGUAGE.into()),
        "python" => Ok(tree_sitter_python::LANGUAGE.into()),
        "javascript" => Ok(tree_sitter_javascript::LANGUAGE.into()),
        "typescript" => Ok(tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into()),
        "go" => Ok(tree_sitter_go::LANGUAGE.into()),
        "c" => Ok(tree_sitter_c::LANGUAGE.into()),
        "cpp" => Ok(tree_sitter_cpp::LANGUAGE.into()),
        "c_sharp" => Ok(tree_sitter_c_sharp::LANGUAGE.into()),
        "rust" => Ok(tree_sitter_rust::LANGUAGE.into()),
        _ => Err(Error::UnsupportedLanguage(tag.to_string())),
    }
}

/// Map a file extension to a registry tag (for the CLI)
pub fn tag_from_extension(ext: &str) -> Option<&'static str> {
    match ext.to_lowercase().as_str() {
        "java" => Some("java"),
        "py" | "pyi" => Some("python"),
        "js" | "mjs" | "cjs" => Some("javascript"),
        "ts" | "tsx" => Some("typescript"),
        "go" => Some("go"),
        "c" | "h" => Some("c"),
        "cpp" | "cc" | "cxx" | "hpp" | "hh" => Some("cpp"),
        "cs" => Some("c_sharp"),
        "rs" => Some("rust"),
        _ => None,
    }
}
