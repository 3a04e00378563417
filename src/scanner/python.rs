//! Class definition counter for Python sources (tree-sitter)

use crate::error::Result;
use encoding_rs::GBK;
use std::path::Path;
use tracing::warn;
use tree_sitter::{Node, Parser};

/// Python 2 statements the grammar still accepts
const LEGACY_STATEMENTS: [&str; 2] = ["print_statement", "exec_statement"];

/// Outcome of counting one source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceCount {
    Classes(usize),
    /// Text contains a NUL character
    NulBytes,
    /// Source does not parse cleanly
    ParseError,
}

impl SourceCount {
    pub fn classes(&self) -> usize {
        match self {
            SourceCount::Classes(n) => *n,
            SourceCount::NulBytes | SourceCount::ParseError => 0,
        }
    }
}

pub struct ClassCounter {
    parser: Parser,
}

impl ClassCounter {
    pub fn new() -> Result<Self> {
        let mut parser = Parser::new();
        parser.set_language(&tree_sitter_python::LANGUAGE.into())?;
        Ok(Self { parser })
    }

    /// Count `class` definitions at any depth, decorated or nested ones included.
    pub fn count_source(&mut self, source: &str) -> SourceCount {
        if source.contains('\0') {
            return SourceCount::NulBytes;
        }

        let Some(tree) = self.parser.parse(source, None) else {
            return SourceCount::ParseError;
        };
        let root = tree.root_node();
        if root.has_error() {
            return SourceCount::ParseError;
        }

        match scan_tree(root) {
            Some(classes) => SourceCount::Classes(classes),
            None => SourceCount::ParseError,
        }
    }

    /// Read and count one file. Rejected files count as 0 and log a warning;
    /// only read errors are returned.
    pub fn count_file(&mut self, path: &Path) -> Result<usize> {
        let source = decode_source(std::fs::read(path)?);

        let counted = self.count_source(&source);
        match counted {
            SourceCount::Classes(_) => {}
            SourceCount::NulBytes => warn!("file contains NUL bytes, skipping: {}", path.display()),
            SourceCount::ParseError => warn!("unable to parse (syntax error): {}", path.display()),
        }
        Ok(counted.classes())
    }
}

/// Count class definitions in a single `.py` file.
pub fn count_classes_in_file(path: &Path) -> Result<usize> {
    ClassCounter::new()?.count_file(path)
}

/// UTF-8 first; otherwise GBK with undecodable bytes dropped.
pub fn decode_source(bytes: Vec<u8>) -> String {
    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            let (decoded, _) = GBK.decode_without_bom_handling(e.as_bytes());
            decoded.chars().filter(|&c| c != char::REPLACEMENT_CHARACTER).collect()
        }
    };

    match text.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_string(),
        None => text,
    }
}

/// Count `class_definition` nodes in pre-order with a cursor, so deep
/// expression trees do not grow the call stack. `None` when a Python 2
/// statement is found.
fn scan_tree(root: Node) -> Option<usize> {
    let mut cursor = root.walk();
    let mut classes = 0;

    loop {
        let kind = cursor.node().kind();
        if LEGACY_STATEMENTS.contains(&kind) {
            return None;
        }
        if kind == "class_definition" {
            classes += 1;
        }

        if cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return Some(classes);
            }
        }
    }
}
