//! Starlark parser using tree-sitter-starlark

use crate::error::{Error, Result};
use tree_sitter::{Node, Parser, Tree};

/// Parser for Starlark/BUILD files
pub struct StarlarkParser {
    parser: Parser,
}

impl StarlarkParser {
    /// Create a new Starlark parser
    pub fn new() -> Result<Self> {
        let mut parser = Parser::new();
        let language = tree_sitter_starlark::LANGUAGE;
        parser
            .set_language(&language.into())
            .map_err(|e| Error::TreeSitterError(format!("Failed to set Starlark language: {e}")))?;

        Ok(Self { parser })
    }

    /// Parse file content into an AST, rejecting sources with syntax errors
    pub fn parse_build_file(&mut self, content: &str) -> Result<StarlarkAst> {
        let tree = self
            .parser
            .parse(content, None)
            .ok_or_else(|| Error::ParseError("Failed to parse Starlark source".to_string()))?;

        if let Some(node) = first_error(tree.root_node()) {
            let start = node.start_position();
            return Err(Error::ParseError(format!(
                "syntax error at line {}, column {}",
                start.row + 1,
                start.column + 1
            )));
        }

        Ok(StarlarkAst {
            tree,
            source: content.to_string(),
        })
    }
}

fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    let mut cursor = node.walk();
    node.children(&mut cursor)
        .filter(|child| child.has_error())
        .find_map(first_error)
}

/// Parsed Starlark AST
pub struct StarlarkAst {
    pub tree: Tree,
    pub source: String,
}

impl StarlarkAst {
    /// Get the root node of the AST
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// Top-level statements in source order
    pub fn statements(&self) -> Vec<Node<'_>> {
        let root = self.root();
        let mut cursor = root.walk();
        root.named_children(&mut cursor)
            .filter(|node| !node.is_extra())
            .collect()
    }

    /// Get a slice of the source code for a node
    pub fn node_text<'a>(&'a self, node: &Node) -> &'a str {
        node.utf8_text(self.source.as_bytes()).unwrap_or("")
    }
}
