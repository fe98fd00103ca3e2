use serde::Serialize;
use std::fmt;
use tree_sitter::Node;

/// Source location of a call expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct SourceLocation {
    /// 1-based line
    pub line: usize,
    /// 0-based column
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    pub fn of(node: &Node) -> Self {
        let start = node.start_position();
        Self {
            line: start.row + 1,
            column: start.column,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
