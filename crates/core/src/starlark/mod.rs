//! Starlark parsing and traversal using tree-sitter

pub mod literal;
pub mod starlark_parser;
pub mod walker;

// Re-export commonly used items
pub use literal::unquote;
pub use starlark_parser::{StarlarkAst, StarlarkParser};
pub use walker::{Visitor, walk, walk_module};
