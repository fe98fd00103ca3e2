//! starquery - typed extraction of function calls from Starlark files
//!
//! This crate provides functionality to:
//! - Parse Starlark/BUILD files with tree-sitter
//! - Walk every expression of the parsed tree
//! - Model each `name(param = value, ...)` call whose values are strings or
//!   lists of strings, recording the call sites that cannot be modeled
pub mod error;
pub mod extract;
pub mod starlark;
pub mod types;

// Re-export commonly used types and traits
pub use error::{ArgError, CallError, Error, ErrorKind, Result};
pub use extract::{Extraction, SkippedCall, extract_calls};
pub use starlark::{StarlarkAst, StarlarkParser};
pub use types::*;

/// Parse `source` and extract its calls in one step
pub fn query_source(source: &str) -> Result<Extraction> {
    let mut parser = StarlarkParser::new()?;
    let ast = parser.parse_build_file(source)?;
    Ok(extract_calls(&ast))
}
