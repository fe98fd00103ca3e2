//! Per-file accumulation of extracted and skipped calls

use serde::{Serialize, Serializer};
use tracing::{debug, warn};
use tree_sitter::Node;

use super::call_extractor::extract_call;
use crate::error::{CallError, ErrorKind};
use crate::starlark::{StarlarkAst, Visitor, walk_module};
use crate::types::{FunctionCall, SourceLocation};

/// A call site that could not be modeled
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedCall {
    pub location: SourceLocation,
    /// Callee name, when the callee was a plain identifier
    pub function: Option<String>,
    pub kind: ErrorKind,
    #[serde(serialize_with = "serialize_display")]
    pub error: CallError,
}

impl SkippedCall {
    fn new(location: SourceLocation, error: CallError) -> Self {
        Self {
            location,
            function: error.function().map(str::to_string),
            kind: error.kind(),
            error,
        }
    }
}

fn serialize_display<S: Serializer>(error: &CallError, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(error)
}

/// Everything extracted from one file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Extraction {
    /// Successfully modeled calls, in order of encounter
    pub calls: Vec<FunctionCall>,
    pub skipped: Vec<SkippedCall>,
}

impl Extraction {
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    /// True when no call site had to be skipped
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }

    /// Extracted calls to the function `name`, in source order
    pub fn calls_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a FunctionCall> + 'a {
        self.calls.iter().filter(move |call| call.name == name)
    }
}

/// Visitor that runs the call extractor on every node and keeps the outcome.
///
/// A rejected call is logged and recorded; it never stops the walk.
pub struct CallCollector<'a> {
    ast: &'a StarlarkAst,
    extraction: Extraction,
}

impl<'a> CallCollector<'a> {
    pub fn new(ast: &'a StarlarkAst) -> Self {
        Self {
            ast,
            extraction: Extraction::default(),
        }
    }

    pub fn finish(self) -> Extraction {
        self.extraction
    }
}

impl<'tree> Visitor<'tree> for CallCollector<'_> {
    fn visit(&mut self, node: Node<'tree>, _ancestors: &[Node<'tree>]) {
        match extract_call(&node, self.ast) {
            Ok(None) => {}
            Ok(Some(call)) => {
                debug!("Line {}: {}", call.line(), call);
                self.extraction.calls.push(call);
            }
            Err(error) => {
                let location = SourceLocation::of(&node);
                warn!(
                    kind = %error.kind(),
                    "Skipping function call on line {}: {}",
                    location.line,
                    error
                );
                self.extraction.skipped.push(SkippedCall::new(location, error));
            }
        }
    }
}

/// Extract every call in a parsed file
pub fn extract_calls(ast: &StarlarkAst) -> Extraction {
    let mut collector = CallCollector::new(ast);
    walk_module(ast, &mut collector);
    let extraction = collector.finish();
    debug!(
        "Found {} function calls, skipped {}",
        extraction.calls.len(),
        extraction.skipped_count()
    );
    extraction
}
