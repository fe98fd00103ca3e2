//! Building `FunctionCall`s from call expression nodes

use tree_sitter::Node;

use super::arg_modeler::model_arg;
use crate::error::{ArgError, CallError};
use crate::starlark::StarlarkAst;
use crate::types::{FunctionCall, SourceLocation};

/// Extract a function call from `node`.
///
/// Returns `Ok(None)` for nodes that are not call expressions. A call is
/// either modeled completely or rejected with the first error found.
pub fn extract_call(node: &Node, ast: &StarlarkAst) -> Result<Option<FunctionCall>, CallError> {
    if node.kind() != "call" {
        return Ok(None);
    }

    let name = match node.child_by_field_name("function") {
        Some(callee) if callee.kind() == "identifier" => ast.node_text(&callee).to_string(),
        Some(callee) => {
            return Err(CallError::CalleeNotIdentifier {
                found: callee.kind().to_string(),
            });
        }
        None => {
            return Err(CallError::CalleeNotIdentifier {
                found: "nothing".to_string(),
            });
        }
    };

    if name == "load" && is_top_level(node) {
        return Ok(None);
    }

    let mut args = Vec::new();
    if let Some(arguments) = node.child_by_field_name("arguments") {
        // `f(x for x in y)` carries a bare generator instead of an argument list
        if arguments.kind() != "argument_list" {
            return Err(CallError::InvalidArgument {
                function: name,
                source: ArgError::NotAssignment {
                    position: 0,
                    found: arguments.kind().to_string(),
                },
            });
        }

        let mut cursor = arguments.walk();
        let arg_nodes = arguments
            .named_children(&mut cursor)
            .filter(|arg| !arg.is_extra());
        for (position, arg) in arg_nodes.enumerate() {
            match model_arg(&arg, position, ast) {
                Ok(arg) => args.push(arg),
                Err(source) => {
                    return Err(CallError::InvalidArgument {
                        function: name,
                        source,
                    });
                }
            }
        }
    }

    Ok(Some(FunctionCall {
        name,
        location: SourceLocation::of(node),
        args,
    }))
}

/// `load(...)` as a statement of its own is an import, not a call
fn is_top_level(node: &Node) -> bool {
    node.parent()
        .filter(|parent| parent.kind() == "expression_statement")
        .and_then(|statement| statement.parent())
        .is_some_and(|module| module.kind() == "module")
}
