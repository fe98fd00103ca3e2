//! Conversion of call arguments into typed `FunctionArg`s

use tree_sitter::Node;

use crate::error::ArgError;
use crate::starlark::{StarlarkAst, unquote};
use crate::types::{ArgValue, FunctionArg};

/// Model one argument of a call. `position` is 0-based and only used for
/// diagnostics.
///
/// Only `name = "string"` and `name = ["string", ...]` are accepted.
pub fn model_arg(node: &Node, position: usize, ast: &StarlarkAst) -> Result<FunctionArg, ArgError> {
    if node.kind() != "keyword_argument" {
        return Err(ArgError::NotAssignment {
            position,
            found: node.kind().to_string(),
        });
    }

    let param = match node.child_by_field_name("name") {
        Some(name) if name.kind() == "identifier" => ast.node_text(&name).to_string(),
        Some(name) => {
            return Err(ArgError::NameInvalid {
                position,
                found: name.kind().to_string(),
            });
        }
        None => {
            return Err(ArgError::NameInvalid {
                position,
                found: "nothing".to_string(),
            });
        }
    };

    let Some(value) = node.child_by_field_name("value") else {
        return Err(ArgError::UnsupportedValueType {
            param,
            found: "nothing".to_string(),
        });
    };

    let value = match value.kind() {
        "string" => ArgValue::Single(unquote(ast.node_text(&value))),
        "list" => ArgValue::Multiple(model_list(&value, &param, ast)?),
        other => {
            return Err(ArgError::UnsupportedValueType {
                param,
                found: other.to_string(),
            });
        }
    };

    Ok(FunctionArg { param, value })
}

fn model_list(list: &Node, param: &str, ast: &StarlarkAst) -> Result<Vec<String>, ArgError> {
    let mut cursor = list.walk();
    list.named_children(&mut cursor)
        .filter(|element| !element.is_extra())
        .enumerate()
        .map(|(index, element)| {
            if element.kind() == "string" {
                Ok(unquote(ast.node_text(&element)))
            } else {
                Err(ArgError::ListElementInvalid {
                    param: param.to_string(),
                    index,
                    found: element.kind().to_string(),
                })
            }
        })
        .collect()
}
