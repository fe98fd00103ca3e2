use std::fmt;

use serde::Serialize;

/// Errors that abort processing of a whole file
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Tree-sitter error: {0}")]
    TreeSitterError(String),
}

/// Result type alias for starquery operations
pub type Result<T> = std::result::Result<T, Error>;

/// The reason a call site was skipped.
///
/// A node that is not a call expression at all is not an error and has no kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    CalleeNotIdentifier,
    ArgNotAssignment,
    ArgNameInvalid,
    UnsupportedValueType,
    ListElementInvalid,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::CalleeNotIdentifier => "CalleeNotIdentifier",
            ErrorKind::ArgNotAssignment => "ArgNotAssignment",
            ErrorKind::ArgNameInvalid => "ArgNameInvalid",
            ErrorKind::UnsupportedValueType => "UnsupportedValueType",
            ErrorKind::ListElementInvalid => "ListElementInvalid",
        };
        f.write_str(name)
    }
}

/// Rejection of a single call argument
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArgError {
    #[error("argument {position} is not a keyword assignment (found {found})")]
    NotAssignment { position: usize, found: String },

    #[error("argument {position} does not assign to a plain identifier (found {found})")]
    NameInvalid { position: usize, found: String },

    #[error("unsupported value of type {found} assigned to {param}")]
    UnsupportedValueType { param: String, found: String },

    #[error("unsupported element {index} of type {found} in list assigned to {param}")]
    ListElementInvalid {
        param: String,
        index: usize,
        found: String,
    },
}

impl ArgError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ArgError::NotAssignment { .. } => ErrorKind::ArgNotAssignment,
            ArgError::NameInvalid { .. } => ErrorKind::ArgNameInvalid,
            ArgError::UnsupportedValueType { .. } => ErrorKind::UnsupportedValueType,
            ArgError::ListElementInvalid { .. } => ErrorKind::ListElementInvalid,
        }
    }
}

/// Rejection of a whole call expression
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CallError {
    #[error("function name is not an identifier (found {found})")]
    CalleeNotIdentifier { found: String },

    #[error("unable to process argument for {function} function call: {source}")]
    InvalidArgument {
        function: String,
        #[source]
        source: ArgError,
    },
}

impl CallError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CallError::CalleeNotIdentifier { .. } => ErrorKind::CalleeNotIdentifier,
            CallError::InvalidArgument { source, .. } => source.kind(),
        }
    }

    /// Name of the called function, when the callee resolved to one
    pub fn function(&self) -> Option<&str> {
        match self {
            CallError::CalleeNotIdentifier { .. } => None,
            CallError::InvalidArgument { function, .. } => Some(function),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_error_keeps_argument_kind() {
        let err = CallError::InvalidArgument {
            function: "foo".to_string(),
            source: ArgError::ListElementInvalid {
                param: "deps".to_string(),
                index: 1,
                found: "integer".to_string(),
            },
        };

        assert_eq!(err.kind(), ErrorKind::ListElementInvalid);
        assert_eq!(err.function(), Some("foo"));
        assert_eq!(
            err.to_string(),
            "unable to process argument for foo function call: \
             unsupported element 1 of type integer in list assigned to deps"
        );
    }

    #[test]
    fn test_fatal_errors_are_parser_only() {
        let err = Error::ParseError("syntax error at line 2, column 5".to_string());
        assert_eq!(err.to_string(), "Parse error: syntax error at line 2, column 5");
        assert!(matches!(
            Error::TreeSitterError("bad grammar".to_string()),
            Error::TreeSitterError(_)
        ));
    }

    #[test]
    fn test_callee_error_has_no_function() {
        let err = CallError::CalleeNotIdentifier {
            found: "attribute".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::CalleeNotIdentifier);
        assert_eq!(err.function(), None);
        assert_eq!(err.kind().to_string(), "CalleeNotIdentifier");
    }
}
