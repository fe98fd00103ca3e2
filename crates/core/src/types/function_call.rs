use serde::Serialize;
use std::fmt;

use super::location::SourceLocation;

/// Value assigned to a keyword argument
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ArgValue {
    /// `param = "value"`
    Single(String),
    /// `param = ["a", "b"]`
    Multiple(Vec<String>),
}

impl ArgValue {
    pub fn is_single(&self) -> bool {
        matches!(self, ArgValue::Single(_))
    }

    pub fn is_multiple(&self) -> bool {
        matches!(self, ArgValue::Multiple(_))
    }

    pub fn single(&self) -> Option<&str> {
        match self {
            ArgValue::Single(value) => Some(value),
            ArgValue::Multiple(_) => None,
        }
    }

    pub fn multiple(&self) -> Option<&[String]> {
        match self {
            ArgValue::Single(_) => None,
            ArgValue::Multiple(values) => Some(values),
        }
    }
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgValue::Single(value) => f.write_str(value),
            ArgValue::Multiple(values) => write!(f, "[{}]", values.join(", ")),
        }
    }
}

/// A keyword argument of a modeled call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionArg {
    pub param: String,
    pub value: ArgValue,
}

impl FunctionArg {
    pub fn new(param: impl Into<String>, value: ArgValue) -> Self {
        Self {
            param: param.into(),
            value,
        }
    }
}

impl fmt::Display for FunctionArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.param, self.value)
    }
}

/// A top-level style call `name(param = value, ...)` whose arguments all
/// modeled successfully
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionCall {
    pub name: String,
    pub location: SourceLocation,
    /// Arguments in source order; repeated parameter names are kept
    pub args: Vec<FunctionArg>,
}

impl FunctionCall {
    pub fn line(&self) -> usize {
        self.location.line
    }

    /// First argument assigned to `param`
    pub fn arg(&self, param: &str) -> Option<&FunctionArg> {
        self.args.iter().find(|arg| arg.param == param)
    }
}

impl fmt::Display for FunctionCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Function {}, line {}, {} arguments: [",
            self.name,
            self.location.line,
            self.args.len()
        )?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{arg}")?;
        }
        f.write_str("]")
    }
}
