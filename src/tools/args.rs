use std::collections::{BTreeMap, BTreeSet};
use std::fmt::{Display, Formatter};

use super::ToolError;

/// A single argument value lifted out of the model's `name(key=value)` text.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    Str(String),
    Int(i64),
    Float(f64),
}

impl Display for ArgValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Str(value) => write!(f, "\"{value}\""),
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value:?}"),
        }
    }
}

pub type ToolArgs = BTreeMap<String, ArgValue>;

pub fn format_args(args: &ToolArgs) -> String {
    args.iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Keyword binding of parsed arguments against a tool's parameter list.
/// Keys outside the list are rejected the way a keyword call would be.
#[derive(Debug)]
pub struct BoundArgs<'a> {
    args: &'a ToolArgs,
}

impl<'a> BoundArgs<'a> {
    pub fn bind(args: &'a ToolArgs, params: &[&str]) -> Result<Self, ToolError> {
        let known: BTreeSet<&str> = params.iter().copied().collect();
        if let Some(extra) = args.keys().find(|key| !known.contains(key.as_str())) {
            return Err(ToolError::UnexpectedArgument(extra.clone()));
        }
        Ok(Self { args })
    }

    pub fn string(&self, name: &str) -> Result<&'a str, ToolError> {
        match self.args.get(name) {
            Some(ArgValue::Str(value)) => Ok(value.as_str()),
            Some(_) => Err(invalid(name, "a quoted string")),
            None => Err(ToolError::MissingArgument(name.to_string())),
        }
    }

    pub fn integer_or(&self, name: &str, default: i64) -> Result<i64, ToolError> {
        match self.args.get(name) {
            Some(ArgValue::Int(value)) => Ok(*value),
            Some(_) => Err(invalid(name, "an integer")),
            None => Ok(default),
        }
    }

    pub fn number(&self, name: &str) -> Result<f64, ToolError> {
        match self.args.get(name) {
            Some(ArgValue::Int(value)) => Ok(*value as f64),
            Some(ArgValue::Float(value)) => Ok(*value),
            Some(ArgValue::Str(_)) => Err(invalid(name, "a number")),
            None => Err(ToolError::MissingArgument(name.to_string())),
        }
    }
}

fn invalid(name: &str, expected: &'static str) -> ToolError {
    ToolError::InvalidArgument {
        name: name.to_string(),
        expected,
    }
}
