use std::sync::LazyLock;

use regex::Regex;

use crate::tools::args::{ArgValue, ToolArgs};

pub const FINISH_PLACEHOLDER: &str = "Task completed";

const ACTION_MARKER: &str = "Action: ";

static FINISH_ANSWER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)finish\(answer="(.*)"\)"#).expect("invalid finish regex")
});
static CALL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w+)\((.*)\)").expect("invalid call regex"));
static STRING_ARG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(\w+)="([^"]*)""#).expect("invalid string argument regex"));
static NUMBER_ARG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\w+)=(\d+(?:\.\d+)?)").expect("invalid number argument regex")
});

#[derive(Debug, Clone, PartialEq)]
pub struct ToolCall {
    pub name: String,
    pub args: ToolArgs,
}

/// What one model turn asked the loop to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Finish { answer: String },
    Call(ToolCall),
    /// An action line that is not shaped like `name(...)`.
    Malformed { raw: String },
}

/// Byte offset and trimmed text of the first `Action: ` line, if any.
fn find_action(text: &str) -> Option<(usize, &str)> {
    let mut search_from = 0;
    while let Some(found) = text[search_from..].find(ACTION_MARKER) {
        let start = search_from + found + ACTION_MARKER.len();
        let line = text[start..].split('\n').next().unwrap_or_default();
        if !line.is_empty() {
            return Some((start, line.trim()));
        }
        search_from = start;
    }
    None
}

/// Parses the first action in a model response. `None` means the response
/// carried no action at all.
pub fn parse_action(text: &str) -> Option<Action> {
    let (start, line) = find_action(text)?;

    if is_finish(line) {
        // the answer may run past the action line
        let tail = &text[start..];
        let answer = FINISH_ANSWER
            .captures(tail)
            .and_then(|caps| caps.get(1))
            .map_or_else(|| FINISH_PLACEHOLDER.to_string(), |m| m.as_str().to_string());
        return Some(Action::Finish { answer });
    }

    let Some(caps) = CALL.captures(line) else {
        return Some(Action::Malformed {
            raw: line.to_string(),
        });
    };
    let name = caps.get(1).map_or("", |m| m.as_str()).to_string();
    let raw_args = caps.get(2).map_or("", |m| m.as_str());

    Some(Action::Call(ToolCall {
        name,
        args: parse_args(raw_args),
    }))
}

fn is_finish(line: &str) -> bool {
    line.strip_prefix("finish")
        .is_some_and(|rest| !rest.starts_with(|c: char| c.is_alphanumeric() || c == '_'))
}

/// Quoted values first, then bare numbers. A key found by both passes ends
/// up with its numeric value.
pub fn parse_args(raw: &str) -> ToolArgs {
    let mut args = ToolArgs::new();
    for caps in STRING_ARG.captures_iter(raw) {
        args.insert(caps[1].to_string(), ArgValue::Str(caps[2].to_string()));
    }
    for caps in NUMBER_ARG.captures_iter(raw) {
        args.insert(caps[1].to_string(), parse_number(&caps[2]));
    }
    args
}

fn parse_number(text: &str) -> ArgValue {
    match text.parse::<i64>() {
        Ok(value) => ArgValue::Int(value),
        Err(_) => ArgValue::Float(text.parse::<f64>().unwrap_or(f64::NAN)),
    }
}
