use crate::tools::ToolKind;

const PREAMBLE: &str = "You are an intelligent travel assistant. Your task is to analyze user requests and use available tools step by step to solve problems.";

const ACTION_FORMAT: &str = r#"# Action Format:
Your response must strictly follow the format below. First is your thinking process, then the specific action you want to execute.
Thought: [Here is your thinking process and next step plan]
Action: [Here is the tool you want to call, format: function_name(arg_name="arg_value")]

# Task Completion:
When you have collected enough information to answer the user's final question, you must use `finish(answer="...")` to output the final answer.

Let's begin!"#;

/// System prompt listing every registered tool with its signature.
pub fn system_prompt() -> String {
    let tools = ToolKind::ALL
        .iter()
        .map(|kind| format!("- `{}`: {}", kind.signature(), kind.description()))
        .collect::<Vec<_>>()
        .join("\n");
    format!("{PREAMBLE}\n\n# Available Tools:\n{tools}\n\n{ACTION_FORMAT}")
}
