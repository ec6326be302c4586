use crate::agent::action::ToolCall;
use crate::tools::ToolRegistry;

/// Runs one parsed call and renders whatever happened as observation text.
/// Failures become `Error: ...` strings so the loop can keep going.
pub async fn dispatch_call(tools: &ToolRegistry, call: &ToolCall) -> String {
    let Some(kind) = tools.lookup(&call.name) else {
        return format!("Error: Undefined tool '{}'", call.name);
    };

    match tools.invoke(kind, &call.args).await {
        Ok(text) => text,
        Err(err) if err.is_binding() => {
            format!("Error: Problem calling tool '{}' - {err}", call.name)
        }
        Err(err) => format!("Error: {err}"),
    }
}
