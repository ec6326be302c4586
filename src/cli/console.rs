use crate::agent::{AgentProgressEvent, AgentRun, ReportStatus, RunOutcome};
use crate::tools::args::format_args;
use crate::trace::RunTrace;

const SEPARATOR_WIDTH: usize = 40;

fn separator() -> String {
    "=".repeat(SEPARATOR_WIDTH)
}

/// Console text for one progress event.
pub fn render_event(event: &AgentProgressEvent) -> String {
    match event {
        AgentProgressEvent::StepStarted { step } => format!("--- Loop {step} ---\n"),
        AgentProgressEvent::ModelOutput { text, .. } => format!("Model output:\n{text}\n"),
        AgentProgressEvent::ModelFailed { error, .. } => {
            format!("Error occurred when calling language model service: {error}")
        }
        AgentProgressEvent::ToolRequest { name, args, .. } => {
            format!("-> {name}({})", format_args(args))
        }
        AgentProgressEvent::Observation { text, .. } => {
            format!("Observation: {text}\n{}", separator())
        }
        AgentProgressEvent::NoAction { .. } => {
            "Parse error: No Action found in model output.".to_string()
        }
        AgentProgressEvent::Finished { answer, .. } => {
            format!("Task completed, final answer: {answer}")
        }
    }
}

/// Console summary printed once the loop has returned.
pub fn render_outcome(run: &AgentRun) -> String {
    match &run.outcome {
        RunOutcome::Finished { report, .. } => match report {
            ReportStatus::Saved(saved) => [
                format!("\n✅ Query results saved to: {}", saved.path.display()),
                format!("📍 Identified query city: {}", saved.city),
                format!("📁 File save path: {}", saved.path.display()),
                format!("📊 File size: {} bytes", saved.bytes),
            ]
            .join("\n"),
            ReportStatus::Failed(message) => format!("\n❌ Error saving file: {message}"),
        },
        RunOutcome::NoAction => {
            format!("Run ended after {} step(s) without a final answer.", run.steps)
        }
        RunOutcome::StepLimit => format!(
            "Reached the limit of {} steps without a final answer; no report was saved.",
            run.steps
        ),
    }
}

/// Prints progress to stdout and mirrors it into the run trace.
pub struct ConsoleReporter {
    trace: RunTrace,
}

impl ConsoleReporter {
    pub fn new(trace: RunTrace) -> Self {
        Self { trace }
    }

    pub fn request(&self, request: &str) {
        println!("User input: {request}\n{}", separator());
        self.trace.log_request(request);
    }

    pub fn on_event(&self, event: &AgentProgressEvent) {
        println!("{}", render_event(event));

        match event {
            AgentProgressEvent::StepStarted { step } => {
                self.trace.log_output("loop", &format!("step {step} started"));
            }
            AgentProgressEvent::ModelOutput { step, text } => {
                self.trace.log_model_output(*step, text);
            }
            AgentProgressEvent::ModelFailed { step, error } => {
                self.trace
                    .log_output("model.err", &format!("step {step}: {error}"));
            }
            AgentProgressEvent::ToolRequest { step, name, args } => {
                self.trace.log_tool_call(*step, name, &format_args(args));
            }
            AgentProgressEvent::Observation { step, text } => {
                self.trace.log_observation(*step, text);
            }
            AgentProgressEvent::NoAction { step } => {
                self.trace
                    .log_output("loop", &format!("step {step}: no action found"));
            }
            AgentProgressEvent::Finished { answer, .. } => {
                self.trace.log_output("answer", answer);
            }
        }
    }

    pub fn outcome(&self, run: &AgentRun) {
        let text = render_outcome(run);
        println!("{text}");
        self.trace.log_output("outcome", text.trim_start());
    }
}
