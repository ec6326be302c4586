use crate::agent::action::{Action, parse_action};
use crate::agent::dispatch::dispatch_call;
use crate::agent::prompt::system_prompt;
use crate::agent::transcript::Transcript;
use crate::llm::provider::{AssistantInput, LlmProvider};
use crate::report::{ReportWriter, SavedReport};
use crate::tools::ToolRegistry;
use crate::tools::args::ToolArgs;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentConfig {
    pub max_steps: usize,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self { max_steps: 5 }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AgentProgressEvent {
    StepStarted { step: usize },
    ModelOutput { step: usize, text: String },
    ModelFailed { step: usize, error: String },
    ToolRequest { step: usize, name: String, args: ToolArgs },
    Observation { step: usize, text: String },
    NoAction { step: usize },
    Finished { step: usize, answer: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportStatus {
    Saved(SavedReport),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Finished { answer: String, report: ReportStatus },
    /// The model produced a turn without any action line.
    NoAction,
    /// Every step was used without a terminal action.
    StepLimit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentRun {
    pub transcript: Transcript,
    pub outcome: RunOutcome,
    pub steps: usize,
}

pub async fn run_travel_query_with_events<P: LlmProvider, F: FnMut(AgentProgressEvent)>(
    provider: &P,
    tools: &ToolRegistry,
    reports: &ReportWriter,
    request: &str,
    config: &AgentConfig,
    on_event: &mut F,
) -> AgentRun {
    let system = system_prompt();
    let mut transcript = Transcript::start(request);

    for step in 1..=config.max_steps {
        on_event(AgentProgressEvent::StepStarted { step });

        let output = provider
            .generate(AssistantInput {
                system_instruction: Some(system.clone()),
                user_message: transcript.prompt(),
            })
            .await;

        let text = match output {
            Ok(output) => output.text,
            Err(err) => {
                let text =
                    format!("Error: Error occurred when calling language model service: {err}");
                on_event(AgentProgressEvent::ModelFailed {
                    step,
                    error: err.to_string(),
                });
                transcript.push_model_output(text);
                on_event(AgentProgressEvent::NoAction { step });
                return finished_run(transcript, RunOutcome::NoAction, step);
            }
        };

        on_event(AgentProgressEvent::ModelOutput {
            step,
            text: text.clone(),
        });
        transcript.push_model_output(text.as_str());

        let observation = match parse_action(&text) {
            None => {
                on_event(AgentProgressEvent::NoAction { step });
                return finished_run(transcript, RunOutcome::NoAction, step);
            }
            Some(Action::Finish { answer }) => {
                on_event(AgentProgressEvent::Finished {
                    step,
                    answer: answer.clone(),
                });
                let report = match reports.save(request, &answer, transcript.entries()) {
                    Ok(saved) => ReportStatus::Saved(saved),
                    Err(err) => ReportStatus::Failed(err.to_string()),
                };
                return finished_run(transcript, RunOutcome::Finished { answer, report }, step);
            }
            Some(Action::Malformed { raw }) => {
                format!("Error: Unable to parse Action format '{raw}'")
            }
            Some(Action::Call(call)) => {
                on_event(AgentProgressEvent::ToolRequest {
                    step,
                    name: call.name.clone(),
                    args: call.args.clone(),
                });
                dispatch_call(tools, &call).await
            }
        };

        on_event(AgentProgressEvent::Observation {
            step,
            text: observation.clone(),
        });
        transcript.push_observation(&observation);
    }

    finished_run(transcript, RunOutcome::StepLimit, config.max_steps)
}

fn finished_run(transcript: Transcript, outcome: RunOutcome, steps: usize) -> AgentRun {
    AgentRun {
        transcript,
        outcome,
        steps,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::fs;
    use std::sync::{Arc, Mutex};

    use reqwest::Client;
    use tempfile::TempDir;

    use crate::agent::{
        AgentConfig, AgentProgressEvent, ReportStatus, RunOutcome, run_travel_query_with_events,
    };
    use crate::city::CityLabel;
    use crate::http::{HttpClient, HttpDebugConfig};
    use crate::llm::provider::{AssistantInput, AssistantOutput, LlmError, LlmProvider};
    use crate::report::ReportWriter;
    use crate::tools::ToolRegistry;
    use crate::tools::args::ArgValue;
    use crate::tools::search::SearchClient;
    use crate::tools::weather::WeatherClient;

    struct FakeProvider {
        responses: Arc<Mutex<VecDeque<Result<AssistantOutput, LlmError>>>>,
        seen_inputs: Arc<Mutex<Vec<AssistantInput>>>,
    }

    impl FakeProvider {
        fn new(responses: Vec<Result<AssistantOutput, LlmError>>) -> Self {
            Self {
                responses: Arc::new(Mutex::new(VecDeque::from(responses))),
                seen_inputs: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn texts(texts: &[&str]) -> Self {
            Self::new(
                texts
                    .iter()
                    .map(|text| {
                        Ok(AssistantOutput {
                            text: text.to_string(),
                        })
                    })
                    .collect(),
            )
        }
    }

    impl LlmProvider for FakeProvider {
        async fn generate(&self, input: AssistantInput) -> Result<AssistantOutput, LlmError> {
            self.seen_inputs.lock().expect("lock").push(input);
            self.responses
                .lock()
                .expect("lock")
                .pop_front()
                .expect("queued response")
        }
    }

    fn offline_tools() -> ToolRegistry {
        let http = HttpClient::new(Client::new(), HttpDebugConfig::disabled());
        ToolRegistry::new(
            WeatherClient::new(http.clone(), "http://127.0.0.1:9".to_string()),
            SearchClient::new(http, None, "http://127.0.0.1:9".to_string()),
        )
    }

    #[tokio::test]
    async fn tool_call_then_finish_saves_report() {
        let provider = FakeProvider::texts(&[
            "Thought: allocate\nAction: get_budget_summary(city=\"Rome\", total_budget=1000)",
            "Thought: done\nAction: finish(answer=\"Spend 300 EUR on tickets in Rome.\")",
        ]);
        let output = TempDir::new().expect("tempdir");
        let reports = ReportWriter::new(output.path());
        let mut events = Vec::new();

        let run = run_travel_query_with_events(
            &provider,
            &offline_tools(),
            &reports,
            "Budget for Rome please",
            &AgentConfig::default(),
            &mut |event| events.push(event),
        )
        .await;

        assert_eq!(run.steps, 2);
        let RunOutcome::Finished { answer, report } = &run.outcome else {
            panic!("expected finished run, got {:?}", run.outcome);
        };
        assert_eq!(answer, "Spend 300 EUR on tickets in Rome.");
        let ReportStatus::Saved(saved) = report else {
            panic!("expected saved report, got {report:?}");
        };
        assert_eq!(saved.city, CityLabel::Resolved("Rome".to_string()));
        assert!(saved.path.starts_with(output.path()));
        assert!(
            fs::read_to_string(&saved.path)
                .expect("read report")
                .contains("Spend 300 EUR on tickets in Rome.")
        );

        assert_eq!(run.transcript.len(), 4);
        assert!(
            run.transcript.entries()[2]
                .starts_with("Observation: === Rome Budget Allocation Suggestions")
        );

        let seen = provider.seen_inputs.lock().expect("lock");
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].user_message, "User request: Budget for Rome please");
        assert!(seen[1].user_message.contains("\nObservation: === Rome Budget"));
        assert!(
            seen[0]
                .system_instruction
                .as_deref()
                .is_some_and(|prompt| prompt.contains("get_budget_summary"))
        );

        assert!(events.contains(&AgentProgressEvent::ToolRequest {
            step: 1,
            name: "get_budget_summary".to_string(),
            args: [
                ("city".to_string(), ArgValue::Str("Rome".to_string())),
                ("total_budget".to_string(), ArgValue::Int(1000)),
            ]
            .into_iter()
            .collect(),
        }));
        assert_eq!(
            events.last(),
            Some(&AgentProgressEvent::Finished {
                step: 2,
                answer: "Spend 300 EUR on tickets in Rome.".to_string()
            })
        );
    }

    #[tokio::test]
    async fn step_limit_ends_without_report() {
        let turn = "Thought: try\nAction: book_hotel(city=\"Rome\")";
        let provider = FakeProvider::texts(&[turn; 5]);
        let output = TempDir::new().expect("tempdir");
        let reports = ReportWriter::new(output.path().join("reports"));

        let run = run_travel_query_with_events(
            &provider,
            &offline_tools(),
            &reports,
            "Plan Rome",
            &AgentConfig::default(),
            &mut |_| {},
        )
        .await;

        assert_eq!(run.outcome, RunOutcome::StepLimit);
        assert_eq!(run.steps, 5);
        assert_eq!(run.transcript.len(), 11);
        assert_eq!(
            run.transcript.entries()[2],
            "Observation: Error: Undefined tool 'book_hotel'"
        );
        assert!(!output.path().join("reports").exists());
        assert!(provider.responses.lock().expect("lock").is_empty());
    }

    #[tokio::test]
    async fn missing_action_stops_the_run() {
        let provider = FakeProvider::texts(&["I think Rome is nice."]);
        let output = TempDir::new().expect("tempdir");

        let run = run_travel_query_with_events(
            &provider,
            &offline_tools(),
            &ReportWriter::new(output.path()),
            "Plan Rome",
            &AgentConfig::default(),
            &mut |_| {},
        )
        .await;

        assert_eq!(run.outcome, RunOutcome::NoAction);
        assert_eq!(run.steps, 1);
        assert_eq!(run.transcript.len(), 2);
    }

    #[tokio::test]
    async fn model_failure_is_recorded_and_ends_the_run() {
        let provider = FakeProvider::new(vec![Err(LlmError::Transport(
            "connection refused".to_string(),
        ))]);
        let output = TempDir::new().expect("tempdir");
        let mut events = Vec::new();

        let run = run_travel_query_with_events(
            &provider,
            &offline_tools(),
            &ReportWriter::new(output.path()),
            "Plan Rome",
            &AgentConfig::default(),
            &mut |event| events.push(event),
        )
        .await;

        assert_eq!(run.outcome, RunOutcome::NoAction);
        assert_eq!(
            run.transcript.entries()[1],
            "Error: Error occurred when calling language model service: provider transport error: connection refused"
        );
        assert!(events.contains(&AgentProgressEvent::ModelFailed {
            step: 1,
            error: "provider transport error: connection refused".to_string()
        }));
    }

    #[tokio::test]
    async fn malformed_action_becomes_observation_and_loop_continues() {
        let provider = FakeProvider::texts(&[
            "Thought: hmm\nAction: look around",
            "Action: finish(answer=\"ok\")",
        ]);
        let output = TempDir::new().expect("tempdir");

        let run = run_travel_query_with_events(
            &provider,
            &offline_tools(),
            &ReportWriter::new(output.path()),
            "Plan something",
            &AgentConfig::default(),
            &mut |_| {},
        )
        .await;

        assert_eq!(
            run.transcript.entries()[2],
            "Observation: Error: Unable to parse Action format 'look around'"
        );
        assert!(matches!(run.outcome, RunOutcome::Finished { .. }));
    }

    #[tokio::test]
    async fn report_failure_keeps_the_answer() {
        let provider = FakeProvider::texts(&["Action: finish(answer=\"Enjoy Rome\")"]);
        let output = TempDir::new().expect("tempdir");
        let blocker = output.path().join("blocked");
        fs::write(&blocker, "file").expect("write blocker");

        let run = run_travel_query_with_events(
            &provider,
            &offline_tools(),
            &ReportWriter::new(&blocker),
            "Plan Rome",
            &AgentConfig::default(),
            &mut |_| {},
        )
        .await;

        let RunOutcome::Finished { answer, report } = run.outcome else {
            panic!("expected finished run");
        };
        assert_eq!(answer, "Enjoy Rome");
        assert!(matches!(report, ReportStatus::Failed(message) if message.starts_with("Failed to create output directory")));
    }
}
