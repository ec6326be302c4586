pub mod action;
pub mod dispatch;
mod loop_impl;
pub mod prompt;
pub mod transcript;

pub use loop_impl::{
    AgentConfig, AgentProgressEvent, AgentRun, ReportStatus, RunOutcome,
    run_travel_query_with_events,
};
