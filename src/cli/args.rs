use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_REQUEST: &str = "Hello, please help me check the weather in Barcelona, Spain today, then recommend some suitable tourist attractions based on the weather. The attractions should be outdoors. Please list a one-day itinerary with time and budget.";

#[derive(Debug, Parser, Clone, PartialEq, Eq)]
#[command(name = "travel_planner")]
#[command(
    about = "Travel-planning assistant that reasons step by step over weather, attraction and budget tools",
    long_about = "Travel-planning assistant that reasons step by step over weather, attraction and budget tools\n\nConfig file loading:\n  - --config <path> (explicit file, overrides default path discovery)\n  - Default probe path when --config is not provided:\n    1. $XDG_CONFIG_HOME/travel-planner/config.toml\n    2. ~/.config/travel-planner/config.toml\n\nEnvironment variables (also read from .env) override the config file."
)]
pub struct CliArgs {
    /// Travel request to plan. Defaults to a one-day Barcelona itinerary.
    #[arg(value_name = "REQUEST", default_value = DEFAULT_REQUEST, hide_default_value = true)]
    pub request: String,

    /// Load config from this file path instead of the default discovery path.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory for saved reports (overrides config and TRAVEL_OUTPUT_DIR).
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Log redacted HTTP traffic to stderr.
    #[arg(long)]
    pub verbose: bool,

    /// List saved reports, newest first, and exit.
    #[arg(long)]
    pub list_reports: bool,
}
