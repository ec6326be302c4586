pub mod agent;
pub mod city;
pub mod cli;
pub mod config;
pub mod http;
pub mod llm;
pub mod report;
pub mod tools;
pub mod trace;

use agent::{AgentConfig, run_travel_query_with_events};
use anyhow::Result;
use cli::{CliArgs, ConsoleReporter};
use config::AppConfig;
use http::{HttpClient, HttpDebugConfig};
use llm::chat_completions::ChatCompletionsProvider;
use report::ReportWriter;
use std::time::{SystemTime, UNIX_EPOCH};
use tools::ToolRegistry;
use tools::search::SearchClient;
use tools::weather::WeatherClient;
use trace::RunTrace;

pub async fn run(args: CliArgs) -> Result<()> {
    let config = AppConfig::load_with_path(args.config.as_deref())?;
    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| config.output_dir.clone());
    let reports = ReportWriter::new(output_dir);

    if args.list_reports {
        return list_reports(&reports);
    }

    let run_id = generate_run_id();
    let trace = RunTrace::create(&run_id)?;
    let http = HttpClient::new(
        reqwest::Client::new(),
        HttpDebugConfig::from_verbose(args.verbose),
    )
    .with_trace(trace.clone());

    let provider = match ChatCompletionsProvider::new(
        http.clone(),
        config.llm_api_key.clone(),
        config.llm_model.clone(),
        config.llm_base_url.clone(),
    ) {
        Ok(provider) => provider,
        Err(err) => {
            println!(
                "Assistant unavailable: {err}. Configure it in your shell, .env file or config.toml (example: MODELSCOPE_API_KEY=your_key)."
            );
            trace.log_output("startup", &err.to_string());
            return Ok(());
        }
    };

    let tools = ToolRegistry::new(
        WeatherClient::new(http.clone(), config.weather_base_url.clone()),
        SearchClient::new(
            http,
            config.tavily_api_key.clone(),
            config.tavily_base_url.clone(),
        ),
    );

    let reporter = ConsoleReporter::new(trace.clone());
    reporter.request(&args.request);
    let run = run_travel_query_with_events(
        &provider,
        &tools,
        &reports,
        &args.request,
        &AgentConfig::default(),
        &mut |event| reporter.on_event(&event),
    )
    .await;
    reporter.outcome(&run);
    println!("Trace written to {}", trace.file_path().display());

    Ok(())
}

fn list_reports(reports: &ReportWriter) -> Result<()> {
    let saved = reports.list_saved_reports()?;
    if saved.is_empty() {
        println!(
            "No saved reports in {}",
            reports.output_dir().display()
        );
        return Ok(());
    }

    for path in saved {
        println!("{}", path.display());
    }
    Ok(())
}

fn generate_run_id() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |duration| duration.as_millis());
    format!("{millis:x}-{:x}", std::process::id())
}
