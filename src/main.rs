use anyhow::Result;
use clap::Parser;
use travel_planner::cli::CliArgs;

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();
    travel_planner::run(args).await
}
