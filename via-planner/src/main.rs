use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use via_planner::cache::TtlCache;
use via_planner::cli::Cli;
use via_planner::config::AppConfig;
use via_planner::planner::{PlanError, Planner};
use via_planner::render::{Palette, render_plan};
use via_planner::stations::StationCache;
use via_planner::supervia::SuperviaClient;
use via_planner::timing::now_local;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = AppConfig::from_env();

    let palette = if cli.no_color || !std::io::stdout().is_terminal() {
        Palette::plain()
    } else {
        Palette::supervia()
    };

    match run(&cli, &config, &palette).await {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("erro: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli, config: &AppConfig, palette: &Palette) -> Result<String, PlanError> {
    let client = SuperviaClient::new(config.supervia.clone())?;
    let stations = StationCache::new(TtlCache::from_config(&config.cache))
        .with_ttl(config.planner.stations_ttl());
    let planner = Planner::new(&client, &stations, &config.planner);

    let request = cli.command.plan_request();
    let outcome = planner.plan(&request, now_local()).await?;

    Ok(render_plan(&outcome, palette))
}
