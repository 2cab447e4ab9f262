use clap::{Parser, Subcommand};
use sc_app::{
    AppConfig, AppError, AppResult, CycleService, ExecuteRequest, ExpandRequest, point_vocabulary,
};
use sc_steam::{CoolPropTable, Point};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sc-cli")]
#[command(about = "SteamCycle CLI - Regenerative steam cycle state and balance calculator", long_about = None)]
struct Cli {
    /// Path to a YAML config file (defaults apply when absent)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the cycle point identifiers and their labels
    Points,
    /// Resolve one point from a JSON object of known properties
    Point {
        /// JSON input file (defaults to stdin)
        input: Option<PathBuf>,
    },
    /// Expand the turbine legs of a cycle from JSON
    Cycle {
        /// JSON input file with `points`, `eta_hp`, `eta_lp` (defaults to stdin)
        input: Option<PathBuf>,
    },
    /// List the available balance calculations
    Calculations,
    /// Run a balance calculation
    Execute {
        /// Calculation id (see `calculations`)
        id: String,
        /// JSON input file with `points` and `params` (defaults to stdin)
        input: Option<PathBuf>,
    },
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    init_tracing(&config);

    match cli.command {
        Commands::Points => print_json(&point_vocabulary()),
        Commands::Point { input } => cmd_point(&config, input.as_deref()),
        Commands::Cycle { input } => cmd_cycle(&config, input.as_deref()),
        Commands::Calculations => print_json(&service(&config)?.list_calculations()),
        Commands::Execute { id, input } => cmd_execute(&config, id, input.as_deref()),
    }
}

/// Log to stderr so stdout carries only JSON. `RUST_LOG` wins over the config.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter.as_str()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn service(config: &AppConfig) -> AppResult<CycleService<CoolPropTable>> {
    CycleService::from_config(config)
}

fn cmd_point(config: &AppConfig, input: Option<&Path>) -> AppResult<()> {
    let point: Point = read_json(input)?;
    let resolved = service(config)?.resolve_point(&point)?;
    print_json(&resolved)
}

fn cmd_cycle(config: &AppConfig, input: Option<&Path>) -> AppResult<()> {
    let request: ExpandRequest = read_json(input)?;
    let expansion = service(config)?.expand_cycle(&request);
    let failed = expansion
        .points
        .iter()
        .filter(|(_, pt)| pt.has_error())
        .count();
    if failed > 0 {
        tracing::warn!(failed, "some points could not be resolved");
    }
    print_json(&expansion)
}

fn cmd_execute(config: &AppConfig, id: String, input: Option<&Path>) -> AppResult<()> {
    let mut request: ExecuteRequest = read_json(input)?;
    request.id = id;
    let result = service(config)?.execute_calculation(request)?;
    print_json(&result)
}

fn read_json<T: DeserializeOwned>(input: Option<&Path>) -> AppResult<T> {
    let content = match input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    serde_json::from_str(&content).map_err(|e| AppError::InvalidInput(format!("invalid JSON: {}", e)))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> AppResult<()> {
    let json = serde_json::to_string_pretty(value).map_err(io::Error::from)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", json)?;
    Ok(())
}
