mod input;
mod logging;
mod model;
mod report;
mod server;
mod view;

#[cfg(test)]
#[path = "../tests/src_inline/fixtures.rs"]
mod fixtures;

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use thiserror::Error;

use crate::input::{InputError, load_dataset};
use crate::model::ranking::RankingMode;
use crate::report::write::{ReportError, write_reports};
use crate::server::{ServeError, ServerConfig, run_server};

const DEFAULT_INPUT: &str = "scenarios-local-interpretation.csv";
const DEFAULT_BIND: &str = "127.0.0.1:8050";

#[derive(Debug, Parser)]
#[command(
    name = "kira-interpdash",
    version,
    about = "Dashboard for per-scenario feature attribution scores"
)]
struct Cli {
    /// Defaults to `serve` with default options.
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Serve the interactive dashboard over HTTP.
    Serve(ServeArgs),
    /// Write per-scenario JSON/text reports and an HTML snapshot.
    Report(ReportArgs),
}

#[derive(Debug, Clone, Args)]
struct ServeArgs {
    #[arg(long, default_value = DEFAULT_INPUT)]
    input: PathBuf,
    #[arg(long, default_value = DEFAULT_BIND)]
    bind: SocketAddr,
    #[arg(long, value_enum, default_value_t = RankingMode::TopTen)]
    mode: RankingMode,
}

#[derive(Debug, Clone, Args)]
struct ReportArgs {
    #[arg(long, default_value = DEFAULT_INPUT)]
    input: PathBuf,
    #[arg(long)]
    out: PathBuf,
    #[arg(long, value_enum, default_value_t = RankingMode::TopTen)]
    mode: RankingMode,
    /// Only this scenario id (raw instance value).
    #[arg(long, allow_negative_numbers = true)]
    scenario: Option<i64>,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Serve(#[from] ServeError),
    #[error(transparent)]
    Report(#[from] ReportError),
    #[error("failed to start runtime: {0}")]
    Runtime(std::io::Error),
}

fn main() {
    logging::init();
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match resolve_command(cli) {
        Command::Serve(args) => serve(args),
        Command::Report(args) => report(args),
    }
}

fn resolve_command(cli: Cli) -> Command {
    cli.command.unwrap_or_else(|| {
        Command::Serve(ServeArgs {
            input: PathBuf::from(DEFAULT_INPUT),
            bind: default_bind(),
            mode: RankingMode::TopTen,
        })
    })
}

fn default_bind() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8050))
}

fn serve(args: ServeArgs) -> Result<(), CliError> {
    let dataset = load_dataset(&args.input)?;
    let config = ServerConfig {
        bind_addr: args.bind,
        mode: args.mode,
    };
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(CliError::Runtime)?;
    runtime.block_on(run_server(dataset, config))?;
    Ok(())
}

fn report(args: ReportArgs) -> Result<(), CliError> {
    let dataset = load_dataset(&args.input)?;
    write_reports(&dataset, args.mode, &args.out, args.scenario)?;
    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
