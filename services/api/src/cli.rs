use crate::commands::{run_roadmap, run_scenarios, run_score, RoadmapArgs, ScenariosArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use crs_roadmap::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "CRS Roadmap",
    about = "Score CRS profiles and plan which improvements to pursue first",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score a profile against the core CRS tables
    Score(ScoreArgs),
    /// Rank improvements for a baseline and project the selected ones
    Roadmap(RoadmapArgs),
    /// List and re-project saved scenarios, or delete one with --delete
    Scenarios(ScenariosArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score(args) => run_score(args),
        Command::Roadmap(args) => run_roadmap(args),
        Command::Scenarios(args) => run_scenarios(args),
    }
}
