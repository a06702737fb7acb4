use crate::demo::{run_demo, run_rank, RankArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use supplier_eval::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Supplier Evaluation",
    about = "Score, risk-assess, and rank suppliers against a procurement requirement",
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
    /// Rank the sample (or a JSON) supplier catalog against one requirement
    Rank(RankArgs),
    /// Build a sample supplier, derive its overall score and risk, and print it as JSON
    Demo,
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
        Command::Rank(args) => run_rank(args),
        Command::Demo => run_demo(),
    }
}
