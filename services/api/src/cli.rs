use crate::demo::{run_assess, run_catalog, run_demo, AssessArgs, CatalogArgs, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use endoguard::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "EndoGuard",
    about = "Score endocrine-disruptor exposure and hormone symptoms from the command line",
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
    /// Score a questionnaire read from a JSON file or stdin
    Assess(AssessArgs),
    /// List the lab panels the engine can suggest
    Catalog(CatalogArgs),
    /// Run sample questionnaires end to end
    Demo(DemoArgs),
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
        Command::Assess(args) => run_assess(args),
        Command::Catalog(args) => run_catalog(args),
        Command::Demo(args) => run_demo(args),
    }
}
