use crate::demo::{run_demo, run_inbox, DemoArgs, InboxArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use dealdesk::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Dealdesk Operations Service",
    about = "Run the loan trading desk triage service and inbox tooling from the command line",
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
    /// Rank a blotter CSV export and print the trade inbox
    Inbox(InboxArgs),
    /// Run an end-to-end triage demo over canned desk data
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

pub async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Inbox(args) => run_inbox(args),
        Command::Demo(args) => run_demo(args),
    }
}
