use clap::Parser;
use moose_discovery::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Define(args) => cli::define::run(args).await,
        Command::Discover(args) => cli::discover::run(args).await,
    }
}
