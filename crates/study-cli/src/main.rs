//! studygraph CLI entry point.

mod cli;
mod commands;
mod config;
mod render;

use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    commands::init_tracing(&cli.log_level);
    commands::run(cli).await
}
