//! avwx-cli - Command line tool for forecast verification against the backend.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "avwx-cli",
    version,
    about = "Take-off and upper air forecast verification toolkit"
)]
struct Cli {
    #[command(flatten)]
    api: avwx_cmd::ApiArgs,

    #[command(subcommand)]
    command: avwx_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    avwx_cmd::run(cli.command, cli.api).await
}
