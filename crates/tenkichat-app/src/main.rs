use anyhow::Result;
use clap::{CommandFactory, Parser};

use tenkichat::app::{run_ask_mode, run_repl_mode, setup_from_cli};
use tenkichat::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if let Some(shell) = cli.generate {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
        return Ok(());
    }

    let config = setup_from_cli(&cli)?;

    if let Some(Commands::Ask { ref text }) = cli.command {
        return run_ask_mode(config, text).await;
    }

    run_repl_mode(config, cli.simple).await
}
