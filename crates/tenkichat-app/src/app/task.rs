use anyhow::Result;
use colored::Colorize;

use crate::app::setup::AppConfig;
use crate::input;

/// One-shot ask mode: send a single message statelessly and print the
/// answer. Failures render a message instead of exiting nonzero, the
/// same way the REPL boundary handles them.
pub async fn run_ask_mode(config: AppConfig, text: &str) -> Result<()> {
    let Some(message) = input::validate_message(text) else {
        input::render_empty_input_error();
        return Ok(());
    };

    let client = config.client();
    match client.generate(message).await {
        Ok(answer) => println!("{}", answer),
        Err(e) => {
            eprintln!("{} {:#}", "Error:".bright_red().bold(), e);
            println!("{}", input::REQUEST_FAILED.red());
        }
    }

    Ok(())
}
