use anyhow::Result;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::app::setup::AppConfig;
use crate::chat::run_turn;
use crate::input;
use crate::TenkiChat;

/// Run interactive REPL mode.
///
/// Each submission is awaited to completion before the next line is
/// read, so a second message can never overlap an in-flight request.
pub async fn run_repl_mode(config: AppConfig, simple: bool) -> Result<()> {
    println!("{}", "🌤  Tenki Chat".bright_cyan().bold());
    if simple {
        println!("{}", format!("Plain chat - model: {}", config.model).bright_black());
    } else {
        println!(
            "{}",
            format!("Weather questions welcome - model: {}", config.model).bright_black()
        );
    }
    println!("{}", "Type 'exit' or 'quit' to exit\n".bright_black());

    let mut chat = TenkiChat::new(&config, simple);
    let mut rl = DefaultEditor::new()?;

    loop {
        let readline = rl.readline(&format!("{} ", "You:".bright_green().bold()));

        match readline {
            Ok(line) => {
                let Some(message) = input::validate_message(&line) else {
                    input::render_empty_input_error();
                    continue;
                };

                if message == "exit" || message == "quit" {
                    println!("{}", "Goodbye!".bright_cyan());
                    break;
                }

                rl.add_history_entry(message)?;
                input::echo_submission(message);
                println!("{}", input::THINKING.bright_black());

                match run_turn(&mut chat, message).await {
                    Ok(response) => {
                        println!("\n{} {}\n", "Assistant:".bright_blue().bold(), response);
                    }
                    Err(e) => {
                        eprintln!("{} {:#}", "Error:".bright_red().bold(), e);
                        println!("{}\n", input::REQUEST_FAILED.red());
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "^C".bright_black());
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "Goodbye!".bright_cyan());
                break;
            }
            Err(err) => {
                eprintln!("{} {}", "Error:".bright_red().bold(), err);
                break;
            }
        }
    }

    Ok(())
}
