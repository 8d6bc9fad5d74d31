use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// CLI arguments for tenkichat
#[derive(Parser)]
#[command(name = "tenkichat")]
#[command(about = "Tenki Chat - Gemini-powered weather chat for the terminal")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Plain chat mode: send each message statelessly, without the weather tool
    #[arg(long)]
    pub simple: bool,

    /// Gemini API key (falls back to the GEMINI_API_KEY environment variable)
    #[arg(long, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Model name override
    #[arg(long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Base URL of the Gemini API (e.g. http://localhost:8080 for a local mock)
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Base URL of the geocoding service
    #[arg(long, value_name = "URL")]
    pub geocode_url: Option<String>,

    /// Base URL of the weather forecast service
    #[arg(long, value_name = "URL")]
    pub forecast_url: Option<String>,

    /// Show request/response debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Generate shell completions
    #[arg(long, value_enum)]
    pub generate: Option<Shell>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Send one message without tools and print the answer
    Ask {
        /// The message to send
        text: String,
    },
}
