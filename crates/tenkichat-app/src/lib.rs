//! Tenkichat Application Library
//!
//! Main application logic and the TenkiChat struct.

// Re-export workspace crates
pub use tenkichat_api::{self as api, ChatSession, GeminiClient, TurnInput};
pub use tenkichat_logging::{self as logging, safe_truncate};
pub use tenkichat_models as models;
pub use tenkichat_toolcore::{self as toolcore, ToolParameters, ToolRegistry, ToolResult};
pub use tenkichat_tools::{self as tools, WeatherTool};

// Local modules
pub mod app;
pub mod chat;
pub mod cli;
pub mod input;

// Re-exports from local modules
pub use app::{run_ask_mode, run_repl_mode, setup_from_cli, AppConfig};
pub use chat::run_turn;
pub use cli::{Cli, Commands};

/// Application state for one chat process: the model client, the owned
/// conversation history, and the registered tools.
pub struct TenkiChat {
    pub client: GeminiClient,
    pub session: ChatSession,
    pub tool_registry: ToolRegistry,
    pub simple: bool,
    pub total_tokens_used: usize,
}

impl TenkiChat {
    pub fn new(config: &AppConfig, simple: bool) -> Self {
        let mut tool_registry = ToolRegistry::new();
        if !simple {
            tool_registry.register(WeatherTool::with_endpoints(
                &config.geocode_url,
                &config.forecast_url,
            ));
        }

        Self {
            client: config.client(),
            session: ChatSession::new(),
            tool_registry,
            simple,
            total_tokens_used: 0,
        }
    }
}
