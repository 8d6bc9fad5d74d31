// Logging module - request/response debug logging
pub mod request_logger;

use anyhow::{Context, Result};
use std::path::PathBuf;

// Re-export request logging functions
pub use request_logger::{log_request, log_request_to_file, log_response};

/// Safely truncate a string to a maximum number of characters
pub fn safe_truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        // Reserve space for "..." suffix
        let trunc_chars = if max_chars >= 3 { max_chars - 3 } else { 0 };
        format!("{}...", s.chars().take(trunc_chars).collect::<String>())
    }
}

/// Get or create the base tenkichat directory (~/.tenkichat)
pub fn get_tenkichat_dir() -> Result<PathBuf> {
    let home_dir = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .context("Failed to get home directory")?;

    let tenkichat_dir = PathBuf::from(home_dir).join(".tenkichat");

    if !tenkichat_dir.exists() {
        std::fs::create_dir_all(&tenkichat_dir)
            .context("Failed to create tenkichat directory")?;
    }

    Ok(tenkichat_dir)
}

/// Get or create the logs directory (~/.tenkichat/logs)
pub fn get_logs_dir() -> Result<PathBuf> {
    let logs_dir = get_tenkichat_dir()?.join("logs");

    if !logs_dir.exists() {
        std::fs::create_dir_all(&logs_dir)
            .context("Failed to create logs directory")?;
    }

    Ok(logs_dir)
}
