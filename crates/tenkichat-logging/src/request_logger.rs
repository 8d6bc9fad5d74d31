use anyhow::{Context, Result};
use colored::Colorize;

use crate::{get_logs_dir, safe_truncate};
use tenkichat_models::GenerateContentRequest;

/// Log HTTP request details for debugging (console output).
/// The URL passed here must not carry the API key; the key is shown as a
/// redacted prefix instead.
pub fn log_request(url: &str, request: &GenerateContentRequest, api_key: &str, verbose: bool) {
    if !verbose {
        return;
    }

    println!("\n{}", "═".repeat(80).bright_cyan());
    println!("{}", "🔍 HTTP REQUEST DEBUG".bright_cyan().bold());
    println!("{}", "═".repeat(80).bright_cyan());

    // Parse URL to show host and scheme
    if let Ok(parsed_url) = reqwest::Url::parse(url) {
        println!("{}: {}", "URL".bright_yellow(), url);
        println!("{}: {}", "Host".bright_yellow(), parsed_url.host_str().unwrap_or("unknown"));
        println!("{}: {}", "Scheme".bright_yellow(), parsed_url.scheme());
    } else {
        println!("{}: {}", "URL".bright_yellow(), url);
    }

    println!("\n{}", "Headers:".bright_yellow());
    println!("  Content-Type: application/json");
    println!("{}", format!("Query: key={}***", redact(api_key)).bright_yellow());

    println!("\n{}", "Request Body:".bright_yellow());
    match serde_json::to_string_pretty(&request) {
        Ok(json) => {
            // Truncate very long requests for readability
            if json.chars().count() > 5000 {
                println!("{}", safe_truncate(&json, 5000));
                println!("\n{}", format!("... (truncated, total {} bytes)", json.len()).bright_black());
            } else {
                println!("{}", json);
            }
        }
        Err(e) => println!("{}", format!("Error serializing request: {}", e).red()),
    }

    println!("{}", "═".repeat(80).bright_cyan());
    println!();
}

/// Log HTTP response details for debugging (console output)
pub fn log_response(status: &reqwest::StatusCode, body: &str, verbose: bool) {
    if !verbose {
        return;
    }

    println!("\n{}", "═".repeat(80).bright_cyan());
    println!("{}", "📥 HTTP RESPONSE DEBUG".bright_cyan().bold());
    println!("{}: {}", "Status".bright_yellow(), status);
    println!("\n{}", "Response Body:".bright_yellow());
    if body.chars().count() > 5000 {
        println!("{}", safe_truncate(body, 5000));
        println!("\n{}", format!("... (truncated, total {} bytes)", body.len()).bright_black());
    } else {
        println!("{}", body);
    }
    println!("{}", "═".repeat(80).bright_cyan());
    println!();
}

/// Log HTTP request to file for persistent debugging
pub fn log_request_to_file(
    url: &str,
    request: &GenerateContentRequest,
    model: &str,
    api_key: &str,
) -> Result<()> {
    let logs_dir = get_logs_dir()?;

    // Create filename with timestamp and model name
    let timestamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
    let model_name = model.replace('/', "-");
    let filename = format!("req-{}-{}.txt", timestamp, model_name);
    let file_path = logs_dir.join(&filename);

    // Build the log content
    let mut log_content = String::new();
    log_content.push_str("HTTP REQUEST LOG\n");
    log_content.push_str("================\n\n");
    log_content.push_str(&format!("Timestamp: {}\n", timestamp));
    log_content.push_str(&format!("Model: {}\n\n", model));

    if let Ok(parsed_url) = reqwest::Url::parse(url) {
        log_content.push_str(&format!("URL: {}\n", url));
        log_content.push_str(&format!("Host: {}\n", parsed_url.host_str().unwrap_or("unknown")));
        log_content.push_str(&format!("Scheme: {}\n\n", parsed_url.scheme()));
    } else {
        log_content.push_str(&format!("URL: {}\n\n", url));
    }

    log_content.push_str("Headers:\n");
    log_content.push_str("  Content-Type: application/json\n");
    log_content.push_str(&format!("Query: key={}***\n\n", redact(api_key)));

    log_content.push_str("Request Body:\n");
    match serde_json::to_string_pretty(&request) {
        Ok(json) => {
            log_content.push_str(&json);
            log_content.push('\n');
        }
        Err(e) => {
            log_content.push_str(&format!("Error serializing request: {}\n", e));
        }
    }

    std::fs::write(&file_path, log_content)
        .with_context(|| format!("Failed to write request log to {}", file_path.display()))?;

    println!("{}", format!("📝 Request logged to: {}", filename).bright_blue());

    Ok(())
}

fn redact(api_key: &str) -> String {
    api_key.chars().take(10).collect()
}
