use anyhow::Result;
use colored::Colorize;
use serde_json::Value;

use tenkichat_api::TurnInput;
use tenkichat_logging::safe_truncate;
use tenkichat_models::{ModelReply, UsageMetadata};
use tenkichat_toolcore::{ToolParameters, ToolResult};

use crate::TenkiChat;

/// Drive one user turn to a displayed answer.
///
/// In simple mode the message goes out statelessly and the text comes
/// back. Otherwise the turn enters the session and at most one
/// model-requested function call is executed and fed back before the
/// final answer.
pub async fn run_turn(chat: &mut TenkiChat, user_message: &str) -> Result<String> {
    if chat.simple {
        return chat.client.generate(user_message).await;
    }

    let tools = chat.tool_registry.function_declarations();

    let (reply, usage) = chat
        .client
        .send_turn(
            &mut chat.session,
            TurnInput::User(user_message.to_string()),
            &tools,
        )
        .await?;
    show_usage(chat, usage);

    let (name, args) = match reply {
        ModelReply::Text(text) => return Ok(text),
        ModelReply::FunctionCall { name, args } => (name, args),
    };

    println!(
        "{} {} with args: {}",
        "🔧 Calling tool:".yellow(),
        name.cyan(),
        args.to_string().bright_black()
    );

    let result = match ToolParameters::from_value(args) {
        Ok(params) => chat.tool_registry.execute_tool(&name, params).await,
        Err(e) => ToolResult::error(format!("Invalid tool arguments: {}", e)),
    };

    let content = function_result_value(&result);
    println!(
        "{} {}",
        "📋 Result:".green(),
        safe_truncate(&content.to_string(), 200).bright_black()
    );

    let (reply, usage) = chat
        .client
        .send_turn(
            &mut chat.session,
            TurnInput::FunctionResult { name, content },
            &tools,
        )
        .await?;
    show_usage(chat, usage);

    match reply {
        ModelReply::Text(text) => Ok(text),
        ModelReply::FunctionCall { name, .. } => anyhow::bail!(
            "Model requested another function call ('{}') after the function round-trip",
            name
        ),
    }
}

/// Successful tool output is relayed as the JSON it produced; failures
/// (including an unrecognized tool name) are relayed as an `{error: …}`
/// value so the model can answer gracefully.
fn function_result_value(result: &ToolResult) -> Value {
    if result.success {
        serde_json::from_str(&result.content)
            .unwrap_or_else(|_| Value::String(result.content.clone()))
    } else {
        serde_json::json!({
            "error": result
                .error
                .clone()
                .unwrap_or_else(|| "unknown tool failure".to_string())
        })
    }
}

fn show_usage(chat: &mut TenkiChat, usage: Option<UsageMetadata>) {
    let Some(usage) = usage else { return };
    chat.total_tokens_used += usage.total_token_count;
    println!(
        "{} Prompt: {} | Completion: {} | Total: {} | Session: {}",
        "📊".bright_black(),
        usage.prompt_token_count.to_string().bright_black(),
        usage.candidates_token_count.to_string().bright_black(),
        usage.total_token_count.to_string().bright_black(),
        chat.total_tokens_used.to_string().cyan()
    );
}
