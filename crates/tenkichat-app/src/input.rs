use colored::Colorize;

/// Fixed strings rendered when the user submits an empty message: one for
/// the echo region, one for the response region.
pub const EMPTY_INPUT_NOTICE: &str = "メッセージが入力されていません";
pub const EMPTY_INPUT_RESPONSE: &str = "処理できません";

/// Placeholder shown while a request is in flight.
pub const THINKING: &str = "考え中...";

/// Fixed string rendered when a model call fails.
pub const REQUEST_FAILED: &str = "エラーが発生しました。";

/// Validates a submitted message. Any empty string is invalid; no
/// trimming is applied, so whitespace-only input passes through as-is.
pub fn validate_message(input: &str) -> Option<&str> {
    if input.is_empty() {
        None
    } else {
        Some(input)
    }
}

/// Echo the accepted message back, the way the submission area shows it.
pub fn echo_submission(message: &str) {
    println!("{} {}", "入力メッセージ:".bright_black(), message);
}

/// Render the empty-input validation error in both output regions.
pub fn render_empty_input_error() {
    println!("{}", EMPTY_INPUT_NOTICE.red());
    println!("{}", EMPTY_INPUT_RESPONSE.red());
}
