use serde_json::Value;

use tenkichat_models::Content;

/// Accumulated turn history for one conversation.
///
/// Owned by the caller and threaded through each send explicitly, so
/// independent conversations (and test runs) never share state.
#[derive(Debug, Default, Clone)]
pub struct ChatSession {
    contents: Vec<Content>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, content: Content) {
        self.contents.push(content);
    }

    pub fn contents(&self) -> &[Content] {
        &self.contents
    }

    pub fn len(&self) -> usize {
        self.contents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }
}

/// Outgoing half of a turn: either the user's message or the result of a
/// function the model asked for.
#[derive(Debug, Clone)]
pub enum TurnInput {
    User(String),
    FunctionResult { name: String, content: Value },
}

impl TurnInput {
    pub(crate) fn into_content(self) -> Content {
        match self {
            TurnInput::User(text) => Content::user_text(&text),
            TurnInput::FunctionResult { name, content } => {
                Content::function_response(&name, content)
            }
        }
    }
}
