use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One conversation turn in Gemini wire format.
///
/// Roles are "user", "model", or "function" (for tool results fed back
/// into the conversation).
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Content {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    /// A user turn carrying plain text.
    pub fn user_text(text: &str) -> Self {
        Self {
            role: "user".to_string(),
            parts: vec![Part::text(text)],
        }
    }

    /// A function turn carrying the result of a model-requested call.
    pub fn function_response(name: &str, content: Value) -> Self {
        Self {
            role: "function".to_string(),
            parts: vec![Part::function_response(name, content)],
        }
    }

    /// Concatenated text of all text parts, in order.
    pub fn collect_text(&self) -> String {
        self.parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect::<Vec<_>>()
            .join("")
    }

    /// The first function call in this turn, if any.
    pub fn first_function_call(&self) -> Option<&FunctionCall> {
        self.parts.iter().find_map(|p| p.function_call.as_ref())
    }
}

/// One part of a turn. Exactly one field is populated per part; the
/// struct shape (rather than an enum) tolerates extra keys the API may
/// attach to response parts.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Part {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub text: Option<String>,
    #[serde(rename = "functionCall", skip_serializing_if = "Option::is_none", default)]
    pub function_call: Option<FunctionCall>,
    #[serde(rename = "functionResponse", skip_serializing_if = "Option::is_none", default)]
    pub function_response: Option<FunctionResponse>,
}

impl Part {
    pub fn text(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
            ..Default::default()
        }
    }

    pub fn function_response(name: &str, content: Value) -> Self {
        Self {
            function_response: Some(FunctionResponse {
                name: name.to_string(),
                response: FunctionResponsePayload {
                    name: name.to_string(),
                    content,
                },
            }),
            ..Default::default()
        }
    }
}

/// A model-issued request to invoke a named capability.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FunctionCall {
    pub name: String,
    #[serde(default)]
    pub args: Value,
}

/// Function result wrapper in the nesting the generateContent API expects:
/// `{"functionResponse": {"name": …, "response": {"name": …, "content": …}}}`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FunctionResponse {
    pub name: String,
    pub response: FunctionResponsePayload,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FunctionResponsePayload {
    pub name: String,
    pub content: Value,
}

/// Request body for a generateContent call.
#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<ToolDecl>>,
}

/// Tool block declaring capabilities the model may request.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ToolDecl {
    #[serde(rename = "functionDeclarations")]
    pub function_declarations: Vec<FunctionDeclaration>,
}

/// A single capability schema: name, description, and a JSON object
/// schema for the parameters.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FunctionDeclaration {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

/// Response body of a generateContent call.
#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(rename = "usageMetadata", default)]
    pub usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Content,
}

/// Token accounting reported by the API.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: usize,
    #[serde(default)]
    pub candidates_token_count: usize,
    #[serde(default)]
    pub total_token_count: usize,
}

/// What a model turn resolved to, from the caller's point of view.
/// Exactly one variant per response.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelReply {
    Text(String),
    FunctionCall { name: String, args: Value },
}
