use anyhow::{Context, Result};

use tenkichat_logging::{log_request, log_request_to_file, log_response, safe_truncate};
use tenkichat_models::{
    Content, FunctionDeclaration, GenerateContentRequest, GenerateContentResponse, ModelReply,
    ToolDecl, UsageMetadata,
};

use crate::session::{ChatSession, TurnInput};

pub const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Failures the generateContent endpoint can hand back.
#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    #[error("Gemini API error (status {status}): {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("model returned no candidates")]
    EmptyResponse,
}

/// Client for the Gemini generateContent API.
pub struct GeminiClient {
    api_key: String,
    model: String,
    base_url: String,
    client: reqwest::Client,
    verbose: bool,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String, verbose: bool) -> Self {
        Self::with_base_url(api_key, model, GEMINI_API_URL.to_string(), verbose)
    }

    /// The base URL is injectable so tests and local mirrors can redirect it.
    pub fn with_base_url(api_key: String, model: String, base_url: String, verbose: bool) -> Self {
        Self {
            api_key,
            model,
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
            verbose,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Stateless one-message call: sends the message with no history and
    /// no tools, returns the text of the response.
    pub async fn generate(&self, message: &str) -> Result<String> {
        let request = GenerateContentRequest {
            contents: vec![Content::user_text(message)],
            tools: None,
        };
        let response = self.generate_content(&request).await?;
        let content = first_content(response)?.0;
        Ok(content.collect_text())
    }

    /// Send one turn into a persistent session. The outgoing turn and the
    /// model's reply are both appended to the session history.
    pub async fn send_turn(
        &self,
        session: &mut ChatSession,
        input: TurnInput,
        tools: &[FunctionDeclaration],
    ) -> Result<(ModelReply, Option<UsageMetadata>)> {
        session.push(input.into_content());

        let request = GenerateContentRequest {
            contents: session.contents().to_vec(),
            tools: if tools.is_empty() {
                None
            } else {
                Some(vec![ToolDecl {
                    function_declarations: tools.to_vec(),
                }])
            },
        };

        let response = self.generate_content(&request).await?;
        let (content, usage) = first_content(response)?;
        session.push(content.clone());

        Ok((reply_from_content(content), usage))
    }

    async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        log_request(&url, request, &self.api_key, self.verbose);
        if self.verbose {
            let _ = log_request_to_file(&url, request, &self.model, &self.api_key);
        }

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        log_response(&status, &body, self.verbose);

        if !status.is_success() {
            return Err(GeminiError::Api { status, body }.into());
        }

        serde_json::from_str(&body).with_context(|| {
            format!("Failed to parse Gemini response: {}", safe_truncate(&body, 500))
        })
    }
}

fn first_content(response: GenerateContentResponse) -> Result<(Content, Option<UsageMetadata>)> {
    let usage = response.usage_metadata;
    let content = response
        .candidates
        .into_iter()
        .next()
        .ok_or(GeminiError::EmptyResponse)?
        .content;
    Ok((content, usage))
}

/// Interpret a model turn as the tagged reply the caller dispatches on.
/// Only the first function call in a response is honored; any further
/// calls in the same response are dropped.
fn reply_from_content(content: Content) -> ModelReply {
    if let Some(call) = content.first_function_call() {
        return ModelReply::FunctionCall {
            name: call.name.clone(),
            args: call.args.clone(),
        };
    }
    ModelReply::Text(content.collect_text())
}
