// Models module - data structures for the Gemini generateContent API
pub mod types;

// Re-export commonly used types
pub use types::{
    Content, Part, FunctionCall, FunctionResponse, FunctionResponsePayload,
    GenerateContentRequest, GenerateContentResponse, Candidate,
    ToolDecl, FunctionDeclaration, UsageMetadata, ModelReply,
};
