//! Gemini API client and conversation state for tenkichat
//!
//! This crate provides the HTTP client for the generateContent endpoint
//! and the explicitly owned [`ChatSession`] turn history.

pub mod gemini_client;
pub mod session;

pub use gemini_client::{GeminiClient, GeminiError, DEFAULT_MODEL, GEMINI_API_URL};
pub use session::{ChatSession, TurnInput};
