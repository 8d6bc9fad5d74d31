//! Tool abstractions for tenkichat
//!
//! Capabilities the model may request are implemented as [`Tool`]s and
//! resolved by name through a [`ToolRegistry`].

pub mod tool;
pub mod tool_registry;

pub use tool::{ParameterDefinition, Tool, ToolParameters, ToolResult};
pub use tool_registry::ToolRegistry;
