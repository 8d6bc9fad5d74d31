use std::collections::HashMap;
use std::sync::Arc;

use super::tool::{Tool, ToolParameters, ToolResult};
use tenkichat_models::FunctionDeclaration;

/// Registry for managing and discovering tools
#[derive(Clone, Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tool_count", &self.tools.len())
            .finish()
    }
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Register a new tool
    pub fn register<T: Tool + 'static>(&mut self, tool: T) {
        let name = tool.name().to_string();
        self.tools.insert(name, Arc::new(tool));
    }

    /// Get a tool by name
    pub fn get_tool(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    /// Check if a tool exists
    pub fn has_tool(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Get tool names
    pub fn get_tool_names(&self) -> Vec<String> {
        self.tools.keys().cloned().collect()
    }

    /// Execute a tool by name. An unrecognized name resolves to an error
    /// result rather than a panic or silence, so the caller can relay the
    /// failure to the model.
    pub async fn execute_tool(&self, name: &str, params: ToolParameters) -> ToolResult {
        match self.get_tool(name) {
            Some(tool) => tool.execute(params).await,
            None => ToolResult::error(format!("Tool '{}' not found", name)),
        }
    }

    /// Get all tool declarations in Gemini format, sorted by name so the
    /// declaration order is stable between requests.
    pub fn function_declarations(&self) -> Vec<FunctionDeclaration> {
        let mut tools: Vec<_> = self.tools.iter().collect();
        tools.sort_by_key(|(name, _)| name.as_str());
        tools
            .into_iter()
            .map(|(_, tool)| tool.to_function_declaration())
            .collect()
    }
}
