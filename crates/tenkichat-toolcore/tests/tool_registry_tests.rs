use pretty_assertions::assert_eq;
use std::collections::HashMap;

use tenkichat_toolcore::tool::{ParameterDefinition, Tool, ToolParameters, ToolResult};
use tenkichat_toolcore::tool_registry::ToolRegistry;
use tenkichat_toolcore::param;

// Mock tool implementations for testing
#[derive(Debug, Clone)]
struct TestTool {
    name: String,
    description: String,
    parameters: HashMap<String, ParameterDefinition>,
    should_fail: bool,
}

impl TestTool {
    fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            parameters: HashMap::new(),
            should_fail: false,
        }
    }

    fn with_parameters(mut self, parameters: HashMap<String, ParameterDefinition>) -> Self {
        self.parameters = parameters;
        self
    }

    fn failing(mut self) -> Self {
        self.should_fail = true;
        self
    }
}

#[async_trait::async_trait]
impl Tool for TestTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn parameters(&self) -> HashMap<String, ParameterDefinition> {
        self.parameters.clone()
    }

    async fn execute(&self, params: ToolParameters) -> ToolResult {
        if self.should_fail {
            ToolResult::error("Test tool failed intentionally".to_string())
        } else {
            let param_count = params.data.len();
            ToolResult::success(format!("Executed {} with {} parameters", self.name, param_count))
        }
    }
}

#[tokio::test]
async fn test_registry_initialization() {
    let registry = ToolRegistry::new();
    assert_eq!(registry.get_tool_names().len(), 0);
    assert!(!registry.has_tool("any_tool"));
    assert!(registry.function_declarations().is_empty());
}

#[tokio::test]
async fn test_single_tool_registration() {
    let mut registry = ToolRegistry::new();
    let tool = TestTool::new("test_tool", "A test tool for testing");

    registry.register(tool);

    assert!(registry.has_tool("test_tool"));
    assert_eq!(registry.get_tool_names(), vec!["test_tool"]);

    let params = ToolParameters::from_json("{}").unwrap();
    let result = registry.execute_tool("test_tool", params).await;
    assert!(result.success);
    assert_eq!(result.content, "Executed test_tool with 0 parameters");
}

#[tokio::test]
async fn test_failing_tool_reports_error() {
    let mut registry = ToolRegistry::new();
    registry.register(TestTool::new("flaky", "Fails on purpose").failing());

    let params = ToolParameters::from_json("{}").unwrap();
    let result = registry.execute_tool("flaky", params).await;
    assert!(!result.success);
    assert!(result.content.is_empty());
    assert_eq!(result.error.as_deref(), Some("Test tool failed intentionally"));
}

#[tokio::test]
async fn test_unknown_tool_name_policy() {
    let mut registry = ToolRegistry::new();
    registry.register(TestTool::new("known", "The only registered tool"));

    let params = ToolParameters::from_json("{}").unwrap();
    let result = registry.execute_tool("unknown", params).await;
    assert!(!result.success);
    assert_eq!(result.error.as_deref(), Some("Tool 'unknown' not found"));
}

#[tokio::test]
async fn test_declarations_are_sorted_by_name() {
    let mut registry = ToolRegistry::new();
    registry.register(TestTool::new("zeta", "last"));
    registry.register(TestTool::new("alpha", "first"));

    let declarations = registry.function_declarations();
    let names: Vec<&str> = declarations.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["alpha", "zeta"]);
}

#[tokio::test]
async fn test_declaration_schema_shape() {
    let mut registry = ToolRegistry::new();
    let tool = TestTool::new("lookup", "Looks something up").with_parameters(HashMap::from([
        param!("query", "string", "What to look up", required),
        param!("limit", "integer", "Maximum results", optional),
    ]));
    registry.register(tool);

    let declarations = registry.function_declarations();
    assert_eq!(declarations.len(), 1);

    let schema = &declarations[0].parameters;
    assert_eq!(schema["type"], "object");
    assert_eq!(schema["properties"]["query"]["type"], "string");
    assert_eq!(schema["properties"]["query"]["description"], "What to look up");
    assert_eq!(schema["required"], serde_json::json!(["query"]));
}

#[tokio::test]
async fn test_typed_parameter_extraction() {
    let params = ToolParameters::from_value(serde_json::json!({
        "location": "東京",
        "days": 2,
    }))
    .unwrap();

    let location: String = params.get_required("location").unwrap();
    assert_eq!(location, "東京");

    let days: Option<u32> = params.get_optional("days").unwrap();
    assert_eq!(days, Some(2));

    let missing: Option<String> = params.get_optional("absent").unwrap();
    assert_eq!(missing, None);

    let err = params.get_required::<String>("absent").unwrap_err();
    assert!(err.to_string().contains("Required parameter 'absent' missing"));
}
