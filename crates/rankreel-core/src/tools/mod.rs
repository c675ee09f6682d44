//! Tool system: trait, registry, and built-in tool implementations.
//!
//! Every tool implements the `Tool` trait and registers itself in the
//! `ToolRegistry`. An orchestrator queries the registry for tool
//! descriptors and dispatches tool calls by name.

pub mod error;
pub mod imdb;
pub mod rapidapi;

pub use error::ToolError;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, error};

/// Tool-call descriptor in OpenAI function-calling format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    #[serde(rename = "type")]
    pub def_type: String,
    pub function: ToolFunctionDef,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolFunctionDef {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

/// Trait that all tools must implement.
///
/// Each tool declares its name, description, JSON Schema parameters, and
/// an async `run` method. Failures are returned to the caller unmodified.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Unique tool name used in function calls (e.g., "imdb_top_series").
    fn name(&self) -> &str;

    /// Human-readable description of what the tool does.
    fn description(&self) -> &str;

    /// JSON Schema for the tool's parameters.
    fn parameters(&self) -> Value;

    /// Run the tool with the given arguments.
    async fn run(&self, args: HashMap<String, Value>) -> Result<String, ToolError>;

    /// The tool-call descriptor an orchestrator uses to invoke `run`.
    fn describe(&self) -> ToolDefinition {
        function_definition(self.name(), self.description(), self.parameters())
    }
}

/// Wrap a name, description and parameter schema as a function descriptor.
pub fn function_definition(name: &str, description: &str, parameters: Value) -> ToolDefinition {
    ToolDefinition {
        def_type: "function".into(),
        function: ToolFunctionDef {
            name: name.into(),
            description: description.into(),
            parameters,
        },
    }
}

/// Descriptors of every built-in tool, sorted by name.
///
/// Needs no configuration, so an orchestrator can discover tools before
/// any secrets are available.
pub fn builtin_definitions() -> Vec<ToolDefinition> {
    let mut defs = vec![imdb::TopSeriesTool::definition()];
    defs.sort_by(|a, b| a.function.name.cmp(&b.function.name));
    defs
}

/// Dynamic registry for tools.
///
/// Allows runtime registration and lookup of tools by name.
pub struct ToolRegistry {
    tools: HashMap<String, Box<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Register a tool. Replaces any existing tool with the same name.
    pub fn register(&mut self, tool: Box<dyn Tool>) {
        debug!(tool = tool.name(), "Registered tool");
        self.tools.insert(tool.name().to_string(), tool);
    }

    /// Get a tool by name.
    pub fn get(&self, name: &str) -> Option<&dyn Tool> {
        self.tools.get(name).map(|t| t.as_ref())
    }

    /// Check if a tool is registered.
    pub fn has(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Run a tool by name with the given arguments.
    pub async fn run(&self, name: &str, args: HashMap<String, Value>) -> Result<String, ToolError> {
        match self.tools.get(name) {
            Some(tool) => {
                debug!(tool = name, "Running tool");
                tool.run(args).await
            }
            None => {
                error!(tool = name, "Tool not found");
                Err(ToolError::NotFound(name.to_string()))
            }
        }
    }

    /// All tool descriptors, sorted by tool name.
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        let mut defs: Vec<ToolDefinition> = self.tools.values().map(|t| t.describe()).collect();
        defs.sort_by(|a, b| a.function.name.cmp(&b.function.name));
        defs
    }

    /// Registered tool names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tools.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct DummyTool;

    #[async_trait]
    impl Tool for DummyTool {
        fn name(&self) -> &str {
            "dummy"
        }
        fn description(&self) -> &str {
            "A dummy tool for testing"
        }
        fn parameters(&self) -> Value {
            serde_json::json!({"type": "object", "properties": {}})
        }
        async fn run(&self, _args: HashMap<String, Value>) -> Result<String, ToolError> {
            Ok("dummy result".into())
        }
    }

    #[tokio::test]
    async fn test_register_and_run() {
        let mut registry = ToolRegistry::new();
        registry.register(Box::new(DummyTool));

        assert!(registry.has("dummy"));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.names(), vec!["dummy"]);

        let result = registry.run("dummy", HashMap::new()).await.unwrap();
        assert_eq!(result, "dummy result");
    }

    #[tokio::test]
    async fn test_missing_tool() {
        let registry = ToolRegistry::new();
        let err = registry.run("nonexistent", HashMap::new()).await.unwrap_err();
        assert!(matches!(err, ToolError::NotFound(ref name) if name == "nonexistent"));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_describe_wraps_function_format() {
        let def = DummyTool.describe();
        let json = serde_json::to_value(&def).unwrap();
        assert_eq!(json["type"], "function");
        assert_eq!(json["function"]["name"], "dummy");
        assert_eq!(json["function"]["description"], "A dummy tool for testing");
        assert_eq!(json["function"]["parameters"]["type"], "object");
    }

    #[test]
    fn test_builtin_definitions_without_config() {
        let defs = builtin_definitions();
        let names: Vec<&str> = defs.iter().map(|d| d.function.name.as_str()).collect();
        assert_eq!(names, vec!["imdb_top_series"]);
        assert_eq!(defs[0].def_type, "function");
        assert_eq!(defs[0].function.parameters["required"], serde_json::json!(["end"]));
    }

    #[test]
    fn test_definitions_sorted_by_name() {
        struct Other;

        #[async_trait]
        impl Tool for Other {
            fn name(&self) -> &str {
                "another"
            }
            fn description(&self) -> &str {
                "Another tool"
            }
            fn parameters(&self) -> Value {
                serde_json::json!({"type": "object", "properties": {}})
            }
            async fn run(&self, _args: HashMap<String, Value>) -> Result<String, ToolError> {
                Ok(String::new())
            }
        }

        let mut registry = ToolRegistry::default();
        registry.register(Box::new(DummyTool));
        registry.register(Box::new(Other));

        let names: Vec<String> = registry
            .definitions()
            .into_iter()
            .map(|d| d.function.name)
            .collect();
        assert_eq!(names, vec!["another", "dummy"]);
    }
}
