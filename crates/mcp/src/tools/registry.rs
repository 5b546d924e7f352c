// Tool trait and the registry that dispatches calls by name

use crate::error::ToolError;
use crate::protocol::{CallToolResult, ToolAnnotations, ToolSchema};
use crate::tools::Arguments;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, warn};

/// Tool executor trait
#[async_trait::async_trait]
pub trait Tool: Send + Sync {
    /// Get the tool schema for MCP
    fn schema(&self) -> ToolSchema;

    /// Execute the tool, producing the text shown to the caller
    async fn execute(&self, arguments: &Arguments) -> Result<String, ToolError>;

    /// Get the tool's tier (published as annotations)
    fn tier(&self) -> ToolTier {
        ToolTier::Tier0
    }
}

/// Tool safety tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ToolTier {
    /// Read-only operations
    Tier0,
    /// Writes that leave existing data recoverable
    Tier1,
    /// Deletes and cancellations
    Tier2,
}

impl ToolTier {
    pub fn annotations(&self) -> ToolAnnotations {
        ToolAnnotations {
            read_only_hint: *self == ToolTier::Tier0,
            destructive_hint: *self == ToolTier::Tier2,
        }
    }
}

/// Tool registry for managing available tools
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Register a tool, replacing any tool with the same name
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        let schema = tool.schema();
        self.tools.insert(schema.name, tool);
    }

    /// Get a tool by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    /// Check if a tool exists
    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// List all tool schemas, sorted by name
    pub fn list_schemas(&self) -> Vec<ToolSchema> {
        let mut schemas: Vec<ToolSchema> = self
            .tools
            .values()
            .map(|tool| {
                let mut schema = tool.schema();
                schema.annotations = Some(tool.tier().annotations());
                schema
            })
            .collect();
        schemas.sort_by(|a, b| a.name.cmp(&b.name));
        schemas
    }

    /// Invoke a tool by name. Returns `None` for unknown tools; tool
    /// failures come back as an error result.
    pub async fn call(&self, name: &str, arguments: serde_json::Value) -> Option<CallToolResult> {
        let tool = self.get(name)?;
        info!(tool = name, "Calling tool");

        let outcome = match Arguments::from_value(arguments) {
            Ok(args) => tool.execute(&args).await,
            Err(e) => Err(e.into()),
        };

        Some(match outcome {
            Ok(text) => CallToolResult::text(text),
            Err(err) => {
                warn!(tool = name, error = %err, "Tool call failed");
                CallToolResult::error(err.to_string())
            }
        })
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// Helper functions for creating tool schemas

pub fn json_schema_object(properties: serde_json::Value, required: Vec<&str>) -> serde_json::Value {
    serde_json::json!({
        "type": "object",
        "properties": properties,
        "required": required
    })
}

pub fn json_schema_string(description: &str) -> serde_json::Value {
    serde_json::json!({
        "type": "string",
        "description": description
    })
}

pub fn json_schema_number(description: &str) -> serde_json::Value {
    serde_json::json!({
        "type": "number",
        "description": description
    })
}

pub fn json_schema_enum(description: &str, values: &[&str], default: &str) -> serde_json::Value {
    serde_json::json!({
        "type": "string",
        "description": description,
        "enum": values,
        "default": default
    })
}
