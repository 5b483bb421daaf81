//! Tool-related type definitions

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// A named tool invocation issued by the capability provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolInvocation {
    /// Name of the tool to call
    pub name: String,
    /// Arguments to pass to the tool
    #[serde(default)]
    pub arguments: HashMap<String, Value>,
}

impl ToolInvocation {
    /// Create a new tool invocation
    pub fn new(name: impl Into<String>, arguments: HashMap<String, Value>) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }

    /// Create an invocation without arguments
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, HashMap::new())
    }

    /// Create an invocation from `(key, value)` string pairs
    pub fn with_args<I, K, V>(name: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let arguments = args
            .into_iter()
            .map(|(k, v)| (k.into(), Value::String(v.into())))
            .collect();
        Self::new(name, arguments)
    }

    /// Get a string argument.
    ///
    /// Numbers and booleans are accepted and rendered as text, since providers
    /// occasionally emit `"task_id": 2` for a string-typed parameter.
    pub fn get_string(&self, key: &str) -> Option<String> {
        match self.arguments.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// Get a string argument, treating blank values as absent
    pub fn get_non_blank(&self, key: &str) -> Option<String> {
        self.get_string(key).filter(|s| !s.trim().is_empty())
    }

    /// Compact `name(key=value, ...)` rendering for logs and audit display
    pub fn summary(&self) -> String {
        let mut args: Vec<_> = self.arguments.iter().collect();
        args.sort_by(|a, b| a.0.cmp(b.0));
        let rendered: Vec<String> = args
            .into_iter()
            .map(|(k, v)| match v {
                Value::String(s) => format!("{}={:?}", k, s),
                other => format!("{}={}", k, other),
            })
            .collect();
        format!("{}({})", self.name, rendered.join(", "))
    }
}

/// Parameter definition for a tool. The vocabulary only uses string parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolParameter {
    /// Parameter name
    pub name: String,
    /// Parameter description
    pub description: String,
    /// Whether this parameter is required
    pub required: bool,
}

impl ToolParameter {
    /// Create a required string parameter
    pub fn string(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            required: true,
        }
    }

    /// Create an optional string parameter
    pub fn optional_string(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            required: false,
        }
    }
}

/// Tool declaration advertised to the provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSchema {
    /// Tool name
    pub name: String,
    /// Tool description
    pub description: String,
    /// Input parameters schema
    pub parameters: Value,
}

impl ToolSchema {
    /// Create a new tool schema
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: Vec<ToolParameter>,
    ) -> Self {
        let mut properties = serde_json::Map::new();
        let mut required = Vec::new();

        for param in parameters {
            if param.required {
                required.push(param.name.clone());
            }
            properties.insert(
                param.name,
                serde_json::json!({
                    "type": "string",
                    "description": param.description,
                }),
            );
        }

        let mut parameters_schema = serde_json::json!({
            "type": "object",
            "properties": properties,
        });
        if !required.is_empty() {
            parameters_schema["required"] = serde_json::json!(required);
        }

        Self {
            name: name.into(),
            description: description.into(),
            parameters: parameters_schema,
        }
    }

    /// Names of the required parameters
    pub fn required(&self) -> Vec<&str> {
        self.parameters["required"]
            .as_array()
            .map(|names| names.iter().filter_map(|v| v.as_str()).collect())
            .unwrap_or_default()
    }
}
