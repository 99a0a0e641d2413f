//! JSON Schema tool converter.
//!
//! Default implementation of [`ToolSchemaPort`] producing the schema shape
//! the agent protocol expects in `tools/list`: canonical name, description,
//! and an `inputSchema` object.

use relay_application::ports::ToolSchemaPort;
use relay_domain::{ParamType, ToolDefinition};

/// Default implementation producing protocol-neutral JSON Schema.
///
/// Handles the param-type mapping:
/// - `string`, `number`, `integer`, `boolean` → the matching schema type
/// - `amount` → `oneOf` a number or the literal string `"auto"`
pub struct JsonSchemaToolConverter;

impl ToolSchemaPort for JsonSchemaToolConverter {
    fn tool_to_schema(&self, tool: &ToolDefinition) -> serde_json::Value {
        let mut properties = serde_json::Map::new();
        let mut required = Vec::new();

        for param in &tool.parameters {
            let mut prop = match param.param_type {
                ParamType::String => serde_json::json!({ "type": "string" }),
                ParamType::Number => serde_json::json!({ "type": "number" }),
                ParamType::Integer => serde_json::json!({ "type": "integer" }),
                ParamType::Boolean => serde_json::json!({ "type": "boolean" }),
                ParamType::Amount => serde_json::json!({
                    "oneOf": [
                        { "type": "number" },
                        { "type": "string", "enum": ["auto"] },
                    ]
                }),
            };
            prop["description"] = serde_json::json!(param.description);
            properties.insert(param.name.clone(), prop);

            if param.required {
                required.push(serde_json::json!(param.name));
            }
        }

        serde_json::json!({
            "name": tool.canonical_name(),
            "description": tool.description,
            "inputSchema": {
                "type": "object",
                "properties": properties,
                "required": required,
            }
        })
    }
}
