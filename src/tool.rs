use serde::{Deserialize, Serialize};

use crate::ParameterMap;

/// A tool as sent to apis that take flat parameter definitions instead of a json schema.
///
/// ```json
/// {
///     "name": "toolname",
///     "description": "tooldescription",
///     "parameterDefinitions": {
///         "name": { "description": "name", "type": "str", "required": true },
///         "preferences__color": { "description": "color", "type": "str", "required": false }
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub parameter_definitions: ParameterMap,
}
