use std::fmt::Display;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, instrument};

use crate::{
    flatten, unflatten, ConfigError, ConvertError, FlattenError, ParameterMap, ToolDefinition,
    UnflattenError,
};

/// Delimiter used when none is configured.
pub const DEFAULT_DELIMITER: &str = "__";

/// Object nesting allowed below the root when none is configured.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// The string joining property names into a parameter key. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Delimiter(String);

impl Delimiter {
    pub fn new(delimiter: impl Into<String>) -> Result<Self, ConfigError> {
        let delimiter = delimiter.into();
        if delimiter.is_empty() {
            return Err(ConfigError::EmptyDelimiter);
        }
        Ok(Self(delimiter))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Delimiter {
    fn default() -> Self {
        Self(DEFAULT_DELIMITER.to_owned())
    }
}

impl TryFrom<String> for Delimiter {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Delimiter> for String {
    fn from(value: Delimiter) -> Self {
        value.0
    }
}

impl Display for Delimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// What happens when two parameters land on the same key or path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collision {
    /// The later parameter replaces the earlier one.
    #[default]
    Overwrite,
    /// The conversion fails.
    Reject,
}

/// Converts between nested json schemas and flat parameter definitions.
///
/// Every setting travels with the converter, so converters with different delimiters can be used
/// side by side. Deserializes from e.g. `{"delimiter": ".", "envelope": true, "maxDepth": 8}`,
/// missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Converter {
    delimiter: Delimiter,
    /// Whether the json level api wraps parameter definitions in a [`ToolDefinition`].
    envelope: bool,
    max_depth: usize,
    collision: Collision,
}

impl Default for Converter {
    fn default() -> Self {
        Self {
            delimiter: Delimiter::default(),
            envelope: false,
            max_depth: DEFAULT_MAX_DEPTH,
            collision: Collision::default(),
        }
    }
}

impl Converter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Joins keys with `.` instead of `__`.
    pub fn dotted() -> Self {
        Self {
            delimiter: Delimiter(".".to_owned()),
            ..Self::default()
        }
    }

    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Result<Self, ConfigError> {
        self.delimiter = Delimiter::new(delimiter)?;
        Ok(self)
    }

    pub fn with_envelope(mut self, envelope: bool) -> Self {
        self.envelope = envelope;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_collision(mut self, collision: Collision) -> Self {
        self.collision = collision;
        self
    }

    pub fn delimiter(&self) -> &str {
        self.delimiter.as_str()
    }

    pub fn envelope(&self) -> bool {
        self.envelope
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn collision(&self) -> Collision {
        self.collision
    }

    //************************************************************************//

    /// Flattens an object schema into parameter definitions keyed by joined property paths.
    #[instrument(skip_all, fields(delimiter = %self.delimiter))]
    pub fn flatten(&self, schema: &Value) -> Result<ParameterMap, FlattenError> {
        let parameters = flatten::flatten(self, schema)?;
        debug!(parameter_count = parameters.len(), "Flattened schema");
        Ok(parameters)
    }

    /// Rebuilds the nested object schema from flat parameter definitions.
    #[instrument(skip_all, fields(delimiter = %self.delimiter, parameter_count = parameters.len()))]
    pub fn unflatten(&self, parameters: &ParameterMap) -> Result<Value, UnflattenError> {
        let schema = unflatten::unflatten(self, parameters)?;
        debug!("Unflattened parameters");
        Ok(schema)
    }

    /// Flattens `schema` into a [`ToolDefinition`] named `name`.
    pub fn to_tool(
        &self,
        name: impl Into<String>,
        description: impl Into<String>,
        schema: &Value,
    ) -> Result<ToolDefinition, FlattenError> {
        Ok(ToolDefinition {
            name: name.into(),
            description: description.into(),
            parameter_definitions: self.flatten(schema)?,
        })
    }

    /// Rebuilds the parameter schema of `tool`.
    pub fn from_tool(&self, tool: &ToolDefinition) -> Result<Value, UnflattenError> {
        self.unflatten(&tool.parameter_definitions)
    }

    //************************************************************************//

    /// Flattens `schema` to json. With [`Converter::with_envelope`] the result is a tool object
    /// `{"name", "description", "parameterDefinitions"}`, otherwise just the parameter definitions
    /// and `name` and `description` are unused.
    #[instrument(skip(self, description, schema), fields(envelope = self.envelope))]
    pub fn convert(
        &self,
        name: &str,
        description: &str,
        schema: &Value,
    ) -> Result<Value, ConvertError> {
        let value = if self.envelope {
            serde_json::to_value(self.to_tool(name, description, schema)?)?
        } else {
            serde_json::to_value(self.flatten(schema)?)?
        };
        Ok(value)
    }

    /// The inverse of [`Converter::convert`]. Expects a tool object when the envelope is enabled and
    /// bare parameter definitions otherwise.
    #[instrument(skip_all, fields(envelope = self.envelope))]
    pub fn unconvert(&self, input: &Value) -> Result<Value, ConvertError> {
        let parameters = self.parse_parameters(input)?;
        Ok(self.unflatten(&parameters)?)
    }

    /// [`Converter::unconvert`] for a json string.
    pub fn unconvert_str(&self, input: &str) -> Result<Value, ConvertError> {
        let value = serde_json::from_str::<Value>(input)?;
        self.unconvert(&value)
    }

    fn parse_parameters(&self, input: &Value) -> Result<ParameterMap, ConvertError> {
        if self.envelope {
            let tool = ToolDefinition::deserialize(input)?;
            debug!(tool_name = %tool.name, "Parsed tool definition");
            Ok(tool.parameter_definitions)
        } else {
            Ok(ParameterMap::deserialize(input)?)
        }
    }
}
