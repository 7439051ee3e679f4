//! Converts llm tool parameter schemas between a nested json schema and flat parameter
//! definitions keyed by delimiter joined property paths.
//!
//! ```
//! use flatparams::{convert, json, unconvert};
//!
//! let schema = json!({
//!     "type": "object",
//!     "required": ["name"],
//!     "properties": {
//!         "name": { "type": "string" },
//!         "preferences": {
//!             "type": "object",
//!             "properties": { "color": { "type": "string" } }
//!         }
//!     }
//! });
//! let parameters = convert(&schema).unwrap();
//! assert!(parameters.get("name").unwrap().required);
//! assert_eq!(parameters.get("preferences__color").unwrap().r#type, "str");
//!
//! let rebuilt = unconvert(&parameters).unwrap();
//! assert_eq!(rebuilt["properties"]["preferences"]["properties"]["color"]["type"], "string");
//! ```

mod converter;
mod errors;
mod flatten;
mod parameter;
mod tag;
mod tool;
mod unflatten;
mod utils;

pub use converter::{Collision, Converter, Delimiter, DEFAULT_DELIMITER, DEFAULT_MAX_DEPTH};
pub use errors::*;
pub use parameter::{ParameterDefinition, ParameterMap};
pub use tag::{DomainTag, UnknownTag};
pub use tool::ToolDefinition;

pub use serde_json::{json, Value};

/// Flattens `schema` with the default [`Converter`].
pub fn convert(schema: &Value) -> Result<ParameterMap, FlattenError> {
    Converter::default().flatten(schema)
}

/// Rebuilds a schema from `parameters` with the default [`Converter`].
pub fn unconvert(parameters: &ParameterMap) -> Result<Value, UnflattenError> {
    Converter::default().unflatten(parameters)
}
