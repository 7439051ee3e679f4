use serde_json::Value;
use tracing::{trace, warn};

use crate::{
    utils::join_path, Collision, Converter, DomainTag, FlattenError, ParameterDefinition,
    ParameterMap,
};

pub(crate) fn flatten(converter: &Converter, schema: &Value) -> Result<ParameterMap, FlattenError> {
    let mut parameters = ParameterMap::new();
    flatten_into(converter, schema, "", 0, &mut parameters)?;
    Ok(parameters)
}

/// Walks the `properties` of the object `node` found at `prefix`, `depth` objects below the root.
fn flatten_into(
    converter: &Converter,
    node: &Value,
    prefix: &str,
    depth: usize,
    parameters: &mut ParameterMap,
) -> Result<(), FlattenError> {
    let Some(node) = node.as_object() else {
        return Err(FlattenError::not_an_object(prefix.to_owned()));
    };
    let Some(properties) = node.get("properties").and_then(Value::as_object) else {
        return Ok(());
    };
    let required: Vec<&str> = node
        .get("required")
        .and_then(Value::as_array)
        .map(|required| required.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();

    for (key, value) in properties {
        let path = join_path(prefix, key, converter.delimiter());
        let schema_type = match value.get("type") {
            Some(Value::String(schema_type)) => schema_type,
            Some(other) => {
                return Err(FlattenError::UnsupportedType {
                    path,
                    found: other.to_string(),
                })
            }
            None => return Err(FlattenError::missing_type(path)),
        };

        if schema_type == "object" {
            if depth + 1 > converter.max_depth() {
                return Err(FlattenError::SchemaTooDeep {
                    path,
                    max_depth: converter.max_depth(),
                });
            }
            flatten_into(converter, value, &path, depth + 1, parameters)?;
            continue;
        }

        let definition = ParameterDefinition {
            description: value
                .get("description")
                .and_then(Value::as_str)
                .map(str::to_owned),
            r#type: DomainTag::forward(schema_type),
            required: required.contains(&key.as_str()),
        };
        trace!(%path, tag = %definition.r#type, required = definition.required, "Flattened property");
        if parameters.contains_key(&path) {
            match converter.collision() {
                Collision::Reject => return Err(FlattenError::DuplicateKey { path }),
                Collision::Overwrite => warn!(%path, "Overwriting parameter with the same key"),
            }
        }
        parameters.insert(path, definition);
    }
    Ok(())
}
