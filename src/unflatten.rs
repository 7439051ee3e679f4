use serde_json::{Map, Value};
use tracing::{trace, warn};

use crate::{
    utils::{is_object_type, object_node},
    Collision, Converter, DomainTag, ParameterDefinition, ParameterMap, UnflattenError,
};

pub(crate) fn unflatten(
    converter: &Converter,
    parameters: &ParameterMap,
) -> Result<Value, UnflattenError> {
    let mut root = object_node();
    for (key, definition) in parameters.iter() {
        let tag = definition
            .r#type
            .parse::<DomainTag>()
            .map_err(|_| UnflattenError::unknown_type(key.to_owned(), definition.r#type.clone()))?;
        let segments: Vec<&str> = key.split(converter.delimiter()).collect();
        let Some((leaf, parents)) = segments.split_last() else {
            continue;
        };
        if parents.len() > converter.max_depth() {
            return Err(UnflattenError::KeyTooDeep {
                key: key.to_owned(),
                max_depth: converter.max_depth(),
            });
        }

        let mut node = &mut root;
        for segment in parents {
            node = descend(converter, node, segment, key)?;
        }
        insert_leaf(converter, node, leaf, definition, tag, key)?;
        trace!(key, %tag, required = definition.required, "Unflattened parameter");
    }
    Ok(Value::Object(root))
}

fn properties_mut<'a>(
    node: &'a mut Map<String, Value>,
    key: &str,
) -> Result<&'a mut Map<String, Value>, UnflattenError> {
    node.entry("properties")
        .or_insert_with(|| Value::Object(Map::new()))
        .as_object_mut()
        .ok_or_else(|| UnflattenError::path_conflict(key.to_owned()))
}

/// Returns the object node at `segment` below `node`, creating it if needed.
fn descend<'a>(
    converter: &Converter,
    node: &'a mut Map<String, Value>,
    segment: &str,
    key: &str,
) -> Result<&'a mut Map<String, Value>, UnflattenError> {
    let properties = properties_mut(node, key)?;
    let replaces_leaf = properties
        .get(segment)
        .is_some_and(|existing| !is_object_type(existing));
    if replaces_leaf {
        if converter.collision() == Collision::Reject {
            return Err(UnflattenError::path_conflict(key.to_owned()));
        }
        warn!(key, segment, "Replacing parameter with an object on the same path");
        properties.insert(segment.to_owned(), Value::Object(object_node()));
        set_required(node, segment, false);
    }

    let child = properties_mut(node, key)?
        .entry(segment)
        .or_insert_with(|| Value::Object(object_node()))
        .as_object_mut()
        .ok_or_else(|| UnflattenError::path_conflict(key.to_owned()))?;
    // a `Dict` parameter may become the parent of later keys
    child
        .entry("properties")
        .or_insert_with(|| Value::Object(Map::new()));
    child
        .entry("required")
        .or_insert_with(|| Value::Array(Vec::new()));
    Ok(child)
}

fn insert_leaf(
    converter: &Converter,
    node: &mut Map<String, Value>,
    leaf: &str,
    definition: &ParameterDefinition,
    tag: DomainTag,
    key: &str,
) -> Result<(), UnflattenError> {
    let properties = properties_mut(node, key)?;
    let replaces_object = properties
        .get(leaf)
        .is_some_and(|existing| existing.get("properties").is_some());

    if replaces_object && tag == DomainTag::Dict {
        // children seen before their `Dict` parent stay in place
        if let (Some(description), Some(Value::Object(existing))) =
            (&definition.description, properties.get_mut(leaf))
        {
            existing.insert("description".to_owned(), Value::String(description.clone()));
        }
    } else {
        if replaces_object {
            if converter.collision() == Collision::Reject {
                return Err(UnflattenError::path_conflict(key.to_owned()));
            }
            warn!(key, "Replacing object with a parameter on the same path");
        }
        let mut property = Map::new();
        property.insert(
            "type".to_owned(),
            Value::String(tag.schema_type().to_owned()),
        );
        if let Some(description) = &definition.description {
            property.insert("description".to_owned(), Value::String(description.clone()));
        }
        properties.insert(leaf.to_owned(), Value::Object(property));
    }

    set_required(node, leaf, definition.required);
    Ok(())
}

/// Lists `name` in the `required` of `node` exactly once when `required`, not at all otherwise.
fn set_required(node: &mut Map<String, Value>, name: &str, required: bool) {
    if let Value::Array(list) = node
        .entry("required")
        .or_insert_with(|| Value::Array(Vec::new()))
    {
        list.retain(|listed| listed.as_str() != Some(name));
        if required {
            list.push(Value::String(name.to_owned()));
        }
    }
}
