use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One flat parameter, e.g. `{"description": "color", "type": "str", "required": false}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// A [`crate::DomainTag`] name, or a schema type that has no tag.
    #[serde(rename = "type")]
    pub r#type: String,
    #[serde(default)]
    pub required: bool,
}

impl ParameterDefinition {
    pub fn new(r#type: impl Into<String>, required: bool) -> Self {
        Self {
            description: None,
            r#type: r#type.into(),
            required,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Parameter definitions keyed by their delimiter joined path.
///
/// Keeps insertion order, so flattening the same schema twice yields the same json. Inserting a key
/// that already exists replaces the definition without moving the key.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterMap(IndexMap<String, ParameterDefinition>);

impl ParameterMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts the definition, returning the one it replaced if `key` was already present.
    pub fn insert(
        &mut self,
        key: String,
        definition: ParameterDefinition,
    ) -> Option<ParameterDefinition> {
        self.0.insert(key, definition)
    }

    pub fn get(&self, key: &str) -> Option<&ParameterDefinition> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParameterDefinition)> {
        self.0
            .iter()
            .map(|(key, definition)| (key.as_str(), definition))
    }
}

impl FromIterator<(String, ParameterDefinition)> for ParameterMap {
    fn from_iter<I: IntoIterator<Item = (String, ParameterDefinition)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for ParameterMap {
    type Item = (String, ParameterDefinition);
    type IntoIter = indexmap::map::IntoIter<String, ParameterDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
