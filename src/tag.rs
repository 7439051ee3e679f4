use std::{fmt::Display, str::FromStr};

/// The simplified type tag of a flat parameter definition, in place of a json schema type name.
///
/// | schema type | tag     |
/// |-------------|---------|
/// | `string`    | `str`   |
/// | `number`    | `float` |
/// | `boolean`   | `bool`  |
/// | `object`    | `Dict`  |
/// | `array`     | `List`  |
///
/// `int` has no schema type of its own, it is only accepted on the way back. Going from a tag back
/// to a schema type is lossy for numbers, `int` and `float` both become `number`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DomainTag {
    Str,
    Float,
    Int,
    Bool,
    Dict,
    List,
}

impl DomainTag {
    /// Looks up the tag for a json schema type name. `None` for any type not in the table.
    pub fn from_schema_type(schema_type: &str) -> Option<Self> {
        match schema_type {
            "string" => Some(Self::Str),
            "number" => Some(Self::Float),
            "boolean" => Some(Self::Bool),
            "object" => Some(Self::Dict),
            "array" => Some(Self::List),
            _ => None,
        }
    }

    /// The tag for `schema_type`, or `schema_type` itself when it has no tag.
    pub fn forward(schema_type: &str) -> String {
        match Self::from_schema_type(schema_type) {
            Some(tag) => tag.as_str().to_owned(),
            None => schema_type.to_owned(),
        }
    }

    /// The json schema type name this tag maps back to.
    pub fn schema_type(self) -> &'static str {
        match self {
            Self::Str => "string",
            Self::Float | Self::Int => "number",
            Self::Bool => "boolean",
            Self::Dict => "object",
            Self::List => "array",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Str => "str",
            Self::Float => "float",
            Self::Int => "int",
            Self::Bool => "bool",
            Self::Dict => "Dict",
            Self::List => "List",
        }
    }
}

/// The tag is not one of `str`, `float`, `int`, `bool`, `Dict` or `List`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTag(pub String);

impl Display for UnknownTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "`{}` is not a known type tag", self.0)
    }
}

impl std::error::Error for UnknownTag {}

impl FromStr for DomainTag {
    type Err = UnknownTag;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "str" => Ok(Self::Str),
            "float" => Ok(Self::Float),
            "int" => Ok(Self::Int),
            "bool" => Ok(Self::Bool),
            "Dict" => Ok(Self::Dict),
            "List" => Ok(Self::List),
            _ => Err(UnknownTag(tag.to_owned())),
        }
    }
}

impl Display for DomainTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
