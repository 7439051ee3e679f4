error_set::error_set! {

    /// An invalid [`crate::Converter`] setting.
    ConfigError = {
        #[display("The key delimiter must not be empty")]
        EmptyDelimiter,
    };

    /// The schema could not be flattened into parameter definitions.
    /// Flattening is all or nothing, no partial map is returned.
    FlattenError = {
        #[display("The schema at `{path}` is not a json object")]
        NotAnObject {
            path: String,
        },
        #[display("The property `{path}` is missing the 'type' field")]
        MissingType {
            path: String,
        },
        /// Unions such as `["string", "null"]` have no flat representation.
        #[display("The property `{path}` has a 'type' that is not a string: {found}")]
        UnsupportedType {
            path: String,
            found: String,
        },
        #[display("The object at `{path}` is nested deeper than the limit of {max_depth}")]
        SchemaTooDeep {
            path: String,
            max_depth: usize,
        },
        #[display("More than one property flattens to the key `{path}`")]
        DuplicateKey {
            path: String,
        },
    };

    /// The parameter definitions could not be rebuilt into a schema.
    UnflattenError = {
        #[display("The parameter `{key}` has the unknown type tag `{tag}`")]
        UnknownType {
            key: String,
            tag: String,
        },
        #[display("The parameter `{key}` is nested deeper than the limit of {max_depth}")]
        KeyTooDeep {
            key: String,
            max_depth: usize,
        },
        #[display("The parameter `{key}` conflicts with another parameter on the same path")]
        PathConflict {
            key: String,
        },
    };

    /// Any error from the json level [`crate::Converter::convert`] and [`crate::Converter::unconvert`].
    ConvertError = {
        #[display("The parameter definitions are not valid json")]
        Json(serde_json::Error),
    } || FlattenError || UnflattenError;
}

impl FlattenError {
    pub fn missing_type(path: String) -> Self {
        Self::MissingType { path }
    }

    pub fn not_an_object(path: String) -> Self {
        Self::NotAnObject { path }
    }
}

impl UnflattenError {
    pub fn unknown_type(key: String, tag: String) -> Self {
        Self::UnknownType { key, tag }
    }

    pub fn path_conflict(key: String) -> Self {
        Self::PathConflict { key }
    }
}
