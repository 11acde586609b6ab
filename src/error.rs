use crate::schema::TypeKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WeaverError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("SDL parse error: {0}")]
    Parse(#[from] async_graphql::parser::Error),

    #[error("Type \"{0}\" already exists in the schema")]
    DuplicateType(String),

    #[error("Cannot extend type \"{0}\" because it does not exist in the schema")]
    UnknownType(String),

    #[error("Cannot extend {found} \"{name}\" with a {expected} extension")]
    KindMismatch {
        name: String,
        expected: TypeKind,
        found: TypeKind,
    },

    #[error("Field \"{type_name}.{field}\" already exists in the schema")]
    DuplicateField { type_name: String, field: String },

    #[error("Enum value \"{type_name}.{value}\" already exists in the schema")]
    DuplicateEnumValue { type_name: String, value: String },

    #[error("Type \"{type_name}\" already includes \"{member}\"")]
    DuplicateMember { type_name: String, member: String },

    #[error("Directive \"@{0}\" already exists in the schema")]
    DuplicateDirective(String),

    #[error("Root {operation} type is already defined as \"{existing}\"")]
    RootOperationDefined {
        operation: &'static str,
        existing: String,
    },

    #[error("Schema generation error: {0}")]
    SchemaGeneration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for WeaverError {
    fn from(err: toml::de::Error) -> Self {
        WeaverError::Config(format!("TOML parse error: {}", err))
    }
}

impl From<toml::ser::Error> for WeaverError {
    fn from(err: toml::ser::Error) -> Self {
        WeaverError::Serialization(format!("TOML serialization error: {}", err))
    }
}

impl From<serde_json::Error> for WeaverError {
    fn from(err: serde_json::Error) -> Self {
        WeaverError::Serialization(format!("JSON serialization error: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, WeaverError>;
