pub mod config;
pub mod error;
pub mod schema;

// Re-export commonly used types
pub use config::{Config, OutputConfig, SourcesConfig};
pub use error::{Result, WeaverError};
pub use schema::{ExtensionDocument, Schema, SchemaBuilder, SchemaConfig, TypeDefinition, TypeRegistry};
