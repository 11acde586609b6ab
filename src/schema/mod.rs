/// GraphQL schema assembly
///
/// This module merges a base schema configuration with a registry of named types,
/// applies SDL extension documents, and lowers the result into an executable
/// `async_graphql::dynamic::Schema`.

mod assembled;
mod builder;
mod definition;
mod document;
mod extender;
mod lowering;
mod registry;
mod resolver;
mod scalars;
mod schema_config;
mod sources;
mod type_mapping;

pub use assembled::{OperationType, Schema};
pub use builder::SchemaBuilder;
pub use definition::{
    DirectiveDefinition, EnumType, EnumValueDefinition, FieldDefinition, InputObjectType,
    InputValueDefinition, InterfaceType, ObjectType, ResolverFn, ScalarType, ScalarValidator,
    TypeDefinition, TypeKind, UnionType, DEFAULT_DEPRECATION_REASON,
};
pub use document::ExtensionDocument;
pub use extender::extend;
pub use registry::{TypeProvider, TypeRegistry};
pub use resolver::create_field;
pub use scalars::{custom_scalars, date_scalar, datetime_scalar, DATE, DATE_TIME};
pub use schema_config::{SchemaConfig, TypeList, TypeSupplier};
pub use type_mapping::{ast_to_type_ref, is_builtin_scalar, named_type, parse_type_ref};
