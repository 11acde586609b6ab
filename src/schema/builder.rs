/// GraphQL schema builder
///
/// This module provides the `SchemaBuilder` which assembles a schema from a base
/// configuration, a type registry and an extension document.

use crate::error::Result;
use crate::schema::assembled::Schema;
use crate::schema::definition::TypeDefinition;
use crate::schema::document::ExtensionDocument;
use crate::schema::extender;
use crate::schema::registry::{TypeProvider, TypeRegistry};
use crate::schema::schema_config::SchemaConfig;

use indexmap::IndexMap;

/// Schema builder merging registry types into a configuration and extending the result
pub struct SchemaBuilder {
    schema_config: SchemaConfig,
    type_registry: Box<dyn TypeProvider>,
    document: ExtensionDocument,
}

impl SchemaBuilder {
    /// Create a builder with an empty configuration, registry and document
    pub fn new() -> Self {
        Self {
            schema_config: SchemaConfig::new(),
            type_registry: Box::new(TypeRegistry::new()),
            document: ExtensionDocument::empty(),
        }
    }

    pub fn with_schema_config(&mut self, schema_config: SchemaConfig) -> &mut Self {
        self.schema_config = schema_config;
        self
    }

    pub fn with_type_registry(&mut self, type_registry: impl TypeProvider + 'static) -> &mut Self {
        self.type_registry = Box::new(type_registry);
        self
    }

    pub fn with_document_node(&mut self, document: ExtensionDocument) -> &mut Self {
        self.document = document;
        self
    }

    /// The configuration, including the type list written back by `build`
    pub fn schema_config(&self) -> &SchemaConfig {
        &self.schema_config
    }

    /// Build the schema
    ///
    /// The configuration's types and the registry's types are merged by name, with the
    /// registry taking precedence, and written back as the configuration's type list.
    /// A base schema is constructed from that configuration and the extension document
    /// is applied to it. Errors from the extension step are returned as-is.
    pub fn build(&mut self) -> Result<Schema> {
        let types = self.all_types();
        tracing::info!("Building schema with {} types", types.len());

        self.schema_config.set_types(types);
        let schema = Schema::new(&self.schema_config);

        if !self.document.is_empty() {
            tracing::info!(
                "Applying extension document with {} definitions",
                self.document.definitions().len()
            );
        }

        extender::extend(&schema, &self.document)
    }

    /// Configuration types with registry types merged over them
    fn all_types(&self) -> IndexMap<String, TypeDefinition> {
        let mut types = self.schema_config.resolve_types();

        for (name, ty) in self.type_registry.get_types() {
            if types.contains_key(&name) {
                tracing::debug!("Registry type '{}' overrides configuration type", name);
            }
            types.insert(name, ty);
        }

        types
    }
}

impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::definition::{EnumType, FieldDefinition, ObjectType, ScalarType, TypeKind};
    use crate::schema::schema_config::TypeList;
    use async_graphql::dynamic::TypeRef;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Default)]
    struct CountingProvider {
        calls: Arc<AtomicUsize>,
    }

    impl TypeProvider for CountingProvider {
        fn get_types(&self) -> IndexMap<String, TypeDefinition> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            IndexMap::new()
        }
    }

    #[test]
    fn test_with_schema_config_returns_self() {
        let mut builder = SchemaBuilder::new();
        let builder_ptr: *const SchemaBuilder = &builder;

        let returned = builder.with_schema_config(SchemaConfig::new());
        assert!(std::ptr::eq(returned, builder_ptr));
    }

    #[test]
    fn test_with_type_registry_returns_self() {
        let mut builder = SchemaBuilder::new();
        let builder_ptr: *const SchemaBuilder = &builder;

        let returned = builder.with_type_registry(TypeRegistry::new());
        assert!(std::ptr::eq(returned, builder_ptr));
    }

    #[test]
    fn test_with_document_node_returns_self() {
        let mut builder = SchemaBuilder::new();
        let builder_ptr: *const SchemaBuilder = &builder;

        let returned = builder.with_document_node(ExtensionDocument::empty());
        assert!(std::ptr::eq(returned, builder_ptr));
    }

    #[test]
    fn test_build_reads_registry_once_and_writes_types_back() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut builder = SchemaBuilder::new();
        builder
            .with_type_registry(CountingProvider {
                calls: calls.clone(),
            })
            .with_schema_config(SchemaConfig::new());
        assert!(builder.schema_config().get_types().is_none());

        builder.build().expect("empty schema builds");

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(matches!(
            builder.schema_config().get_types(),
            Some(TypeList::Concrete(types)) if types.is_empty()
        ));
    }

    #[test]
    fn test_default_builder_builds_empty_schema() {
        let schema = SchemaBuilder::default().build().expect("empty schema builds");
        assert!(schema.types().is_empty());
        assert!(schema.query_type().is_none());
    }

    #[test]
    fn test_registry_wins_on_collision() {
        let config = SchemaConfig::new().with_types(vec![TypeDefinition::from(
            ScalarType::new("T"),
        )]);
        let mut registry = TypeRegistry::new();
        registry.add_type(EnumType::new("T"));

        let schema = SchemaBuilder::new()
            .with_schema_config(config)
            .with_type_registry(registry)
            .build()
            .expect("schema builds");

        assert_eq!(schema.get_type("T").unwrap().kind(), TypeKind::Enum);
    }

    #[test]
    fn test_supplier_types_are_merged() {
        let mut config = SchemaConfig::new();
        config.set_type_supplier(|| {
            let mut types = IndexMap::new();
            types.insert(
                "Query".to_string(),
                ObjectType::new("Query")
                    .field(FieldDefinition::new("ok", TypeRef::named(TypeRef::BOOLEAN)))
                    .into(),
            );
            types
        });
        let mut registry = TypeRegistry::new();
        registry.add_type(ScalarType::new("Url"));

        let schema = SchemaBuilder::new()
            .with_schema_config(config)
            .with_type_registry(registry)
            .build()
            .expect("schema builds");

        assert!(schema.has_type("Query"));
        assert!(schema.has_type("Url"));
        assert_eq!(schema.query_type(), Some("Query"));
    }

    #[test]
    fn test_extension_errors_propagate() {
        let document = ExtensionDocument::parse("extend type Missing { a: Int }").unwrap();
        let result = SchemaBuilder::new().with_document_node(document).build();

        assert!(matches!(
            result,
            Err(crate::error::WeaverError::UnknownType(name)) if name == "Missing"
        ));
    }
}
