/// Registry of additional named types
///
/// Types registered here are merged over the schema configuration's own types
/// when the `SchemaBuilder` assembles a schema.

use crate::error::Result;
use crate::schema::definition::TypeDefinition;
use crate::schema::document::ExtensionDocument;

use async_graphql::parser::types::TypeSystemDefinition;
use indexmap::IndexMap;

/// Source of named types read by the `SchemaBuilder`
pub trait TypeProvider: Send + Sync {
    /// Snapshot of every type, keyed by name
    fn get_types(&self) -> IndexMap<String, TypeDefinition>;
}

/// Name-keyed store of type definitions
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    types: IndexMap<String, TypeDefinition>,
}

impl TypeRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a type under its own name
    ///
    /// A previous registration with the same name is replaced.
    pub fn add_type(&mut self, ty: impl Into<TypeDefinition>) -> &mut Self {
        let ty = ty.into();
        if self.types.contains_key(ty.name()) {
            tracing::debug!("Replacing registered type '{}'", ty.name());
        }
        self.types.insert(ty.name().to_string(), ty);
        self
    }

    pub fn add_types<I, T>(&mut self, types: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TypeDefinition>,
    {
        for ty in types {
            self.add_type(ty);
        }
        self
    }

    /// Register every type defined in an SDL document
    ///
    /// Only plain type definitions are registered. Extensions (`extend type ...`),
    /// schema definitions and directive definitions are skipped with a warning; they
    /// belong in the builder's extension document.
    pub fn add_sdl(&mut self, sdl: &str) -> Result<&mut Self> {
        let document = ExtensionDocument::parse(sdl)?;
        for definition in document.definitions() {
            match definition {
                TypeSystemDefinition::Type(ty) if ty.node.extend => {
                    tracing::warn!("Ignoring extension of '{}' in registry SDL", ty.node.name.node);
                }
                TypeSystemDefinition::Type(ty) => {
                    self.add_type(TypeDefinition::from_ast(&ty.node));
                }
                TypeSystemDefinition::Schema(_) => {
                    tracing::warn!("Ignoring schema definition in registry SDL");
                }
                TypeSystemDefinition::Directive(directive) => {
                    tracing::warn!(
                        "Ignoring directive '@{}' in registry SDL",
                        directive.node.name.node
                    );
                }
            }
        }
        Ok(self)
    }

    pub fn get_type(&self, name: &str) -> Option<&TypeDefinition> {
        self.types.get(name)
    }

    /// Borrow the registered types in registration order
    pub fn types(&self) -> &IndexMap<String, TypeDefinition> {
        &self.types
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl TypeProvider for TypeRegistry {
    fn get_types(&self) -> IndexMap<String, TypeDefinition> {
        self.types.clone()
    }
}
