/// Base schema configuration

use crate::error::Result;
use crate::schema::assembled::Schema;
use crate::schema::definition::{DirectiveDefinition, TypeDefinition};
use crate::schema::document::ExtensionDocument;
use crate::schema::extender;

use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

/// Closure producing a type list on demand
pub type TypeSupplier = Arc<dyn Fn() -> IndexMap<String, TypeDefinition> + Send + Sync>;

/// Type list of a configuration: either the types themselves or a supplier of them
#[derive(Clone)]
pub enum TypeList {
    Concrete(IndexMap<String, TypeDefinition>),
    Supplier(TypeSupplier),
}

impl TypeList {
    /// The concrete mapping, invoking the supplier if there is one
    pub fn resolve(&self) -> IndexMap<String, TypeDefinition> {
        match self {
            TypeList::Concrete(types) => types.clone(),
            TypeList::Supplier(supplier) => supplier(),
        }
    }
}

impl fmt::Debug for TypeList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeList::Concrete(types) => f.debug_tuple("Concrete").field(types).finish(),
            TypeList::Supplier(_) => f.write_str("Supplier(..)"),
        }
    }
}

impl From<IndexMap<String, TypeDefinition>> for TypeList {
    fn from(types: IndexMap<String, TypeDefinition>) -> Self {
        TypeList::Concrete(types)
    }
}

impl From<Vec<TypeDefinition>> for TypeList {
    fn from(types: Vec<TypeDefinition>) -> Self {
        TypeList::Concrete(
            types
                .into_iter()
                .map(|ty| (ty.name().to_string(), ty))
                .collect(),
        )
    }
}

/// Types, root operations and directives of a schema before extension
#[derive(Debug, Clone, Default)]
pub struct SchemaConfig {
    pub description: Option<String>,
    pub query: Option<String>,
    pub mutation: Option<String>,
    pub subscription: Option<String>,
    pub directives: Vec<DirectiveDefinition>,
    types: Option<TypeList>,
}

impl SchemaConfig {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a configuration from SDL text
    ///
    /// The SDL is applied as an extension of an empty schema, so it may contain
    /// schema definitions, directive definitions and type extensions.
    pub fn from_sdl(sdl: &str) -> Result<Self> {
        let document = ExtensionDocument::parse(sdl)?;
        let schema = extender::extend(&Schema::default(), &document)?;
        Ok(schema.into_config())
    }

    pub fn with_query(mut self, name: impl Into<String>) -> Self {
        self.query = Some(name.into());
        self
    }

    pub fn with_mutation(mut self, name: impl Into<String>) -> Self {
        self.mutation = Some(name.into());
        self
    }

    pub fn with_subscription(mut self, name: impl Into<String>) -> Self {
        self.subscription = Some(name.into());
        self
    }

    pub fn with_types(mut self, types: impl Into<TypeList>) -> Self {
        self.types = Some(types.into());
        self
    }

    /// The stored type list, if any
    pub fn get_types(&self) -> Option<&TypeList> {
        self.types.as_ref()
    }

    pub fn set_types(&mut self, types: impl Into<TypeList>) -> &mut Self {
        self.types = Some(types.into());
        self
    }

    /// Store a supplier that is invoked whenever the types are resolved
    pub fn set_type_supplier<F>(&mut self, supplier: F) -> &mut Self
    where
        F: Fn() -> IndexMap<String, TypeDefinition> + Send + Sync + 'static,
    {
        self.types = Some(TypeList::Supplier(Arc::new(supplier)));
        self
    }

    /// Concrete type mapping; empty when no type list is set
    pub fn resolve_types(&self) -> IndexMap<String, TypeDefinition> {
        self.types
            .as_ref()
            .map(TypeList::resolve)
            .unwrap_or_default()
    }
}
