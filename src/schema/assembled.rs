/// The assembled schema
///
/// `Schema` is the result of `SchemaBuilder::build`: the merged types of the base
/// configuration and the type registry, with the extension document applied.
/// It can be inspected by type name and lowered into an executable
/// `async_graphql::dynamic::Schema`.

use crate::error::{Result, WeaverError};
use crate::schema::definition::{DirectiveDefinition, TypeDefinition};
use crate::schema::lowering;
use crate::schema::schema_config::SchemaConfig;

use indexmap::IndexMap;

/// Root operation of a schema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationType {
    Query,
    Mutation,
    Subscription,
}

impl OperationType {
    /// Conventional root type name, also used in error messages
    pub fn default_type_name(self) -> &'static str {
        match self {
            OperationType::Query => "Query",
            OperationType::Mutation => "Mutation",
            OperationType::Subscription => "Subscription",
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            OperationType::Query => "query",
            OperationType::Mutation => "mutation",
            OperationType::Subscription => "subscription",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Schema {
    description: Option<String>,
    query: Option<String>,
    mutation: Option<String>,
    subscription: Option<String>,
    types: IndexMap<String, TypeDefinition>,
    directives: IndexMap<String, DirectiveDefinition>,
}

impl Schema {
    /// Construct a base schema from a configuration
    ///
    /// A supplier type list is invoked once here.
    pub fn new(config: &SchemaConfig) -> Self {
        Self {
            description: config.description.clone(),
            query: config.query.clone(),
            mutation: config.mutation.clone(),
            subscription: config.subscription.clone(),
            types: config.resolve_types(),
            directives: config
                .directives
                .iter()
                .map(|directive| (directive.name.clone(), directive.clone()))
                .collect(),
        }
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn has_type(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    pub fn get_type(&self, name: &str) -> Option<&TypeDefinition> {
        self.types.get(name)
    }

    pub fn types(&self) -> &IndexMap<String, TypeDefinition> {
        &self.types
    }

    pub fn type_names(&self) -> Vec<&str> {
        self.types.keys().map(String::as_str).collect()
    }

    /// Explicit root type name, or the conventional one when such a type exists
    pub fn root_type(&self, operation: OperationType) -> Option<&str> {
        let explicit = match operation {
            OperationType::Query => &self.query,
            OperationType::Mutation => &self.mutation,
            OperationType::Subscription => &self.subscription,
        };

        match explicit {
            Some(name) => Some(name.as_str()),
            None => {
                let name = operation.default_type_name();
                self.has_type(name).then_some(name)
            }
        }
    }

    pub fn query_type(&self) -> Option<&str> {
        self.root_type(OperationType::Query)
    }

    pub fn mutation_type(&self) -> Option<&str> {
        self.root_type(OperationType::Mutation)
    }

    pub fn subscription_type(&self) -> Option<&str> {
        self.root_type(OperationType::Subscription)
    }

    pub fn directive(&self, name: &str) -> Option<&DirectiveDefinition> {
        self.directives.get(name)
    }

    pub fn directives(&self) -> impl Iterator<Item = &DirectiveDefinition> {
        self.directives.values()
    }

    /// Convert back into a configuration with a concrete type list
    pub fn into_config(self) -> SchemaConfig {
        let mut config = SchemaConfig::new();
        config.description = self.description;
        config.query = self.query;
        config.mutation = self.mutation;
        config.subscription = self.subscription;
        config.directives = self.directives.into_values().collect();
        config.set_types(self.types);
        config
    }

    /// Lower into an executable `async_graphql::dynamic::Schema`
    pub fn to_executable(&self) -> Result<async_graphql::dynamic::Schema> {
        lowering::lower_schema(self)
    }

    /// SDL of the executable schema
    pub fn sdl(&self) -> Result<String> {
        Ok(self.to_executable()?.sdl())
    }

    pub(crate) fn explicit_root(&self, operation: OperationType) -> Option<&str> {
        match operation {
            OperationType::Query => self.query.as_deref(),
            OperationType::Mutation => self.mutation.as_deref(),
            OperationType::Subscription => self.subscription.as_deref(),
        }
    }

    pub(crate) fn set_root(&mut self, operation: OperationType, name: String) -> Result<()> {
        if let Some(existing) = self.explicit_root(operation) {
            return Err(WeaverError::RootOperationDefined {
                operation: operation.label(),
                existing: existing.to_string(),
            });
        }

        let slot = match operation {
            OperationType::Query => &mut self.query,
            OperationType::Mutation => &mut self.mutation,
            OperationType::Subscription => &mut self.subscription,
        };
        *slot = Some(name);
        Ok(())
    }

    pub(crate) fn insert_type(&mut self, ty: TypeDefinition) -> Result<()> {
        if self.has_type(ty.name()) {
            return Err(WeaverError::DuplicateType(ty.name().to_string()));
        }
        self.types.insert(ty.name().to_string(), ty);
        Ok(())
    }

    pub(crate) fn type_mut(&mut self, name: &str) -> Option<&mut TypeDefinition> {
        self.types.get_mut(name)
    }

    pub(crate) fn insert_directive(&mut self, directive: DirectiveDefinition) -> Result<()> {
        if self.directives.contains_key(&directive.name) {
            return Err(WeaverError::DuplicateDirective(directive.name));
        }
        self.directives.insert(directive.name.clone(), directive);
        Ok(())
    }
}
