/// Parsed SDL extension documents

use crate::error::Result;

use async_graphql::parser::parse_schema;
use async_graphql::parser::types::{ServiceDocument, TypeDefinition, TypeSystemDefinition};

/// SDL definitions to apply on top of a base schema
#[derive(Debug, Clone)]
pub struct ExtensionDocument {
    document: ServiceDocument,
}

impl ExtensionDocument {
    /// A document without definitions
    pub fn empty() -> Self {
        Self {
            document: ServiceDocument {
                definitions: Vec::new(),
            },
        }
    }

    /// Parse SDL text with the engine's parser
    ///
    /// Blank text yields an empty document.
    pub fn parse(sdl: &str) -> Result<Self> {
        if sdl.trim().is_empty() {
            return Ok(Self::empty());
        }

        Ok(Self {
            document: parse_schema(sdl)?,
        })
    }

    pub fn definitions(&self) -> &[TypeSystemDefinition] {
        &self.document.definitions
    }

    /// Type definitions and type extensions, in document order
    pub fn type_definitions(&self) -> impl Iterator<Item = &TypeDefinition> {
        self.document.definitions.iter().filter_map(|definition| match definition {
            TypeSystemDefinition::Type(ty) => Some(&ty.node),
            _ => None,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.document.definitions.is_empty()
    }
}

impl Default for ExtensionDocument {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<ServiceDocument> for ExtensionDocument {
    fn from(document: ServiceDocument) -> Self {
        Self { document }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let document = ExtensionDocument::default();
        assert!(document.is_empty());
        assert_eq!(document.type_definitions().count(), 0);
    }

    #[test]
    fn test_parse_keeps_document_order() {
        let document = ExtensionDocument::parse(
            r#"
            directive @cached on FIELD_DEFINITION
            type Query { value: Int }
            extend type Query { other: Int }
            "#,
        )
        .expect("valid SDL");

        assert_eq!(document.definitions().len(), 3);
        let names: Vec<_> = document
            .type_definitions()
            .map(|ty| (ty.name.node.to_string(), ty.extend))
            .collect();
        assert_eq!(
            names,
            vec![("Query".to_string(), false), ("Query".to_string(), true)]
        );
    }

    #[test]
    fn test_parse_blank_text() {
        let document = ExtensionDocument::parse("  \n\n").expect("blank SDL");
        assert!(document.is_empty());
    }

    #[test]
    fn test_parse_error() {
        assert!(ExtensionDocument::parse("extend type").is_err());
    }
}
