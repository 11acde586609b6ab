/// Schema extension
///
/// Applies an `ExtensionDocument` to a `Schema`, producing a new schema. The input
/// schema is never modified. New types and directives are added first, then schema
/// definitions, then type extensions, so a document can extend a type it defines.

use crate::error::{Result, WeaverError};
use crate::schema::assembled::{OperationType, Schema};
use crate::schema::definition::{
    fields_from_ast, input_values_from_ast, specified_by_url, DirectiveDefinition,
    EnumValueDefinition, FieldDefinition, InputValueDefinition, TypeDefinition, TypeKind,
};
use crate::schema::document::ExtensionDocument;
use crate::schema::type_mapping::{is_builtin_scalar, named_type};

use async_graphql::parser::types as ast;
use async_graphql::parser::Positioned;
use async_graphql::Name;
use indexmap::IndexMap;

/// Apply `document` to `schema`
pub fn extend(schema: &Schema, document: &ExtensionDocument) -> Result<Schema> {
    let mut extended = schema.clone();
    if document.is_empty() {
        return Ok(extended);
    }

    let mut schema_definitions = Vec::new();
    let mut type_extensions = Vec::new();
    let mut references = Vec::new();

    for definition in document.definitions() {
        match definition {
            ast::TypeSystemDefinition::Type(ty) if ty.node.extend => {
                type_extensions.push(&ty.node);
            }
            ast::TypeSystemDefinition::Type(ty) => {
                tracing::debug!("Adding type '{}'", ty.node.name.node);
                let ty = TypeDefinition::from_ast(&ty.node);
                type_references(&ty, &mut references);
                extended.insert_type(ty)?;
            }
            ast::TypeSystemDefinition::Directive(directive) => {
                tracing::debug!("Adding directive '@{}'", directive.node.name.node);
                let directive = DirectiveDefinition::from_ast(&directive.node);
                input_references(&directive.arguments, &mut references);
                extended.insert_directive(directive)?;
            }
            ast::TypeSystemDefinition::Schema(definition) => {
                schema_definitions.push(&definition.node);
            }
        }
    }

    for definition in schema_definitions {
        apply_schema_definition(schema, &mut extended, definition)?;
    }

    for extension in type_extensions {
        apply_type_extension(&mut extended, extension, &mut references)?;
    }

    if let Some(missing) = references
        .into_iter()
        .find(|name| !is_builtin_scalar(name) && !extended.has_type(name))
    {
        return Err(WeaverError::UnknownType(missing));
    }

    Ok(extended)
}

/// Roots of the input schema, explicit or conventional, cannot be replaced
fn apply_schema_definition(
    base: &Schema,
    schema: &mut Schema,
    definition: &ast::SchemaDefinition,
) -> Result<()> {
    let roots = [
        (OperationType::Query, &definition.query),
        (OperationType::Mutation, &definition.mutation),
        (OperationType::Subscription, &definition.subscription),
    ];

    for (operation, name) in roots {
        if let Some(name) = name {
            if let Some(existing) = base.root_type(operation) {
                if base.explicit_root(operation).is_none() && existing == name.node.as_str() {
                    tracing::debug!("Naming conventional {} root '{}'", operation.label(), existing);
                } else {
                    return Err(WeaverError::RootOperationDefined {
                        operation: operation.label(),
                        existing: existing.to_string(),
                    });
                }
            }

            tracing::debug!("Setting {} root to '{}'", operation.label(), name.node);
            schema.set_root(operation, name.node.to_string())?;
        }
    }

    Ok(())
}

fn apply_type_extension(
    schema: &mut Schema,
    extension: &ast::TypeDefinition,
    references: &mut Vec<String>,
) -> Result<()> {
    let name = extension.name.node.as_str();
    let target = schema
        .type_mut(name)
        .ok_or_else(|| WeaverError::UnknownType(name.to_string()))?;

    tracing::debug!("Extending {} '{}'", target.kind(), name);

    match (&extension.kind, target) {
        (ast::TypeKind::Scalar, TypeDefinition::Scalar(scalar)) => {
            if let Some(url) = specified_by_url(&extension.directives) {
                scalar.specified_by_url = Some(url);
            }
            Ok(())
        }
        (ast::TypeKind::Object(ext), TypeDefinition::Object(object)) => {
            let fields = fields_from_ast(&ext.fields);
            field_references(&fields, references);
            member_references(&ext.implements, references);
            add_members(name, &mut object.interfaces, &ext.implements)?;
            add_fields(name, &mut object.fields, fields)
        }
        (ast::TypeKind::Interface(ext), TypeDefinition::Interface(interface)) => {
            let fields = fields_from_ast(&ext.fields);
            field_references(&fields, references);
            member_references(&ext.implements, references);
            add_members(name, &mut interface.interfaces, &ext.implements)?;
            add_fields(name, &mut interface.fields, fields)
        }
        (ast::TypeKind::Union(ext), TypeDefinition::Union(union)) => {
            member_references(&ext.members, references);
            add_members(name, &mut union.members, &ext.members)
        }
        (ast::TypeKind::Enum(ext), TypeDefinition::Enum(enum_type)) => {
            for value in &ext.values {
                let value = EnumValueDefinition::from_ast(&value.node);
                if enum_type.values.contains_key(&value.name) {
                    return Err(WeaverError::DuplicateEnumValue {
                        type_name: name.to_string(),
                        value: value.name,
                    });
                }
                enum_type.values.insert(value.name.clone(), value);
            }
            Ok(())
        }
        (ast::TypeKind::InputObject(ext), TypeDefinition::InputObject(input)) => {
            let fields = input_values_from_ast(&ext.fields);
            input_references(&fields, references);
            add_fields(name, &mut input.fields, fields)
        }
        (kind, target) => Err(WeaverError::KindMismatch {
            name: name.to_string(),
            expected: TypeKind::from(kind),
            found: target.kind(),
        }),
    }
}

/// Named types referenced by a type definition
fn type_references(ty: &TypeDefinition, references: &mut Vec<String>) {
    match ty {
        TypeDefinition::Scalar(_) | TypeDefinition::Enum(_) => {}
        TypeDefinition::Object(object) => {
            references.extend(object.interfaces.iter().cloned());
            field_references(&object.fields, references);
        }
        TypeDefinition::Interface(interface) => {
            references.extend(interface.interfaces.iter().cloned());
            field_references(&interface.fields, references);
        }
        TypeDefinition::Union(union) => references.extend(union.members.iter().cloned()),
        TypeDefinition::InputObject(input) => input_references(&input.fields, references),
    }
}

fn field_references(fields: &IndexMap<String, FieldDefinition>, references: &mut Vec<String>) {
    for field in fields.values() {
        references.push(named_type(&field.ty).to_string());
        input_references(&field.arguments, references);
    }
}

fn input_references(
    values: &IndexMap<String, InputValueDefinition>,
    references: &mut Vec<String>,
) {
    references.extend(values.values().map(|value| named_type(&value.ty).to_string()));
}

fn member_references(members: &[Positioned<Name>], references: &mut Vec<String>) {
    references.extend(members.iter().map(|member| member.node.to_string()));
}

fn add_fields<V>(
    type_name: &str,
    fields: &mut IndexMap<String, V>,
    additions: IndexMap<String, V>,
) -> Result<()> {
    for (field, definition) in additions {
        if fields.contains_key(&field) {
            return Err(WeaverError::DuplicateField {
                type_name: type_name.to_string(),
                field,
            });
        }
        fields.insert(field, definition);
    }
    Ok(())
}

fn add_members(
    type_name: &str,
    members: &mut Vec<String>,
    additions: &[Positioned<Name>],
) -> Result<()> {
    for member in additions {
        let member = member.node.as_str();
        if members.iter().any(|existing| existing == member) {
            return Err(WeaverError::DuplicateMember {
                type_name: type_name.to_string(),
                member: member.to_string(),
            });
        }
        members.push(member.to_string());
    }
    Ok(())
}
