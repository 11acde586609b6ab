/// Lowering of assembled schemas into the engine's dynamic schema

use crate::error::{Result, WeaverError};
use crate::schema::assembled::Schema;
use crate::schema::definition::{
    EnumType, FieldDefinition, InputObjectType, InputValueDefinition, InterfaceType, ObjectType,
    ScalarType, TypeDefinition, UnionType,
};
use crate::schema::resolver::create_field;
use crate::schema::type_mapping::is_builtin_scalar;

use async_graphql::dynamic::{
    Enum, EnumItem, InputObject, InputValue, Interface, InterfaceField, Object, Scalar,
    Schema as DynamicSchema, Type, Union,
};

/// Build an executable schema from an assembled one
pub(crate) fn lower_schema(schema: &Schema) -> Result<DynamicSchema> {
    let query = schema.query_type().ok_or_else(|| {
        WeaverError::SchemaGeneration("Schema has no query root type".to_string())
    })?;

    if let Some(subscription) = schema.subscription_type() {
        tracing::warn!(
            "Subscription root '{}' is not exported to the executable schema",
            subscription
        );
    }

    let mut builder = DynamicSchema::build(query, schema.mutation_type(), None);

    for ty in schema.types().values() {
        if let TypeDefinition::Scalar(scalar) = ty {
            if is_builtin_scalar(&scalar.name) {
                if overrides_builtin(scalar) {
                    tracing::warn!(
                        "Scalar '{}' is built in; its validator and specifiedBy URL are ignored",
                        scalar.name
                    );
                }
                continue;
            }
        }

        tracing::debug!("Registering {} '{}'", ty.kind(), ty.name());
        builder = builder.register(lower_type(ty));
    }

    builder.finish().map_err(|e| {
        WeaverError::SchemaGeneration(format!("Failed to build schema: {}", e))
    })
}

/// Whether a scalar carries behavior the engine's own built-in would drop
fn overrides_builtin(scalar: &ScalarType) -> bool {
    scalar.validator.is_some() || scalar.specified_by_url.is_some()
}

fn lower_type(ty: &TypeDefinition) -> Type {
    match ty {
        TypeDefinition::Scalar(scalar) => lower_scalar(scalar).into(),
        TypeDefinition::Object(object) => lower_object(object).into(),
        TypeDefinition::Interface(interface) => lower_interface(interface).into(),
        TypeDefinition::Union(union) => lower_union(union).into(),
        TypeDefinition::Enum(enum_type) => lower_enum(enum_type).into(),
        TypeDefinition::InputObject(input) => lower_input_object(input).into(),
    }
}

fn lower_scalar(scalar: &ScalarType) -> Scalar {
    let mut lowered = Scalar::new(&scalar.name);

    if let Some(desc) = &scalar.description {
        lowered = lowered.description(desc);
    }
    if let Some(url) = &scalar.specified_by_url {
        lowered = lowered.specified_by_url(url);
    }
    if let Some(validator) = &scalar.validator {
        let validator = validator.clone();
        lowered = lowered.validator(move |value| validator(value));
    }

    lowered
}

fn lower_object(object: &ObjectType) -> Object {
    let mut lowered = Object::new(&object.name);

    if let Some(desc) = &object.description {
        lowered = lowered.description(desc);
    }
    for interface in &object.interfaces {
        lowered = lowered.implement(interface);
    }
    for field in object.fields.values() {
        lowered = lowered.field(lower_field(field));
    }

    lowered
}

fn lower_field(field: &FieldDefinition) -> async_graphql::dynamic::Field {
    let mut lowered = create_field(field);

    if let Some(desc) = &field.description {
        lowered = lowered.description(desc);
    }
    if field.deprecation.is_some() {
        lowered = lowered.deprecation(field.deprecation.as_deref());
    }
    for argument in field.arguments.values() {
        lowered = lowered.argument(lower_input_value(argument));
    }

    lowered
}

fn lower_interface(interface: &InterfaceType) -> Interface {
    let mut lowered = Interface::new(&interface.name);

    if let Some(desc) = &interface.description {
        lowered = lowered.description(desc);
    }
    for parent in &interface.interfaces {
        lowered = lowered.implement(parent);
    }
    for field in interface.fields.values() {
        let mut lowered_field = InterfaceField::new(&field.name, field.ty.clone());
        if let Some(desc) = &field.description {
            lowered_field = lowered_field.description(desc);
        }
        if field.deprecation.is_some() {
            lowered_field = lowered_field.deprecation(field.deprecation.as_deref());
        }
        for argument in field.arguments.values() {
            lowered_field = lowered_field.argument(lower_input_value(argument));
        }
        lowered = lowered.field(lowered_field);
    }

    lowered
}

fn lower_union(union: &UnionType) -> Union {
    let mut lowered = Union::new(&union.name);

    if let Some(desc) = &union.description {
        lowered = lowered.description(desc);
    }
    for member in &union.members {
        lowered = lowered.possible_type(member);
    }

    lowered
}

fn lower_enum(enum_type: &EnumType) -> Enum {
    let mut lowered = Enum::new(&enum_type.name);

    if let Some(desc) = &enum_type.description {
        lowered = lowered.description(desc);
    }
    for value in enum_type.values.values() {
        let mut item = EnumItem::new(&value.name);
        if let Some(desc) = &value.description {
            item = item.description(desc);
        }
        if value.deprecation.is_some() {
            item = item.deprecation(value.deprecation.as_deref());
        }
        lowered = lowered.item(item);
    }

    lowered
}

fn lower_input_object(input: &InputObjectType) -> InputObject {
    let mut lowered = InputObject::new(&input.name);

    if let Some(desc) = &input.description {
        lowered = lowered.description(desc);
    }
    for field in input.fields.values() {
        lowered = lowered.field(lower_input_value(field));
    }

    lowered
}

fn lower_input_value(value: &InputValueDefinition) -> InputValue {
    let mut lowered = InputValue::new(&value.name, value.ty.clone());

    if let Some(desc) = &value.description {
        lowered = lowered.description(desc);
    }
    if let Some(default_value) = &value.default_value {
        lowered = lowered.default_value(default_value.clone());
    }

    lowered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::definition::EnumValueDefinition;
    use crate::schema::schema_config::SchemaConfig;
    use async_graphql::dynamic::TypeRef;
    use async_graphql::Value;

    fn schema_of(types: Vec<TypeDefinition>) -> Schema {
        Schema::new(&SchemaConfig::new().with_types(types))
    }

    #[test]
    fn test_missing_query_root() {
        let schema = schema_of(vec![ScalarType::new("Url").into()]);
        let err = lower_schema(&schema).unwrap_err();

        assert!(matches!(err, WeaverError::SchemaGeneration(_)));
    }

    #[test]
    fn test_builtin_scalars_are_not_registered_twice() {
        let schema = schema_of(vec![
            ScalarType::new("Int").into(),
            ObjectType::new("Query")
                .field(FieldDefinition::new("count", TypeRef::named(TypeRef::INT)))
                .into(),
        ]);

        let sdl = lower_schema(&schema).expect("lowered schema").sdl();
        assert!(sdl.contains("count: Int"));
    }

    #[test]
    fn test_builtin_scalar_with_validator_is_skipped() {
        let int = ScalarType::new("Int").validator(|value| matches!(value, Value::Number(_)));
        assert!(overrides_builtin(&int));
        assert!(!overrides_builtin(&ScalarType::new("Int")));

        let schema = schema_of(vec![
            int.into(),
            ObjectType::new("Query")
                .field(FieldDefinition::new("count", TypeRef::named(TypeRef::INT)))
                .into(),
        ]);

        let sdl = lower_schema(&schema).expect("lowered schema").sdl();
        assert!(!sdl.contains("scalar Int"));
    }

    #[test]
    fn test_all_kinds_lower() {
        let schema = schema_of(vec![
            InterfaceType::new("Node")
                .field(FieldDefinition::new("id", TypeRef::named_nn(TypeRef::ID)))
                .into(),
            ObjectType::new("Post")
                .implement("Node")
                .field(FieldDefinition::new("id", TypeRef::named_nn(TypeRef::ID)))
                .field(FieldDefinition::new("status", TypeRef::named("Status")))
                .into(),
            UnionType::new("SearchResult").member("Post").into(),
            EnumType::new("Status")
                .value(EnumValueDefinition::new("DRAFT"))
                .value(EnumValueDefinition::new("ARCHIVED").deprecation("Use DRAFT"))
                .into(),
            InputObjectType::new("PostFilter")
                .field(
                    InputValueDefinition::new("limit", TypeRef::named(TypeRef::INT))
                        .default_value(20),
                )
                .into(),
            ObjectType::new("Query")
                .field(
                    FieldDefinition::new("search", TypeRef::named_nn_list_nn("SearchResult"))
                        .argument(InputValueDefinition::new(
                            "filter",
                            TypeRef::named("PostFilter"),
                        )),
                )
                .field(FieldDefinition::new("node", TypeRef::named("Node")))
                .into(),
        ]);

        let sdl = lower_schema(&schema).expect("lowered schema").sdl();
        assert!(sdl.contains("interface Node"));
        assert!(sdl.contains("union SearchResult"));
        assert!(sdl.contains("enum Status"));
        assert!(sdl.contains("input PostFilter"));
        assert!(sdl.contains("ARCHIVED"));
    }

    #[test]
    fn test_unknown_type_reference_fails() {
        let schema = schema_of(vec![ObjectType::new("Query")
            .field(FieldDefinition::new("value", TypeRef::named("Missing")))
            .into()]);

        let err = lower_schema(&schema).unwrap_err();
        assert!(matches!(err, WeaverError::SchemaGeneration(_)));
    }
}
