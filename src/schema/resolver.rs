/// Field resolvers for lowered schemas
///
/// Fields declared in SDL carry no resolver of their own. They resolve by reading
/// their name from the parent value, which lets a caller hand the executable schema
/// plain `Value::Object` trees.

use crate::schema::definition::FieldDefinition;

use async_graphql::dynamic::{Field, FieldFuture, FieldValue};
use async_graphql::Value;

/// Build the engine field for a field definition
pub fn create_field(field: &FieldDefinition) -> Field {
    let name = field.name.clone();

    match &field.resolver {
        Some(resolver) => {
            let resolver = resolver.clone();
            Field::new(name, field.ty.clone(), move |ctx| resolver(ctx))
        }
        None => {
            let field_name = name.clone();
            Field::new(name, field.ty.clone(), move |ctx| {
                let field_name = field_name.clone();
                FieldFuture::new(async move {
                    // Extract the field value from the parent object
                    if let Some(Value::Object(obj)) = ctx.parent_value.as_value() {
                        if let Some(value) = obj.get(field_name.as_str()) {
                            return Ok(Some(FieldValue::value(value.clone())));
                        }
                    }

                    Ok(Some(FieldValue::NULL))
                })
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_graphql::dynamic::{Object, Schema, TypeRef};
    use async_graphql::Request;

    #[tokio::test]
    async fn test_parent_value_lookup() {
        let name = FieldDefinition::new("name", TypeRef::named(TypeRef::STRING));
        let missing = FieldDefinition::new("missing", TypeRef::named(TypeRef::STRING));
        let person = Object::new("Person")
            .field(create_field(&name))
            .field(create_field(&missing));

        let query = Object::new("Query").field(Field::new(
            "person",
            TypeRef::named("Person"),
            |_| {
                FieldFuture::new(async move {
                    let mut obj = indexmap::IndexMap::new();
                    obj.insert(async_graphql::Name::new("name"), Value::from("Ada"));
                    Ok(Some(FieldValue::value(Value::Object(obj))))
                })
            },
        ));

        let schema = Schema::build("Query", None, None)
            .register(person)
            .register(query)
            .finish()
            .expect("valid schema");

        let response = schema.execute(Request::new("{ person { name missing } }")).await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);

        let data = response.data.into_json().expect("json data");
        assert_eq!(data["person"]["name"], "Ada");
        assert!(data["person"]["missing"].is_null());
    }

    #[tokio::test]
    async fn test_custom_resolver_is_used() {
        let field = FieldDefinition::new("answer", TypeRef::named_nn(TypeRef::INT))
            .resolver(|_| FieldFuture::new(async move { Ok(Some(Value::from(42))) }));
        let query = Object::new("Query").field(create_field(&field));

        let schema = Schema::build("Query", None, None)
            .register(query)
            .finish()
            .expect("valid schema");

        let response = schema.execute(Request::new("{ answer }")).await;
        let data = response.data.into_json().expect("json data");
        assert_eq!(data["answer"], 42);
    }
}
