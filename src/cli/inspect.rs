use sdl_weaver::error::Result;
use sdl_weaver::schema::{Schema, TypeDefinition, TypeKind};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TypeSummary {
    pub name: String,
    pub kind: TypeKind,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SchemaSummary {
    pub query: Option<String>,
    pub mutation: Option<String>,
    pub subscription: Option<String>,
    pub types: Vec<TypeSummary>,
    pub directives: Vec<String>,
}

impl From<&TypeDefinition> for TypeSummary {
    fn from(ty: &TypeDefinition) -> Self {
        Self {
            name: ty.name().to_string(),
            kind: ty.kind(),
            fields: ty.field_names().into_iter().map(str::to_string).collect(),
        }
    }
}

pub fn summarize(schema: &Schema) -> SchemaSummary {
    SchemaSummary {
        query: schema.query_type().map(str::to_string),
        mutation: schema.mutation_type().map(str::to_string),
        subscription: schema.subscription_type().map(str::to_string),
        types: schema.types().values().map(TypeSummary::from).collect(),
        directives: schema.directives().map(|d| d.name.clone()).collect(),
    }
}

/// Run the inspect command to list the assembled types
pub fn run(config_path: String, json: bool) -> Result<()> {
    let (_, schema) = crate::cli::build::assemble(&config_path)?;
    let summary = summarize(&schema);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    if let Some(query) = &summary.query {
        println!("query: {}", query);
    }
    if let Some(mutation) = &summary.mutation {
        println!("mutation: {}", mutation);
    }
    if let Some(subscription) = &summary.subscription {
        println!("subscription: {}", subscription);
    }
    for ty in &summary.types {
        if ty.fields.is_empty() {
            println!("{} ({})", ty.name, ty.kind);
        } else {
            println!("{} ({}): {}", ty.name, ty.kind, ty.fields.join(", "));
        }
    }
    for directive in &summary.directives {
        println!("@{}", directive);
    }

    Ok(())
}
