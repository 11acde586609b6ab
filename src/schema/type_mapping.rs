/// SDL to GraphQL type reference mapping
///
/// This module converts parsed SDL type annotations into the engine's `TypeRef`,
/// and answers the small questions the extender and lowering ask about them.

use async_graphql::dynamic::TypeRef;
use async_graphql::parser::types as ast;

/// Scalars the engine always provides
pub const BUILTIN_SCALARS: [&str; 5] = [
    TypeRef::INT,
    TypeRef::FLOAT,
    TypeRef::STRING,
    TypeRef::BOOLEAN,
    TypeRef::ID,
];

/// Map a parsed SDL type to a GraphQL TypeRef
///
/// # Type Mapping Rules
///
/// - `Name` → `TypeRef::Named`
/// - `[T]` → `TypeRef::List` of the mapped inner type
/// - a trailing `!` wraps the mapped type in `TypeRef::NonNull`
pub fn ast_to_type_ref(ty: &ast::Type) -> TypeRef {
    let base = match &ty.base {
        ast::BaseType::Named(name) => TypeRef::named(name.as_str()),
        ast::BaseType::List(inner) => TypeRef::List(Box::new(ast_to_type_ref(inner))),
    };

    if ty.nullable {
        base
    } else {
        TypeRef::NonNull(Box::new(base))
    }
}

/// Parse a type annotation such as `[Int!]!`
///
/// Returns `None` when the annotation is not valid SDL.
pub fn parse_type_ref(annotation: &str) -> Option<TypeRef> {
    ast::Type::new(annotation).map(|ty| ast_to_type_ref(&ty))
}

/// Name of the innermost named type of a TypeRef
pub fn named_type(type_ref: &TypeRef) -> &str {
    match type_ref {
        TypeRef::Named(name) => &**name,
        TypeRef::NonNull(inner) => named_type(inner),
        TypeRef::List(inner) => named_type(inner),
    }
}

/// Whether the engine registers this scalar on its own
pub fn is_builtin_scalar(name: &str) -> bool {
    BUILTIN_SCALARS.contains(&name)
}
