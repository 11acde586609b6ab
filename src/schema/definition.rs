/// GraphQL type definitions
///
/// The assembled schema keeps its types in this model rather than in the engine's
/// dynamic types: the model can be inspected by name, merged and extended, and is
/// only lowered into `async_graphql::dynamic` once assembly is complete.

use crate::schema::type_mapping::ast_to_type_ref;

use async_graphql::dynamic::{FieldFuture, ResolverContext, TypeRef};
use async_graphql::parser::types as ast;
use async_graphql::parser::Positioned;
use async_graphql::Value;
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// Reason used for `@deprecated` without an explicit `reason` argument
pub const DEFAULT_DEPRECATION_REASON: &str = "No longer supported";

/// Resolver attached to a field
pub type ResolverFn = Arc<dyn for<'a> Fn(ResolverContext<'a>) -> FieldFuture<'a> + Send + Sync>;

/// Validator attached to a custom scalar
pub type ScalarValidator = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

/// Kind of a named type, as reported by introspection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeKind {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TypeKind::Scalar => "scalar",
            TypeKind::Object => "object type",
            TypeKind::Interface => "interface",
            TypeKind::Union => "union",
            TypeKind::Enum => "enum",
            TypeKind::InputObject => "input object",
        };
        f.write_str(label)
    }
}

impl From<&ast::TypeKind> for TypeKind {
    fn from(kind: &ast::TypeKind) -> Self {
        match kind {
            ast::TypeKind::Scalar => TypeKind::Scalar,
            ast::TypeKind::Object(_) => TypeKind::Object,
            ast::TypeKind::Interface(_) => TypeKind::Interface,
            ast::TypeKind::Union(_) => TypeKind::Union,
            ast::TypeKind::Enum(_) => TypeKind::Enum,
            ast::TypeKind::InputObject(_) => TypeKind::InputObject,
        }
    }
}

/// A named GraphQL type
#[derive(Debug, Clone)]
pub enum TypeDefinition {
    Scalar(ScalarType),
    Object(ObjectType),
    Interface(InterfaceType),
    Union(UnionType),
    Enum(EnumType),
    InputObject(InputObjectType),
}

impl TypeDefinition {
    /// The unique name of the type
    pub fn name(&self) -> &str {
        match self {
            TypeDefinition::Scalar(ty) => &ty.name,
            TypeDefinition::Object(ty) => &ty.name,
            TypeDefinition::Interface(ty) => &ty.name,
            TypeDefinition::Union(ty) => &ty.name,
            TypeDefinition::Enum(ty) => &ty.name,
            TypeDefinition::InputObject(ty) => &ty.name,
        }
    }

    pub fn kind(&self) -> TypeKind {
        match self {
            TypeDefinition::Scalar(_) => TypeKind::Scalar,
            TypeDefinition::Object(_) => TypeKind::Object,
            TypeDefinition::Interface(_) => TypeKind::Interface,
            TypeDefinition::Union(_) => TypeKind::Union,
            TypeDefinition::Enum(_) => TypeKind::Enum,
            TypeDefinition::InputObject(_) => TypeKind::InputObject,
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            TypeDefinition::Scalar(ty) => ty.description.as_deref(),
            TypeDefinition::Object(ty) => ty.description.as_deref(),
            TypeDefinition::Interface(ty) => ty.description.as_deref(),
            TypeDefinition::Union(ty) => ty.description.as_deref(),
            TypeDefinition::Enum(ty) => ty.description.as_deref(),
            TypeDefinition::InputObject(ty) => ty.description.as_deref(),
        }
    }

    /// Names of the output fields (objects, interfaces) or input fields (input objects)
    pub fn field_names(&self) -> Vec<&str> {
        match self {
            TypeDefinition::Object(ty) => ty.fields.keys().map(String::as_str).collect(),
            TypeDefinition::Interface(ty) => ty.fields.keys().map(String::as_str).collect(),
            TypeDefinition::InputObject(ty) => ty.fields.keys().map(String::as_str).collect(),
            _ => Vec::new(),
        }
    }

    /// Convert a parsed SDL type definition
    ///
    /// Extension definitions convert the same way; the caller decides whether the
    /// result is a new type or a set of additions to an existing one.
    pub fn from_ast(definition: &ast::TypeDefinition) -> Self {
        let name = definition.name.node.to_string();
        let description = definition.description.as_ref().map(|d| d.node.clone());

        match &definition.kind {
            ast::TypeKind::Scalar => TypeDefinition::Scalar(ScalarType {
                name,
                description,
                specified_by_url: specified_by_url(&definition.directives),
                validator: None,
            }),
            ast::TypeKind::Object(object) => TypeDefinition::Object(ObjectType {
                name,
                description,
                fields: fields_from_ast(&object.fields),
                interfaces: names_from_ast(&object.implements),
            }),
            ast::TypeKind::Interface(interface) => TypeDefinition::Interface(InterfaceType {
                name,
                description,
                fields: fields_from_ast(&interface.fields),
                interfaces: names_from_ast(&interface.implements),
            }),
            ast::TypeKind::Union(union) => TypeDefinition::Union(UnionType {
                name,
                description,
                members: names_from_ast(&union.members),
            }),
            ast::TypeKind::Enum(enum_type) => TypeDefinition::Enum(EnumType {
                name,
                description,
                values: enum_type
                    .values
                    .iter()
                    .map(|value| {
                        let value = EnumValueDefinition::from_ast(&value.node);
                        (value.name.clone(), value)
                    })
                    .collect(),
            }),
            ast::TypeKind::InputObject(input) => TypeDefinition::InputObject(InputObjectType {
                name,
                description,
                fields: input_values_from_ast(&input.fields),
            }),
        }
    }
}

impl From<ScalarType> for TypeDefinition {
    fn from(ty: ScalarType) -> Self {
        TypeDefinition::Scalar(ty)
    }
}

impl From<ObjectType> for TypeDefinition {
    fn from(ty: ObjectType) -> Self {
        TypeDefinition::Object(ty)
    }
}

impl From<InterfaceType> for TypeDefinition {
    fn from(ty: InterfaceType) -> Self {
        TypeDefinition::Interface(ty)
    }
}

impl From<UnionType> for TypeDefinition {
    fn from(ty: UnionType) -> Self {
        TypeDefinition::Union(ty)
    }
}

impl From<EnumType> for TypeDefinition {
    fn from(ty: EnumType) -> Self {
        TypeDefinition::Enum(ty)
    }
}

impl From<InputObjectType> for TypeDefinition {
    fn from(ty: InputObjectType) -> Self {
        TypeDefinition::InputObject(ty)
    }
}

/// Scalar type, optionally with an input validator
#[derive(Clone)]
pub struct ScalarType {
    pub name: String,
    pub description: Option<String>,
    pub specified_by_url: Option<String>,
    pub validator: Option<ScalarValidator>,
}

impl ScalarType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            specified_by_url: None,
            validator: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn specified_by_url(mut self, url: impl Into<String>) -> Self {
        self.specified_by_url = Some(url.into());
        self
    }

    pub fn validator(mut self, validator: impl Fn(&Value) -> bool + Send + Sync + 'static) -> Self {
        self.validator = Some(Arc::new(validator));
        self
    }
}

impl fmt::Debug for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScalarType")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("specified_by_url", &self.specified_by_url)
            .field("validator", &self.validator.is_some())
            .finish()
    }
}

/// Object type
#[derive(Debug, Clone)]
pub struct ObjectType {
    pub name: String,
    pub description: Option<String>,
    pub fields: IndexMap<String, FieldDefinition>,
    pub interfaces: Vec<String>,
}

impl ObjectType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            fields: IndexMap::new(),
            interfaces: Vec::new(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add a field, replacing any field with the same name
    pub fn field(mut self, field: FieldDefinition) -> Self {
        self.fields.insert(field.name.clone(), field);
        self
    }

    pub fn implement(mut self, interface: impl Into<String>) -> Self {
        self.interfaces.push(interface.into());
        self
    }
}

/// Interface type
#[derive(Debug, Clone)]
pub struct InterfaceType {
    pub name: String,
    pub description: Option<String>,
    pub fields: IndexMap<String, FieldDefinition>,
    pub interfaces: Vec<String>,
}

impl InterfaceType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            fields: IndexMap::new(),
            interfaces: Vec::new(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn field(mut self, field: FieldDefinition) -> Self {
        self.fields.insert(field.name.clone(), field);
        self
    }

    pub fn implement(mut self, interface: impl Into<String>) -> Self {
        self.interfaces.push(interface.into());
        self
    }
}

/// Union type
#[derive(Debug, Clone)]
pub struct UnionType {
    pub name: String,
    pub description: Option<String>,
    pub members: Vec<String>,
}

impl UnionType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            members: Vec::new(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn member(mut self, member: impl Into<String>) -> Self {
        self.members.push(member.into());
        self
    }
}

/// Enum type
#[derive(Debug, Clone)]
pub struct EnumType {
    pub name: String,
    pub description: Option<String>,
    pub values: IndexMap<String, EnumValueDefinition>,
}

impl EnumType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            values: IndexMap::new(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn value(mut self, value: EnumValueDefinition) -> Self {
        self.values.insert(value.name.clone(), value);
        self
    }
}

/// Input object type
#[derive(Debug, Clone)]
pub struct InputObjectType {
    pub name: String,
    pub description: Option<String>,
    pub fields: IndexMap<String, InputValueDefinition>,
}

impl InputObjectType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            fields: IndexMap::new(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn field(mut self, field: InputValueDefinition) -> Self {
        self.fields.insert(field.name.clone(), field);
        self
    }
}

/// Output field of an object or interface
#[derive(Clone)]
pub struct FieldDefinition {
    pub name: String,
    pub description: Option<String>,
    pub ty: TypeRef,
    pub arguments: IndexMap<String, InputValueDefinition>,
    pub deprecation: Option<String>,
    pub resolver: Option<ResolverFn>,
}

impl FieldDefinition {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            description: None,
            ty,
            arguments: IndexMap::new(),
            deprecation: None,
            resolver: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn argument(mut self, argument: InputValueDefinition) -> Self {
        self.arguments.insert(argument.name.clone(), argument);
        self
    }

    pub fn deprecation(mut self, reason: impl Into<String>) -> Self {
        self.deprecation = Some(reason.into());
        self
    }

    /// Resolve this field with `resolver` instead of the parent-value lookup
    pub fn resolver<F>(mut self, resolver: F) -> Self
    where
        F: for<'a> Fn(ResolverContext<'a>) -> FieldFuture<'a> + Send + Sync + 'static,
    {
        self.resolver = Some(Arc::new(resolver));
        self
    }

    fn from_ast(field: &ast::FieldDefinition) -> Self {
        Self {
            name: field.name.node.to_string(),
            description: field.description.as_ref().map(|d| d.node.clone()),
            ty: ast_to_type_ref(&field.ty.node),
            arguments: input_values_from_ast(&field.arguments),
            deprecation: deprecation_reason(&field.directives),
            resolver: None,
        }
    }
}

impl fmt::Debug for FieldDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDefinition")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("ty", &self.ty.to_string())
            .field("arguments", &self.arguments)
            .field("deprecation", &self.deprecation)
            .field("resolver", &self.resolver.is_some())
            .finish()
    }
}

/// Argument or input object field
#[derive(Debug, Clone)]
pub struct InputValueDefinition {
    pub name: String,
    pub description: Option<String>,
    pub ty: TypeRef,
    pub default_value: Option<Value>,
}

impl InputValueDefinition {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            description: None,
            ty,
            default_value: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    fn from_ast(input: &ast::InputValueDefinition) -> Self {
        Self {
            name: input.name.node.to_string(),
            description: input.description.as_ref().map(|d| d.node.clone()),
            ty: ast_to_type_ref(&input.ty.node),
            default_value: input.default_value.as_ref().map(|v| v.node.clone()),
        }
    }
}

/// Value of an enum type
#[derive(Debug, Clone)]
pub struct EnumValueDefinition {
    pub name: String,
    pub description: Option<String>,
    pub deprecation: Option<String>,
}

impl EnumValueDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            deprecation: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn deprecation(mut self, reason: impl Into<String>) -> Self {
        self.deprecation = Some(reason.into());
        self
    }

    pub(crate) fn from_ast(value: &ast::EnumValueDefinition) -> Self {
        Self {
            name: value.value.node.to_string(),
            description: value.description.as_ref().map(|d| d.node.clone()),
            deprecation: deprecation_reason(&value.directives),
        }
    }
}

/// Directive definition
#[derive(Debug, Clone)]
pub struct DirectiveDefinition {
    pub name: String,
    pub description: Option<String>,
    pub arguments: IndexMap<String, InputValueDefinition>,
    pub locations: Vec<ast::DirectiveLocation>,
    pub repeatable: bool,
}

impl DirectiveDefinition {
    pub fn from_ast(directive: &ast::DirectiveDefinition) -> Self {
        Self {
            name: directive.name.node.to_string(),
            description: directive.description.as_ref().map(|d| d.node.clone()),
            arguments: input_values_from_ast(&directive.arguments),
            locations: directive.locations.iter().map(|l| l.node).collect(),
            repeatable: directive.is_repeatable,
        }
    }
}

pub(crate) fn fields_from_ast(
    fields: &[Positioned<ast::FieldDefinition>],
) -> IndexMap<String, FieldDefinition> {
    fields
        .iter()
        .map(|field| {
            let field = FieldDefinition::from_ast(&field.node);
            (field.name.clone(), field)
        })
        .collect()
}

pub(crate) fn input_values_from_ast(
    values: &[Positioned<ast::InputValueDefinition>],
) -> IndexMap<String, InputValueDefinition> {
    values
        .iter()
        .map(|value| {
            let value = InputValueDefinition::from_ast(&value.node);
            (value.name.clone(), value)
        })
        .collect()
}

fn names_from_ast(names: &[Positioned<async_graphql::Name>]) -> Vec<String> {
    names.iter().map(|name| name.node.to_string()).collect()
}

/// `Some(argument)` when `directive` is applied, `None` otherwise
fn directive_argument<'a>(
    directives: &'a [Positioned<ast::ConstDirective>],
    directive: &str,
    argument: &str,
) -> Option<Option<&'a Value>> {
    directives
        .iter()
        .find(|d| d.node.name.node.as_str() == directive)
        .map(|d| {
            d.node
                .arguments
                .iter()
                .find(|(name, _)| name.node.as_str() == argument)
                .map(|(_, value)| &value.node)
        })
}

/// Deprecation reason from `@deprecated`, if present
fn deprecation_reason(directives: &[Positioned<ast::ConstDirective>]) -> Option<String> {
    directive_argument(directives, "deprecated", "reason").map(|reason| match reason {
        Some(Value::String(reason)) => reason.clone(),
        _ => DEFAULT_DEPRECATION_REASON.to_string(),
    })
}

pub(crate) fn specified_by_url(directives: &[Positioned<ast::ConstDirective>]) -> Option<String> {
    match directive_argument(directives, "specifiedBy", "url") {
        Some(Some(Value::String(url))) => Some(url.clone()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_graphql::parser::parse_schema;

    fn first_type(sdl: &str) -> TypeDefinition {
        let document = parse_schema(sdl).expect("valid SDL");
        match &document.definitions[0] {
            ast::TypeSystemDefinition::Type(def) => TypeDefinition::from_ast(&def.node),
            _ => panic!("expected a type definition"),
        }
    }

    #[test]
    fn test_object_from_ast() {
        let ty = first_type(
            r#"
            "A person"
            type Person implements Node {
                id: ID!
                friends(first: Int = 10): [Person!]
                nickname: String @deprecated(reason: "Use name")
            }
            "#,
        );

        assert_eq!(ty.name(), "Person");
        assert_eq!(ty.kind(), TypeKind::Object);
        assert_eq!(ty.description(), Some("A person"));
        assert_eq!(ty.field_names(), vec!["id", "friends", "nickname"]);

        let TypeDefinition::Object(object) = ty else {
            panic!("expected an object");
        };
        assert_eq!(object.interfaces, vec!["Node".to_string()]);
        assert_eq!(object.fields["id"].ty.to_string(), "ID!");

        let first = &object.fields["friends"].arguments["first"];
        assert_eq!(first.default_value, Some(Value::from(10)));
        assert_eq!(object.fields["nickname"].deprecation.as_deref(), Some("Use name"));
    }

    #[test]
    fn test_deprecated_without_reason() {
        let ty = first_type("enum Color { RED GREEN @deprecated }");

        let TypeDefinition::Enum(color) = ty else {
            panic!("expected an enum");
        };
        assert!(color.values["RED"].deprecation.is_none());
        assert_eq!(
            color.values["GREEN"].deprecation.as_deref(),
            Some(DEFAULT_DEPRECATION_REASON)
        );
    }

    #[test]
    fn test_scalar_specified_by() {
        let ty = first_type(r#"scalar Url @specifiedBy(url: "https://tools.ietf.org/html/rfc3986")"#);

        let TypeDefinition::Scalar(url) = ty else {
            panic!("expected a scalar");
        };
        assert_eq!(
            url.specified_by_url.as_deref(),
            Some("https://tools.ietf.org/html/rfc3986")
        );
    }

    #[test]
    fn test_union_and_input_from_ast() {
        let union = first_type("union SearchResult = Person | Post");
        assert_eq!(union.kind(), TypeKind::Union);
        let TypeDefinition::Union(union) = union else {
            panic!("expected a union");
        };
        assert_eq!(union.members, vec!["Person".to_string(), "Post".to_string()]);

        let input = first_type("input PostFilter { author: ID, limit: Int = 20 }");
        assert_eq!(input.kind(), TypeKind::InputObject);
        assert_eq!(input.field_names(), vec!["author", "limit"]);
    }

    #[test]
    fn test_builder_methods() {
        let ty: TypeDefinition = ObjectType::new("Query")
            .description("Root")
            .field(FieldDefinition::new("a", TypeRef::named(TypeRef::INT)))
            .field(FieldDefinition::new("a", TypeRef::named_nn(TypeRef::STRING)))
            .into();

        assert_eq!(ty.field_names(), vec!["a"]);
        let TypeDefinition::Object(object) = ty else {
            panic!("expected an object");
        };
        assert_eq!(object.fields["a"].ty.to_string(), "String!");
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(TypeKind::InputObject.to_string(), "input object");
        assert_eq!(TypeKind::Object.to_string(), "object type");
    }
}
