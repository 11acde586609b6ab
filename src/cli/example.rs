use sdl_weaver::config::{Config, OutputConfig, SourcesConfig};

/// Example SDL file written by `init`
pub struct ExampleSource {
    pub path: &'static str,
    pub contents: &'static str,
}

pub const BASE_SDL: &str = r#""Root query type"
type Query {
  "Version of the API"
  version: String!
}

interface Node {
  id: ID!
}
"#;

pub const TYPES_SDL: &str = r#""A published article"
type Article implements Node {
  id: ID!
  title: String!
  publishedAt: DateTime
  status: ArticleStatus!
}

enum ArticleStatus {
  DRAFT
  PUBLISHED
  ARCHIVED @deprecated(reason: "Use DRAFT")
}

input ArticleFilter {
  status: ArticleStatus
  limit: Int = 20
}
"#;

pub const EXTENSIONS_SDL: &str = r#"extend type Query {
  articles(filter: ArticleFilter): [Article!]!
  article(id: ID!): Article
}

extend type Article {
  summary: String
}
"#;

/// Example SDL sources, relative to the project directory
pub fn example_sources() -> Vec<ExampleSource> {
    vec![
        ExampleSource {
            path: "schema/base.graphql",
            contents: BASE_SDL,
        },
        ExampleSource {
            path: "schema/types.graphql",
            contents: TYPES_SDL,
        },
        ExampleSource {
            path: "schema/extensions.graphql",
            contents: EXTENSIONS_SDL,
        },
    ]
}

/// Configuration pointing at the example sources
pub fn example_config() -> Config {
    Config {
        schema: SourcesConfig {
            base: vec!["schema/base.graphql".to_string()],
            types: vec!["schema/types.graphql".to_string()],
            extensions: vec!["schema/extensions.graphql".to_string()],
            custom_scalars: true,
        },
        output: OutputConfig {
            path: Some("schema.graphql".to_string()),
        },
    }
}
