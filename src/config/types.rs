use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// File extensions accepted for SDL sources
pub const SDL_EXTENSIONS: [&str; 3] = [".graphql", ".graphqls", ".gql"];

/// Top-level configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub schema: SourcesConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// SDL sources for each input of the schema builder
///
/// Paths are relative to the directory of the configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourcesConfig {
    /// SDL files forming the base schema configuration
    #[serde(default)]
    pub base: Vec<String>,

    /// SDL files whose types are added to the type registry
    #[serde(default)]
    pub types: Vec<String>,

    /// SDL files applied as the extension document
    #[serde(default)]
    pub extensions: Vec<String>,

    /// Register the Date and DateTime scalars
    #[serde(default)]
    pub custom_scalars: bool,
}

/// Output configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// File the printed SDL is written to (stdout when absent)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl SourcesConfig {
    /// Validate source lists
    pub fn validate(&self) -> Result<(), String> {
        validate_paths("base", &self.base)?;
        validate_paths("types", &self.types)?;
        validate_paths("extensions", &self.extensions)?;
        Ok(())
    }
}

fn validate_paths(list: &str, paths: &[String]) -> Result<(), String> {
    let mut seen = HashSet::new();

    for path in paths {
        if path.trim().is_empty() {
            return Err(format!("Empty path in schema.{}", list));
        }

        if !SDL_EXTENSIONS.iter().any(|ext| path.ends_with(ext)) {
            return Err(format!(
                "Path '{}' in schema.{} must end with one of {}",
                path,
                list,
                SDL_EXTENSIONS.join(", ")
            ));
        }

        if !seen.insert(path.as_str()) {
            return Err(format!("Path '{}' is listed twice in schema.{}", path, list));
        }
    }

    Ok(())
}
