/// Schema inputs loaded from SDL files listed in the configuration

use crate::config::SourcesConfig;
use crate::error::{Result, WeaverError};
use crate::schema::builder::SchemaBuilder;
use crate::schema::document::ExtensionDocument;
use crate::schema::registry::TypeRegistry;
use crate::schema::scalars::custom_scalars;
use crate::schema::schema_config::SchemaConfig;

use std::fs;
use std::path::Path;

impl SchemaBuilder {
    /// Create a builder whose inputs are read from the configured SDL files
    ///
    /// # Arguments
    ///
    /// * `sources` - The `[schema]` section of the configuration
    /// * `base_dir` - Directory relative paths are resolved against
    pub fn from_sources(sources: &SourcesConfig, base_dir: &Path) -> Result<Self> {
        let base_sdl = read_sdl_files(base_dir, &sources.base)?;
        let schema_config = SchemaConfig::from_sdl(&base_sdl)?;

        let mut registry = TypeRegistry::new();
        if sources.custom_scalars {
            registry.add_types(custom_scalars());
        }
        for path in &sources.types {
            let sdl = read_sdl_file(base_dir, path)?;
            registry.add_sdl(&sdl)?;
        }

        let extension_sdl = read_sdl_files(base_dir, &sources.extensions)?;
        let document = ExtensionDocument::parse(&extension_sdl)?;

        tracing::info!(
            "Loaded {} base types, {} registry types, {} extension definitions",
            schema_config.resolve_types().len(),
            registry.len(),
            document.definitions().len()
        );

        let mut builder = SchemaBuilder::new();
        builder
            .with_schema_config(schema_config)
            .with_type_registry(registry)
            .with_document_node(document);
        Ok(builder)
    }
}

fn read_sdl_file(base_dir: &Path, path: &str) -> Result<String> {
    let full_path = base_dir.join(path);
    tracing::debug!("Reading SDL from {}", full_path.display());

    fs::read_to_string(&full_path).map_err(|e| {
        WeaverError::Config(format!(
            "Failed to read SDL file '{}': {}",
            full_path.display(),
            e
        ))
    })
}

/// Concatenate several SDL files into one document source
fn read_sdl_files(base_dir: &Path, paths: &[String]) -> Result<String> {
    let mut sdl = String::new();
    for path in paths {
        sdl.push_str(&read_sdl_file(base_dir, path)?);
        sdl.push('\n');
    }
    Ok(sdl)
}
