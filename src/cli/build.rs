use sdl_weaver::config::{config_dir, load_config};
use sdl_weaver::error::Result;
use sdl_weaver::schema::{Schema, SchemaBuilder};
use std::fs;

/// Assemble the schema described by a config file
pub fn assemble(config_path: &str) -> Result<(sdl_weaver::Config, Schema)> {
    tracing::info!("📖 Loading configuration from {}", config_path);
    let config = load_config(config_path)?;

    let mut builder = SchemaBuilder::from_sources(&config.schema, &config_dir(config_path))?;

    tracing::info!("🔧 Assembling schema...");
    let schema = builder.build()?;
    tracing::info!("✅ Schema assembled with {} types", schema.types().len());

    Ok((config, schema))
}

/// Run the build command to print the assembled SDL
pub fn run(config_path: String, output: Option<String>) -> Result<()> {
    let (config, schema) = assemble(&config_path)?;
    let sdl = schema.sdl()?;

    match output.or(config.output.path) {
        Some(path) => {
            fs::write(&path, &sdl)?;
            tracing::info!("📝 Wrote schema to {}", path);
        }
        None => println!("{}", sdl),
    }

    Ok(())
}
