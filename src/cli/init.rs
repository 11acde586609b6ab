use crate::cli::example::{example_config, example_sources};
use sdl_weaver::config::save_config;
use sdl_weaver::error::{Result, WeaverError};
use std::fs;
use std::path::Path;

pub const CONFIG_FILE: &str = "weaver.toml";

/// Run the init command to write an example project
pub fn run(dir: String, force: bool) -> Result<()> {
    tracing::info!("🎨 Writing example schema project to {}", dir);

    let root = Path::new(&dir);
    let config_path = root.join(CONFIG_FILE);

    let mut targets = vec![config_path.clone()];
    targets.extend(example_sources().iter().map(|source| root.join(source.path)));

    if !force {
        if let Some(existing) = targets.iter().find(|path| path.exists()) {
            return Err(WeaverError::Config(format!(
                "{} already exists. Use --force to overwrite",
                existing.display()
            )));
        }
    }

    for source in example_sources() {
        let path = root.join(source.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, source.contents)?;
        tracing::info!("   • {}", path.display());
    }

    let config_path = config_path.to_string_lossy().to_string();
    save_config(&example_config(), &config_path)?;
    tracing::info!("📝 Generated {}", config_path);

    tracing::info!("");
    tracing::info!("💡 Next steps:");
    tracing::info!("   1. Review the SDL files under {}", root.join("schema").display());
    tracing::info!("   2. Print the assembled schema with 'sdl-weaver build --config {}'", config_path);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_project() {
        let dir = TempDir::new().unwrap();
        let dir_path = dir.path().to_string_lossy().to_string();

        run(dir_path.clone(), false).unwrap();

        assert!(dir.path().join(CONFIG_FILE).exists());
        assert!(dir.path().join("schema/base.graphql").exists());
        assert!(dir.path().join("schema/extensions.graphql").exists());

        // A second run refuses to overwrite
        assert!(run(dir_path.clone(), false).is_err());
        assert!(run(dir_path, true).is_ok());
    }
}
