use clap::{Parser, Subcommand};
use sdl_weaver::error::Result;

mod cli;

#[derive(Parser)]
#[command(name = "sdl-weaver")]
#[command(version = "0.1.0")]
#[command(about = "Assemble GraphQL schemas from base SDL, registered types and extensions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write an example configuration and example SDL sources
    Init {
        /// Directory to write the example project into
        #[arg(long, default_value = ".")]
        dir: String,

        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },

    /// Assemble the schema and print its SDL
    Build {
        /// Config file path
        #[arg(long, default_value = "weaver.toml")]
        config: String,

        /// Output file (overrides output.path from the config)
        #[arg(long)]
        output: Option<String>,
    },

    /// List the types of the assembled schema
    Inspect {
        /// Config file path
        #[arg(long, default_value = "weaver.toml")]
        config: String,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into())
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { dir, force } => {
            cli::init::run(dir, force)?;
        }
        Commands::Build { config, output } => {
            cli::build::run(config, output)?;
        }
        Commands::Inspect { config, json } => {
            cli::inspect::run(config, json)?;
        }
    }

    Ok(())
}
