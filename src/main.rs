use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use landing_forge::{PageGenerator, config::Config, http, terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "landing-forge")]
#[command(about = "Turn six answers about a small business into a landing page", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the generate API over HTTP
    Serve {
        /// Bind address, overrides LF_HTTP_BIND
        #[arg(long)]
        bind: Option<std::net::SocketAddr>,
    },
    /// Answer the questions in the terminal and export the page
    Wizard {
        /// Directory the exported HTML file is written to
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.runtime.log_level))
        .with_writer(std::io::stderr)
        .init();

    let generator =
        PageGenerator::from_config(&config).context("Failed to build generation client")?;
    info!(
        "Generation mode: {:?} (model={})",
        generator.mode(),
        config.generation.model
    );

    match cli.command.unwrap_or(Commands::Serve { bind: None }) {
        Commands::Serve { bind } => {
            if let Some(bind) = bind {
                config.http.bind = bind;
            }
            info!("Starting landing-forge HTTP server");
            http::serve(&config, generator).await?;
        }
        Commands::Wizard { out } => {
            let stdin = std::io::stdin();
            let mut input = stdin.lock();
            let mut output = std::io::stdout();
            match terminal::run_wizard(&mut input, &mut output, &generator, &out).await? {
                Some(path) => info!("Exported {}", path.display()),
                None => info!("Wizard closed without generating"),
            }
        }
    }

    Ok(())
}
