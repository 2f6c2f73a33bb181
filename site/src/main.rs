mod chain_client;
mod handlers;
mod pages;
mod relay;
mod state;
#[cfg(test)]
mod testutil;

use actix_web::{App, HttpServer, middleware, web};
use anyhow::{Context, Result};
use blocktree_config::Config;
use clap::{Parser, Subcommand};
use log::info;
use state::AppState;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "blocktree-site")]
#[command(about = "Blocktree marketing site and blocktree demo", long_about = None)]
struct Cli {
    /// Configuration file (defaults to ~/.blocktree/config.json)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the web server
    Serve {
        /// Override the configured port
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        subcommand: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    View,
    Set { key: String, value: String },
    Init,
}

fn config_path(cli: &Cli) -> Result<PathBuf> {
    match &cli.config {
        Some(path) => Ok(Config::expand_path(path)),
        None => Config::default_path(),
    }
}

#[actix_web::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let path = config_path(&cli)?;

    match cli.command {
        Commands::Serve { port } => {
            let mut cfg = Config::load_from(&path)?;
            cfg.apply_env()?;
            if let Some(port) = port {
                cfg.port = port;
            }
            serve(cfg).await
        }
        Commands::Config { subcommand } => match subcommand {
            ConfigCommands::View => {
                let cfg = Config::load_from(&path)?;
                println!("{}", cfg.view()?);
                Ok(())
            }
            ConfigCommands::Set { key, value } => {
                let mut cfg = Config::load_from(&path)?;
                cfg.set_value(&key, &value)?;
                cfg.save_to(&path)?;
                println!("{} set successfully.", key);
                Ok(())
            }
            ConfigCommands::Init => {
                Config::init_default(&path)?;
                println!("Default configuration file has been created: {:?}", path);
                Ok(())
            }
        },
    }
}

async fn serve(cfg: Config) -> Result<()> {
    info!("Blocktree site starting...");
    info!("Chain service: {}", cfg.chain_api_url);

    let state = web::Data::new(AppState::from_config(&cfg)?);
    let bind_addr = cfg.bind_addr();

    info!("Server listening on http://{}", bind_addr);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(middleware::Logger::default())
            .configure(handlers::routes)
    })
    .bind(&bind_addr)
    .with_context(|| format!("Failed to bind {}", bind_addr))?
    .run()
    .await?;

    Ok(())
}
