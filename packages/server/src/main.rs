#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Binary entry point for the terror insights API server.

use std::path::PathBuf;

use clap::Parser;
use terror_insights_server::{ServerConfig, run_server};

#[derive(Parser)]
#[command(
    name = "terror_insights_server",
    about = "Terrorism incident dashboard API server"
)]
struct Cli {
    /// Path to the GTD CSV export (overrides `DATASET_PATH`)
    #[arg(long)]
    data: Option<PathBuf>,
    /// Address to bind to (overrides `BIND_ADDR`)
    #[arg(long)]
    bind: Option<String>,
    /// Port to listen on (overrides `PORT`)
    #[arg(long)]
    port: Option<u16>,
}

impl Cli {
    fn apply(self, mut config: ServerConfig) -> ServerConfig {
        if let Some(data) = self.data {
            config.dataset_path = data;
        }
        if let Some(bind) = self.bind {
            config.bind_addr = bind;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        config
    }
}

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    let config = Cli::parse().apply(ServerConfig::from_env());
    run_server(config).await?;

    Ok(())
}
