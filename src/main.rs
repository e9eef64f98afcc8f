//! HR Helpdesk server.
//!
//! # Architecture Overview
//!
//! ```text
//!   Browser / CLI
//!        │ JSON over HTTP
//!        ▼
//!   ┌──────────────────────────────────────────────────────────┐
//!   │  tower-http layers: request id, trace, limits, headers   │
//!   ├──────────────────────────────────────────────────────────┤
//!   │  public: /login /register /logout                        │
//!   │  gated (session cookie): / /ask /reset /me               │
//!   ├──────────────┬───────────────────────┬───────────────────┤
//!   │ auth         │ assistant             │ pages             │
//!   │ sessions     │ intent → reply        │ HTML templates    │
//!   └──────┬───────┴───────────┬───────────┴───────────────────┘
//!          ▼                   ▼
//!      SessionStore        DataStore (users/employees/policies/bookings .json)
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use hr_helpdesk::config::{apply_env_overrides, load_config};
use hr_helpdesk::lifecycle::signals::spawn_signal_handler;
use hr_helpdesk::observability::{logging, metrics};
use hr_helpdesk::{HelpdeskConfig, HttpServer, Shutdown};

#[derive(Parser)]
#[command(name = "hr-helpdesk")]
#[command(about = "HR self-service helpdesk server", long_about = None)]
struct Args {
    /// Path to a TOML config file. Defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => HelpdeskConfig::default(),
    };
    let config = apply_env_overrides(config)?;

    logging::init_tracing(&config.observability.log_level);
    tracing::info!("hr-helpdesk v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        data_dir = %config.storage.data_dir,
        session_ttl_secs = config.session.ttl_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        // Address already checked by config validation.
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;

    let shutdown = Shutdown::new();
    spawn_signal_handler(&shutdown);

    let server = HttpServer::new(config)?;
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
