//! Artiina bead gateway.
//!
//! Read-only HTTP gateway: `GET /{beadId}` answers with the bead's on-chain
//! authenticity record as JSON.
//!
//! # Architecture Overview
//!
//! ```text
//!     GET /{beadId}
//!     ─────────────▶ http::server ──▶ http::handlers ──▶ resolver::engine
//!                                                             │
//!                                        ┌────────────────────┤ validate id
//!                                        │                    │ exists?
//!                                        ▼                    │ 4 reads, joined
//!                              blockchain::contract ◀─────────┘
//!                                        │
//!                              blockchain::client ──▶ JSON-RPC node (eth_call)
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use artiina_gateway::config::load_config;
use artiina_gateway::lifecycle::{build_resolver, Shutdown};
use artiina_gateway::observability::{logging, metrics};
use artiina_gateway::HttpServer;

#[derive(Parser)]
#[command(name = "artiina-gateway")]
#[command(about = "Read-only HTTP gateway for Artiina bead authenticity records", long_about = None)]
struct Args {
    /// Path to a TOML configuration file. Environment variables override it.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;

    logging::init_logging(&config.observability);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "artiina-gateway starting");
    tracing::info!(
        bind_address = %config.listener.bind_address,
        network = %config.ledger.network,
        contract = config.ledger.contract_address.as_deref().unwrap_or("not configured"),
        request_timeout_secs = config.timeouts.request_secs,
        rpc_timeout_secs = config.ledger.rpc_timeout_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        let addr: SocketAddr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr)?;
    }

    let resolver = build_resolver(&config.ledger).await?;

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    shutdown.trigger_on_signal();

    HttpServer::new(config, resolver)
        .run(listener, server_shutdown)
        .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
