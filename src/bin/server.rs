//! userstore Server Binary
//!
//! Starts the HTTP server for userstore.

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};
use userstore::network::Server;
use userstore::{Config, UserStore};

/// userstore Server
#[derive(Parser, Debug)]
#[command(name = "userstore-server")]
#[command(about = "In-memory user CRUD over HTTP")]
#[command(version)]
struct Args {
    /// Listen address (host:port)
    #[arg(short, long, default_value = "127.0.0.1:3333")]
    listen: String,

    /// Start with an empty store instead of the test user
    #[arg(long)]
    no_seed: bool,

    /// Maximum request body size in KB
    #[arg(short = 'b', long, default_value = "1024")]
    max_body_kb: usize,
}

#[tokio::main]
async fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,userstore=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();

    tracing::info!("userstore Server v{}", userstore::VERSION);
    tracing::info!("Listen address: {}", args.listen);

    let max_body_bytes = match Config::body_limit_from_kb(args.max_body_kb) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Build config from args
    let mut builder = Config::builder()
        .listen_addr(&args.listen)
        .max_body_bytes(max_body_bytes);
    if args.no_seed {
        builder = builder.no_seed();
    }
    let config = builder.build();

    if let Err(e) = config.validate() {
        tracing::error!("Invalid configuration: {}", e);
        std::process::exit(1);
    }

    let store = Arc::new(UserStore::with_records(
        config.seed_users.clone(),
        config.next_id,
    ));
    tracing::info!(
        "Store initialized with {} user(s), next id {}",
        store.len(),
        store.next_id()
    );

    let server = Server::new(config, store);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Server stopped");
}
