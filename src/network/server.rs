//! HTTP Server
//!
//! Binds the listener and serves the router until shutdown.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use tokio::net::TcpListener;

use super::handler::dispatch;
use crate::config::Config;
use crate::error::Result;
use crate::router::Router;
use crate::store::UserStore;

/// HTTP server for userstore
pub struct Server {
    config: Config,
    router: Router,
}

impl Server {
    /// Create a new server with the given config and store
    pub fn new(config: Config, store: Arc<UserStore>) -> Self {
        Self {
            config,
            router: Router::new(store),
        }
    }

    /// Build the axum app
    fn app(&self) -> axum::Router {
        axum::Router::new()
            .fallback(dispatch)
            .with_state(self.router.clone())
            .layer(DefaultBodyLimit::max(self.config.max_body_bytes))
    }

    /// Bind the listen address without serving yet
    pub async fn bind(self) -> Result<BoundServer> {
        let listener = TcpListener::bind(&self.config.listen_addr).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!("Listening on {}", local_addr);

        Ok(BoundServer {
            app: self.app(),
            listener,
            local_addr,
        })
    }

    /// Bind and serve until Ctrl+C
    pub async fn run(self) -> Result<()> {
        self.bind().await?.run_until(shutdown_signal()).await
    }
}

/// A server with its listener bound
pub struct BoundServer {
    app: axum::Router,
    listener: TcpListener,
    local_addr: SocketAddr,
}

impl BoundServer {
    /// Address actually bound (resolves port 0)
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Serve until `shutdown` completes, then drain in-flight requests
    pub async fn run_until<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        axum::serve(self.listener, self.app)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("Server on {} stopped", self.local_addr);
        Ok(())
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Received Ctrl+C, initiating shutdown..."),
        Err(e) => {
            tracing::warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await
        }
    }
}
