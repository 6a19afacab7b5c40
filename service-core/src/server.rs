use crate::error::AppError;
use crate::observability::STARTUP_TARGET;
use axum::Router;
use std::future::{Future, IntoFuture};
use std::net::SocketAddr;
use std::pin::Pin;
use tokio::net::TcpListener;
use tokio::signal;

type ServeFuture = Pin<Box<dyn Future<Output = std::io::Result<()>> + Send>>;

/// A bound listener plus the router it will serve.
///
/// Binding happens in [`Server::bind`], so port conflicts surface before the
/// caller starts serving. Port `0` picks an ephemeral port.
pub struct Server {
    port: u16,
    server: ServeFuture,
}

impl Server {
    pub async fn bind(service_name: &str, port: u16, app: Router) -> Result<Self, AppError> {
        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::Bind { addr, source: e }
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!(target: STARTUP_TARGET, "[{}] listening on {}", service_name, port);

        let server = axum::serve(listener, app).with_graceful_shutdown(shutdown_signal());

        Ok(Self {
            port,
            server: Box::pin(server.into_future()),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
