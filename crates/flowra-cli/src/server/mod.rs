//! HTTP server startup and lifecycle management.

mod error;

use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::{TRACING_TARGET_SHUTDOWN, TRACING_TARGET_STARTUP};

pub use self::error::{ServerError, ServerResult};

/// Starts the HTTP server with graceful shutdown.
///
/// Binds to the configured address and serves requests until a shutdown
/// signal (SIGTERM or Ctrl+C) is received.
///
/// # Errors
///
/// Returns an error if the listener cannot bind to the configured address
/// or the server encounters a fatal error during operation.
pub async fn serve(app: Router, config: ServerConfig) -> ServerResult<()> {
    if let Err(validation_error) = config.validate() {
        tracing::error!(
            target: TRACING_TARGET_STARTUP,
            error = validation_error.to_string(),
            "Invalid server configuration"
        );

        return Err(ServerError::InvalidConfig(validation_error.to_string()));
    }

    tracing::info!(
        target: TRACING_TARGET_STARTUP,
        host = config.host.to_string(),
        port = config.port,
        request_timeout_sec = config.request_timeout,
        shutdown_timeout_sec = config.shutdown_timeout,
        "Server configuration loaded"
    );

    let server_addr = config.server_addr();
    let listener = TcpListener::bind(server_addr)
        .await
        .map_err(|err| ServerError::bind(server_addr, err))?;

    tracing::info!(
        target: TRACING_TARGET_STARTUP,
        addr = %server_addr,
        "Server is ready and listening for connections"
    );

    if config.binds_to_all_interfaces() {
        tracing::warn!(
            target: TRACING_TARGET_STARTUP,
            "Server is bound to all interfaces. Ensure firewall rules are properly configured."
        );
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(config.shutdown_timeout()))
        .await
        .map_err(|err| {
            tracing::error!(
                target: TRACING_TARGET_SHUTDOWN,
                error = %err,
                "Server encountered an error"
            );
            ServerError::Runtime(err)
        })?;

    tracing::info!(target: TRACING_TARGET_SHUTDOWN, "Server shut down gracefully");
    Ok(())
}

/// Resolves once SIGTERM or Ctrl+C is received.
async fn shutdown_signal(shutdown_timeout: Duration) {
    #[cfg(unix)]
    let sigterm = async {
        use tokio::signal::unix;

        match unix::signal(unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::error!(
                    target: TRACING_TARGET_SHUTDOWN,
                    error = %error,
                    "Failed to install SIGTERM handler"
                );
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let sigterm = std::future::pending::<()>();

    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            if let Err(error) = result {
                tracing::error!(
                    target: TRACING_TARGET_SHUTDOWN,
                    error = %error,
                    "Failed to install Ctrl+C handler"
                );
            }
        }
        () = sigterm => {}
    }

    tracing::info!(
        target: TRACING_TARGET_SHUTDOWN,
        timeout_secs = shutdown_timeout.as_secs(),
        "Shutdown signal received, draining in-flight requests"
    );
}
