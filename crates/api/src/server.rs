//! Server lifecycle - bind, serve, graceful shutdown

use std::sync::Arc;

use cartevv_domain::{CartevvError, Result};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::context::AppContext;
use crate::routes::build_router;

/// Serve the API until a shutdown signal is received.
///
/// # Errors
/// Returns `Config` if the listener cannot bind, `Internal` if the server
/// stops with an I/O error.
pub async fn serve(context: Arc<AppContext>) -> Result<()> {
    let address = context.config.server.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|err| CartevvError::Config(format!("failed to bind {address}: {err}")))?;

    info!(%address, "server listening");

    axum::serve(listener, build_router(context))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|err| CartevvError::Internal(format!("server error: {err}")))?;

    info!("server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(error = %err, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
        info!("received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("received terminate signal, shutting down");
            }
            Err(err) => {
                warn!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
