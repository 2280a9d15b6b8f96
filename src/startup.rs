//! Application startup and server initialization.
//!
//! Binding the listener is kept apart from serving on it, so a bind failure
//! surfaces as its own error and tests can serve on an ephemeral port.

use std::future::Future;
use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::info;

use crate::config::ConfigV1;
use crate::error::StartupError;
use crate::routes;
use crate::state::AppState;
use crate::utils::shutdown::shutdown_signal;

/// Binds the TCP listener for `addr`.
///
/// # Errors
///
/// Returns [`StartupError::Bind`] if the address is unavailable.
pub async fn bind(addr: SocketAddr) -> Result<TcpListener, StartupError> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr, source })
}

/// Serves the router on `listener` until `shutdown` resolves.
pub async fn serve_until<F>(
    listener: TcpListener,
    state: AppState,
    shutdown: F,
) -> Result<(), StartupError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let local_addr = listener.local_addr().map_err(StartupError::Serve)?;
    let app = routes::create_router(state);

    info!("Demo app running on port {}", local_addr.port());
    info!(
        "Health check: http://localhost:{}/health",
        local_addr.port()
    );

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(StartupError::Serve)?;

    info!("Server stopped");
    Ok(())
}

/// Serves the router on `listener` until Ctrl+C or SIGTERM.
pub async fn serve(listener: TcpListener, state: AppState) -> Result<(), StartupError> {
    serve_until(listener, state, shutdown_signal()).await
}

/// Binds to the configured address and serves until shutdown.
///
/// # Errors
///
/// Returns an error if the server fails to bind to the configured port
/// or encounters a runtime error during execution.
pub async fn run(config: &ConfigV1, state: AppState) -> Result<(), StartupError> {
    let listener = bind(config.socket_addr()).await?;
    serve(listener, state).await
}
