//! OS signal handling.
//!
//! SIGTERM and SIGINT both request a graceful shutdown. If a handler cannot
//! be installed the other one still works.

/// Wait for the first termination signal and return its name.
#[cfg(unix)]
pub async fn wait_for_termination() -> &'static str {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigterm = match signal(SignalKind::terminate()) {
        Ok(s) => Some(s),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to install SIGTERM handler");
            None
        }
    };

    tokio::select! {
        _ = async {
            match sigterm.as_mut() {
                Some(s) => { s.recv().await; }
                None => std::future::pending::<()>().await,
            }
        } => "SIGTERM",
        _ = ctrl_c() => "SIGINT",
    }
}

/// Wait for the first termination signal and return its name.
#[cfg(not(unix))]
pub async fn wait_for_termination() -> &'static str {
    ctrl_c().await;
    "SIGINT"
}

async fn ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
}
