//! Operator interrupt handling.
//!
//! A background task waits for SIGINT or SIGTERM (Ctrl+C elsewhere) and
//! arms the shared shutdown notify; the accept loop observes it and stops
//! taking connections.

use std::sync::Arc;
use tokio::sync::Notify;

/// Spawn the signal listener task (Unix).
#[cfg(unix)]
pub fn start_signal_handler(shutdown: Arc<Notify>) {
    use tokio::signal::unix::{signal, SignalKind};

    tokio::spawn(async move {
        let Ok(mut sigint) = signal(SignalKind::interrupt()) else {
            crate::logger::log_error("Failed to register SIGINT handler");
            return;
        };
        let Ok(mut sigterm) = signal(SignalKind::terminate()) else {
            crate::logger::log_error("Failed to register SIGTERM handler");
            return;
        };

        tokio::select! {
            _ = sigint.recv() => {}
            _ = sigterm.recv() => {}
        }
        shutdown.notify_one();
    });
}

/// Spawn the signal listener task (non-Unix: Ctrl+C only).
#[cfg(not(unix))]
pub fn start_signal_handler(shutdown: Arc<Notify>) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            shutdown.notify_one();
        }
    });
}
