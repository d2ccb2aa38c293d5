//! Server runtime: listener construction, the accept loop, and interrupt
//! handling.

pub mod connection;
pub mod listener;
pub mod signal;

pub use listener::{bind_listener, BindError};

use crate::config::AppState;
use crate::logger;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Notify;

/// Accept connections until the shutdown notify fires.
///
/// Accept errors are logged and the loop continues; only the operator
/// interrupt ends it. In-flight connections finish in their own tasks.
pub async fn serve(listener: TcpListener, state: Arc<AppState>, shutdown: Arc<Notify>) {
    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        if state.config.logging.access_log {
                            logger::log_connection_accepted(&peer_addr);
                        }
                        connection::handle_connection(stream, peer_addr, Arc::clone(&state));
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            () = shutdown.notified() => {
                logger::log_shutdown();
                return;
            }
        }
    }
}
