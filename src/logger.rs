//! Logging utilities for the server: startup banner, access lines in
//! Common Log Format, warnings and errors, and the fatal startup
//! diagnostics.

use crate::config::Config;
use chrono::Local;
use std::net::SocketAddr;
use std::path::Path;

/// One access-log line per handled request, Common Log Format.
#[derive(Debug, Clone)]
pub struct AccessEntry {
    pub remote_addr: String,
    pub time: chrono::DateTime<Local>,
    pub method: String,
    pub path: String,
    pub http_version: String,
    pub status: u16,
    pub body_bytes: usize,
}

impl AccessEntry {
    pub fn new(remote_addr: String, method: String, path: String) -> Self {
        Self {
            remote_addr,
            time: Local::now(),
            method,
            path,
            http_version: "1.1".to_string(),
            status: 200,
            body_bytes: 0,
        }
    }

    /// `$remote_addr - - [$time_local] "$request" $status $body_bytes_sent`
    pub fn common_log_line(&self) -> String {
        format!(
            "{} - - [{}] \"{} {} HTTP/{}\" {} {}",
            self.remote_addr,
            self.time.format("%d/%b/%Y:%H:%M:%S %z"),
            self.method,
            self.path,
            self.http_version,
            self.status,
            self.body_bytes,
        )
    }
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    println!("======================================");
    println!("Static file server started");
    println!("Serving from: {}", config.resources.root_dir.display());
    println!("Listening on: http://{addr}");
    if let Some(workers) = config.server.workers {
        println!("Worker threads: {workers}");
    }
    println!("Cross-origin isolation headers enabled (COEP/COOP)");
    println!("Press Ctrl+C to stop the server");
    println!("======================================\n");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    println!("[Connection] Accepted from: {peer_addr}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_access(entry: &AccessEntry) {
    println!("{}", entry.common_log_line());
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}

pub fn log_shutdown() {
    println!("\nServer stopped.");
}

pub fn log_missing_root(root: &Path) {
    eprintln!("Error: Directory {} does not exist", root.display());
}

pub fn log_bind_failed(addr: &SocketAddr, err: &crate::server::BindError) {
    match err {
        crate::server::BindError::AddrInUse(_) => {
            eprintln!(
                "Port {} is already in use. Try a different port.",
                addr.port()
            );
        }
        crate::server::BindError::Io(e) => {
            eprintln!("Error starting server on {addr}: {e}");
        }
    }
}
