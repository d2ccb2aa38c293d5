//! coiserve: a local static file server that adds the two response
//! headers required for cross-origin isolation
//! (`Cross-Origin-Embedder-Policy: require-corp`,
//! `Cross-Origin-Opener-Policy: same-origin`) to every response.

pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;
