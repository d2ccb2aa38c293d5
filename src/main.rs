use coiserve::config::{self, AppState};
use coiserve::logger;
use coiserve::server;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Notify;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::Config::load()?;

    // The root must exist before any socket is opened.
    let root = &cfg.resources.root_dir;
    if !root.is_dir() {
        logger::log_missing_root(root);
        std::process::exit(1);
    }
    let root_dir = root.canonicalize()?;

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg, root_dir))
}

async fn async_main(
    cfg: config::Config,
    root_dir: PathBuf,
) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.socket_addr()?;

    let listener = match server::bind_listener(addr) {
        Ok(l) => l,
        Err(e) => {
            logger::log_bind_failed(&addr, &e);
            std::process::exit(1);
        }
    };

    let state = Arc::new(AppState::new(cfg, root_dir));
    let shutdown = Arc::new(Notify::new());
    server::signal::start_signal_handler(Arc::clone(&shutdown));

    logger::log_server_start(&addr, &state.config);
    server::serve(listener, state, shutdown).await;

    Ok(())
}
