//! The tallyhttp server binary.
//!
//! Binds 127.0.0.1:8080 and serves the two fixed routes on a four-worker
//! runtime until the process is terminated. Startup failures print to stderr
//! and exit non-zero; there is no shutdown path.

use std::process;

use log::info;

use tallyhttp::{Listener, RequestCounter, ServerConfig, ServerError};

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), ServerError> {
    let config = ServerConfig::default();

    // A fixed pool of workers drives the listener and every session.
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(config.worker_threads)
        .enable_io()
        .build()?;

    runtime.block_on(async {
        let addr = config.addr;
        let listener = Listener::bind(config).await?;
        info!("Server starting at http://{addr}");

        listener.run(RequestCounter::new()).await;
        Ok(())
    })
}
