//! TCP listener and accept loop.

use std::net::SocketAddr;

use log::{debug, error, warn};
use tokio::net::TcpListener;

use crate::counter::RequestCounter;
use crate::server::config::ServerConfig;
use crate::server::error::Error;
use crate::server::session::Session;

/// The accepting socket.
///
/// Bound once at startup; the accept loop then runs for the lifetime of the
/// process. Control never flows back from a session to the listener.
pub struct Listener {
    inner: TcpListener,
    config: ServerConfig,
}

impl Listener {
    /// Bind the listening socket.
    ///
    /// Opening the socket, setting its reuse option, binding, and switching
    /// into listening mode can each fail; the first failure surfaces as
    /// [`Error::Bind`] and aborts startup.
    pub async fn bind(config: ServerConfig) -> Result<Self, Error> {
        let inner = TcpListener::bind(config.addr).await.map_err(|source| Error::Bind {
            addr: config.addr,
            source,
        })?;

        Ok(Self { inner, config })
    }

    /// The address the socket is actually bound to.
    pub fn local_addr(&self) -> Result<SocketAddr, Error> {
        Ok(self.inner.local_addr()?)
    }

    /// Accept connections forever.
    ///
    /// Each accepted socket is handed to a fresh [`Session`] spawned onto the
    /// worker pool, and the loop immediately goes back to accepting, so
    /// previously accepted sessions run concurrently with new accepts. A
    /// failed accept is logged and does not stop the loop.
    pub async fn run(self, counter: RequestCounter) {
        loop {
            match self.inner.accept().await {
                Ok((socket, peer)) => {
                    debug!("Accepted connection from {peer}");
                    let session = Session::new(socket, counter.clone(), &self.config);
                    tokio::spawn(async move {
                        if let Err(e) = session.run().await {
                            error!("Connection from {peer}: {e}");
                        }
                    });
                }
                Err(e) => {
                    warn!("Error accepting connection: {e}");
                }
            }
        }
    }
}
