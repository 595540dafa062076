//! Single-instance guard.
//!
//! The first process to bind the configured loopback port wins; any later
//! launch fails to bind and exits.

use std::{
    io,
    net::{Ipv4Addr, SocketAddr, TcpListener},
};

use thiserror::Error;
use tracing::{info, instrument};

/// Errors from acquiring the single-instance port.
#[derive(Error, Debug)]
pub enum InstanceError {
    /// The port is already bound, most likely by a running instance
    #[error("another instance is already running (port {port} is in use): {source}")]
    AlreadyRunning {
        /// Port that could not be bound
        port: u16,
        /// Underlying bind error
        #[source]
        source: io::Error,
    },
}

/// Holds the loopback listener for as long as the process runs.
///
/// Dropping the guard releases the port.
#[derive(Debug)]
pub struct InstanceGuard {
    listener: TcpListener,
}

impl InstanceGuard {
    /// Binds `127.0.0.1:port`.
    ///
    /// # Errors
    /// Returns [`InstanceError::AlreadyRunning`] if the port cannot be bound.
    #[instrument]
    pub fn acquire(port: u16) -> Result<Self, InstanceError> {
        let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, port))
            .map_err(|source| InstanceError::AlreadyRunning { port, source })?;

        info!("Acquired single-instance port");
        Ok(Self { listener })
    }

    /// Address actually bound. Differs from the requested one only for port 0.
    ///
    /// # Errors
    /// Returns error if the socket address cannot be queried.
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}
