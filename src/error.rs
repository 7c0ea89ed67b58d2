// Error types module
// Startup and runtime failures of the mock server

use std::net::SocketAddr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    /// Recovered by the bootstrap retry loop, never surfaced to the operator
    #[error("port {port} is already in use")]
    PortInUse { port: u16 },

    #[error("no available port: tried {attempts} ports starting at {start_port}")]
    PortExhausted { start_port: u16, attempts: u16 },

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid listen host '{0}'")]
    InvalidHost(String),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
