// Listener bootstrap module
// Binds the first free port among `start_port..start_port + max_attempts`

use tokio::net::TcpListener;

use super::listener::create_listener;
use crate::config::Config;
use crate::error::{Result, ServerError};
use crate::logger;

/// A listener acquired by the bootstrap
#[derive(Debug)]
pub struct BoundListener {
    pub listener: TcpListener,
    pub port: u16,
    /// Bind attempts used, including the successful one
    pub attempts: u16,
}

/// Bind a listener, moving to the next port while the current one is in use.
///
/// Only `PortInUse` is retried; any other bind failure is returned immediately.
/// Fails with `PortExhausted` after `max_port_attempts` in-use ports, or earlier
/// if the next port would overflow `u16`.
pub fn bind_with_retry(config: &Config) -> Result<BoundListener> {
    let start_port = config.server.port;
    let max_attempts = config.server.max_port_attempts;

    let mut port = start_port;
    let mut attempts = 0;

    while attempts < max_attempts {
        attempts += 1;
        let addr = config.socket_addr(port)?;

        match create_listener(addr) {
            Ok(listener) => {
                return Ok(BoundListener {
                    listener,
                    port,
                    attempts,
                });
            }
            Err(ServerError::PortInUse { .. }) => {
                let next = if attempts < max_attempts {
                    port.checked_add(1)
                } else {
                    None
                };
                logger::log_port_in_use(port, next);
                match next {
                    Some(next) => port = next,
                    None => break,
                }
            }
            Err(e) => return Err(e),
        }
    }

    Err(ServerError::PortExhausted {
        start_port,
        attempts,
    })
}
