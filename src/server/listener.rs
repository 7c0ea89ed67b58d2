// Listener module
// Creates a single TCP listener, classifying "address in use" separately from other bind failures

use socket2::{Domain, Protocol, Socket, Type};
use std::io::ErrorKind;
use std::net::SocketAddr;
use tokio::net::TcpListener;

use crate::error::{Result, ServerError};

const LISTEN_BACKLOG: i32 = 128;

/// Create a `TcpListener` bound to `addr` with `SO_REUSEADDR` enabled.
///
/// `SO_REUSEADDR` only allows rebinding a port in `TIME_WAIT`; a port held by a
/// live listener still fails with `AddrInUse`, which is reported as
/// [`ServerError::PortInUse`]. Every other failure becomes [`ServerError::Bind`].
///
/// Must be called from within a Tokio runtime.
pub fn create_listener(addr: SocketAddr) -> Result<TcpListener> {
    bind_socket(addr).map_err(|source| {
        if source.kind() == ErrorKind::AddrInUse {
            ServerError::PortInUse { port: addr.port() }
        } else {
            ServerError::Bind { addr, source }
        }
    })
}

fn bind_socket(addr: SocketAddr) -> std::io::Result<TcpListener> {
    // Create socket with appropriate domain (IPv4 or IPv6)
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;

    // Allow binding to a port in TIME_WAIT state after a restart
    socket.set_reuse_address(true)?;

    // Set non-blocking mode for async compatibility
    socket.set_nonblocking(true)?;

    socket.bind(&addr.into())?;
    socket.listen(LISTEN_BACKLOG)?;

    // Convert socket2::Socket to std::net::TcpListener, then to tokio::net::TcpListener
    let std_listener: std::net::TcpListener = socket.into();
    TcpListener::from_std(std_listener)
}
