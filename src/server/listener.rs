//! Listener construction.
//!
//! The socket is built explicitly through socket2 so the options are
//! spelled out: non-blocking for the async runtime, SO_REUSEADDR so a
//! restart is not blocked by TIME_WAIT sockets. SO_REUSEPORT is left off
//! on purpose; a second instance on the same port must fail to bind.

use socket2::{Domain, Protocol, Socket, Type};
use std::fmt;
use std::net::SocketAddr;
use tokio::net::TcpListener;

/// Bind failure, with "address already in use" separated from other OS
/// errors so startup can report it distinctly.
#[derive(Debug)]
pub enum BindError {
    AddrInUse(std::io::Error),
    Io(std::io::Error),
}

impl fmt::Display for BindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AddrInUse(e) => write!(f, "address already in use: {e}"),
            Self::Io(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for BindError {}

impl From<std::io::Error> for BindError {
    fn from(e: std::io::Error) -> Self {
        if e.kind() == std::io::ErrorKind::AddrInUse {
            Self::AddrInUse(e)
        } else {
            Self::Io(e)
        }
    }
}

/// Create a bound, listening tokio `TcpListener` on `addr`.
pub fn bind_listener(addr: SocketAddr) -> Result<TcpListener, BindError> {
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;
    socket.set_reuse_address(true)?;
    socket.set_nonblocking(true)?;
    socket.bind(&addr.into())?;
    socket.listen(128)?;

    let std_listener: std::net::TcpListener = socket.into();
    Ok(TcpListener::from_std(std_listener)?)
}
