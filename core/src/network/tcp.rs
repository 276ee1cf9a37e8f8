//! Address lookup and single-shot TCP handshakes.
//!
//! Every function here tries exactly one address and one connection. Failures to
//! connect are reported as `false`, only lookups produce errors.

use std::io;
use std::net::{SocketAddr, TcpStream, ToSocketAddrs};
use std::time::Duration;

use reachr_common::ReachError;
use tokio::time::timeout;
use tracing::{debug, trace};

/// Resolves `host` and returns the first address it maps to.
pub fn resolve_first(host: &str, port: u16) -> Result<SocketAddr, ReachError> {
    let mut addrs = (host, port)
        .to_socket_addrs()
        .map_err(|e| resolution_error(host, e))?;

    addrs.next().ok_or_else(|| ReachError::NoAddresses {
        host: host.to_owned(),
    })
}

pub async fn resolve_first_async(host: &str, port: u16) -> Result<SocketAddr, ReachError> {
    let mut addrs = tokio::net::lookup_host((host, port))
        .await
        .map_err(|e| resolution_error(host, e))?;

    addrs.next().ok_or_else(|| ReachError::NoAddresses {
        host: host.to_owned(),
    })
}

fn resolution_error(host: &str, source: io::Error) -> ReachError {
    debug!(host, error = %source, "host resolution failed");
    ReachError::HostResolution {
        host: host.to_owned(),
        source,
    }
}

/// Opens and immediately closes a TCP connection to `addr`.
///
/// `None` leaves the bound to the operating system.
pub fn handshake(addr: SocketAddr, probe_timeout: Option<Duration>) -> bool {
    let attempt: io::Result<TcpStream> = match probe_timeout {
        Some(limit) => TcpStream::connect_timeout(&addr, limit),
        None => TcpStream::connect(addr),
    };

    match attempt {
        Ok(stream) => {
            drop(stream);
            trace!(%addr, "handshake completed");
            true
        }
        Err(e) => {
            debug!(%addr, error = %e, "handshake failed");
            false
        }
    }
}

pub async fn handshake_async(addr: SocketAddr, probe_timeout: Option<Duration>) -> bool {
    let attempt = match probe_timeout {
        Some(limit) => match timeout(limit, tokio::net::TcpStream::connect(addr)).await {
            Ok(result) => result,
            Err(_elapsed) => {
                debug!(%addr, ?limit, "handshake timed out");
                return false;
            }
        },
        None => tokio::net::TcpStream::connect(addr).await,
    };

    match attempt {
        Ok(stream) => {
            drop(stream);
            trace!(%addr, "handshake completed");
            true
        }
        Err(e) => {
            debug!(%addr, error = %e, "handshake failed");
            false
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
