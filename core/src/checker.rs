//! Answers "is this endpoint accepting TCP connections right now?".
//!
//! A [`ReachabilityChecker`] holds a host, a port and a timeout. Each call to
//! [`ReachabilityChecker::is_reachable`] resolves the host, makes one bounded
//! connection attempt to the first address and closes it again. Nothing is cached
//! between calls.
//!
//! Lookup failures are returned as [`ReachError`]; every connection failure
//! (refused, timed out, unreachable) is reported as `Ok(false)`.

use std::fmt;
use std::time::Duration;

use reachr_common::{DEFAULT_PORT, DEFAULT_TIMEOUT_MS, ReachError, Target};
use tracing::debug;

use crate::network::tcp;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReachabilityChecker {
    host: String,
    port: u16,
    timeout: u64,
}

impl ReachabilityChecker {
    /// Checks `host` on port 80 with a 1000 ms timeout.
    pub fn new(host: impl Into<String>) -> Self {
        Self::with_timeout(host, DEFAULT_PORT, DEFAULT_TIMEOUT_MS)
    }

    /// Checks `host` on `port` with a 1000 ms timeout.
    pub fn with_port(host: impl Into<String>, port: u16) -> Self {
        Self::with_timeout(host, port, DEFAULT_TIMEOUT_MS)
    }

    /// Fully explicit constructor. `timeout` is in milliseconds, `0` means unbounded.
    ///
    /// Nothing is validated here; a bad host only shows up when the check runs.
    pub fn with_timeout(host: impl Into<String>, port: u16, timeout: u64) -> Self {
        Self {
            host: host.into(),
            port,
            timeout,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Timeout in milliseconds, exactly as given.
    pub fn timeout(&self) -> u64 {
        self.timeout
    }

    /// The connect bound, or `None` when the timeout is `0`.
    pub fn timeout_duration(&self) -> Option<Duration> {
        match self.timeout {
            0 => None,
            ms => Some(Duration::from_millis(ms)),
        }
    }

    /// Blocks for at most the configured timeout (plus name lookup).
    pub fn is_reachable(&self) -> Result<bool, ReachError> {
        let addr = tcp::resolve_first(&self.host, self.port)?;
        let reachable = tcp::handshake(addr, self.timeout_duration());
        debug!(host = %self.host, %addr, reachable, "reachability checked");
        Ok(reachable)
    }

    /// Same contract as [`Self::is_reachable`], driven by the tokio runtime.
    pub async fn is_reachable_async(&self) -> Result<bool, ReachError> {
        let addr = tcp::resolve_first_async(&self.host, self.port).await?;
        let reachable = tcp::handshake_async(addr, self.timeout_duration()).await;
        debug!(host = %self.host, %addr, reachable, "reachability checked");
        Ok(reachable)
    }
}

impl From<Target> for ReachabilityChecker {
    fn from(target: Target) -> Self {
        Self::with_port(target.host, target.port)
    }
}

impl fmt::Display for ReachabilityChecker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (port {})", self.host, self.port)
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
