//! # Check Target Model
//!
//! Parses the `host[:port]` strings handed to the checker on the command line.
//!
//! Accepted forms:
//! * A host name or IPv4 address (`example.com`, `192.168.10.10`).
//! * Either of the above with a port (`example.com:443`).
//! * A bracketed IPv6 literal, with or without a port (`[::1]`, `[::1]:22`).
//! * A bare IPv6 literal (`::1`), which never carries a port.

use std::fmt;
use std::net::Ipv6Addr;
use std::str::FromStr;

use crate::{DEFAULT_PORT, ReachError};

/// A single endpoint to check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Target {
    pub host: String,
    pub port: u16,
}

impl Target {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.host.contains(':') {
            write!(f, "[{}]:{}", self.host, self.port)
        } else {
            write!(f, "{}:{}", self.host, self.port)
        }
    }
}

impl FromStr for Target {
    type Err = ReachError;

    /// Parses a string into a `Target`, falling back to port 80.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Some(rest) = s.strip_prefix('[') {
            return parse_bracketed(rest, s);
        }

        if s.parse::<Ipv6Addr>().is_ok() {
            return Ok(Target::new(s, DEFAULT_PORT));
        }

        match s.rsplit_once(':') {
            Some((host, port_str)) => {
                let port = parse_port(port_str, s)?;
                Ok(Target::new(non_empty_host(host, s)?, port))
            }
            None => Ok(Target::new(non_empty_host(s, s)?, DEFAULT_PORT)),
        }
    }
}

/// Parses the remainder of `[v6]` or `[v6]:port` after the opening bracket.
fn parse_bracketed(rest: &str, original_s: &str) -> Result<Target, ReachError> {
    let Some((host, tail)) = rest.split_once(']') else {
        return Err(ReachError::InvalidTarget(format!(
            "missing ']' in '{original_s}'"
        )));
    };

    let host = non_empty_host(host, original_s)?;

    if tail.is_empty() {
        return Ok(Target::new(host, DEFAULT_PORT));
    }

    match tail.strip_prefix(':') {
        Some(port_str) => Ok(Target::new(host, parse_port(port_str, original_s)?)),
        None => Err(ReachError::InvalidTarget(format!(
            "unexpected '{tail}' after ']' in '{original_s}'"
        ))),
    }
}

fn parse_port(port_str: &str, original_s: &str) -> Result<u16, ReachError> {
    match port_str.parse::<u16>() {
        Ok(0) => Err(ReachError::InvalidTarget(format!(
            "port 0 is not usable in '{original_s}'"
        ))),
        Ok(port) => Ok(port),
        Err(e) => Err(ReachError::InvalidTarget(format!(
            "invalid port '{port_str}' in '{original_s}': {e}"
        ))),
    }
}

fn non_empty_host<'a>(host: &'a str, original_s: &str) -> Result<&'a str, ReachError> {
    if host.is_empty() {
        return Err(ReachError::InvalidTarget(format!(
            "missing host in '{original_s}'"
        )));
    }
    Ok(host)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
