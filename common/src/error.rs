use std::io;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum ReachError {
    #[error("couldn't resolve host {host}: {source}")]
    HostResolution {
        host: String,
        #[source]
        source: io::Error,
    },

    #[error("no addresses resolved from {host}")]
    NoAddresses { host: String },

    #[error("invalid target: {0}")]
    InvalidTarget(String),
}

impl ReachError {
    /// True when the host name could not be turned into an address.
    ///
    /// Both lookup failures and empty lookups count.
    pub fn is_resolution(&self) -> bool {
        matches!(
            self,
            ReachError::HostResolution { .. } | ReachError::NoAddresses { .. }
        )
    }

    pub fn host(&self) -> Option<&str> {
        match self {
            ReachError::HostResolution { host, .. } | ReachError::NoAddresses { host } => {
                Some(host)
            }
            ReachError::InvalidTarget(_) => None,
        }
    }
}
