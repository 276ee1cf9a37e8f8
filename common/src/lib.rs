pub mod config;
pub mod error;
pub mod target;

pub use error::ReachError;
pub use target::Target;

/// Port used when a target or checker does not name one.
pub const DEFAULT_PORT: u16 = 80;

/// Connect timeout, in milliseconds, used when none is given.
pub const DEFAULT_TIMEOUT_MS: u64 = 1000;
