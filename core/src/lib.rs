pub mod checker;
pub mod network;

pub use checker::ReachabilityChecker;
pub use reachr_common::{DEFAULT_PORT, DEFAULT_TIMEOUT_MS, ReachError, Target};
