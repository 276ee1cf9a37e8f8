use crate::DEFAULT_TIMEOUT_MS;

#[derive(Debug, Clone)]
pub struct Config {
    /// Upper bound for every connect attempt, in milliseconds.
    ///
    /// `0` leaves the bound to the operating system.
    pub timeout_ms: u64,
    /// `1` hides banner and headers, `2` prints reachable hosts only.
    pub quiet: u8,
    pub no_banner: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_TIMEOUT_MS,
            quiet: 0,
            no_banner: false,
        }
    }
}
