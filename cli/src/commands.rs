pub mod check;

use clap::{ArgAction, Parser};
use reachr_common::config::Config;
use reachr_common::{DEFAULT_TIMEOUT_MS, Target};

#[derive(Parser)]
#[command(name = "reachr")]
#[command(version, about = "Check whether hosts accept TCP connections.")]
pub struct CommandLine {
    /// Endpoints as host[:port], comma or space separated (port defaults to 80)
    #[arg(value_delimiter = ',')]
    pub targets: Vec<Target>,

    /// Connect timeout in milliseconds, 0 leaves it to the OS
    #[arg(short, long, default_value_t = DEFAULT_TIMEOUT_MS)]
    pub timeout: u64,

    /// Less output: -q hides headers, -qq shows reachable hosts only
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,

    /// Do not print the banner
    #[arg(long)]
    pub no_banner: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            timeout_ms: self.timeout,
            quiet: self.quiet,
            no_banner: self.no_banner,
        }
    }
}
