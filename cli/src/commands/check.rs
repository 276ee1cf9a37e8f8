use std::time::{Duration, Instant};

use colored::*;
use reachr_common::{ReachError, Target, config::Config};
use reachr_core::ReachabilityChecker;
use tracing::debug;

use crate::rprint;
use crate::terminal::{colors, print};

/// Checked when no targets are given on the command line.
const DEFAULT_TARGETS: &[(&str, u16)] = &[
    ("google.com", 80),
    ("apple.com", 80),
    ("cns.als.lbl.gov", 8888),
];

pub async fn check(targets: Vec<Target>, cfg: &Config) -> anyhow::Result<()> {
    let targets: Vec<Target> = if targets.is_empty() {
        default_targets()
    } else {
        targets
    };

    print::header("checking reachability", cfg.quiet);

    let start_time: Instant = Instant::now();
    let mut reachable: usize = 0;

    for target in &targets {
        let checker =
            ReachabilityChecker::with_timeout(target.host.clone(), target.port, cfg.timeout_ms);
        let outcome: Result<bool, ReachError> = checker.is_reachable_async().await;

        if let Err(e) = &outcome {
            debug!("{checker}: {e}");
        }
        if matches!(outcome, Ok(true)) {
            reachable += 1;
        }
        report(&checker, &outcome, cfg);
    }

    print_summary(reachable, targets.len(), start_time.elapsed(), cfg);
    Ok(())
}

fn default_targets() -> Vec<Target> {
    DEFAULT_TARGETS
        .iter()
        .map(|(host, port)| Target::new(*host, *port))
        .collect()
}

fn report(checker: &ReachabilityChecker, outcome: &Result<bool, ReachError>, cfg: &Config) {
    if !should_report(outcome, cfg.quiet) {
        return;
    }

    let line: String = outcome_line(checker, outcome);
    let colored_line: ColoredString = match outcome {
        Ok(true) => line.color(colors::REACHABLE),
        Ok(false) => line.color(colors::UNREACHABLE),
        Err(_) => line.color(colors::ACCENT),
    };
    print::print(&colored_line.to_string());
}

/// At `-qq` only reachable hosts are listed.
fn should_report(outcome: &Result<bool, ReachError>, q_level: u8) -> bool {
    q_level < 2 || matches!(outcome, Ok(true))
}

/// The human-readable verdict for one checker.
pub fn outcome_line(checker: &ReachabilityChecker, outcome: &Result<bool, ReachError>) -> String {
    match outcome {
        Ok(true) => format!("{checker} is reachable"),
        Ok(false) => format!("{checker} is not reachable"),
        Err(_) => String::from("there was an error"),
    }
}

fn print_summary(reachable: usize, total: usize, total_time: Duration, cfg: &Config) {
    if !print::is_decorated(cfg.quiet) {
        return;
    }

    rprint!();
    let unit: &str = if total == 1 { "host" } else { "hosts" };
    print::print_status(format!(
        "{} of {} {} reachable in {:.2}s",
        reachable.to_string().color(colors::PRIMARY).bold(),
        total,
        unit,
        total_time.as_secs_f64()
    ));
}
