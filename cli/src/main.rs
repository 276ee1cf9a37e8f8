mod commands;
mod terminal;

use commands::{CommandLine, check};
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging()?;

    let cfg = commands.config();
    print::banner(cfg.no_banner, cfg.quiet);

    check::check(commands.targets, &cfg).await?;

    print::end_of_program(cfg.quiet);
    Ok(())
}
