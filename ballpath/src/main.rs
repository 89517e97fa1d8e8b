use std::io;

use clap::Parser;

use ballpath::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    ballpath::cli::init_logging(cli.verbose);
    log::debug!("options: {cli:?}");

    let stdin = io::stdin();
    let stdout = io::stdout();
    ballpath::run(&cli, &mut stdin.lock(), &mut stdout.lock())
}
