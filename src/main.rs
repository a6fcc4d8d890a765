use clap::Parser;
use spanglish::cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.init_logging();
    cli.run()
}
