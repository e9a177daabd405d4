use anyhow::Result;
use clap::Parser;
use numclass_cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let mut input = std::io::stdin().lock();
    let mut out = std::io::stdout().lock();
    cli.run(&mut input, &mut out)
}

fn init_logging() {
    let default_level = "warn";
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(default_level))
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}
