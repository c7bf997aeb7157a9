use anyhow::{Context, Result};
use clap::Parser;
use token_export::cli::{self, Cli};

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => tracing_subscriber::EnvFilter::new("warn"),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();
    let Cli { command } = Cli::parse();

    if let Some(output) = cli::run(command).context("composex-tokens failed")? {
        println!("{}", output);
    }

    Ok(())
}
