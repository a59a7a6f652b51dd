mod commands;
mod reports;

use clap::Parser;
use eyre::Result;
use tracing_subscriber::EnvFilter;

use crate::commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.verbose);
    cli.run()
}

/// Log to stderr so stdout only ever carries the snippet.
///
/// `METASNIP_LOG` takes precedence over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose {
        "metasnip=debug,metasnip_codegen=debug,metasnip_manifest=debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_env("METASNIP_LOG").unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
