mod check;
mod completions;
mod generate;
mod init;
mod list;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use dialoguer::{Select, theme::ColorfulTheme};
use eyre::{Context, Result};
use generate::GenerateCommand;
use init::InitCommand;
use list::ListCommand;
use metasnip_core::FrameworkKind;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for metasnip_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => exit_with(*e),
        }
    }
}

/// Like [`UnwrapOrExit`], for manifest errors carried inside an eyre report.
/// Other errors are passed through.
pub(crate) fn exit_on_manifest_error<T>(result: Result<T>) -> Result<T> {
    result.or_else(|err| match err.downcast::<metasnip_manifest::Error>() {
        Ok(e) => exit_with(e),
        Err(err) => Err(err),
    })
}

fn exit_with(e: metasnip_manifest::Error) -> ! {
    eprintln!("{:?}", miette::Report::new(e));
    std::process::exit(1);
}

/// Ask the user to pick a framework.
pub(crate) fn prompt_framework() -> Result<FrameworkKind> {
    let labels: Vec<&str> = FrameworkKind::ALL.iter().map(|k| k.label()).collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Select your framework")
        .items(&labels)
        .default(0)
        .interact()
        .wrap_err("Failed to get framework selection (pass --framework when not running in a terminal)")?;

    Ok(FrameworkKind::ALL[selection])
}

#[derive(Parser)]
#[command(name = "metasnip")]
#[command(version)]
#[command(about = "Generate social media meta tag snippets for web frameworks")]
pub(crate) struct Cli {
    /// Enable debug logging (overridden by METASNIP_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::List(cmd) => cmd.run(),
            Commands::Init(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a meta tag snippet
    Generate(GenerateCommand),

    /// List supported frameworks
    List(ListCommand),

    /// Create a starter meta.toml
    Init(InitCommand),

    /// Validate meta.toml without generating a snippet
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
