use clap::Args;
use eyre::Result;
use metasnip_core::FrameworkKind;

#[derive(Args)]
pub struct ListCommand {
    /// Only print framework identifiers, one per line
    #[arg(short, long)]
    pub quiet: bool,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        if self.quiet {
            for kind in FrameworkKind::ALL {
                println!("{}", kind);
            }
            return Ok(());
        }

        println!(
            "{:<14} {:<18} {:<10} EXTENSION",
            "ID", "FRAMEWORK", "LANGUAGE"
        );
        for kind in FrameworkKind::ALL {
            println!("{}", Self::row(kind));
        }
        Ok(())
    }

    fn row(kind: FrameworkKind) -> String {
        format!(
            "{:<14} {:<18} {:<10} .{}",
            kind.as_str(),
            kind.label(),
            kind.display_language().as_str(),
            kind.file_extension()
        )
    }
}
