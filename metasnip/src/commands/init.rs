use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use metasnip_core::{File, FileRules, FrameworkKind, WriteResult};
use metasnip_manifest::template;

use super::prompt_framework;

#[derive(Args)]
pub struct InitCommand {
    /// Page title (defaults to the current directory name)
    #[arg(long)]
    pub title: Option<String>,

    /// Target framework
    #[arg(short, long)]
    pub framework: Option<FrameworkKind>,

    /// Where to write the manifest
    #[arg(short, long, default_value = "meta.toml")]
    pub output: PathBuf,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let title = match &self.title {
            Some(title) => title.clone(),
            None => Self::directory_name()?,
        };
        let framework = match self.framework {
            Some(kind) => kind,
            None => prompt_framework()?,
        };

        let file = File::new(&self.output, template(&title, framework))
            .with_rules(FileRules::if_missing());
        let written = file
            .write()
            .wrap_err_with(|| format!("Failed to write {}", self.output.display()))?;

        match written {
            WriteResult::Written => {
                println!("Created {}", file.path().display());
                println!();
                println!("Next steps:");
                println!("  edit the description in {}", file.path().display());
                println!("  metasnip generate");
            }
            WriteResult::Skipped => {
                eprintln!(
                    "warning: {} already exists, leaving it untouched",
                    file.path().display()
                );
            }
        }
        Ok(())
    }

    fn directory_name() -> Result<String> {
        let cwd = std::env::current_dir().wrap_err("Failed to get current directory")?;
        let name = cwd
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| eyre::eyre!("Current directory has no valid name, pass --title"))?;
        Ok(name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use metasnip_manifest::MetaToml;
    use tempfile::TempDir;

    use super::*;

    fn command(output: PathBuf) -> InitCommand {
        InitCommand {
            title: Some("Dashboard".to_string()),
            framework: Some(FrameworkKind::Dash),
            output,
        }
    }

    #[test]
    fn test_init_writes_parseable_manifest() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("meta.toml");

        command(path.clone()).run().unwrap();

        let meta_toml = MetaToml::open(&path).unwrap();
        assert_eq!(meta_toml.manifest().framework(), Some(FrameworkKind::Dash));
        assert_eq!(meta_toml.manifest().fields().title, "Dashboard");
    }

    #[test]
    fn test_init_keeps_existing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("meta.toml");
        fs::write(&path, "# mine\n").unwrap();

        command(path.clone()).run().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "# mine\n");
    }
}
