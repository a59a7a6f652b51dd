use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use metasnip_codegen::lint;
use metasnip_core::FrameworkKind;
use metasnip_manifest::MetaToml;

use super::UnwrapOrExit;
use crate::reports::{CheckReport, Report, TerminalOutput};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to meta.toml (defaults to ./meta.toml)
    #[arg(short, long, default_value = "meta.toml")]
    pub config: PathBuf,

    /// Lint against this framework instead of the configured one
    #[arg(short, long)]
    pub framework: Option<FrameworkKind>,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let meta_toml = MetaToml::open(&self.config).unwrap_or_exit();
        let report = self.report(&meta_toml);
        report.render(&mut TerminalOutput::new());

        if report.has_errors() {
            std::process::exit(1);
        }
        Ok(())
    }

    /// Lint the manifest's fields. Every blank required field is reported,
    /// not only the first one.
    fn report(&self, meta_toml: &MetaToml) -> CheckReport {
        let fields = meta_toml.manifest().fields();
        let framework = self.framework.or_else(|| meta_toml.manifest().framework());
        let diagnostics = lint::run_lints(framework, &fields);

        CheckReport {
            path: self.config.display().to_string(),
            fields,
            framework,
            diagnostics,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn check(content: &str, framework: Option<FrameworkKind>) -> CheckReport {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("meta.toml");
        fs::write(&path, content).unwrap();

        let cmd = CheckCommand {
            config: path,
            framework,
        };
        let meta_toml = MetaToml::open(&cmd.config).unwrap();
        cmd.report(&meta_toml)
    }

    #[test]
    fn test_blank_fields_fail() {
        let report = check("[page]\ntitle = \" \"\n", Some(FrameworkKind::Dash));

        assert!(report.has_errors());
        let locations: Vec<_> = report
            .diagnostics
            .iter()
            .filter(|d| d.severity.is_error())
            .filter_map(|d| d.location.as_deref())
            .collect();
        assert_eq!(locations, vec!["title", "description"]);
    }

    #[test]
    fn test_blank_fields_fail_without_framework() {
        let report = check("[page]\ndescription = \"D\"\n", None);
        assert!(report.has_errors());
        assert_eq!(report.framework, None);
    }

    #[test]
    fn test_configured_framework_is_linted() {
        let report = check(
            "[page]\ntitle = \"T\"\ndescription = \"D\"\n\n[output]\nframework = \"streamlit\"\n",
            None,
        );

        assert!(!report.has_errors());
        assert_eq!(report.framework, Some(FrameworkKind::Streamlit));
        assert_eq!(report.diagnostics.len(), 1);
        assert_eq!(report.diagnostics[0].lint, "streamlit-preview");
    }

    #[test]
    fn test_flag_overrides_configured_framework() {
        let report = check(
            "[page]\ntitle = \"T\"\ndescription = \"D\"\n\n[output]\nframework = \"streamlit\"\n",
            Some(FrameworkKind::Quarto),
        );
        assert!(report.diagnostics.is_empty());
    }
}
