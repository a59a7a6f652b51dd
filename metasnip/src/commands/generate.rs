use std::path::{Path, PathBuf};

use clap::Args;
use eyre::{Context, Result, bail};
use metasnip_codegen::{generate, lint};
use metasnip_core::{File, FileRules, FrameworkKind, MetaFieldSet, WriteResult};
use metasnip_manifest::MetaToml;

use super::{UnwrapOrExit, exit_on_manifest_error, prompt_framework};
use crate::reports::{GenerateReport, GenerationResult, Report, TerminalOutput};

/// Manifest picked up when `--config` is not given and it exists.
const DEFAULT_CONFIG: &str = "meta.toml";

#[derive(Args)]
pub struct GenerateCommand {
    /// Target framework (overrides meta.toml; prompted for when unset)
    #[arg(short, long)]
    pub framework: Option<FrameworkKind>,

    /// Path to meta.toml (defaults to ./meta.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Page title
    #[arg(long)]
    pub title: Option<String>,

    /// Page description
    #[arg(long)]
    pub description: Option<String>,

    /// Canonical page URL
    #[arg(long)]
    pub url: Option<String>,

    /// Preview image URL
    #[arg(long)]
    pub image_url: Option<String>,

    /// Write the snippet to this file (or directory) instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Overwrite the output file if it exists
    #[arg(long, requires = "output")]
    pub force: bool,

    /// Print the snippet and its display language as JSON
    #[arg(long, conflicts_with = "output")]
    pub json: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let meta_toml = self.open_manifest();
        let fields = exit_on_manifest_error(self.checked_fields(meta_toml.as_ref()))?;

        let framework = match self
            .framework
            .or_else(|| meta_toml.as_ref().and_then(|m| m.manifest().framework()))
        {
            Some(kind) => kind,
            None => prompt_framework()?,
        };
        tracing::debug!(%framework, "resolved framework");

        let diagnostics = lint::run_lints(Some(framework), &fields);
        let snippet = generate(framework, &fields);

        let result = if self.json {
            GenerationResult::Json(serde_json::to_string_pretty(&snippet)?)
        } else if let Some(output) = &self.output {
            let path = Self::output_path(output, framework);
            self.write_snippet(&path, &snippet.code)?;
            GenerationResult::Written {
                path,
                display_language: snippet.display_language,
            }
        } else {
            GenerationResult::Printed(snippet.code)
        };

        let report = GenerateReport {
            framework,
            diagnostics,
            result,
        };
        report.render(&mut TerminalOutput::new());

        Ok(())
    }

    fn open_manifest(&self) -> Option<MetaToml> {
        match &self.config {
            Some(path) => Some(MetaToml::open(path).unwrap_or_exit()),
            None if Path::new(DEFAULT_CONFIG).exists() => {
                Some(MetaToml::open(DEFAULT_CONFIG).unwrap_or_exit())
            }
            None => None,
        }
    }

    /// Resolve the fields and check the required ones.
    ///
    /// Blank required fields never reach the generator. With a manifest the
    /// error points into it.
    fn checked_fields(&self, meta_toml: Option<&MetaToml>) -> Result<MetaFieldSet> {
        let fields = self.resolve_fields(meta_toml);
        match meta_toml {
            Some(meta_toml) => meta_toml
                .check_fields(&fields)
                .map_err(|err| eyre::Report::new(*err))?,
            None => fields
                .validate()
                .wrap_err("Cannot generate a snippet without a title and description")?,
        }
        Ok(fields)
    }

    /// Manifest values with command line flags taking precedence.
    fn resolve_fields(&self, meta_toml: Option<&MetaToml>) -> MetaFieldSet {
        let mut fields = meta_toml
            .map(|m| m.manifest().fields())
            .unwrap_or_default();

        if let Some(title) = &self.title {
            fields.title = title.clone();
        }
        if let Some(description) = &self.description {
            fields.description = description.clone();
        }
        if let Some(url) = &self.url {
            fields.url = Some(url.clone());
        }
        if let Some(image_url) = &self.image_url {
            fields.image_url = Some(image_url.clone());
        }
        fields
    }

    /// A directory target gets `meta_tags.<ext>` for the framework. A path
    /// ending in a separator is a directory even if it does not exist yet.
    fn output_path(output: &Path, framework: FrameworkKind) -> PathBuf {
        let names_dir = output
            .as_os_str()
            .to_string_lossy()
            .ends_with(std::path::is_separator);
        if names_dir || output.is_dir() {
            output.join(format!("meta_tags.{}", framework.file_extension()))
        } else {
            output.to_path_buf()
        }
    }

    fn write_snippet(&self, path: &Path, code: &str) -> Result<()> {
        let rules = if self.force {
            FileRules::default()
        } else {
            FileRules::if_missing()
        };

        let written = File::new(path, code)
            .with_rules(rules)
            .write()
            .wrap_err_with(|| format!("Failed to write {}", path.display()))?;

        if written == WriteResult::Skipped {
            bail!(
                "{} already exists, pass --force to overwrite it",
                path.display()
            );
        }
        tracing::debug!(path = %path.display(), "wrote snippet");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use clap::Parser;
    use tempfile::TempDir;

    use super::*;

    #[derive(Parser)]
    struct Wrapper {
        #[command(flatten)]
        cmd: GenerateCommand,
    }

    fn parse(args: &[&str]) -> GenerateCommand {
        let mut argv = vec!["generate"];
        argv.extend_from_slice(args);
        Wrapper::try_parse_from(argv).unwrap().cmd
    }

    #[test]
    fn test_flags_override_manifest() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("meta.toml");
        fs::write(
            &path,
            "[page]\ntitle = \"From file\"\ndescription = \"D\"\nurl = \"https://file.test\"\n",
        )
        .unwrap();
        let meta_toml = MetaToml::open(&path).unwrap();

        let cmd = parse(&["--title", "From flag", "--image-url", "https://a.test/i.png"]);
        let fields = cmd.resolve_fields(Some(&meta_toml));

        assert_eq!(fields.title, "From flag");
        assert_eq!(fields.description, "D");
        assert_eq!(fields.url(), Some("https://file.test"));
        assert_eq!(fields.image_url(), Some("https://a.test/i.png"));
    }

    #[test]
    fn test_fields_without_manifest() {
        let cmd = parse(&["--title", "T", "--description", "D", "--url", ""]);
        let fields = cmd.resolve_fields(None);
        assert_eq!(fields, MetaFieldSet::new("T", "D").with_url(""));
        assert_eq!(fields.url(), None);
    }

    #[test]
    fn test_blank_title_is_rejected_without_manifest() {
        let cmd = parse(&["--title", "  ", "--description", "D"]);
        let err = cmd.checked_fields(None).unwrap_err();
        assert!(err.chain().any(|e| e.to_string() == "title is required"));
    }

    #[test]
    fn test_blank_description_is_rejected_with_manifest() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("meta.toml");
        fs::write(&path, "[page]\ntitle = \"T\"\ndescription = \"D\"\n").unwrap();
        let meta_toml = MetaToml::open(&path).unwrap();

        let cmd = parse(&["--description", "\t"]);
        let err = cmd.checked_fields(Some(&meta_toml)).unwrap_err();
        match err.downcast_ref::<metasnip_manifest::Error>() {
            Some(metasnip_manifest::Error::MissingRequiredField { field, .. }) => {
                assert_eq!(*field, "description");
            }
            other => panic!("expected MissingRequiredField, got {other:?}"),
        }
    }

    #[test]
    fn test_run_fails_before_writing_on_blank_title() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("meta_tags.py");
        let cmd = parse(&[
            "--framework",
            "dash",
            "--title",
            " ",
            "--description",
            "D",
            "--output",
            output.to_str().unwrap(),
        ]);

        assert!(cmd.run().is_err());
        assert!(!output.exists());
    }

    #[test]
    fn test_output_path_for_directory() {
        let temp = TempDir::new().unwrap();
        assert_eq!(
            GenerateCommand::output_path(temp.path(), FrameworkKind::ShinyR),
            temp.path().join("meta_tags.R")
        );
        let file = temp.path().join("head.py");
        assert_eq!(
            GenerateCommand::output_path(&file, FrameworkKind::Dash),
            file
        );
    }

    #[test]
    fn test_output_path_for_new_directory() {
        let temp = TempDir::new().unwrap();
        let dir = format!("{}/new/", temp.path().display());
        let path = GenerateCommand::output_path(Path::new(&dir), FrameworkKind::Quarto);
        assert_eq!(path, temp.path().join("new").join("meta_tags.qmd"));

        let cmd = parse(&["--output", &dir]);
        cmd.write_snippet(&path, "---\n---\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "---\n---\n");
    }

    #[test]
    fn test_write_snippet_refuses_to_overwrite() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("meta_tags.py");
        fs::write(&path, "original").unwrap();

        let cmd = parse(&["--output", path.to_str().unwrap()]);
        assert!(cmd.write_snippet(&path, "new").is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "original");

        let forced = parse(&["--output", path.to_str().unwrap(), "--force"]);
        forced.write_snippet(&path, "new").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_json_conflicts_with_output() {
        let result = Wrapper::try_parse_from(["generate", "--json", "--output", "x.py"]);
        assert!(result.is_err());
    }
}
