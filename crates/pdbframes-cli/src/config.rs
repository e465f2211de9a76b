mod defaults;
pub mod models;

use crate::cli::Cli;
use crate::error::{CliError, Result};
use defaults::DefaultsConfig;
use models::AppConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialSummaryConfig {
    frame: Option<usize>,
    #[serde(rename = "molecule-position")]
    molecule_position: Option<usize>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialExportConfig {
    csv: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialAppConfig {
    summary: Option<PartialSummaryConfig>,
    export: Option<PartialExportConfig>,
}

impl PartialAppConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads the file named by `--config`, or an empty configuration when absent.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn merge_with_cli(mut self, args: &Cli) -> Result<AppConfig> {
        let defaults = DefaultsConfig::default();
        let summary = self.summary.take().unwrap_or_default();
        let export = self.export.take().unwrap_or_default();

        let csv_path = args.csv.clone().or(export.csv);
        if let Some(path) = &csv_path {
            if path == &args.input {
                return Err(CliError::Config(format!(
                    "CSV export path {:?} would overwrite the input file.",
                    path
                )));
            }
        }

        let config = AppConfig {
            input_path: args.input.clone(),
            frame: args.frame.or(summary.frame).unwrap_or(defaults.frame),
            molecule_position: args
                .molecule_position
                .or(summary.molecule_position)
                .unwrap_or(defaults.molecule_position),
            csv_path,
        };
        debug!("Final configuration: {:?}", config);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::tempdir;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("pdbframes").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_apply_without_file_or_flags() {
        let config = PartialAppConfig::default()
            .merge_with_cli(&cli(&["water.pdb"]))
            .unwrap();

        assert_eq!(
            config,
            AppConfig {
                input_path: PathBuf::from("water.pdb"),
                frame: 0,
                molecule_position: 1,
                csv_path: None,
            }
        );
    }

    #[test]
    fn file_values_override_defaults() {
        let partial = PartialAppConfig::from_toml(
            r#"
            [summary]
            frame = 2
            molecule-position = 4

            [export]
            csv = "atoms.csv"
            "#,
        )
        .unwrap();
        let config = partial.merge_with_cli(&cli(&["water.pdb"])).unwrap();

        assert_eq!(config.frame, 2);
        assert_eq!(config.molecule_position, 4);
        assert_eq!(config.csv_path, Some(PathBuf::from("atoms.csv")));
    }

    #[test]
    fn cli_flags_override_file_values() {
        let partial = PartialAppConfig::from_toml(
            "[summary]\nframe = 2\nmolecule-position = 4\n[export]\ncsv = \"a.csv\"\n",
        )
        .unwrap();
        let config = partial
            .merge_with_cli(&cli(&["water.pdb", "-f", "5", "-m", "0", "--csv", "b.csv"]))
            .unwrap();

        assert_eq!(config.frame, 5);
        assert_eq!(config.molecule_position, 0);
        assert_eq!(config.csv_path, Some(PathBuf::from("b.csv")));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(PartialAppConfig::from_toml("[summary]\nframes = 1\n").is_err());
        assert!(PartialAppConfig::from_toml("[logging]\nlevel = \"info\"\n").is_err());
    }

    #[test]
    fn csv_path_equal_to_input_is_rejected() {
        let result = PartialAppConfig::default()
            .merge_with_cli(&cli(&["water.pdb", "--csv", "water.pdb"]));
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn from_file_reads_toml_and_reports_parse_errors() {
        let dir = tempdir().unwrap();
        let good = dir.path().join("good.toml");
        fs::write(&good, "[summary]\nframe = 1\n").unwrap();
        let config = PartialAppConfig::load(Some(good.as_path()))
            .unwrap()
            .merge_with_cli(&cli(&["water.pdb"]))
            .unwrap();
        assert_eq!(config.frame, 1);

        let bad = dir.path().join("bad.toml");
        fs::write(&bad, "[summary\nframe = ").unwrap();
        assert!(matches!(
            PartialAppConfig::from_file(&bad),
            Err(CliError::FileParsing { .. })
        ));

        let missing = dir.path().join("missing.toml");
        assert!(matches!(
            PartialAppConfig::from_file(&missing),
            Err(CliError::Io(_))
        ));
    }
}
