use pdbframes::core::io::error::TrajectoryError;
use pdbframes::core::io::table::ExportError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Trajectory(#[from] TrajectoryError),

    #[error("Invalid pdb file {path}", path = path.display())]
    InvalidFile { path: PathBuf },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse file '{path}': {source}", path = path.display())]
    FileParsing {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("Export failed: {0}")]
    Export(#[from] ExportError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid selection: {0}")]
    Selection(String),
}
