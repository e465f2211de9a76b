use clap::Parser;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    name = "pdbframes",
    version,
    about = "pdbframes - Read a PDB-style trajectory listing into frames and summarize its contents.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    /// Path to the input trajectory listing (e.g., water.pdb).
    #[arg(required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Frame number to summarize (0-based). Overrides `summary.frame`.
    #[arg(short, long, value_name = "INT")]
    pub frame: Option<usize>,

    /// Position in the frame's molecule sequence to summarize (0 is the sentinel).
    /// Overrides `summary.molecule-position`.
    #[arg(short, long = "molecule", value_name = "INT")]
    pub molecule_position: Option<usize>,

    /// Also write every atom of every frame to a CSV file. Overrides `export.csv`.
    #[arg(long = "csv", value_name = "PATH")]
    pub csv: Option<PathBuf>,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
