use crate::error::{CliError, Result};
use std::fs::File;
use std::path::PathBuf;
use tracing_subscriber::{
    filter::LevelFilter,
    fmt::{
        self,
        format::{DefaultFields, Format},
    },
    prelude::*,
};

/// Maps `-v` occurrences to a level; warnings are shown by default, `-q` silences all.
pub fn level_filter(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::OFF;
    }
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Plain-text layer for `--log-file`, with targets so reader and CLI records can be told apart.
fn file_layer<S>(file: File) -> fmt::Layer<S, DefaultFields, Format, File> {
    fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
}

pub fn setup_logging(verbosity: u8, quiet: bool, log_file: Option<PathBuf>) -> Result<()> {
    let log_file = log_file
        .map(|path| File::create(&path).map_err(CliError::Io))
        .transpose()?;

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    tracing_subscriber::registry()
        .with(level_filter(verbosity, quiet))
        .with(stderr_layer)
        .with(log_file.map(file_layer))
        .init();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdbframes::core::io::traits::TrajectoryFile;
    use pdbframes::core::io::trajectory::PdbTrajectory;
    use serial_test::serial;

    const LISTING_WITH_TAIL: &str = "REMARK water box\n\
        ATOM 1 OH2 TIP3W 1 0.0 0.0 0.0 0.00 0.00 W\n\
        END\n\
        ATOM 2 OH2 TIP3W 1 0.0 0.0 0.0 0.00 0.00 W\n";

    #[test]
    fn warnings_are_shown_unless_quiet() {
        assert_eq!(level_filter(0, false), LevelFilter::WARN);
        assert_eq!(level_filter(2, false), LevelFilter::DEBUG);
        assert_eq!(level_filter(u8::MAX, false), LevelFilter::TRACE);
        assert_eq!(level_filter(2, true), LevelFilter::OFF);
    }

    #[test]
    #[serial]
    fn log_file_records_reader_warnings_with_target() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pdbframes.log");
        let subscriber = tracing_subscriber::registry()
            .with(LevelFilter::WARN)
            .with(file_layer(File::create(&path).unwrap()));

        tracing::subscriber::with_default(subscriber, || {
            PdbTrajectory::read_lines(LISTING_WITH_TAIL).unwrap();
        });

        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.contains("WARN"));
        assert!(content.contains("pdbframes::core::io::trajectory"));
        assert!(content.contains("Dropped 1 line(s) after the last END marker."));
        assert!(!content.contains('\u{1b}'));
    }

    #[test]
    #[serial]
    fn unwritable_log_file_is_reported_before_init() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("pdbframes.log");

        let result = setup_logging(0, false, Some(path));
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}
