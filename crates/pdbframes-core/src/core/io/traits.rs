use super::source::LineSource;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Defines the interface for reading a trajectory format.
///
/// Implementors only parse from a [`LineSource`]; opening files and splitting a
/// byte stream into lines is provided here.
pub trait TrajectoryFile {
    /// The result of a read.
    type Output;

    /// The error type for read operations.
    type Error: Error + From<io::Error>;

    /// Reads a trajectory from an in-memory line source.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails.
    fn read_lines<S: LineSource + ?Sized>(source: &S) -> Result<Self::Output, Self::Error>;

    /// Reads a trajectory from a buffered reader.
    ///
    /// The whole input is collected into memory first, since a read makes more
    /// than one pass over the lines.
    ///
    /// # Errors
    ///
    /// Returns an error if the reader fails, yields invalid UTF-8, or parsing fails.
    fn read_from(reader: &mut impl BufRead) -> Result<Self::Output, Self::Error> {
        let lines = reader.lines().collect::<io::Result<Vec<String>>>()?;
        Self::read_lines(&lines)
    }

    /// Reads a trajectory from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Self::Output, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }
}
