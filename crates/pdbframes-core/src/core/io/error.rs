use super::record::RecordError;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrajectoryError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Bad record on line {line}: {source}\n  {text}")]
    Record {
        line: usize,
        text: String,
        #[source]
        source: RecordError,
    },
}

impl TrajectoryError {
    pub(crate) fn record(line: usize, text: &str, source: RecordError) -> Self {
        Self::Record {
            line,
            text: text.to_string(),
            source,
        }
    }

    /// The offending line, for errors raised by a specific record.
    pub fn offending_line(&self) -> Option<&str> {
        match self {
            Self::Record { text, .. } => Some(text),
            Self::Io(_) => None,
        }
    }
}
