use super::error::TrajectoryError;
use super::source::LineSource;
use super::traits::TrajectoryFile;
use super::validate::is_valid_trajectory;
use crate::core::models::builder::FrameBuilder;
use crate::core::models::frame::Frame;
use crate::progress::{Progress, ProgressReporter};
use tracing::{info, instrument, warn};

/// The literal line that closes the current frame.
pub const FRAME_END_MARKER: &str = "END";

/// The frames read from one listing.
#[derive(Debug, Clone, Default)]
pub struct Trajectory {
    frames: Vec<Frame>,
    unterminated_lines: usize,
}

impl Trajectory {
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn frame(&self, number: usize) -> Option<&Frame> {
        self.frames.get(number)
    }

    pub fn into_frames(self) -> Vec<Frame> {
        self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Lines after the last `END` that never formed a frame.
    pub fn unterminated_lines(&self) -> usize {
        self.unterminated_lines
    }
}

/// Outcome of a read that did not hit a fatal error.
#[derive(Debug, Clone)]
pub enum ReadOutcome {
    /// The listing passed validation and was split into frames.
    Loaded(Trajectory),
    /// The listing failed validation; no frames were built.
    Invalid,
}

impl ReadOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    pub fn trajectory(&self) -> Option<&Trajectory> {
        match self {
            Self::Loaded(trajectory) => Some(trajectory),
            Self::Invalid => None,
        }
    }

    /// Splits into the `(ok, frames)` pair; an invalid listing gives `(false, [])`.
    pub fn into_parts(self) -> (bool, Vec<Frame>) {
        match self {
            Self::Loaded(trajectory) => (true, trajectory.into_frames()),
            Self::Invalid => (false, Vec::new()),
        }
    }
}

/// Reader for PDB-style listings of `ATOM` records separated by `END` lines.
///
/// The first line is a title and is always skipped. Every following line up to an
/// `END` belongs to the current frame.
pub struct PdbTrajectory;

impl PdbTrajectory {
    /// Reads `source`, reporting each finished frame to `reporter`.
    ///
    /// # Return
    ///
    /// [`ReadOutcome::Invalid`] if `source` fails validation, otherwise the frames
    /// in file order. Lines after the last `END` are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`TrajectoryError::Record`] on the first malformed record inside a
    /// terminated frame. No partial result is returned.
    #[instrument(skip_all, name = "read_trajectory")]
    pub fn read_with_progress<S: LineSource + ?Sized>(
        source: &S,
        reporter: &ProgressReporter,
    ) -> Result<ReadOutcome, TrajectoryError> {
        if !is_valid_trajectory(source) {
            warn!("Input has no well-formed ATOM record; no frames were read.");
            return Ok(ReadOutcome::Invalid);
        }

        reporter.report(Progress::PhaseStart {
            name: "Reading frames",
        });

        let mut frames = Vec::new();
        let mut pending: Vec<(usize, &str)> = Vec::new();

        for (index, line) in source.lines().enumerate().skip(1) {
            let line = line.trim();
            if line == FRAME_END_MARKER {
                let frame = FrameBuilder::build_from(frames.len(), pending.drain(..))?;
                reporter.report(Progress::FrameBuilt {
                    number: frame.number(),
                    atoms: frame.atom_count(),
                });
                frames.push(frame);
            } else {
                pending.push((index + 1, line));
            }
        }

        if !pending.is_empty() {
            let notice = format!(
                "Dropped {} line(s) after the last {} marker.",
                pending.len(),
                FRAME_END_MARKER
            );
            warn!("{}", notice);
            reporter.report(Progress::Message(notice));
        }
        info!("Read {} frame(s).", frames.len());
        reporter.report(Progress::PhaseFinish);

        Ok(ReadOutcome::Loaded(Trajectory {
            frames,
            unterminated_lines: pending.len(),
        }))
    }
}

impl TrajectoryFile for PdbTrajectory {
    type Output = ReadOutcome;
    type Error = TrajectoryError;

    fn read_lines<S: LineSource + ?Sized>(source: &S) -> Result<Self::Output, Self::Error> {
        Self::read_with_progress(source, &ProgressReporter::new())
    }
}
