use crate::config::models::AppConfig;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use pdbframes::core::io::table::write_atom_table_to_path;
use pdbframes::core::io::trajectory::{PdbTrajectory, ReadOutcome};
use pdbframes::core::models::frame::Frame;
use pdbframes::progress::ProgressReporter;
use std::io::{self, Write};
use tracing::info;

pub fn run(config: &AppConfig, show_progress: bool) -> Result<()> {
    info!("Loading trajectory from {:?}", &config.input_path);
    let lines = std::fs::read_to_string(&config.input_path)?;

    let progress_handler = CliProgressHandler::new();
    let reporter = if show_progress {
        ProgressReporter::with_callback(progress_handler.get_callback())
    } else {
        ProgressReporter::new()
    };

    let trajectory = match PdbTrajectory::read_with_progress(lines.as_str(), &reporter)? {
        ReadOutcome::Loaded(trajectory) => trajectory,
        ReadOutcome::Invalid => {
            return Err(CliError::InvalidFile {
                path: config.input_path.clone(),
            });
        }
    };
    info!(
        "Read {} frame(s); {} trailing line(s) dropped.",
        trajectory.len(),
        trajectory.unterminated_lines()
    );

    if let Some(csv_path) = &config.csv_path {
        let rows = write_atom_table_to_path(trajectory.frames(), csv_path)?;
        info!("Wrote {} atom rows to {:?}", rows, csv_path);
    }

    let frame = trajectory.frame(config.frame).ok_or_else(|| {
        CliError::Selection(format!(
            "frame {} does not exist ({} frame(s) read)",
            config.frame,
            trajectory.len()
        ))
    })?;

    let stdout = io::stdout();
    write_summary(frame, config.molecule_position, &mut stdout.lock())?;
    Ok(())
}

/// Prints the frame, the molecule at `molecule_position`, and the frame's first atom.
pub fn write_summary(
    frame: &Frame,
    molecule_position: usize,
    out: &mut impl Write,
) -> io::Result<()> {
    writeln!(out, "{}", frame)?;
    writeln!(out)?;

    match frame.molecule_at(molecule_position) {
        Some(molecule) => writeln!(out, "{}", molecule)?,
        None => writeln!(
            out,
            "No molecule at position {} ({} in sequence)",
            molecule_position,
            frame.molecule_sequence_len()
        )?,
    }
    writeln!(out)?;

    match frame.first_atom() {
        Some(atom) => {
            let molecule_id = frame.molecule_of(atom).map_or(0, |m| m.id);
            writeln!(out, "{} in molecule {}", atom, molecule_id)?;
        }
        None => writeln!(out, "Frame {} has no atoms", frame.number())?,
    }
    Ok(())
}
