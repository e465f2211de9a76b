use crate::core::models::frame::Frame;
use serde::Serialize;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Serialize)]
struct AtomRow<'a> {
    frame: usize,
    serial: i64,
    name: &'a str,
    molecule: usize,
    x: f64,
    y: f64,
    z: f64,
}

/// Writes every atom of every frame as one CSV row.
///
/// Columns are `frame,serial,name,molecule,x,y,z`, with a header row. Rows follow
/// frame order, then atom parse order.
///
/// # Return
///
/// The number of atom rows written.
///
/// # Errors
///
/// Returns an error if serialization or the underlying writer fails.
pub fn write_atom_table<W: Write>(frames: &[Frame], writer: W) -> Result<usize, ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    let mut rows = 0;

    for frame in frames {
        for atom in frame.atoms() {
            let molecule = frame.molecule_of(atom).map_or(0, |m| m.id);
            csv_writer.serialize(AtomRow {
                frame: frame.number(),
                serial: atom.serial_id,
                name: &atom.name,
                molecule,
                x: atom.position.x,
                y: atom.position.y,
                z: atom.position.z,
            })?;
            rows += 1;
        }
    }

    csv_writer.flush()?;
    debug!("Wrote {} atom rows.", rows);
    Ok(rows)
}

/// Writes the atom table to a new file at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be created or writing fails.
pub fn write_atom_table_to_path<P: AsRef<Path>>(
    frames: &[Frame],
    path: P,
) -> Result<usize, ExportError> {
    let file = File::create(path)?;
    write_atom_table(frames, file)
}
