//! # pdbframes Core Library
//!
//! A library for reading PDB-style trajectory listings into ordered frames of atoms,
//! with every atom grouped into the molecule named by its record.
//!
//! ## Architecture
//!
//! - **[`core`]: The Foundation.** Frame, molecule and atom models backed by slot maps,
//!   and the I/O pipeline that validates a listing, splits it at `END` lines and parses
//!   each `ATOM` record.
//!
//! - **[`progress`]: Reporting.** A callback-based reporter the reader uses to announce
//!   each finished frame, so front-ends can render progress without the core knowing how.
//!
//! ## Example
//!
//! ```no_run
//! use pdbframes::core::io::trajectory::{PdbTrajectory, ReadOutcome};
//! use pdbframes::core::io::traits::TrajectoryFile;
//!
//! match PdbTrajectory::read_from_path("water.pdb").unwrap() {
//!     ReadOutcome::Loaded(trajectory) => {
//!         for frame in trajectory.frames() {
//!             println!("{}", frame);
//!         }
//!     }
//!     ReadOutcome::Invalid => eprintln!("not an ATOM listing"),
//! }
//! ```

pub mod core;
pub mod progress;
