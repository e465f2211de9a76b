//! # Core Module
//!
//! The building blocks for turning a PDB-style trajectory listing into structured frames.
//!
//! - **Molecular Representation** ([`models`]) - Atoms, molecules and frames, plus the
//!   builders that assemble them one record at a time
//! - **File I/O** ([`io`]) - Line sources, record parsing, validation, frame splitting
//!   and tabular export

pub mod io;
pub mod models;
