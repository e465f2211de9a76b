//! # Core Models Module
//!
//! Data structures describing one trajectory frame.
//!
//! ## Key Components
//!
//! - [`atom`] - A parsed atom record with its position and owning molecule handle
//! - [`molecule`] - A group of atoms sharing a molecule id, including the id-0 sentinel
//! - [`frame`] - One snapshot owning all of its atoms and molecules
//! - [`assembler`] - Grows a frame's molecule sequence as new ids appear
//! - [`builder`] - Drives record parsing and molecule assignment for one frame
//! - [`ids`] - Stable handle types for atoms and molecules
//!
//! ## Ownership
//!
//! A [`frame::Frame`] owns its atoms and molecules in slot maps. Molecules refer to
//! their atoms and atoms refer back to their molecule only through [`ids`] handles,
//! so there are no ownership cycles.

pub mod assembler;
pub mod atom;
pub mod builder;
pub mod frame;
pub mod ids;
pub mod molecule;
