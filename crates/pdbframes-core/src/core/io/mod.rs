//! Provides input/output functionality for PDB-style trajectory listings.
//!
//! Reading goes through a [`source::LineSource`], is gated by
//! [`validate::is_valid_trajectory`], and is split into frames by
//! [`trajectory::PdbTrajectory`], which parses each line with [`record`].
//! Parsed frames can be exported as a flat atom table with [`table`].

pub mod error;
pub mod record;
pub mod source;
pub mod table;
pub mod traits;
pub mod trajectory;
pub mod validate;
