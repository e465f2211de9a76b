use super::ids::MoleculeId;
use nalgebra::Point3;
use std::fmt;

/// Represents one atom record of a trajectory frame.
///
/// The record does not own its molecule. `molecule` is a handle that resolves
/// through the owning [`Frame`](super::frame::Frame), which keeps ownership
/// flowing from molecule to atom only.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomRecord {
    /// The serial number from the file. Not guaranteed unique across frames.
    pub serial_id: i64,
    /// The atom name (e.g., "OH2", "H1").
    pub name: String,
    /// The Cartesian coordinates of the atom in Angstroms.
    pub position: Point3<f64>,
    /// Handle of the molecule this atom was assigned to.
    pub molecule: MoleculeId,
}

impl AtomRecord {
    /// Creates a new `AtomRecord` assigned to `molecule`.
    ///
    /// # Arguments
    ///
    /// * `serial_id` - The serial number read from the record.
    /// * `name` - The atom name.
    /// * `position` - The 3D coordinates of the atom.
    /// * `molecule` - Handle of the owning molecule.
    pub fn new(serial_id: i64, name: &str, position: Point3<f64>, molecule: MoleculeId) -> Self {
        Self {
            serial_id,
            name: name.to_string(),
            position,
            molecule,
        }
    }
}

impl fmt::Display for AtomRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Atom {} ({}) at ({:.3}, {:.3}, {:.3})",
            self.serial_id, self.name, self.position.x, self.position.y, self.position.z
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::KeyData;

    fn dummy_molecule_id(n: u64) -> MoleculeId {
        MoleculeId::from(KeyData::from_ffi(n))
    }

    #[test]
    fn new_atom_record_initializes_fields_correctly() {
        let molecule = dummy_molecule_id(1);
        let atom = AtomRecord::new(7, "OH2", Point3::new(1.0, -2.5, 3.25), molecule);

        assert_eq!(atom.serial_id, 7);
        assert_eq!(atom.name, "OH2");
        assert_eq!(atom.position, Point3::new(1.0, -2.5, 3.25));
        assert_eq!(atom.molecule, molecule);
    }

    #[test]
    fn display_shows_serial_name_and_position() {
        let atom = AtomRecord::new(
            1296,
            "H2",
            Point3::new(-10.719, 2.716, 2.401),
            dummy_molecule_id(2),
        );
        assert_eq!(atom.to_string(), "Atom 1296 (H2) at (-10.719, 2.716, 2.401)");
    }
}
