use super::ids::{AtomId, MoleculeId};
use super::molecule::Molecule;
use slotmap::SlotMap;
use tracing::warn;

/// Grows the molecule sequence of a single frame while atoms are assigned.
///
/// The sequence is treated as directly indexable by molecule id: position 0 holds
/// the sentinel, and a molecule id that already has a position receives the atom
/// at that position. This lines positions up with ids only when ids first appear
/// in the order `1, 2, ..., k`. Other orders are kept as they are and reported
/// through `warn!`.
#[derive(Debug)]
pub struct MoleculeAssembler {
    molecules: SlotMap<MoleculeId, Molecule>,
    order: Vec<MoleculeId>,
}

impl Default for MoleculeAssembler {
    fn default() -> Self {
        Self::new()
    }
}

impl MoleculeAssembler {
    /// Creates an assembler whose sequence holds only the sentinel.
    pub fn new() -> Self {
        let mut molecules = SlotMap::with_key();
        let sentinel = molecules.insert(Molecule::sentinel());
        Self {
            molecules,
            order: vec![sentinel],
        }
    }

    /// Assigns `atom` to the molecule for `molecule_id`, creating it on a miss.
    ///
    /// # Arguments
    ///
    /// * `atom` - Handle of the atom being assigned.
    /// * `molecule_id` - The molecule id read from the atom's record.
    ///
    /// # Return
    ///
    /// The handle of the molecule that now owns `atom`, for the atom's back-reference.
    pub fn assign(&mut self, atom: AtomId, molecule_id: usize) -> MoleculeId {
        if let Some(&existing) = self.order.get(molecule_id) {
            let molecule = &mut self.molecules[existing];
            if molecule.is_sentinel() {
                warn!(
                    "Atom assigned to the sentinel molecule; molecule ids within a frame are 1-based."
                );
            } else if molecule.id != molecule_id {
                warn!(
                    "Molecule id {} resolved to position {} holding molecule {}; ids arrived out of order.",
                    molecule_id, molecule_id, molecule.id
                );
            }
            molecule.add_atom(atom);
            return existing;
        }

        let mut molecule = Molecule::new(molecule_id);
        molecule.add_atom(atom);
        let handle = self.molecules.insert(molecule);

        // A miss means molecule_id >= len, so the new molecule always goes at the end.
        let position = self.order.len();
        if position != molecule_id {
            warn!(
                "Molecule {} stored at position {}; positions no longer match ids.",
                molecule_id, position
            );
        }
        self.order.push(handle);
        handle
    }

    /// Number of entries in the sequence, sentinel included.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Always false: the sentinel is present from construction.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn molecule_at(&self, position: usize) -> Option<&Molecule> {
        self.order.get(position).map(|&id| &self.molecules[id])
    }

    pub(crate) fn finish(self) -> (SlotMap<MoleculeId, Molecule>, Vec<MoleculeId>) {
        (self.molecules, self.order)
    }
}
