use super::atom::AtomRecord;
use super::ids::{AtomId, MoleculeId};
use super::molecule::{Molecule, SENTINEL_MOLECULE_ID};
use slotmap::SlotMap;
use std::fmt;

/// One snapshot of the trajectory, delimited by `END` lines in the source file.
///
/// The frame owns every atom and molecule parsed for it. Atoms are kept in parse
/// order, and molecules in the order the assembler grew them, with the id-0
/// sentinel always at position 0.
#[derive(Debug, Clone)]
pub struct Frame {
    /// The 0-based position of this frame in the file.
    number: usize,
    /// Primary storage for atoms.
    atoms: SlotMap<AtomId, AtomRecord>,
    /// Primary storage for molecules.
    molecules: SlotMap<MoleculeId, Molecule>,
    /// Atom handles in parse order.
    atom_order: Vec<AtomId>,
    /// Molecule handles in sequence order; index 0 is the sentinel.
    molecule_order: Vec<MoleculeId>,
}

impl Frame {
    pub(crate) fn from_parts(
        number: usize,
        atoms: SlotMap<AtomId, AtomRecord>,
        atom_order: Vec<AtomId>,
        molecules: SlotMap<MoleculeId, Molecule>,
        molecule_order: Vec<MoleculeId>,
    ) -> Self {
        debug_assert!(
            molecule_order
                .first()
                .and_then(|&id| molecules.get(id))
                .is_some_and(Molecule::is_sentinel),
            "frame molecule sequence must start with the sentinel"
        );
        Self {
            number,
            atoms,
            molecules,
            atom_order,
            molecule_order,
        }
    }

    /// The 0-based frame number.
    pub fn number(&self) -> usize {
        self.number
    }

    /// Retrieves an atom by its handle.
    pub fn atom(&self, id: AtomId) -> Option<&AtomRecord> {
        self.atoms.get(id)
    }

    /// Returns an iterator over all atoms in parse order.
    pub fn atoms(&self) -> impl Iterator<Item = &AtomRecord> {
        self.atom_order.iter().map(|&id| &self.atoms[id])
    }

    /// Returns an iterator over `(AtomId, &AtomRecord)` pairs in parse order.
    pub fn atoms_with_ids(&self) -> impl Iterator<Item = (AtomId, &AtomRecord)> {
        self.atom_order.iter().map(|&id| (id, &self.atoms[id]))
    }

    /// The first atom parsed for this frame, if any.
    pub fn first_atom(&self) -> Option<&AtomRecord> {
        self.atom_order.first().map(|&id| &self.atoms[id])
    }

    pub fn atom_count(&self) -> usize {
        self.atom_order.len()
    }

    /// Retrieves a molecule by its handle.
    pub fn molecule(&self, id: MoleculeId) -> Option<&Molecule> {
        self.molecules.get(id)
    }

    /// Returns an iterator over the molecule sequence, sentinel first.
    pub fn molecules(&self) -> impl Iterator<Item = &Molecule> {
        self.molecule_order.iter().map(|&id| &self.molecules[id])
    }

    /// Retrieves the molecule stored at `position` of the molecule sequence.
    ///
    /// Position 0 is always the sentinel. For frames whose molecule ids arrived
    /// as `1, 2, ..., k`, position equals molecule id; see
    /// [`is_densely_indexed`](Self::is_densely_indexed).
    pub fn molecule_at(&self, position: usize) -> Option<&Molecule> {
        self.molecule_order
            .get(position)
            .map(|&id| &self.molecules[id])
    }

    /// Finds a real molecule by the id given in the file.
    ///
    /// # Return
    ///
    /// Returns `None` for the reserved id 0 and for ids not present in this frame.
    pub fn find_molecule(&self, molecule_id: usize) -> Option<&Molecule> {
        if molecule_id == SENTINEL_MOLECULE_ID {
            return None;
        }
        self.molecules().find(|m| m.id == molecule_id)
    }

    /// Resolves an atom's back-reference to the molecule that owns it.
    pub fn molecule_of(&self, atom: &AtomRecord) -> Option<&Molecule> {
        self.molecules.get(atom.molecule)
    }

    /// The id-0 placeholder at position 0.
    pub fn sentinel(&self) -> &Molecule {
        &self.molecules[self.molecule_order[0]]
    }

    /// Number of entries in the molecule sequence, sentinel included.
    pub fn molecule_sequence_len(&self) -> usize {
        self.molecule_order.len()
    }

    /// Number of molecules read from the file, sentinel excluded.
    pub fn molecule_count(&self) -> usize {
        self.molecule_order.len() - 1
    }

    /// Whether every molecule sits at the position equal to its own id.
    ///
    /// This holds when ids arrive in first-appearance order `1, 2, ..., k`.
    /// Out-of-order or sparse ids leave the sequence misaligned.
    pub fn is_densely_indexed(&self) -> bool {
        self.molecules()
            .enumerate()
            .all(|(position, molecule)| molecule.id == position)
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Frame {}: {} atoms, {} molecules",
            self.number,
            self.atom_count(),
            self.molecule_sequence_len()
        )
    }
}
