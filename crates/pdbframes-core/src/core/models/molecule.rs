use super::ids::AtomId;
use std::fmt;

/// The molecule id reserved for the placeholder at position 0 of every frame.
pub const SENTINEL_MOLECULE_ID: usize = 0;

/// A group of atoms sharing one molecule id within a frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Molecule {
    pub id: usize,                 // Molecule id as given in the source file
    pub(crate) atoms: Vec<AtomId>, // Atoms in parse order
}

impl Molecule {
    pub(crate) fn new(id: usize) -> Self {
        Self {
            id,
            atoms: Vec::new(),
        }
    }

    pub(crate) fn sentinel() -> Self {
        Self::new(SENTINEL_MOLECULE_ID)
    }

    pub(crate) fn add_atom(&mut self, atom_id: AtomId) {
        self.atoms.push(atom_id);
    }

    pub fn atoms(&self) -> &[AtomId] {
        &self.atoms
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Whether this is the id-0 placeholder rather than a molecule from the file.
    pub fn is_sentinel(&self) -> bool {
        self.id == SENTINEL_MOLECULE_ID
    }
}

impl fmt::Display for Molecule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_sentinel() {
            return write!(
                f,
                "Invalid molecule (id 0): molecule ids within a frame are 1-based"
            );
        }
        write!(f, "Molecule {}: {} atoms", self.id, self.atoms.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::KeyData;

    fn dummy_atom_id(n: u64) -> AtomId {
        AtomId::from(KeyData::from_ffi(n))
    }

    #[test]
    fn new_molecules_do_not_share_atom_lists() {
        let mut first = Molecule::new(1);
        let second = Molecule::new(2);
        first.add_atom(dummy_atom_id(1));

        assert_eq!(first.atoms(), &[dummy_atom_id(1)]);
        assert!(second.is_empty());
    }

    #[test]
    fn add_atom_preserves_insertion_order() {
        let mut molecule = Molecule::new(3);
        molecule.add_atom(dummy_atom_id(5));
        molecule.add_atom(dummy_atom_id(2));
        molecule.add_atom(dummy_atom_id(9));

        assert_eq!(
            molecule.atoms(),
            &[dummy_atom_id(5), dummy_atom_id(2), dummy_atom_id(9)]
        );
        assert_eq!(molecule.len(), 3);
    }

    #[test]
    fn sentinel_has_reserved_id() {
        let sentinel = Molecule::sentinel();
        assert_eq!(sentinel.id, SENTINEL_MOLECULE_ID);
        assert!(sentinel.is_sentinel());
        assert!(!Molecule::new(1).is_sentinel());
    }

    #[test]
    fn display_warns_for_sentinel() {
        assert!(Molecule::sentinel().to_string().starts_with("Invalid molecule"));
        let mut molecule = Molecule::new(4);
        molecule.add_atom(dummy_atom_id(1));
        assert_eq!(molecule.to_string(), "Molecule 4: 1 atoms");
    }
}
