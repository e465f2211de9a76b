use super::assembler::MoleculeAssembler;
use super::atom::AtomRecord;
use super::frame::Frame;
use super::ids::AtomId;
use crate::core::io::error::TrajectoryError;
use crate::core::io::record::parse_atom_line;
use slotmap::SlotMap;
use tracing::trace;

/// Builds one [`Frame`] from the atom-record lines between two `END` lines.
pub struct FrameBuilder {
    number: usize,
    atoms: SlotMap<AtomId, AtomRecord>,
    atom_order: Vec<AtomId>,
    assembler: MoleculeAssembler,
}

impl FrameBuilder {
    pub fn new(number: usize) -> Self {
        Self {
            number,
            atoms: SlotMap::with_key(),
            atom_order: Vec::new(),
            assembler: MoleculeAssembler::new(),
        }
    }

    /// Parses one atom record and assigns the atom to its molecule.
    ///
    /// # Arguments
    ///
    /// * `line_number` - 1-based line number in the source, for error reporting.
    /// * `text` - The raw record line.
    ///
    /// # Errors
    ///
    /// Returns [`TrajectoryError::Record`] if the line is not a well-formed atom
    /// record. The builder should be discarded after an error.
    pub fn add_line(&mut self, line_number: usize, text: &str) -> Result<&mut Self, TrajectoryError> {
        let fields =
            parse_atom_line(text).map_err(|e| TrajectoryError::record(line_number, text, e))?;

        let assembler = &mut self.assembler;
        let atom_id = self.atoms.insert_with_key(|atom_id| {
            let molecule = assembler.assign(atom_id, fields.molecule_id);
            AtomRecord::new(fields.serial_id, &fields.name, fields.position, molecule)
        });
        self.atom_order.push(atom_id);

        trace!(
            frame = self.number,
            serial = fields.serial_id,
            molecule = fields.molecule_id,
            "Atom assigned"
        );
        Ok(self)
    }

    pub fn build(self) -> Frame {
        let (molecules, molecule_order) = self.assembler.finish();
        Frame::from_parts(
            self.number,
            self.atoms,
            self.atom_order,
            molecules,
            molecule_order,
        )
    }

    /// Builds a frame from `(line_number, text)` pairs in one call.
    ///
    /// # Errors
    ///
    /// Stops at the first malformed record and returns its [`TrajectoryError::Record`].
    pub fn build_from<'a, I>(number: usize, lines: I) -> Result<Frame, TrajectoryError>
    where
        I: IntoIterator<Item = (usize, &'a str)>,
    {
        let mut builder = Self::new(number);
        for (line_number, text) in lines {
            builder.add_line(line_number, text)?;
        }
        Ok(builder.build())
    }
}
