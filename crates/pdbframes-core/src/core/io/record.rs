use nalgebra::Point3;
use std::str::FromStr;
use thiserror::Error;

/// First token of every atom record.
pub const ATOM_RECORD_MARKER: &str = "ATOM";

/// Number of whitespace-separated fields in an atom record.
pub const ATOM_RECORD_FIELD_COUNT: usize = 11;

const SERIAL_FIELD: usize = 1;
const NAME_FIELD: usize = 2;
const MOLECULE_FIELD: usize = 4;
const X_FIELD: usize = 5;
const Y_FIELD: usize = 6;
const Z_FIELD: usize = 7;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("Expected {expected} fields in atom record, found {found}")]
    FieldCount { expected: usize, found: usize },
    #[error("A non-{expected} record found (marker: '{marker}')", expected = ATOM_RECORD_MARKER)]
    MalformedRecord { marker: String },
    #[error("Invalid integer for {field} (value: '{value}')")]
    InvalidInteger { field: &'static str, value: String },
    #[error("Invalid float for {field} (value: '{value}')")]
    InvalidFloat { field: &'static str, value: String },
}

/// The typed fields of one atom record.
///
/// Layout: `ATOM serial name residue molecule x y z occupancy b-factor segment`.
/// Residue, occupancy, b-factor and segment are read past but not kept.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomRecordFields {
    pub serial_id: i64,
    pub name: String,
    /// Non-negative; a negative id in the record is an [`RecordError::InvalidInteger`].
    pub molecule_id: usize,
    pub position: Point3<f64>,
}

impl FromStr for AtomRecordFields {
    type Err = RecordError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() != ATOM_RECORD_FIELD_COUNT {
            return Err(RecordError::FieldCount {
                expected: ATOM_RECORD_FIELD_COUNT,
                found: parts.len(),
            });
        }
        if parts[0] != ATOM_RECORD_MARKER {
            return Err(RecordError::MalformedRecord {
                marker: parts[0].to_string(),
            });
        }

        let serial_id = parse_int::<i64>(parts[SERIAL_FIELD], "serial id")?;
        let molecule_id = parse_int::<usize>(parts[MOLECULE_FIELD], "molecule id")?;
        let x = parse_float(parts[X_FIELD], "x coordinate")?;
        let y = parse_float(parts[Y_FIELD], "y coordinate")?;
        let z = parse_float(parts[Z_FIELD], "z coordinate")?;

        Ok(Self {
            serial_id,
            name: parts[NAME_FIELD].to_string(),
            molecule_id,
            position: Point3::new(x, y, z),
        })
    }
}

/// Parses one atom record line.
///
/// # Errors
///
/// Returns a [`RecordError`] if the line does not have exactly
/// [`ATOM_RECORD_FIELD_COUNT`] fields, does not start with [`ATOM_RECORD_MARKER`],
/// or carries a non-numeric serial id, molecule id or coordinate.
pub fn parse_atom_line(line: &str) -> Result<AtomRecordFields, RecordError> {
    line.parse()
}

fn parse_int<T: FromStr>(value: &str, field: &'static str) -> Result<T, RecordError> {
    value.parse().map_err(|_| RecordError::InvalidInteger {
        field,
        value: value.to_string(),
    })
}

fn parse_float(value: &str, field: &'static str) -> Result<f64, RecordError> {
    value.parse().map_err(|_| RecordError::InvalidFloat {
        field,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const WATER_HYDROGEN: &str =
        "ATOM   1296  H2  TIP3W 504     -10.719   2.716   2.401  0.00  0.00      W";

    #[test]
    fn parses_well_formed_record() {
        let fields = parse_atom_line(WATER_HYDROGEN).unwrap();
        assert_eq!(fields.serial_id, 1296);
        assert_eq!(fields.name, "H2");
        assert_eq!(fields.molecule_id, 504);
        assert_eq!(fields.position, Point3::new(-10.719, 2.716, 2.401));
    }

    #[test]
    fn collapses_tabs_and_repeated_spaces() {
        let line = "ATOM\t1   OW\tSOL  1  0.5   -0.5\t1e1 1.00 0.00   A";
        let fields: AtomRecordFields = line.parse().unwrap();
        assert_eq!(fields.name, "OW");
        assert_eq!(fields.position, Point3::new(0.5, -0.5, 10.0));
    }

    #[test]
    fn rejects_non_atom_marker() {
        let line = WATER_HYDROGEN.replacen("ATOM  ", "HETATM", 1);
        assert_eq!(
            parse_atom_line(&line),
            Err(RecordError::MalformedRecord {
                marker: "HETATM".into()
            })
        );
    }

    #[test]
    fn rejects_wrong_field_count_before_marker() {
        assert_eq!(
            parse_atom_line("HETATM 1 H2 TIP3W 504 0.0 0.0 0.0 0.00 0.00"),
            Err(RecordError::FieldCount {
                expected: 11,
                found: 10
            })
        );
        assert_eq!(
            parse_atom_line(""),
            Err(RecordError::FieldCount {
                expected: 11,
                found: 0
            })
        );
    }

    #[test]
    fn rejects_non_numeric_molecule_id() {
        let line = "ATOM 1 H2 TIP3W W1 0.0 0.0 0.0 0.00 0.00 W";
        assert_eq!(
            parse_atom_line(line),
            Err(RecordError::InvalidInteger {
                field: "molecule id",
                value: "W1".into()
            })
        );
    }

    #[test]
    fn rejects_negative_molecule_id() {
        let line = "ATOM 1 H2 TIP3W -3 0.0 0.0 0.0 0.00 0.00 W";
        assert!(matches!(
            parse_atom_line(line),
            Err(RecordError::InvalidInteger { field: "molecule id", .. })
        ));
    }

    #[test]
    fn rejects_non_numeric_coordinate() {
        let line = "ATOM 1 H2 TIP3W 1 0.0 abc 0.0 0.00 0.00 W";
        assert_eq!(
            parse_atom_line(line),
            Err(RecordError::InvalidFloat {
                field: "y coordinate",
                value: "abc".into()
            })
        );
    }

    #[test]
    fn error_messages_name_the_problem() {
        let err = RecordError::MalformedRecord {
            marker: "HETATM".into(),
        };
        assert_eq!(err.to_string(), "A non-ATOM record found (marker: 'HETATM')");
    }
}
