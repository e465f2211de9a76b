use super::record::{ATOM_RECORD_FIELD_COUNT, ATOM_RECORD_MARKER};
use super::source::LineSource;
use tracing::debug;

/// Decides whether `source` looks like an atom-record listing.
///
/// Only the first line whose first token is [`ATOM_RECORD_MARKER`] is inspected:
/// the source is valid exactly when that line has [`ATOM_RECORD_FIELD_COUNT`]
/// fields. Later atom lines, well-formed or not, do not affect the result.
///
/// # Return
///
/// Returns `false` if the first atom line is malformed or no atom line exists.
pub fn is_valid_trajectory<S: LineSource + ?Sized>(source: &S) -> bool {
    for (index, line) in source.lines().enumerate() {
        let mut tokens = line.split_whitespace();
        if tokens.next() != Some(ATOM_RECORD_MARKER) {
            continue;
        }
        let field_count = 1 + tokens.count();
        let valid = field_count == ATOM_RECORD_FIELD_COUNT;
        debug!(
            line = index + 1,
            field_count, valid, "Validated first atom record"
        );
        return valid;
    }
    debug!("No atom record found");
    false
}
