//! Splitting a predicted total into display units.

/// Split a total duration into whole units and a rounded remainder.
///
/// Floor-division semantics: `whole = floor(total / unit)` and
/// `remainder = round(total - whole * unit)`. Note the remainder can round
/// up to the full unit size (59.96 minutes yields `(0, 60)`); the whole
/// count is deliberately not re-incremented in that case, matching the
/// observed display behavior.
pub fn split_duration(total: f64, unit: f64) -> (i64, i64) {
    let whole = (total / unit).floor() as i64;
    let remainder = (total - whole as f64 * unit).round() as i64;
    (whole, remainder)
}
