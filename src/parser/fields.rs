//! Field-level parsers shared by the OBJ and MTL handlers

use crate::error::{Error, Result};

/// Parse the first `N` fields of a record as `f32`
///
/// Fewer than `N` fields is only a warning; parsing is still attempted and
/// fails on the first missing field. Fields past `N` are ignored.
pub(crate) fn parse_floats<const N: usize>(
    record: &str,
    args: &[&str],
    line: usize,
) -> Result<[f32; N]> {
    if args.len() < N {
        log::warn!(
            "line {}: '{}' record has {} fields, expected {}",
            line,
            record,
            args.len(),
            N
        );
    }

    let mut values = [0.0f32; N];
    for (i, slot) in values.iter_mut().enumerate() {
        let text = args.get(i).copied();
        *slot = text
            .and_then(|t| t.parse::<f32>().ok())
            .ok_or_else(|| Error::malformed_number(line, record, text))?;
    }
    Ok(values)
}

/// Join a record's arguments into a single name
///
/// Returns `None`, with a warning, when the record has no argument.
pub(crate) fn parse_name(record: &str, args: &[&str], line: usize) -> Option<String> {
    if args.is_empty() {
        log::warn!("line {}: '{}' record has no name, skipping", line, record);
        return None;
    }
    Some(args.join(" "))
}
