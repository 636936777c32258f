//! Path-like string helpers for attachment names.
//!
//! Archives exported from Android and iOS mix `/` and `\` separators, so both
//! are treated as path separators regardless of the host platform.
//!
//! CHANGELOG:
//! - 02/11/2026 - Initial implementation

/// Last usable segment of a path-like string.
///
/// Splits on both `/` and `\`. If the last segment is blank (trailing
/// separator), the input is returned unchanged. Empty input yields `None`.
pub fn basename(path: Option<&str>) -> Option<&str> {
    let path = path.filter(|p| !p.is_empty())?;
    let last = path.rsplit(['/', '\\']).next().map(str::trim).unwrap_or("");
    if last.is_empty() {
        Some(path)
    } else {
        Some(last)
    }
}

/// Lowercased extension of the basename, without the dot.
///
/// `None` when there is no dot or the dot is the final character.
pub fn extension(value: Option<&str>) -> Option<String> {
    let base = basename(value)?;
    let dot = base.rfind('.')?;
    if dot + 1 == base.len() {
        return None;
    }
    Some(base[dot + 1..].to_lowercase())
}
