//! Initiator type lookup.
//!
//! The compact payload stores the initiator of each resource fetch as a
//! small table index instead of its full name.

/// Canonical initiator type names, indexed by the compact payload code.
pub const INITIATOR_TYPES: &[&str] = &["other", "img", "link", "script", "css", "xmlhttprequest"];

/// Fallback for indices outside the table.
pub const FALLBACK_INITIATOR_TYPE: &str = "other";

/// Resolve an initiator type index to its canonical name.
///
/// Total over all inputs: unknown indices, including negative ones, map to
/// `"other"` so that codes added by newer encoders still decode.
pub fn initiator_type_from_index(index: i64) -> &'static str {
    usize::try_from(index)
        .ok()
        .and_then(|i| INITIATOR_TYPES.get(i))
        .copied()
        .unwrap_or(FALLBACK_INITIATOR_TYPE)
}
