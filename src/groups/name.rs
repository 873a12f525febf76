//! Group-name synthesis and the display-name string contract.
//!
//! Status queries compose a group's display name as `"<name>: <state>"`.
//! Destroy requests may hand that composed form straight back, so parsing
//! must strip the annotation: split on the **last** `:`, trim the name
//! portion, and return the input unchanged when no delimiter is present.

use super::GroupState;

/// Name of the host's original, pre-existing thread group.
pub const DEFAULT_GROUP_NAME: &str = "Caesium-1";

/// Prefix shared by all scheduler thread groups; the ordinal is appended.
pub const GROUP_NAME_PREFIX: &str = "Caesium-";

/// Delimiter between name and state label in a composed display name.
const DISPLAY_DELIMITER: &str = ": ";

/// Synthesizes the thread-group name for the given ordinal.
pub fn group_name(ordinal: u32) -> String {
    format!("{GROUP_NAME_PREFIX}{ordinal}")
}

/// Composes the display name for a group and its lifecycle state.
pub fn compose_display_name(name: &str, state: GroupState) -> String {
    format!("{name}{DISPLAY_DELIMITER}{}", state.label())
}

/// Extracts the bare group name from a possibly state-annotated display name.
///
/// Splits on the last `:` and trims whitespace around the name portion.
/// Input without a delimiter is returned unchanged.
pub fn parse_group_name(display_name: &str) -> &str {
    match display_name.rfind(':') {
        Some(idx) => display_name[..idx].trim(),
        None => display_name,
    }
}
