//! Outbound navigation targets.

/// `rel` for anchors that open in a new browsing context.
pub const EXTERNAL_REL: &str = "noopener noreferrer";
pub const EXTERNAL_TARGET: &str = "_blank";
/// `window.open` features equivalent to [`EXTERNAL_REL`].
pub const EXTERNAL_FEATURES: &str = "noopener,noreferrer";

pub fn mailto(address: &str) -> String {
    format!("mailto:{}", address.trim())
}
