//! Rendering resolved bit vectors as delimited binary lines.

use crate::bitvec::BitVector;

/// Opening delimiter of a rendered line.
pub const PREFIX: &str = "**OutputBitVector: ";

/// Closing delimiter of a rendered line.
pub const SUFFIX: &str = " **";

/// Render a resolved bit vector as a single delimited line.
///
/// The sentinel (length 0) produces no line at all. Otherwise the payload
/// holds exactly `len` characters, bit `len-1` first down to bit 0, each
/// `'1'` or `'0'`.
pub fn render(vector: &BitVector) -> Option<String> {
    if vector.is_empty() {
        return None;
    }
    Some(format!("{PREFIX}{vector}{SUFFIX}"))
}
