//! Shared modular helpers for the 10-, 12- and 60-position cycles.

/// Wrap a signed position into [0, n).
pub const fn wrap(pos: i64, n: i64) -> u8 {
    pos.rem_euclid(n) as u8
}

/// Move `offset` positions around the 12-branch circle (negative = backward).
pub const fn jump_branch(branch_index: u8, offset: i64) -> u8 {
    wrap(branch_index as i64 + offset, 12)
}

/// Move `offset` positions around the 10-stem cycle (negative = backward).
pub const fn jump_stem(stem_index: u8, offset: i64) -> u8 {
    wrap(stem_index as i64 + offset, 10)
}

/// Count positions forward from `from` to `to` on the 12-branch circle (0-11).
pub const fn branch_distance(from: u8, to: u8) -> u8 {
    wrap(to as i64 - from as i64, 12)
}
