//! Line-span arithmetic for data blocks.
//!
//! The innermost axis is written inline, several values per row. Every
//! other axis contributes one row per index, and each completed group at
//! every nesting level is followed by one blank separator line.

/// Physical lines (rows plus blank separators) of a data block.
///
/// Folds the sizes of all but the innermost axis, innermost-remaining first,
/// with `acc = size * (acc + 1)`. Excludes the header line and the
/// coordinate block. Saturates instead of overflowing.
pub fn block_span(dims: &[usize]) -> usize {
    dims.iter()
        .rev()
        .skip(1)
        .fold(0usize, |acc, &size| size.saturating_mul(acc.saturating_add(1)))
}

/// Lines the data block actually occupies.
///
/// A rank-1 variable has nothing to fold; its values sit on one unprefixed row.
pub fn data_span(dims: &[usize]) -> usize {
    if dims.len() == 1 {
        1
    } else {
        block_span(dims)
    }
}
