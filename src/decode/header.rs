//! Variable header lines: `NAME, [d0][d1]...[dk]`.

use super::tokens::{bracket_groups, split_name};
use crate::error::{DecodeError, Result};

/// Name and dimension sizes declared by a header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Variable name.
    pub name: String,
    /// Dimension sizes, outer to inner as written.
    pub dims: Vec<usize>,
}

impl Header {
    /// Number of declared dimensions.
    pub fn rank(&self) -> usize {
        self.dims.len()
    }
}

/// Parse a header line found at 1-based line `line_no`.
pub fn parse_header(line_no: usize, line: &str) -> Result<Header> {
    let (name, rest) = split_name(line).ok_or_else(|| {
        DecodeError::malformed_header(line_no, format!("expected 'NAME, [size]...', found '{}'", line.trim()))
    })?;

    let (dims, trailing) =
        bracket_groups(rest).map_err(|reason| DecodeError::malformed_header(line_no, reason))?;
    if dims.is_empty() {
        return Err(DecodeError::malformed_header(
            line_no,
            format!("no dimension sizes after '{}'", name),
        ));
    }
    if !trailing.trim().is_empty() {
        return Err(DecodeError::malformed_header(
            line_no,
            format!("unexpected text '{}' after dimension sizes", trailing.trim()),
        ));
    }

    Ok(Header {
        name: name.to_string(),
        dims,
    })
}
