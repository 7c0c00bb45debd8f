//! Data block decoding.
//!
//! A data row looks like `[i0][i1]...[i_{r-2}], v0, v1, ...`: indices for
//! every axis except the innermost, then the innermost values starting at
//! index 0. A row may instead carry all `r` indices and exactly one value.
//! Values are scattered into a flat row-major buffer pre-filled with the
//! missing sentinel.

use super::tokens::{bracket_groups, numeric_values};
use crate::config::DecodeOptions;
use crate::data::MISSING;
use crate::error::{DecodeError, Result};
use ndarray::{ArrayD, IxDyn};

/// Highest supported rank.
pub const MAX_RANK: usize = 4;

/// Row-major addressing for up to [`MAX_RANK`] axes.
#[derive(Debug, Clone, Copy)]
struct Strides {
    shape: [usize; MAX_RANK],
    strides: [usize; MAX_RANK],
    rank: usize,
}

impl Strides {
    fn new(dims: &[usize]) -> Self {
        let rank = dims.len();
        let mut shape = [0usize; MAX_RANK];
        let mut strides = [0usize; MAX_RANK];
        shape[..rank].copy_from_slice(dims);
        let mut stride = 1usize;
        for axis in (0..rank).rev() {
            strides[axis] = stride;
            stride = stride.saturating_mul(shape[axis]);
        }
        Self {
            shape,
            strides,
            rank,
        }
    }

    fn offset(&self, index: &[usize]) -> Option<usize> {
        if index.len() != self.rank {
            return None;
        }
        index
            .iter()
            .zip(&self.shape[..self.rank])
            .zip(&self.strides[..self.rank])
            .try_fold(0usize, |acc, ((&i, &size), &stride)| {
                (i < size).then(|| acc + i * stride)
            })
    }
}

/// Check the rank and cell count a header declares, returning the cell count.
pub fn validate_shape(header_line: usize, dims: &[usize], options: &DecodeOptions) -> Result<usize> {
    if dims.is_empty() || dims.len() > MAX_RANK {
        return Err(DecodeError::UnsupportedRank {
            line: header_line,
            rank: dims.len(),
        });
    }
    let cells = dims
        .iter()
        .try_fold(1usize, |acc, &d| acc.checked_mul(d))
        .filter(|&cells| cells <= options.max_cells)
        .ok_or_else(|| {
            DecodeError::malformed_header(
                header_line,
                format!("shape {:?} exceeds the limit of {} cells", dims, options.max_cells),
            )
        })?;
    Ok(cells)
}

/// Decode the data block that follows the header at `header_line`.
///
/// `lines` is the whole span, blank separators included.
pub fn decode_data_block(
    header_line: usize,
    dims: &[usize],
    lines: &[&str],
    options: &DecodeOptions,
) -> Result<ArrayD<f64>> {
    let cells = validate_shape(header_line, dims, options)?;
    let strides = Strides::new(dims);
    let mut buffer = vec![MISSING; cells];

    for (offset, line) in lines.iter().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        decode_row(header_line + 1 + offset, line, dims, &strides, &mut buffer, options)?;
    }

    Ok(ArrayD::from_shape_vec(IxDyn(dims), buffer)?)
}

fn decode_row(
    line_no: usize,
    line: &str,
    dims: &[usize],
    strides: &Strides,
    buffer: &mut [f64],
    options: &DecodeOptions,
) -> Result<()> {
    let rank = dims.len();
    let (prefix, rest) = bracket_groups(line).map_err(|reason| DecodeError::malformed_row(line_no, reason))?;
    let values = numeric_values(rest).map_err(|reason| DecodeError::malformed_row(line_no, reason))?;
    if values.is_empty() {
        return Err(DecodeError::malformed_row(line_no, "row has no values"));
    }

    let mut index = [0usize; MAX_RANK];
    if prefix.len() == rank - 1 {
        let inner = dims[rank - 1];
        if values.len() > inner {
            return Err(DecodeError::malformed_row(
                line_no,
                format!("{} values for an innermost axis of size {}", values.len(), inner),
            ));
        }
        index[..rank - 1].copy_from_slice(&prefix);
        for (j, value) in values.into_iter().enumerate() {
            index[rank - 1] = j;
            let cell = strides
                .offset(&index[..rank])
                .ok_or_else(|| out_of_bounds(line_no, &prefix, dims))?;
            buffer[cell] = options.resolve(value);
        }
    } else if prefix.len() == rank && values.len() == 1 {
        let cell = strides
            .offset(&prefix)
            .ok_or_else(|| out_of_bounds(line_no, &prefix, dims))?;
        buffer[cell] = options.resolve(values[0]);
    } else {
        return Err(DecodeError::malformed_row(
            line_no,
            format!(
                "expected {} indices for a rank-{} variable, found {} with {} values",
                rank - 1,
                rank,
                prefix.len(),
                values.len()
            ),
        ));
    }
    Ok(())
}

fn out_of_bounds(line_no: usize, prefix: &[usize], dims: &[usize]) -> DecodeError {
    DecodeError::malformed_row(line_no, format!("index {:?} outside shape {:?}", prefix, dims))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::is_missing;

    fn decode(dims: &[usize], lines: &[&str]) -> Result<ArrayD<f64>> {
        decode_data_block(1, dims, lines, &DecodeOptions::default())
    }

    #[test]
    fn strides_are_row_major() {
        let strides = Strides::new(&[5, 4, 2, 4]);
        assert_eq!(strides.offset(&[0, 0, 0, 0]), Some(0));
        assert_eq!(strides.offset(&[0, 0, 1, 3]), Some(7));
        assert_eq!(strides.offset(&[1, 0, 0, 0]), Some(32));
        assert_eq!(strides.offset(&[4, 3, 1, 3]), Some(159));
        assert_eq!(strides.offset(&[5, 0, 0, 0]), None);
        assert_eq!(strides.offset(&[0, 0, 0]), None);
    }

    #[test]
    fn rows_fill_innermost_axis() {
        let data = decode(&[2, 3], &["[0], 1.0, 2.0, 3.0", "[1], 4.0, 5.0, 6.0"]).unwrap();
        assert_eq!(data.shape(), &[2, 3]);
        assert_eq!(data[IxDyn(&[1, 2])], 6.0);
        assert_eq!(data[IxDyn(&[0, 1])], 2.0);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let lines = ["[0][0], 1.0, 2.0", "[0][1], 3.0, 4.0", "", "[1][0], 5.0, 6.0", "[1][1], 7.0, 8.0"];
        let data = decode(&[2, 2, 2], &lines).unwrap();
        assert_eq!(data[IxDyn(&[1, 0, 1])], 6.0);
    }

    #[test]
    fn unwritten_cells_stay_missing() {
        let data = decode(&[2, 3], &["[1], 4.0, 0.0"]).unwrap();
        assert!(is_missing(data[IxDyn(&[0, 0])]));
        assert!(is_missing(data[IxDyn(&[1, 2])]));
        assert_eq!(data[IxDyn(&[1, 1])], 0.0);
        assert!(!is_missing(data[IxDyn(&[1, 1])]));
    }

    #[test]
    fn full_index_single_value_row() {
        let data = decode(&[1, 1, 1], &["[0][0][0], 9504.847", ""]).unwrap();
        assert_eq!(data[IxDyn(&[0, 0, 0])], 9504.847);
    }

    #[test]
    fn rank_one_unprefixed_row() {
        let data = decode(&[4], &["1000.0, 975.0, 950.0, 925.0"]).unwrap();
        assert_eq!(data[IxDyn(&[3])], 925.0);
    }

    #[test]
    fn fill_value_becomes_missing() {
        let options = DecodeOptions::default().with_fill_value(9.999e20);
        let data = decode_data_block(1, &[1, 2], &["[0], 9.999E20, 3.5"], &options).unwrap();
        assert!(is_missing(data[IxDyn(&[0, 0])]));
        assert_eq!(data[IxDyn(&[0, 1])], 3.5);
    }

    #[test]
    fn rank_above_four_is_rejected() {
        let err = decode(&[2, 2, 2, 2, 2], &[]).unwrap_err();
        assert!(matches!(err, DecodeError::UnsupportedRank { rank: 5, line: 1 }));
    }

    #[test]
    fn malformed_rows_report_their_line() {
        let cases: [&[&str]; 5] = [
            &["", "[0][x], 1.0"],
            &["", "[0][0], abc"],
            &["", "[0][0]"],
            &["", "[0][9], 1.0"],
            &["", "[0], 1.0"],
        ];
        for lines in cases {
            let err = decode(&[1, 1, 2], lines).unwrap_err();
            assert!(
                matches!(err, DecodeError::MalformedDataRow { line: 3, .. }),
                "{lines:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn too_many_inline_values() {
        let err = decode(&[1, 2], &["[0], 1.0, 2.0, 3.0"]).unwrap_err();
        assert!(matches!(err, DecodeError::MalformedDataRow { line: 2, .. }));
    }

    #[test]
    fn literal_nan_and_inf_are_rejected() {
        for row in ["[0], NaN, 1.0", "[0], 1.0, inf"] {
            let err = decode(&[1, 2], &[row]).unwrap_err();
            assert!(
                matches!(err, DecodeError::MalformedDataRow { line: 2, .. }),
                "{row:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn oversized_shape_is_rejected_before_allocation() {
        let options = DecodeOptions::default().with_max_cells(10);
        let err = decode_data_block(1, &[4, 4], &[], &options).unwrap_err();
        assert!(matches!(err, DecodeError::MalformedHeader { .. }));
        let err = decode(&[usize::MAX, 2], &[]).unwrap_err();
        assert!(matches!(err, DecodeError::MalformedHeader { .. }));
    }
}
