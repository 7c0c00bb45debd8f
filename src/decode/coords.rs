//! Coordinate blocks: one `NAME, [size]` line and one values line per axis.

use super::tokens::{bracket_groups, numeric_values, split_name};
use super::LineCursor;
use crate::data::Coordinate;
use crate::error::{DecodeError, Result};
use indexmap::IndexMap;

/// Parse the coordinate block for a variable of shape `dims`.
///
/// Reads one name/values pair per axis, in axis order. The only short block
/// accepted is a single complete pair followed by the end of input; any
/// other shortfall is an error.
pub fn parse_coordinate_block(
    cursor: &mut LineCursor<'_>,
    dims: &[usize],
) -> Result<IndexMap<String, Coordinate>> {
    let mut coords = IndexMap::with_capacity(dims.len());

    for (axis, &size) in dims.iter().enumerate() {
        if cursor.rest_is_blank() {
            if axis != 1 {
                return Err(DecodeError::malformed_coords(
                    cursor.line_number(),
                    format!(
                        "expected {} axis lines, input ended after {}",
                        2 * dims.len(),
                        2 * axis
                    ),
                ));
            }
            tracing::warn!(
                line = cursor.line_number(),
                axes = axis,
                rank = dims.len(),
                "coordinate block ended early at end of input"
            );
            break;
        }

        let (name_line_no, name_line) = next_line(cursor)?;
        let name = parse_axis_name(name_line_no, name_line)?;

        let (values_line_no, values_line) = next_line(cursor)?;
        let values = numeric_values(values_line)
            .map_err(|reason| DecodeError::malformed_coords(values_line_no, reason))?;
        if values.len() != size {
            return Err(DecodeError::malformed_coords(
                values_line_no,
                format!("axis '{}' has {} values, header declares {}", name, values.len(), size),
            ));
        }

        if coords.contains_key(name) {
            tracing::warn!(axis = name, line = name_line_no, "axis name repeated in coordinate block");
        }
        coords.insert(name.to_string(), Coordinate::new(name, values));
    }

    Ok(coords)
}

fn next_line<'a>(cursor: &mut LineCursor<'a>) -> Result<(usize, &'a str)> {
    let line_no = cursor.line_number();
    cursor
        .next_line()
        .ok_or_else(|| DecodeError::malformed_coords(line_no, "input ended inside coordinate block"))
}

fn parse_axis_name(line_no: usize, line: &str) -> Result<&str> {
    let malformed = || DecodeError::malformed_coords(line_no, format!("expected 'AXIS, [size]', found '{}'", line.trim()));
    let (name, rest) = split_name(line).ok_or_else(malformed)?;
    match bracket_groups(rest) {
        Ok((groups, trailing)) if groups.len() == 1 && trailing.trim().is_empty() => Ok(name),
        _ => Err(malformed()),
    }
}
