//! Variable assembly from header, data block and coordinate block.

use super::coords::parse_coordinate_block;
use super::header::parse_header;
use super::rows::{decode_data_block, validate_shape};
use super::span::data_span;
use super::LineCursor;
use crate::config::DecodeOptions;
use crate::data::Variable;
use crate::error::{DecodeError, Result};

/// Assemble the variable whose header is the cursor's next line.
///
/// Returns the variable and the number of lines consumed, including the
/// blank lines that follow the block. On error the cursor position is
/// unspecified and no variable is produced.
pub fn assemble_variable(cursor: &mut LineCursor<'_>, options: &DecodeOptions) -> Result<(Variable, usize)> {
    let start = cursor.position();
    let header_line = cursor.line_number();
    let (_, line) = cursor.next_line().ok_or(DecodeError::TruncatedInput {
        line: header_line,
        needed: 1,
        available: 0,
    })?;

    let header = parse_header(header_line, line)?;
    validate_shape(header_line, &header.dims, options)?;

    let span = data_span(&header.dims);
    let available = cursor.remaining();
    let block = cursor.take(span).ok_or(DecodeError::TruncatedInput {
        line: header_line + 1,
        needed: span,
        available,
    })?;
    let data = decode_data_block(header_line, &header.dims, block, options)?;

    cursor.skip_blank();
    let coords = parse_coordinate_block(cursor, &header.dims)?;
    cursor.skip_blank();

    let consumed = cursor.position() - start;
    tracing::debug!(
        name = %header.name,
        dims = ?header.dims,
        span,
        consumed,
        "decoded variable block"
    );

    Ok((Variable::new(header.name, coords, data), consumed))
}
