//! ASCII response decoding.
//!
//! Each variable in the response is one block:
//!
//! 1. a header line `NAME, [d0][d1]...[dk]`
//! 2. a data block of positioned rows and blank separators whose length
//!    follows from the dimension sizes (see [`block_span`])
//! 3. a coordinate block of `2 * rank` lines, one name line and one values
//!    line per axis
//! 4. zero or more blank lines
//!
//! Decoding is single-pass and all-or-nothing: the first malformed block
//! fails the whole document, since every later block offset depends on it.

mod assemble;
mod coords;
mod cursor;
mod header;
mod rows;
mod span;
mod tokens;

pub use assemble::assemble_variable;
pub use coords::parse_coordinate_block;
pub use cursor::LineCursor;
pub use header::{parse_header, Header};
pub use rows::{decode_data_block, validate_shape, MAX_RANK};
pub use span::{block_span, data_span};
