//! opendap-ascii - A decoder for OPeNDAP/DODS ASCII grid responses.
//!
//! Forecast data servers such as NOAA NOMADS export selected variables as
//! plain text: a header naming the variable and its dimension sizes, rows
//! of values positioned by bracketed indices, then the values of each
//! coordinate axis. This crate turns one such response into a [`Document`]
//! of named [`Variable`]s, each with a dense `ndarray` and its axes.
//!
//! # Features
//!
//! - Ranks 1 to 4, addressed through a single stride computation
//! - Cells absent from the response stay missing (NaN), never zero
//! - Optional server fill-value masking
//! - Typed errors carrying the failing line number
//!
//! # Example
//!
//! ```
//! use opendap_ascii::Document;
//!
//! let text = "hgtmwl, [1][1][1]\n[0][0], 9504.847\n\n\ntime, [1]\n737842.0\nlat, [1]\n-90.0\nlon, [1]\n0.0";
//! let doc = Document::parse(text)?;
//!
//! let hgt = doc.variable("hgtmwl")?;
//! assert_eq!(hgt.shape(), &[1, 1, 1]);
//! assert_eq!(hgt.get_value(&[0, 0, 0]), Some(9504.847));
//! assert_eq!(hgt.coord("time").map(|c| c.values.clone()), Some(vec![737842.0]));
//! # Ok::<(), opendap_ascii::DecodeError>(())
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod config;
pub mod data;
pub mod decode;
pub mod error;
pub mod formatters;
pub mod summary;

pub use config::DecodeOptions;
pub use data::{is_missing, Coordinate, Document, Variable, MISSING};
pub use error::{DecodeError, Result};
