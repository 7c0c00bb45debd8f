//! Decoder configuration.

/// Fill value published by the GFS servers for cells without data.
pub const GFS_FILL_VALUE: f64 = 9.999e20;

/// Default upper bound on the number of cells a single variable may declare.
pub const DEFAULT_MAX_CELLS: usize = 1 << 27;

/// Options controlling how a document is decoded.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
    /// Server fill value. Data values exactly equal to it are stored as missing.
    pub fill_value: Option<f64>,
    /// Maximum product of a header's dimension sizes.
    pub max_cells: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            fill_value: None,
            max_cells: DEFAULT_MAX_CELLS,
        }
    }
}

impl DecodeOptions {
    /// Create options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Treat `fill_value` as missing data.
    pub fn with_fill_value(mut self, fill_value: f64) -> Self {
        self.fill_value = Some(fill_value);
        self
    }

    /// Set the maximum number of cells per variable.
    pub fn with_max_cells(mut self, max_cells: usize) -> Self {
        self.max_cells = max_cells;
        self
    }

    /// Map a decoded value through the fill-value rule.
    pub(crate) fn resolve(&self, value: f64) -> f64 {
        match self.fill_value {
            Some(fill) if value == fill => crate::data::MISSING,
            _ => value,
        }
    }
}
