//! Decoded variables and their array data.

use super::{is_missing, Coordinate};
use indexmap::IndexMap;
use ndarray::{ArrayD, IxDyn};

/// A decoded variable with its data and coordinate axes.
#[derive(Debug, Clone)]
pub struct Variable {
    /// Variable name as written in its header line.
    pub name: String,
    /// Coordinate axes, in the order the coordinate block lists them.
    pub coords: IndexMap<String, Coordinate>,
    /// Dense data in declared axis order. Unwritten cells are missing.
    pub data: ArrayD<f64>,
}

impl Variable {
    /// Create a new variable.
    pub fn new(
        name: impl Into<String>,
        coords: IndexMap<String, Coordinate>,
        data: ArrayD<f64>,
    ) -> Self {
        Self {
            name: name.into(),
            coords,
            data,
        }
    }

    /// Shape of the data, outer axis first.
    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    /// Get the number of dimensions.
    pub fn rank(&self) -> usize {
        self.data.ndim()
    }

    /// Get total number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the array holds no cells.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Look up a coordinate axis by name.
    pub fn coord(&self, axis: &str) -> Option<&Coordinate> {
        self.coords.get(axis)
    }

    /// Axis names in order.
    pub fn axis_names(&self) -> impl Iterator<Item = &str> {
        self.coords.keys().map(String::as_str)
    }

    /// Get value at given multi-dimensional indices.
    pub fn get_value(&self, indices: &[usize]) -> Option<f64> {
        self.data.get(IxDyn(indices)).copied()
    }

    /// Check whether the cell at `indices` is missing.
    ///
    /// Out-of-bounds indices return `None`.
    pub fn is_missing_at(&self, indices: &[usize]) -> Option<bool> {
        self.get_value(indices).map(is_missing)
    }

    /// Get a 1D slice along a dimension, fixing all other dimensions.
    ///
    /// # Arguments
    /// * `dim` - The dimension to extract (will vary)
    /// * `fixed_indices` - Indices for every dimension; the entry at `dim` is ignored
    ///
    /// # Returns
    /// The values along `dim`, or `None` if `dim` or any fixed index is out of range.
    pub fn profile(&self, dim: usize, fixed_indices: &[usize]) -> Option<Vec<f64>> {
        if dim >= self.rank() || fixed_indices.len() != self.rank() {
            return None;
        }
        let mut idx = fixed_indices.to_vec();
        (0..self.shape()[dim])
            .map(|i| {
                idx[dim] = i;
                self.get_value(&idx)
            })
            .collect()
    }

    /// Value of the cell nearest to the given coordinate values, one per axis.
    pub fn value_nearest(&self, position: &[f64]) -> Option<f64> {
        if position.len() != self.rank() || self.coords.len() != self.rank() {
            return None;
        }
        let indices = self
            .coords
            .values()
            .zip(position)
            .map(|(coord, &value)| coord.nearest_index(value))
            .collect::<Option<Vec<_>>>()?;
        self.get_value(&indices)
    }

    /// All values in row-major order, missing cells included.
    pub fn flatten(&self) -> Vec<f64> {
        self.data.iter().copied().collect()
    }

    /// Count of non-missing cells.
    pub fn valid_count(&self) -> usize {
        self.data.iter().filter(|v| !is_missing(**v)).count()
    }

    /// Minimum and maximum of the non-missing cells.
    pub fn min_max(&self) -> Option<(f64, f64)> {
        self.data
            .iter()
            .copied()
            .filter(|v| !is_missing(*v))
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }

    /// Mean of the non-missing cells.
    pub fn mean(&self) -> Option<f64> {
        let mut sum = 0.0f64;
        let mut count = 0usize;
        for &v in self.data.iter() {
            if !is_missing(v) {
                sum += v;
                count += 1;
            }
        }
        if count > 0 {
            Some(sum / count as f64)
        } else {
            None
        }
    }
}
