//! Coordinate axes.

/// A named axis and the values it ranges over.
#[derive(Debug, Clone, PartialEq)]
pub struct Coordinate {
    /// Axis name, e.g. `time` or `lat`.
    pub name: String,
    /// Axis values in index order.
    pub values: Vec<f64>,
}

impl Coordinate {
    /// Create a new coordinate.
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Number of points on the axis.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the axis has no points.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Index of the axis value closest to `value`.
    ///
    /// Ties resolve to the lower index. Returns `None` for an empty axis or a
    /// NaN query.
    pub fn nearest_index(&self, value: f64) -> Option<usize> {
        if value.is_nan() {
            return None;
        }
        let mut best: Option<(usize, f64)> = None;
        for (i, &v) in self.values.iter().enumerate() {
            let distance = (v - value).abs();
            match best {
                Some((_, d)) if d <= distance => {}
                _ => best = Some((i, distance)),
            }
        }
        best.map(|(i, _)| i)
    }

    /// Smallest and largest axis values.
    pub fn range(&self) -> Option<(f64, f64)> {
        let first = *self.values.first()?;
        Some(
            self.values
                .iter()
                .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearest_index_picks_closest_value() {
        let lev = Coordinate::new("lev", vec![1000.0, 975.0, 950.0, 925.0]);
        assert_eq!(lev.nearest_index(960.0), Some(2));
        assert_eq!(lev.nearest_index(2000.0), Some(0));
        assert_eq!(lev.nearest_index(0.0), Some(3));
    }

    #[test]
    fn nearest_index_ties_go_low() {
        let lat = Coordinate::new("lat", vec![-90.0, -89.75]);
        assert_eq!(lat.nearest_index(-89.875), Some(0));
    }

    #[test]
    fn nearest_index_empty_or_nan() {
        assert_eq!(Coordinate::new("x", vec![]).nearest_index(1.0), None);
        assert_eq!(Coordinate::new("x", vec![1.0]).nearest_index(f64::NAN), None);
    }

    #[test]
    fn range_of_values() {
        let lev = Coordinate::new("lev", vec![1000.0, 975.0, 950.0]);
        assert_eq!(lev.range(), Some((950.0, 1000.0)));
        assert_eq!(Coordinate::new("x", vec![]).range(), None);
    }
}
