//! Shared formatting utilities for text output.

use crate::data::is_missing;

/// Placeholder printed for missing cells.
pub const MISSING_CELL: &str = "--";

/// Format a count with thousand separators.
pub fn format_count(n: usize) -> String {
    let digits = n.to_string();
    let head = digits.len() % 3;
    let mut groups = Vec::with_capacity(digits.len() / 3 + 1);
    if head > 0 {
        groups.push(&digits[..head]);
    }
    groups.extend((head..digits.len()).step_by(3).map(|i| &digits[i..i + 3]));
    groups.join(",")
}

/// Format a decoded value with about six significant digits.
///
/// Missing cells print as [`MISSING_CELL`]; trailing zeros are dropped.
pub fn format_value(val: f64) -> String {
    if is_missing(val) {
        return MISSING_CELL.to_string();
    }
    let abs_val = val.abs();
    if abs_val == 0.0 {
        return "0".to_string();
    }
    if !(1e-3..1e6).contains(&abs_val) {
        return format!("{:.3e}", val);
    }
    let decimals = (5 - abs_val.log10().floor() as i32).clamp(0, 5) as usize;
    let text = format!("{:.*}", decimals, val);
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    }
}

/// Format a shape as `[5][4][2][4]`, the way headers write it.
pub fn format_shape(shape: &[usize]) -> String {
    shape.iter().map(|d| format!("[{}]", d)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MISSING;

    #[test]
    fn counts() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(1234567), "1,234,567");
    }

    #[test]
    fn values() {
        assert_eq!(format_value(0.0), "0");
        assert_eq!(format_value(143.26001), "143.26");
        assert_eq!(format_value(9504.847), "9504.85");
        assert_eq!(format_value(1000.0), "1000");
        assert_eq!(format_value(-89.75), "-89.75");
        assert_eq!(format_value(0.25), "0.25");
        assert_eq!(format_value(737842.125), "737842");
        assert_eq!(format_value(9.999e20), "9.999e20");
    }

    #[test]
    fn missing_cells_use_placeholder() {
        assert_eq!(format_value(MISSING), "--");
    }

    #[test]
    fn shapes() {
        assert_eq!(format_shape(&[5, 4, 2, 4]), "[5][4][2][4]");
    }
}
