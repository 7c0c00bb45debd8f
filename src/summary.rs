//! Plain-text summaries of decoded documents.

use crate::data::{Document, Variable};
use crate::formatters::{format_count, format_shape, format_value};

/// Render a document as a tree of variables and their axes.
pub fn format_document<'a>(
    variables: impl IntoIterator<Item = &'a Variable>,
    source_name: Option<&str>,
) -> String {
    let mut text = String::new();

    if let Some(name) = source_name {
        text.push_str(&format!("Document: {}\n", name));
    } else {
        text.push_str("Document\n");
    }

    let variables: Vec<&Variable> = variables.into_iter().collect();
    for (i, var) in variables.iter().enumerate() {
        let is_last = i == variables.len() - 1;
        text.push_str(&format_variable(var, is_last));
    }

    text
}

/// Render every variable of `document`.
pub fn format_all(document: &Document, source_name: Option<&str>) -> String {
    format_document(document.iter(), source_name)
}

fn format_variable(var: &Variable, is_last: bool) -> String {
    let connector = if is_last { "└── " } else { "├── " };
    let mut result = format!(
        "{}{} {} valid {}/{}",
        connector,
        var.name,
        format_shape(var.shape()),
        format_count(var.valid_count()),
        format_count(var.len()),
    );
    if let Some((min, max)) = var.min_max() {
        result.push_str(&format!(" range {}..{}", format_value(min), format_value(max)));
    }
    result.push('\n');

    let prefix = if is_last { "    " } else { "│   " };
    let axes: Vec<_> = var.coords.values().collect();
    for (i, coord) in axes.iter().enumerate() {
        let connector = if i == axes.len() - 1 { "└── " } else { "├── " };
        let range = coord
            .range()
            .map(|(lo, hi)| format!(" {}..{}", format_value(lo), format_value(hi)))
            .unwrap_or_default();
        result.push_str(&format!("{}{}{} [{}]{}\n", prefix, connector, coord.name, coord.len(), range));
    }

    result
}

/// Render the row-major values of a variable, one innermost row per line.
pub fn format_values(var: &Variable) -> String {
    let inner = var.shape().last().copied().unwrap_or(0).max(1);
    let values = var.flatten();
    let mut text = String::new();
    for row in values.chunks(inner) {
        let line: Vec<String> = row.iter().map(|v| format_value(*v)).collect();
        text.push_str(&line.join(", "));
        text.push('\n');
    }
    text
}
