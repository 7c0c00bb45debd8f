//! Lexical helpers shared by the block parsers.

/// Parse leading `[n]` groups.
///
/// Returns the parsed integers and the text after the last group. Text that
/// does not start with `[` yields no groups.
pub(crate) fn bracket_groups(text: &str) -> Result<(Vec<usize>, &str), String> {
    let mut groups = Vec::new();
    let mut rest = text.trim_start();
    while let Some(inner) = rest.strip_prefix('[') {
        let close = inner
            .find(']')
            .ok_or_else(|| format!("unclosed bracket in '{}'", text.trim()))?;
        let digits = inner[..close].trim();
        let value = digits
            .parse::<usize>()
            .map_err(|_| format!("'{}' is not a non-negative integer", digits))?;
        groups.push(value);
        rest = &inner[close + 1..];
    }
    Ok((groups, rest))
}

/// Split `NAME, rest` at the first comma.
pub(crate) fn split_name(line: &str) -> Option<(&str, &str)> {
    let (name, rest) = line.split_once(',')?;
    let name = name.trim();
    if name.is_empty() {
        None
    } else {
        Some((name, rest))
    }
}

/// Parse whitespace-separated numbers, each optionally comma-terminated.
///
/// `NaN` and infinities are rejected: NaN is reserved for unwritten cells.
pub(crate) fn numeric_values(text: &str) -> Result<Vec<f64>, String> {
    text.split_whitespace()
        .map(|token| token.strip_suffix(',').unwrap_or(token))
        .filter(|token| !token.is_empty())
        .map(|token| match token.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            Ok(_) => Err(format!("'{}' is not a finite number", token)),
            Err(_) => Err(format!("'{}' is not a number", token)),
        })
        .collect()
}
