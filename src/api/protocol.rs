//! Line parsers for the upstream text formats.
//!
//! The API uses three formats, none of them JSON:
//!
//! - account details: `KEY=VALUE` per line
//! - link check: `;`-separated records per line
//! - download resolution: `KEY: VALUE` per line
//!
//! All bodies end with a trailing newline, which is stripped before splitting.
//! The parsers here only split text; deciding what the fields mean is left to
//! the endpoint modules.

use std::collections::HashMap;

use super::error::ProtocolError;

/// Removes a single trailing `\n` (or `\r\n`) from a response body.
#[must_use]
pub fn strip_trailing_newline(body: &str) -> &str {
    let trimmed = body.strip_suffix('\n').unwrap_or(body);
    trimmed.strip_suffix('\r').unwrap_or(trimmed)
}

/// Iterates over the lines of a body after stripping the trailing newline.
///
/// `\r` line endings are removed from every line.
pub fn response_lines(body: &str) -> impl Iterator<Item = &str> {
    strip_trailing_newline(body)
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

/// Parses `KEY=VALUE` lines into a map.
///
/// Each line is split on its first `=`, so values may themselves contain `=`.
/// Blank lines are skipped. Later duplicates overwrite earlier ones.
///
/// # Errors
///
/// Returns [`ProtocolError::MalformedLine`] for the first non-blank line that
/// has no `=`; the rest of the body is not inspected.
pub fn parse_equals_pairs(body: &str) -> Result<HashMap<String, String>, ProtocolError> {
    let mut fields = HashMap::new();
    for line in response_lines(body) {
        if line.is_empty() {
            continue;
        }
        let (key, value) = line
            .split_once('=')
            .ok_or_else(|| ProtocolError::malformed_line(line))?;
        fields.insert(key.to_string(), value.to_string());
    }
    Ok(fields)
}

/// Parses `KEY: VALUE` lines into ordered pairs.
///
/// Each line is split on its first `:` and one leading space is removed from
/// the value, so `URL: https://host/path` keeps the scheme colon intact.
/// Lines without a colon are skipped.
#[must_use]
pub fn parse_colon_pairs(body: &str) -> Vec<(String, String)> {
    response_lines(body)
        .filter_map(|line| line.split_once(':'))
        .map(|(key, value)| {
            let value = value.strip_prefix(' ').unwrap_or(value);
            (key.to_string(), value.to_string())
        })
        .collect()
}

/// Splits every line of a body into its `;`-separated fields.
///
/// Empty fields are preserved so positional indexing stays stable.
pub fn semicolon_records(body: &str) -> impl Iterator<Item = Vec<&str>> {
    response_lines(body).map(|line| line.split(';').collect())
}

/// Parses a decimal integer field, naming the field in the error.
///
/// Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns [`ProtocolError::InvalidNumber`] when the value is not an integer.
pub fn parse_number<T: std::str::FromStr>(field: &str, value: &str) -> Result<T, ProtocolError> {
    value
        .trim()
        .parse()
        .map_err(|_| ProtocolError::invalid_number(field, value))
}
