//! Extraction of JSON objects embedded in free-text model responses
//!
//! Models tend to wrap the requested JSON in prose or code fences. The scanner
//! takes the first `{` and walks forward tracking brace depth until the
//! object closes. Braces inside string literals do not count, and backslash
//! escapes inside strings are honoured.

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Reasons a model response did not yield a JSON object
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResponseParseError {
    /// The text contains no `{`
    #[error("response contains no JSON object")]
    NoObject,

    /// A `{` was found but the object never closes
    #[error("JSON object starting at byte {start} is not closed")]
    Unbalanced {
        /// Byte offset of the opening brace
        start: usize,
    },

    /// The balanced span is not valid JSON, or not of the expected shape
    #[error("invalid JSON object: {0}")]
    InvalidJson(String),
}

/// Byte range of the first balanced top-level `{...}` span
fn object_span(text: &str) -> Result<(usize, usize), ResponseParseError> {
    let start = text.find('{').ok_or(ResponseParseError::NoObject)?;

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, byte) in text.as_bytes()[start..].iter().enumerate() {
        if in_string {
            match byte {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {},
            }
            continue;
        }

        match byte {
            b'"' => in_string = true,
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Ok((start, start + offset + 1));
                }
            },
            _ => {},
        }
    }

    Err(ResponseParseError::Unbalanced { start })
}

/// Return the first balanced top-level JSON object span without parsing it
///
/// # Errors
///
/// Returns [`ResponseParseError::NoObject`] or [`ResponseParseError::Unbalanced`].
pub fn find_json_object(text: &str) -> Result<&str, ResponseParseError> {
    let (start, end) = object_span(text)?;
    Ok(&text[start..end])
}

/// Extract and parse the first balanced top-level JSON object in `text`
///
/// # Errors
///
/// Returns an error if no object is present, the object is not closed, or
/// the span does not parse as JSON.
pub fn extract_json_object(text: &str) -> Result<Value, ResponseParseError> {
    let span = find_json_object(text)?;
    serde_json::from_str(span).map_err(|e| ResponseParseError::InvalidJson(e.to_string()))
}

/// Extract the first JSON object in `text` and deserialize it into `T`
///
/// # Errors
///
/// Returns [`ResponseParseError::InvalidJson`] if the object does not match `T`,
/// plus every error of [`extract_json_object`].
pub fn parse_json_object<T: DeserializeOwned>(text: &str) -> Result<T, ResponseParseError> {
    let value = extract_json_object(text)?;
    serde_json::from_value(value).map_err(|e| ResponseParseError::InvalidJson(e.to_string()))
}
