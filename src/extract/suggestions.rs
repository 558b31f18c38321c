use crate::error::{PurError, Result};
use log::debug;
use serde_json::Value;

/// Decode the body of an RPC `type=suggest` response.
///
/// The endpoint answers with a flat JSON array; string entries are taken
/// verbatim and anything else is rendered as JSON text.
pub fn decode_suggestions(body: &str) -> Result<Vec<String>> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| PurError::ParseError(format!("Invalid JSON from suggestion endpoint: {e}")))?;

    let Value::Array(entries) = value else {
        return Err(PurError::ParseError(
            "Suggestion endpoint did not return a JSON array".to_string(),
        ));
    };

    let suggestions: Vec<String> = entries
        .into_iter()
        .map(|entry| match entry {
            Value::String(s) => s,
            other => other.to_string(),
        })
        .collect();

    debug!("Decoded {} suggestions", suggestions.len());
    Ok(suggestions)
}
