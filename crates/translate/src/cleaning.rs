//! Turning raw model text into JSON.

use nlq_core::{AppError, AppResult};
use serde_json::Value;

/// Strip surrounding whitespace and every code-fence marker from a reply.
///
/// Only the literal markers ```` ```json ```` and ```` ``` ```` are removed;
/// nothing else about the text is repaired.
pub fn strip_code_fences(reply: &str) -> String {
    reply.trim().replace("```json", "").replace("```", "")
}

/// Parse a model reply as JSON after fence stripping.
pub fn parse_reply(reply: &str) -> AppResult<Value> {
    let cleaned = strip_code_fences(reply);
    serde_json::from_str(&cleaned)
        .map_err(|e| AppError::Translation(format!("Invalid JSON: {}", e)))
}
