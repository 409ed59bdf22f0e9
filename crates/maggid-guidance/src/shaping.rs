use serde_json::{Map, Value};

/// Remove markdown code fences the model wraps JSON answers in
pub fn strip_fences(text: &str) -> String {
    text.replace("```json\n", "")
        .replace("```json", "")
        .replace("```\n", "")
        .replace("```", "")
        .trim()
        .to_owned()
}

/// Parse a model answer as JSON, wrapping it as `{wrap_key: text}` otherwise
pub fn parse_or_wrap(text: &str, wrap_key: &str) -> Value {
    let cleaned = strip_fences(text);

    match serde_json::from_str(&cleaned) {
        Ok(value) => value,
        Err(e) => {
            tracing::debug!(error = %e, "model answer is not JSON, returning it wrapped");
            Value::Object(wrap(wrap_key, cleaned))
        }
    }
}

/// Parse a model answer into a JSON object
///
/// Anything that is not an object ends up as `{"raw": text}`.
pub fn parse_object(text: &str) -> Map<String, Value> {
    let cleaned = strip_fences(text);

    match serde_json::from_str(&cleaned) {
        Ok(Value::Object(map)) => map,
        _ => wrap("raw", cleaned),
    }
}

fn wrap(key: &str, text: String) -> Map<String, Value> {
    let mut map = Map::new();
    map.insert(key.to_owned(), Value::String(text));
    map
}
