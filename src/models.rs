use serde_json::Value;

/// One joke as the remote service shapes it. Passed through untouched.
pub type JokeRecord = Value;

/// Text to show for a record: a bare string as-is, an object's `joke` field
/// if it has one, otherwise the record's JSON.
pub fn display_text(record: &JokeRecord) -> String {
    match record {
        Value::String(s) => s.clone(),
        Value::Object(map) => match map.get("joke") {
            Some(Value::String(s)) => s.clone(),
            _ => record.to_string(),
        },
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn display_text_prefers_the_joke_field() {
        assert_eq!(display_text(&json!("y")), "y");
        assert_eq!(display_text(&json!({"id": "1", "joke": "x"})), "x");
        assert_eq!(display_text(&json!({"id": "1"})), r#"{"id":"1"}"#);
        assert_eq!(display_text(&json!(42)), "42");
    }
}
