use serde_json::Value;

/// Text printed for a projected value. Strings print raw, `null` prints
/// nothing, everything else as pretty JSON.
pub fn render(value: &Value) -> serde_json::Result<Option<String>> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        other => serde_json::to_string_pretty(other).map(Some),
    }
}
