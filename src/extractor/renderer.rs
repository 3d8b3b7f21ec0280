use serde_json::Value;

/// Render a decoded JSON value for the output files.
///
/// Strings render bare (no quotes); numbers, booleans, and null use their
/// JSON display form; arrays and objects render as compact JSON, or pretty
/// JSON when `pretty` is set.
pub fn render_value(value: &Value, pretty: bool) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(_) | Value::Object(_) if pretty => {
            serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
        }
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_renders_without_quotes() {
        assert_eq!(render_value(&json!("log-e"), false), "log-e");
        assert_eq!(render_value(&json!(""), false), "");
    }

    #[test]
    fn test_scalar_rendering() {
        assert_eq!(render_value(&json!(42), false), "42");
        assert_eq!(render_value(&json!(1.5), false), "1.5");
        assert_eq!(render_value(&json!(true), false), "true");
        assert_eq!(render_value(&json!(null), false), "null");
    }

    #[test]
    fn test_compact_composite_rendering() {
        assert_eq!(render_value(&json!([1, 2]), false), "[1,2]");
        assert_eq!(
            render_value(&json!({"round": 1, "units": []}), false),
            r#"{"round":1,"units":[]}"#
        );
    }

    #[test]
    fn test_pretty_composite_rendering() {
        assert_eq!(render_value(&json!([1, 2]), true), "[\n  1,\n  2\n]");
        // pretty only affects composites
        assert_eq!(render_value(&json!("log-e"), true), "log-e");
        assert_eq!(render_value(&json!(42), true), "42");
    }
}
