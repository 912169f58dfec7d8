use serde::de::DeserializeOwned;

/// Parse a serde-deserializable enum from user input.
///
/// Input is trimmed, lowercased, and hyphens become underscores so
/// `--status in-progress` matches the stored `in_progress` value.
pub fn parse_enum<T: DeserializeOwned>(raw: &str, field: &str) -> anyhow::Result<T> {
    let normalized = raw.trim().to_lowercase().replace('-', "_");
    serde_json::from_value(serde_json::Value::String(normalized))
        .map_err(|_| anyhow::anyhow!("invalid {field} '{raw}'"))
}

#[cfg(test)]
mod tests {
    use belt_core::TaskStatus;

    use super::parse_enum;

    #[test]
    fn parses_snake_case_value() {
        let status: TaskStatus = parse_enum("in_progress", "status").expect("should parse");
        assert_eq!(status, TaskStatus::InProgress);
    }

    #[test]
    fn normalizes_hyphens_and_case() {
        let status: TaskStatus = parse_enum("In-Progress", "status").expect("should parse");
        assert_eq!(status, TaskStatus::InProgress);
    }

    #[test]
    fn rejects_unknown_value_with_field_name() {
        let err = parse_enum::<TaskStatus>("done", "status").expect_err("should fail");
        assert!(err.to_string().contains("invalid status 'done'"));
    }
}
