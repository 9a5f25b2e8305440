//! JSON row extraction for bulk ticket import
//!
//! The accepted shape is a top-level array of ticket objects. Elements
//! are handed to the shared pipeline as-is, so a malformed element is a
//! row-level failure there, not a file-level failure here.
//!
//! All functions are pure (no I/O) for easy testing.

use serde_json::Value;

/// Extract candidate rows from JSON text
///
/// # Arguments
///
/// * `text` - The decoded JSON document
///
/// # Returns
///
/// The array elements in document order, or an error message when the
/// document does not parse or is not an array.
pub fn extract_rows(text: &str) -> Result<Vec<Value>, String> {
    let document: Value =
        serde_json::from_str(text).map_err(|error| format!("Failed to parse JSON: {error}"))?;

    match document {
        Value::Array(rows) => Ok(rows),
        _ => Err("JSON must be an array of ticket objects".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn test_extracts_array_elements_in_order() {
        let text = r#"[{"subject": "First"}, {"subject": "Second"}]"#;

        let rows = extract_rows(text).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["subject"], json!("First"));
        assert_eq!(rows[1]["subject"], json!("Second"));
    }

    #[test]
    fn test_empty_array_yields_no_rows() {
        assert_eq!(extract_rows("[]").unwrap(), Vec::<Value>::new());
    }

    #[test]
    fn test_non_object_elements_pass_through() {
        // shape of elements is the pipeline's concern, not this parser's
        let rows = extract_rows("[42, null]").unwrap();

        assert_eq!(rows, vec![json!(42), Value::Null]);
    }

    #[rstest]
    #[case::object(r#"{"subject": "First"}"#)]
    #[case::string(r#""tickets""#)]
    #[case::number("7")]
    fn test_non_array_document_is_rejected(#[case] text: &str) {
        let error = extract_rows(text).unwrap_err();
        assert_eq!(error, "JSON must be an array of ticket objects");
    }

    #[test]
    fn test_malformed_document_reports_parse_failure() {
        let error = extract_rows("[{\"subject\": ").unwrap_err();
        assert!(error.starts_with("Failed to parse JSON: "));
    }
}
