//! XML row extraction for bulk ticket import
//!
//! The accepted shape is a `<tickets>` root holding `<ticket>` elements.
//! Within a ticket, `<tags>` collects its `<tag>` children into an
//! array, `<metadata>` collects its element children into an object, and
//! every other child becomes a scalar keyed by its tag name. An element
//! with no text maps to null, so a ticket written as `<category/>` is
//! reported downstream the same way as an absent JSON field.
//!
//! All functions are pure (no I/O) for easy testing.

use roxmltree::{Document, Node};
use serde_json::{Map, Value};

/// Extract candidate rows from XML text
///
/// # Arguments
///
/// * `text` - The decoded XML document
///
/// # Returns
///
/// One JSON object per `<ticket>` element in document order, or an error
/// message when the document does not parse or has the wrong root.
pub fn extract_rows(text: &str) -> Result<Vec<Value>, String> {
    let document =
        Document::parse(text).map_err(|error| format!("Failed to parse XML: {error}"))?;

    let root = document.root_element();
    if !root.has_tag_name("tickets") {
        return Err("XML root element must be <tickets>".to_string());
    }

    let mut rows = Vec::new();
    for ticket in root.children().filter(|node| node.has_tag_name("ticket")) {
        let mut row = Map::new();

        for child in ticket.children().filter(Node::is_element) {
            let name = child.tag_name().name();
            let value = match name {
                "tags" => Value::Array(
                    child
                        .children()
                        .filter(|node| node.has_tag_name("tag"))
                        .filter_map(|tag| tag.text())
                        .map(|tag| Value::String(tag.to_string()))
                        .collect(),
                ),
                "metadata" => {
                    let mut entries = Map::new();
                    for entry in child.children().filter(Node::is_element) {
                        entries.insert(entry.tag_name().name().to_string(), element_text(&entry));
                    }
                    Value::Object(entries)
                }
                _ => element_text(&child),
            };
            row.insert(name.to_string(), value);
        }

        rows.push(Value::Object(row));
    }

    Ok(rows)
}

/// Element text as a JSON value, null when the element is empty
fn element_text(node: &Node) -> Value {
    node.text()
        .map_or(Value::Null, |text| Value::String(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extracts_ticket_elements() {
        let text = r#"
            <tickets>
                <ticket>
                    <subject>Login broken</subject>
                    <description>The login page rejects my password.</description>
                    <customer_id>CUST-001</customer_id>
                    <category>account_access</category>
                    <tags>
                        <tag>urgent</tag>
                        <tag>login</tag>
                    </tags>
                    <metadata>
                        <source>web_form</source>
                        <browser>Firefox</browser>
                    </metadata>
                </ticket>
            </tickets>
        "#;

        let rows = extract_rows(text).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["subject"], json!("Login broken"));
        assert_eq!(rows[0]["tags"], json!(["urgent", "login"]));
        assert_eq!(
            rows[0]["metadata"],
            json!({"browser": "Firefox", "source": "web_form"})
        );
    }

    #[test]
    fn test_empty_element_maps_to_null() {
        let text = "<tickets><ticket><subject>Hi</subject><category/></ticket></tickets>";

        let rows = extract_rows(text).unwrap();

        assert_eq!(rows[0]["category"], Value::Null);
    }

    #[test]
    fn test_empty_tag_elements_are_dropped() {
        let text = "<tickets><ticket><tags><tag>kept</tag><tag></tag></tags></ticket></tickets>";

        let rows = extract_rows(text).unwrap();

        assert_eq!(rows[0]["tags"], json!(["kept"]));
    }

    #[test]
    fn test_ticket_without_metadata_has_no_metadata_key() {
        let text = "<tickets><ticket><subject>Flat</subject></ticket></tickets>";

        let rows = extract_rows(text).unwrap();

        assert!(!rows[0].as_object().unwrap().contains_key("metadata"));
    }

    #[test]
    fn test_non_ticket_children_are_ignored() {
        let text = "<tickets><note>skip me</note><ticket><subject>Hi</subject></ticket></tickets>";

        let rows = extract_rows(text).unwrap();

        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_empty_root_yields_no_rows() {
        assert_eq!(extract_rows("<tickets></tickets>").unwrap(), Vec::<Value>::new());
    }

    #[test]
    fn test_wrong_root_is_rejected() {
        let error = extract_rows("<records><ticket/></records>").unwrap_err();
        assert_eq!(error, "XML root element must be <tickets>");
    }

    #[test]
    fn test_malformed_document_reports_parse_failure() {
        let error = extract_rows("<tickets><ticket>").unwrap_err();
        assert!(error.starts_with("Failed to parse XML: "));
    }
}
