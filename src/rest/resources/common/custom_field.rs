//! Product custom fields.

use serde::{Deserialize, Serialize};

/// A name/value pair scoped to one product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CustomField {
    /// The unique identifier of the custom field.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// The field name, e.g. `"ISBN"`.
    pub name: String,

    /// The field value.
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_field_round_trip_omits_id() {
        let field: CustomField =
            serde_json::from_str(r#"{"id": 6, "name": "ISBN", "value": "1234567890"}"#).unwrap();
        assert_eq!(field.id, Some(6));
        assert_eq!(field.name, "ISBN");

        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json, serde_json::json!({"name": "ISBN", "value": "1234567890"}));
    }
}
