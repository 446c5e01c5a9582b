//! Loosely typed wire values.
//!
//! Some BigCommerce fields change shape between endpoints or API generations.
//! They are modelled as untagged unions so an unexpected shape still fails
//! to decode instead of being silently coerced.

use serde::{Deserialize, Serialize};

/// A date rendered by legacy endpoints as a PHP `DateTime` object.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct LegacyDate {
    /// The local date and time, e.g. `"2024-03-01 09:30:00.000000"`.
    pub date: String,

    /// PHP timezone kind (1: offset, 2: abbreviation, 3: identifier).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone_type: Option<i64>,

    /// The timezone, e.g. `"UTC"` or `"+00:00"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

/// A date that is either a structured legacy object or a plain string.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::rest::resources::common::DateOrString;
///
/// let text: DateOrString = serde_json::from_str(r#""Fri, 01 Mar 2024 09:30:00 +0000""#).unwrap();
/// assert_eq!(text.as_str(), "Fri, 01 Mar 2024 09:30:00 +0000");
///
/// let legacy: DateOrString = serde_json::from_str(
///     r#"{"date": "2024-03-01 09:30:00.000000", "timezone_type": 1, "timezone": "+00:00"}"#,
/// ).unwrap();
/// assert_eq!(legacy.as_str(), "2024-03-01 09:30:00.000000");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum DateOrString {
    /// `{date, timezone_type, timezone}`.
    Legacy(LegacyDate),
    /// Any textual rendering.
    Text(String),
}

impl DateOrString {
    /// Returns the textual date, whichever shape it arrived in.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Legacy(date) => &date.date,
            Self::Text(text) => text,
        }
    }
}

/// A number that some endpoints render as a string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum NumberOrString {
    /// A JSON number.
    Number(f64),
    /// A JSON string, usually holding a decimal.
    Text(String),
}

impl NumberOrString {
    /// Returns the numeric value, parsing the textual form.
    ///
    /// Returns `None` when the text is not a number.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(text) => text.trim().parse().ok(),
        }
    }
}

impl From<f64> for NumberOrString {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}
