//! Quantity-based pricing rules.

use serde::{Deserialize, Serialize};

use super::NumberOrString;

/// How a bulk pricing rule's `amount` is applied.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BulkPricingType {
    /// `amount` is subtracted from the unit price.
    Price,
    /// `amount` is a percentage discount.
    Percent,
    /// `amount` replaces the unit price.
    Fixed,
}

/// A discount applied when the ordered quantity falls within a range.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::rest::resources::common::{BulkPricingRule, BulkPricingType};
///
/// let rule: BulkPricingRule = serde_json::from_str(
///     r#"{"id": 1, "quantity_min": 10, "quantity_max": 50, "type": "percent", "amount": "5"}"#,
/// ).unwrap();
///
/// assert_eq!(rule.rule_type, BulkPricingType::Percent);
/// assert_eq!(rule.amount.as_f64(), Some(5.0));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BulkPricingRule {
    /// The unique identifier of the rule.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// Smallest quantity the rule applies to.
    pub quantity_min: u32,

    /// Largest quantity the rule applies to; `0` means unbounded.
    pub quantity_max: u32,

    /// How `amount` is applied.
    #[serde(rename = "type")]
    pub rule_type: BulkPricingType,

    /// The discount amount.
    pub amount: NumberOrString,
}
