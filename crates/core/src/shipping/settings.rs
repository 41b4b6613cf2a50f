//! Global shipping settings snapshot.
//!
//! Owned by the settings service; this crate only reads it. Numeric fields
//! are kept as raw JSON values so the lenient-parse policy in [`super::num`]
//! is the single place that interprets them.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Read-only snapshot of the store's shipping configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShippingSettings {
    /// Subtotal at which STANDARD delivery becomes free. Ignored unless it
    /// parses to a finite positive number.
    pub free_shipping_min_subtotal: Option<JsonValue>,
    pub delivery_charge_standard: Option<JsonValue>,
    pub delivery_charge_express: Option<JsonValue>,
    /// Legacy flat charge predating the standard/express split.
    pub delivery_charge: Option<JsonValue>,
    /// Ordered tier table; first matching rule wins.
    pub shipping_cost_tiers: Vec<ShippingTierRule>,
}

/// One row of the shipping tier table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShippingTierRule {
    /// City the rule is scoped to; empty or absent means all cities.
    pub city: Option<String>,
    /// Delivery option the rule applies to; empty or absent is a wildcard.
    pub option: Option<String>,
    /// Inclusive minimum subtotal; unparseable values default to 0.
    pub min_subtotal: Option<JsonValue>,
    /// Inclusive maximum subtotal; absent or non-positive means unbounded.
    pub max_subtotal: Option<JsonValue>,
    /// Charge for a matching cart; unparseable or negative disables the rule.
    pub cost: Option<JsonValue>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_settings_deserialize_camel_case() {
        let settings: ShippingSettings = serde_json::from_value(json!({
            "freeShippingMinSubtotal": 200,
            "deliveryChargeStandard": "25",
            "shippingCostTiers": [
                {"option": "EXPRESS", "minSubtotal": 0, "maxSubtotal": 150, "cost": 15}
            ]
        }))
        .unwrap();

        assert_eq!(settings.free_shipping_min_subtotal, Some(json!(200)));
        assert_eq!(settings.delivery_charge_standard, Some(json!("25")));
        assert_eq!(settings.shipping_cost_tiers.len(), 1);
        assert_eq!(settings.shipping_cost_tiers[0].cost, Some(json!(15)));
    }

    #[test]
    fn test_settings_default_is_empty() {
        let settings = ShippingSettings::default();
        assert!(settings.shipping_cost_tiers.is_empty());
        assert!(settings.delivery_charge.is_none());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let settings: ShippingSettings =
            serde_json::from_value(json!({"currency": "USD", "deliveryCharge": 30})).unwrap();
        assert_eq!(settings.delivery_charge, Some(json!(30)));
    }
}
