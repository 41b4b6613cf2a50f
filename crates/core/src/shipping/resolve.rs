//! The shipping cost resolver.

use crate::types::DeliveryOption;

use super::num::{parse_finite, parse_finite_non_negative};
use super::settings::{ShippingSettings, ShippingTierRule};

/// Default STANDARD charge when no setting provides one.
pub const DEFAULT_STANDARD_CHARGE: f64 = 20.0;
/// Default EXPRESS charge when no setting provides one.
pub const DEFAULT_EXPRESS_CHARGE: f64 = 60.0;

/// Compute the delivery charge for a cart subtotal and delivery option.
///
/// Resolution order:
/// 1. Free STANDARD shipping when `freeShippingMinSubtotal` is a finite
///    positive number and the subtotal reaches it.
/// 2. First matching city-unrestricted rule in the ordered tier table.
/// 3. The default charge chain for the option
///    (`deliveryChargeStandard` -> legacy `deliveryCharge` ->
///    [`DEFAULT_STANDARD_CHARGE`]; `deliveryChargeExpress` ->
///    [`DEFAULT_EXPRESS_CHARGE`]).
///
/// Never fails: malformed settings fields fall through to the next step.
#[must_use]
pub fn resolve_shipping_cost(
    subtotal: f64,
    option: DeliveryOption,
    settings: &ShippingSettings,
) -> f64 {
    if option == DeliveryOption::Standard && standard_is_free(subtotal, settings) {
        return 0.0;
    }

    if let Some(cost) = first_matching_tier(subtotal, option, &settings.shipping_cost_tiers) {
        return cost;
    }

    match option {
        DeliveryOption::Standard => parse_finite_non_negative(
            settings.delivery_charge_standard.as_ref(),
            parse_finite_non_negative(settings.delivery_charge.as_ref(), DEFAULT_STANDARD_CHARGE),
        ),
        DeliveryOption::Express => parse_finite_non_negative(
            settings.delivery_charge_express.as_ref(),
            DEFAULT_EXPRESS_CHARGE,
        ),
    }
}

/// Whether the free-shipping threshold applies. STANDARD only.
fn standard_is_free(subtotal: f64, settings: &ShippingSettings) -> bool {
    parse_finite(settings.free_shipping_min_subtotal.as_ref())
        .filter(|min| *min > 0.0)
        .is_some_and(|min| subtotal >= min)
}

/// Scan the ordered tier table and return the first matching rule's cost.
///
/// Source order is the only tie-break; there is no priority field.
fn first_matching_tier(
    subtotal: f64,
    option: DeliveryOption,
    tiers: &[ShippingTierRule],
) -> Option<f64> {
    tiers
        .iter()
        .find_map(|rule| tier_cost(rule, subtotal, option))
}

/// The rule's cost if it applies to this subtotal and option.
///
/// City-scoped rules never match here: the default quote ignores them.
/// A rule whose cost does not parse to a finite non-negative number is
/// skipped entirely rather than erroring.
fn tier_cost(rule: &ShippingTierRule, subtotal: f64, option: DeliveryOption) -> Option<f64> {
    if rule.city.as_deref().is_some_and(|c| !c.trim().is_empty()) {
        return None;
    }

    if let Some(rule_option) = rule.option.as_deref().map(str::trim).filter(|o| !o.is_empty())
        && !rule_option.eq_ignore_ascii_case(option.as_str())
    {
        return None;
    }

    let min = parse_finite(rule.min_subtotal.as_ref()).unwrap_or(0.0);
    if subtotal < min {
        return None;
    }

    if let Some(max) = parse_finite(rule.max_subtotal.as_ref()).filter(|m| *m > 0.0)
        && subtotal > max
    {
        return None;
    }

    parse_finite(rule.cost.as_ref()).filter(|c| *c >= 0.0)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < f64::EPSILON
    }

    fn tier(option: &str, min: i64, max: i64, cost: i64) -> ShippingTierRule {
        ShippingTierRule {
            option: Some(option.to_string()),
            min_subtotal: Some(json!(min)),
            max_subtotal: Some(json!(max)),
            cost: Some(json!(cost)),
            ..ShippingTierRule::default()
        }
    }

    #[test]
    fn test_free_shipping_threshold_reached() {
        let settings = ShippingSettings {
            free_shipping_min_subtotal: Some(json!(200)),
            ..ShippingSettings::default()
        };
        assert!(close(
            resolve_shipping_cost(250.0, DeliveryOption::Standard, &settings),
            0.0
        ));
        // Boundary is inclusive
        assert!(close(
            resolve_shipping_cost(200.0, DeliveryOption::Standard, &settings),
            0.0
        ));
    }

    #[test]
    fn test_free_shipping_does_not_apply_to_express() {
        let settings = ShippingSettings {
            free_shipping_min_subtotal: Some(json!(200)),
            ..ShippingSettings::default()
        };
        assert!(close(
            resolve_shipping_cost(250.0, DeliveryOption::Express, &settings),
            DEFAULT_EXPRESS_CHARGE
        ));
    }

    #[test]
    fn test_free_shipping_ignores_non_positive_threshold() {
        for bad in [json!(0), json!(-10), json!("soon"), json!(null)] {
            let settings = ShippingSettings {
                free_shipping_min_subtotal: Some(bad),
                delivery_charge_standard: Some(json!(20)),
                ..ShippingSettings::default()
            };
            assert!(close(
                resolve_shipping_cost(250.0, DeliveryOption::Standard, &settings),
                20.0
            ));
        }
    }

    #[test]
    fn test_default_standard_charge_with_empty_tiers() {
        let settings = ShippingSettings {
            delivery_charge_standard: Some(json!(20)),
            ..ShippingSettings::default()
        };
        assert!(close(
            resolve_shipping_cost(50.0, DeliveryOption::Standard, &settings),
            20.0
        ));
    }

    #[test]
    fn test_tier_match_wins_over_default() {
        let settings = ShippingSettings {
            delivery_charge_express: Some(json!(60)),
            shipping_cost_tiers: vec![tier("EXPRESS", 0, 150, 15)],
            ..ShippingSettings::default()
        };
        assert!(close(
            resolve_shipping_cost(100.0, DeliveryOption::Express, &settings),
            15.0
        ));
    }

    #[test]
    fn test_tier_bounds_are_inclusive() {
        let settings = ShippingSettings {
            shipping_cost_tiers: vec![tier("STANDARD", 50, 150, 10)],
            ..ShippingSettings::default()
        };
        assert!(close(resolve_shipping_cost(50.0, DeliveryOption::Standard, &settings), 10.0));
        assert!(close(resolve_shipping_cost(150.0, DeliveryOption::Standard, &settings), 10.0));
        assert!(close(
            resolve_shipping_cost(49.0, DeliveryOption::Standard, &settings),
            DEFAULT_STANDARD_CHARGE
        ));
        assert!(close(
            resolve_shipping_cost(151.0, DeliveryOption::Standard, &settings),
            DEFAULT_STANDARD_CHARGE
        ));
    }

    #[test]
    fn test_non_positive_max_means_unbounded() {
        let settings = ShippingSettings {
            shipping_cost_tiers: vec![ShippingTierRule {
                option: Some("STANDARD".to_string()),
                min_subtotal: Some(json!(100)),
                max_subtotal: Some(json!(0)),
                cost: Some(json!(5)),
                ..ShippingTierRule::default()
            }],
            ..ShippingSettings::default()
        };
        assert!(close(
            resolve_shipping_cost(1_000_000.0, DeliveryOption::Standard, &settings),
            5.0
        ));
    }

    #[test]
    fn test_negative_cost_rule_is_skipped() {
        let settings = ShippingSettings {
            shipping_cost_tiers: vec![
                ShippingTierRule {
                    option: Some("STANDARD".to_string()),
                    cost: Some(json!(-5)),
                    ..ShippingTierRule::default()
                },
                tier("STANDARD", 0, 0, 12),
            ],
            ..ShippingSettings::default()
        };
        // Falls through the malformed rule to the next tier
        assert!(close(
            resolve_shipping_cost(80.0, DeliveryOption::Standard, &settings),
            12.0
        ));
    }

    #[test]
    fn test_city_scoped_rule_is_never_selected() {
        let settings = ShippingSettings {
            shipping_cost_tiers: vec![ShippingTierRule {
                city: Some("Dhaka".to_string()),
                option: Some("STANDARD".to_string()),
                cost: Some(json!(1)),
                ..ShippingTierRule::default()
            }],
            delivery_charge_standard: Some(json!(20)),
            ..ShippingSettings::default()
        };
        assert!(close(
            resolve_shipping_cost(80.0, DeliveryOption::Standard, &settings),
            20.0
        ));
    }

    #[test]
    fn test_empty_city_is_no_restriction() {
        let settings = ShippingSettings {
            shipping_cost_tiers: vec![ShippingTierRule {
                city: Some(String::new()),
                option: Some("STANDARD".to_string()),
                cost: Some(json!(8)),
                ..ShippingTierRule::default()
            }],
            ..ShippingSettings::default()
        };
        assert!(close(
            resolve_shipping_cost(80.0, DeliveryOption::Standard, &settings),
            8.0
        ));
    }

    #[test]
    fn test_empty_option_is_wildcard_and_match_is_case_insensitive() {
        let wildcard = ShippingTierRule {
            cost: Some(json!(9)),
            ..ShippingTierRule::default()
        };
        let settings = ShippingSettings {
            shipping_cost_tiers: vec![wildcard],
            ..ShippingSettings::default()
        };
        assert!(close(resolve_shipping_cost(10.0, DeliveryOption::Standard, &settings), 9.0));
        assert!(close(resolve_shipping_cost(10.0, DeliveryOption::Express, &settings), 9.0));

        let mixed_case = ShippingSettings {
            shipping_cost_tiers: vec![ShippingTierRule {
                option: Some("express".to_string()),
                cost: Some(json!(11)),
                ..ShippingTierRule::default()
            }],
            ..ShippingSettings::default()
        };
        assert!(close(resolve_shipping_cost(10.0, DeliveryOption::Express, &mixed_case), 11.0));
    }

    #[test]
    fn test_first_matching_tier_wins() {
        let settings = ShippingSettings {
            shipping_cost_tiers: vec![tier("STANDARD", 0, 0, 7), tier("STANDARD", 0, 0, 3)],
            ..ShippingSettings::default()
        };
        assert!(close(
            resolve_shipping_cost(40.0, DeliveryOption::Standard, &settings),
            7.0
        ));
    }

    #[test]
    fn test_unparseable_min_defaults_to_zero() {
        let settings = ShippingSettings {
            shipping_cost_tiers: vec![ShippingTierRule {
                option: Some("STANDARD".to_string()),
                min_subtotal: Some(json!("??")),
                cost: Some(json!(4)),
                ..ShippingTierRule::default()
            }],
            ..ShippingSettings::default()
        };
        assert!(close(
            resolve_shipping_cost(1.0, DeliveryOption::Standard, &settings),
            4.0
        ));
    }

    #[test]
    fn test_legacy_delivery_charge_chain() {
        // deliveryChargeStandard missing -> legacy deliveryCharge
        let legacy = ShippingSettings {
            delivery_charge: Some(json!(35)),
            ..ShippingSettings::default()
        };
        assert!(close(
            resolve_shipping_cost(50.0, DeliveryOption::Standard, &legacy),
            35.0
        ));

        // both missing -> literal default
        let empty = ShippingSettings::default();
        assert!(close(
            resolve_shipping_cost(50.0, DeliveryOption::Standard, &empty),
            DEFAULT_STANDARD_CHARGE
        ));
        assert!(close(
            resolve_shipping_cost(50.0, DeliveryOption::Express, &empty),
            DEFAULT_EXPRESS_CHARGE
        ));
    }

    #[test]
    fn test_malformed_standard_charge_falls_through_to_legacy() {
        let settings = ShippingSettings {
            delivery_charge_standard: Some(json!("free-ish")),
            delivery_charge: Some(json!("25")),
            ..ShippingSettings::default()
        };
        assert!(close(
            resolve_shipping_cost(50.0, DeliveryOption::Standard, &settings),
            25.0
        ));
    }

    #[test]
    fn test_numeric_strings_are_accepted() {
        let settings = ShippingSettings {
            free_shipping_min_subtotal: Some(json!("200")),
            ..ShippingSettings::default()
        };
        assert!(close(
            resolve_shipping_cost(250.0, DeliveryOption::Standard, &settings),
            0.0
        ));
    }
}
