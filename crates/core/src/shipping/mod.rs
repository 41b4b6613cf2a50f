//! Shipping cost resolution.
//!
//! Computes the delivery charge shown at checkout from the store's global
//! shipping settings: a free-shipping threshold, an ordered tier table, and
//! a chain of default charges. The resolver is a pure function of its inputs
//! and never fails - malformed settings fields degrade to the next fallback
//! in the chain rather than producing an error.

mod num;
mod resolve;
mod settings;

pub use num::{parse_finite, parse_finite_non_negative};
pub use resolve::{
    DEFAULT_EXPRESS_CHARGE, DEFAULT_STANDARD_CHARGE, resolve_shipping_cost,
};
pub use settings::{ShippingSettings, ShippingTierRule};
