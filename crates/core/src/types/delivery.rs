//! Delivery option selected at checkout.

use serde::{Deserialize, Serialize};

/// Delivery option for a shipping quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeliveryOption {
    #[default]
    Standard,
    Express,
}

impl DeliveryOption {
    /// The canonical wire form (`STANDARD` / `EXPRESS`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "STANDARD",
            Self::Express => "EXPRESS",
        }
    }
}

impl std::fmt::Display for DeliveryOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing a [`DeliveryOption`] from its string form.
#[derive(Debug, thiserror::Error)]
#[error("invalid delivery option: {0}")]
pub struct ParseDeliveryOptionError(String);

impl std::str::FromStr for DeliveryOption {
    type Err = ParseDeliveryOptionError;

    // Option matching is case-insensitive on the wire
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("STANDARD") {
            Ok(Self::Standard)
        } else if s.eq_ignore_ascii_case("EXPRESS") {
            Ok(Self::Express)
        } else {
            Err(ParseDeliveryOptionError(s.to_string()))
        }
    }
}
