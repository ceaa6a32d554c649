// crates/marketplace/src/domain/value_objects/price.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use shared_kernel::domain::value_objects::ValueObject;
use shared_kernel::errors::{DomainError, Result};

/// Prix en centimes (plus petite unité de la devise), jamais négatif.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "i64", into = "i64")]
pub struct Price(i64);

impl Price {
    pub const MAX_CENTS: i64 = 10_000_000_000;

    pub fn try_new(cents: i64) -> Result<Self> {
        let price = Self(cents);
        price.validate()?;
        Ok(price)
    }

    pub fn from_raw(cents: i64) -> Self {
        Self(cents)
    }

    pub fn cents(&self) -> i64 {
        self.0
    }
}

impl ValueObject for Price {
    fn validate(&self) -> Result<()> {
        if self.0 < 0 {
            return Err(DomainError::validation("price_cents", "Price cannot be negative"));
        }

        if self.0 > Self::MAX_CENTS {
            return Err(DomainError::validation(
                "price_cents",
                format!("Price cannot exceed {} cents", Self::MAX_CENTS),
            ));
        }
        Ok(())
    }
}

impl TryFrom<i64> for Price {
    type Error = DomainError;
    fn try_from(value: i64) -> Result<Self> {
        Self::try_new(value)
    }
}

impl From<Price> for i64 {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}
