// crates/marketplace/src/domain/value_objects/location.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use shared_kernel::domain::value_objects::ValueObject;
use shared_kernel::errors::{DomainError, Result};

/// Localisation libre d'une boutique (ville, quartier).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct Location(String);

impl Location {
    pub const MAX_LENGTH: usize = 160;

    pub fn try_new(value: impl Into<String>) -> Result<Self> {
        let raw = value.into();
        let normalized = raw.split_whitespace().collect::<Vec<_>>().join(" ");

        let location = Self(normalized);
        location.validate()?;
        Ok(location)
    }

    pub fn from_raw(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Location {
    fn validate(&self) -> Result<()> {
        let count = self.0.chars().count();
        if count == 0 || count > Self::MAX_LENGTH {
            return Err(DomainError::validation(
                "location",
                format!("Location must be between 1 and {} chars", Self::MAX_LENGTH),
            ));
        }
        Ok(())
    }
}

impl TryFrom<String> for Location {
    type Error = DomainError;
    fn try_from(value: String) -> Result<Self> {
        Self::try_new(value)
    }
}

impl From<Location> for String {
    fn from(location: Location) -> Self {
        location.0
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
