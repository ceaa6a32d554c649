// crates/marketplace/src/domain/value_objects/business_name.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use unicode_normalization::UnicodeNormalization;
use shared_kernel::domain::value_objects::{Slug, ValueObject};
use shared_kernel::errors::{DomainError, Result};

/// Nom commercial d'un vendeur, affiché tel quel sur la boutique.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct BusinessName(String);

impl BusinessName {
    pub const MIN_LENGTH: usize = 2;
    pub const MAX_LENGTH: usize = 120;

    pub fn try_new(value: impl Into<String>) -> Result<Self> {
        let raw = value.into();

        // Contrôles retirés sauf les blancs (tab, saut de ligne), repliés ensuite en un espace
        let cleaned: String = raw.nfc().filter(|c| !c.is_control() || c.is_whitespace()).collect();
        let normalized = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");

        let name = Self(normalized);
        name.validate()?;
        Ok(name)
    }

    pub fn from_raw(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_slug(&self) -> Result<Slug> {
        Slug::from_name(&self.0)
    }
}

impl ValueObject for BusinessName {
    fn validate(&self) -> Result<()> {
        let count = self.0.chars().count();

        if count < Self::MIN_LENGTH || count > Self::MAX_LENGTH {
            return Err(DomainError::validation(
                "business_name",
                format!(
                    "Business name must be between {} and {} chars",
                    Self::MIN_LENGTH,
                    Self::MAX_LENGTH
                ),
            ));
        }
        Ok(())
    }
}

impl TryFrom<String> for BusinessName {
    type Error = DomainError;
    fn try_from(value: String) -> Result<Self> {
        Self::try_new(value)
    }
}

impl From<BusinessName> for String {
    fn from(name: BusinessName) -> Self {
        name.0
    }
}

impl fmt::Display for BusinessName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
