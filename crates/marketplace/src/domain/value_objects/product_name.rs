// crates/marketplace/src/domain/value_objects/product_name.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use shared_kernel::domain::value_objects::ValueObject;
use shared_kernel::errors::{DomainError, Result};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct ProductName(String);

impl ProductName {
    pub const MAX_LENGTH: usize = 120;

    pub fn try_new(value: impl Into<String>) -> Result<Self> {
        let raw = value.into();
        let cleaned: String = raw.chars().filter(|c| !c.is_control() || c.is_whitespace()).collect();
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
}

impl ValueObject for ProductName {
    fn validate(&self) -> Result<()> {
        if self.0.is_empty() {
            return Err(DomainError::validation("name", "Product name cannot be empty"));
        }

        if self.0.chars().count() > Self::MAX_LENGTH {
            return Err(DomainError::validation(
                "name",
                format!("Product name too long (max {})", Self::MAX_LENGTH),
            ));
        }
        Ok(())
    }
}

impl TryFrom<String> for ProductName {
    type Error = DomainError;
    fn try_from(value: String) -> Result<Self> {
        Self::try_new(value)
    }
}

impl From<ProductName> for String {
    fn from(name: ProductName) -> Self {
        name.0
    }
}

impl fmt::Display for ProductName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
