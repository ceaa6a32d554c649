// crates/marketplace/src/domain/value_objects/display_name.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use shared_kernel::domain::value_objects::ValueObject;
use shared_kernel::errors::{DomainError, Result};

/// Nom affiché d'un compte d'administration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct DisplayName(String);

impl DisplayName {
    pub const MAX_LENGTH: usize = 80;

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

impl ValueObject for DisplayName {
    fn validate(&self) -> Result<()> {
        let count = self.0.chars().count();

        if count == 0 {
            return Err(DomainError::validation("display_name", "Display name cannot be empty"));
        }

        if count > Self::MAX_LENGTH {
            return Err(DomainError::validation(
                "display_name",
                format!("Display name too long (max {})", Self::MAX_LENGTH),
            ));
        }
        Ok(())
    }
}

impl Default for DisplayName {
    fn default() -> Self {
        Self("Administrator".to_string())
    }
}

impl TryFrom<String> for DisplayName {
    type Error = DomainError;
    fn try_from(value: String) -> Result<Self> {
        Self::try_new(value)
    }
}

impl From<DisplayName> for String {
    fn from(name: DisplayName) -> Self {
        name.0
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
