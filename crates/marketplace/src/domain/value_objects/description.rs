// crates/marketplace/src/domain/value_objects/description.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use shared_kernel::domain::value_objects::ValueObject;
use shared_kernel::errors::{DomainError, Result};

/// Texte libre d'une boutique ou d'un produit.
/// Une description vide n'existe pas : l'absence se modélise par `Option::None`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct Description(String);

impl Description {
    pub const MAX_LENGTH: usize = 2000;

    pub fn try_new(value: impl Into<String>) -> Result<Self> {
        let raw = value.into();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(DomainError::validation(
                "description",
                "Description cannot be empty. Use null to clear it.",
            ));
        }

        let description = Self(Self::normalize_newlines(trimmed));
        description.validate()?;
        Ok(description)
    }

    pub fn from_raw(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Deux sauts de ligne consécutifs au maximum
    fn normalize_newlines(input: &str) -> String {
        let mut result = String::with_capacity(input.len());
        let mut newline_count = 0;
        for c in input.chars() {
            if c == '\n' || c == '\r' {
                newline_count += 1;
                if newline_count <= 2 {
                    result.push('\n');
                }
            } else {
                newline_count = 0;
                result.push(c);
            }
        }
        result
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Description {
    fn validate(&self) -> Result<()> {
        if self.0.chars().count() > Self::MAX_LENGTH {
            return Err(DomainError::validation(
                "description",
                format!("Description too long (max {})", Self::MAX_LENGTH),
            ));
        }
        Ok(())
    }
}

impl TryFrom<String> for Description {
    type Error = DomainError;
    fn try_from(value: String) -> Result<Self> {
        Self::try_new(value)
    }
}

impl From<Description> for String {
    fn from(description: Description) -> Self {
        description.0
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
