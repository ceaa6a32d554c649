// crates/marketplace/src/domain/value_objects/phone_number.rs

use std::sync::LazyLock;
use serde::{Deserialize, Serialize};
use regex::Regex;
use shared_kernel::domain::value_objects::ValueObject;
use shared_kernel::errors::{DomainError, Result};

// E.164 : un '+' suivi de 7 à 15 chiffres
static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+[1-9]\d{6,14}$").expect("static phone regex"));

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Ne garde que '+' et les chiffres avant validation
    pub fn try_new(value: impl Into<String>) -> Result<Self> {
        let cleaned: String = value
            .into()
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();

        let phone = Self(cleaned);
        phone.validate()?;
        Ok(phone)
    }

    pub fn from_raw(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for PhoneNumber {
    fn validate(&self) -> Result<()> {
        if !PHONE_REGEX.is_match(&self.0) {
            return Err(DomainError::validation(
                "phone",
                "Must be in E.164 format (e.g., +2348012345678)",
            ));
        }
        Ok(())
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = DomainError;
    fn try_from(value: String) -> Result<Self> {
        Self::try_new(value)
    }
}

impl From<PhoneNumber> for String {
    fn from(phone: PhoneNumber) -> Self {
        phone.0
    }
}

impl std::fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
