// crates/shared-kernel/src/domain/value_objects/media_url.rs

use std::fmt;
use serde::{Deserialize, Serialize};
use crate::domain::value_objects::ValueObject;
use crate::errors::{DomainError, Result};

/// URL d'un média déjà téléversé (image, vidéo).
/// Chemins relatifs acceptés : le CDN et le stockage local coexistent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct MediaUrl(String);

impl MediaUrl {
    pub const MAX_LEN: usize = 2048;

    pub fn try_new(value: impl Into<String>) -> Result<Self> {
        let raw = value.into();
        let url = Self(raw.trim().to_string());
        url.validate()?;
        Ok(url)
    }

    /// Reconstruction depuis la base, sans validation
    pub fn new_unchecked(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_absolute(&self) -> bool {
        self.0.starts_with("https://") || self.0.starts_with("http://")
    }
}

impl ValueObject for MediaUrl {
    fn validate(&self) -> Result<()> {
        if self.0.is_empty() {
            return Err(DomainError::validation("media_url", "Media URL cannot be blank"));
        }

        if self.0.len() > Self::MAX_LEN {
            return Err(DomainError::validation(
                "media_url",
                format!("Media URL cannot exceed {} bytes", Self::MAX_LEN),
            ));
        }

        if self.0.chars().any(|c| c.is_control()) {
            return Err(DomainError::validation(
                "media_url",
                "Media URL cannot contain control characters",
            ));
        }

        Ok(())
    }
}

impl fmt::Display for MediaUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for MediaUrl {
    type Error = DomainError;
    fn try_from(value: String) -> Result<Self> {
        Self::try_new(value)
    }
}

impl From<MediaUrl> for String {
    fn from(url: MediaUrl) -> Self {
        url.0
    }
}
