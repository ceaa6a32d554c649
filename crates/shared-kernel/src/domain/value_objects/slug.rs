// crates/shared-kernel/src/domain/value_objects/slug.rs

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;
use crate::domain::value_objects::ValueObject;
use crate::errors::{DomainError, Result};

static SLUG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("static slug regex"));

/// Identifiant lisible utilisé dans les URLs publiques (ex: "mummy-j2-treats")
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    pub const MIN_LEN: usize = 2;
    pub const MAX_LEN: usize = 80;

    pub fn try_new(value: impl Into<String>) -> Result<Self> {
        let slug = Self(value.into().trim().to_lowercase());
        slug.validate()?;
        Ok(slug)
    }

    /// Dérive un slug depuis un libellé libre : accents retirés, séparateurs fusionnés.
    pub fn from_name(name: &str) -> Result<Self> {
        let mut out = String::with_capacity(name.len());
        let mut pending_dash = false;

        // NFD sépare les diacritiques de leur lettre de base
        for c in name.nfd() {
            if c.is_ascii_alphanumeric() {
                if pending_dash && !out.is_empty() {
                    out.push('-');
                }
                pending_dash = false;
                out.push(c.to_ascii_lowercase());
            } else if !c.is_ascii() && !c.is_alphanumeric() {
                // marque combinante : ignorée
                continue;
            } else {
                pending_dash = true;
            }
        }

        let truncated: String = out.chars().take(Self::MAX_LEN).collect();
        Self::try_new(truncated.trim_end_matches('-'))
    }

    pub fn from_raw(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Slug {
    fn validate(&self) -> Result<()> {
        let len = self.0.chars().count();

        if !(Self::MIN_LEN..=Self::MAX_LEN).contains(&len) {
            return Err(DomainError::validation(
                "slug",
                format!("Must be between {} and {} characters", Self::MIN_LEN, Self::MAX_LEN),
            ));
        }

        if !SLUG_REGEX.is_match(&self.0) {
            return Err(DomainError::validation(
                "slug",
                "Lowercase letters, digits and single dashes only",
            ));
        }

        Ok(())
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Slug {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Slug {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Slug::try_new(s).map_err(serde::de::Error::custom)
    }
}
