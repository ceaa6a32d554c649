// crates/shared-kernel/src/domain/media/media_candidate.rs

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use crate::domain::media::should_update_media;
use crate::domain::value_objects::MediaUrl;
use crate::errors::Result;

/// Valeur brute reçue pour un champ média dans une requête de mise à jour partielle.
///
/// Dans un payload JSON, un champ absent donne `Missing` (via `#[serde(default)]`),
/// `null` donne `Null` et tout type autre qu'une chaîne donne `NonString`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MediaCandidate {
    #[default]
    Missing,
    Null,
    NonString,
    Empty,
    Blank,
    Provided(String),
}

impl MediaCandidate {
    pub fn from_json(value: Option<&Value>) -> Self {
        match value {
            None => Self::Missing,
            Some(Value::Null) => Self::Null,
            Some(Value::String(raw)) => Self::from_text(raw.as_str()),
            Some(_) => Self::NonString,
        }
    }

    pub fn from_text(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        if raw.is_empty() {
            Self::Empty
        } else if raw.trim().is_empty() {
            Self::Blank
        } else {
            Self::Provided(raw)
        }
    }

    /// URL à écrire si le garde l'accepte, `None` si la valeur stockée doit être préservée.
    pub fn to_media_url(&self) -> Result<Option<MediaUrl>> {
        match self {
            Self::Provided(raw) if should_update_media(self) => MediaUrl::try_new(raw.as_str()).map(Some),
            _ => Ok(None),
        }
    }
}

impl From<Option<String>> for MediaCandidate {
    fn from(value: Option<String>) -> Self {
        value.map(Self::from_text).unwrap_or_default()
    }
}

impl From<String> for MediaCandidate {
    fn from(value: String) -> Self {
        Self::from_text(value)
    }
}

impl From<&str> for MediaCandidate {
    fn from(value: &str) -> Self {
        Self::from_text(value)
    }
}

impl<'de> Deserialize<'de> for MediaCandidate {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_json(Some(&value)))
    }
}
