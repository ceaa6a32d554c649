// crates/shared-kernel/src/domain/patch/patch_value.rs

use serde_json::Value;
use uuid::Uuid;
use crate::domain::value_objects::MediaUrl;

/// Valeur typée d'une colonne dans un UPDATE partiel, indépendante du moteur SQL.
#[derive(Debug, Clone, PartialEq)]
pub enum PatchValue {
    Text(String),
    NullableText(Option<String>),
    Bool(bool),
    BigInt(i64),
    Float(f64),
    Uuid(Uuid),
    Json(Value),
}

impl PatchValue {
    /// Conversion d'une valeur JSON arbitraire (champs non média du point d'entrée dynamique)
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Null => Self::NullableText(None),
            Value::Bool(b) => Self::Bool(*b),
            Value::String(s) => Self::Text(s.clone()),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Self::BigInt(i),
                None => Self::Float(n.as_f64().unwrap_or_default()),
            },
            Value::Array(_) | Value::Object(_) => Self::Json(value.clone()),
        }
    }
}

impl From<String> for PatchValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for PatchValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<Option<String>> for PatchValue {
    fn from(value: Option<String>) -> Self {
        Self::NullableText(value)
    }
}

impl From<bool> for PatchValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for PatchValue {
    fn from(value: i64) -> Self {
        Self::BigInt(value)
    }
}

impl From<Uuid> for PatchValue {
    fn from(value: Uuid) -> Self {
        Self::Uuid(value)
    }
}

impl From<MediaUrl> for PatchValue {
    fn from(value: MediaUrl) -> Self {
        Self::Text(value.into())
    }
}
