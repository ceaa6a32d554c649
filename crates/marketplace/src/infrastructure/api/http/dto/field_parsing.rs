// crates/marketplace/src/infrastructure/api/http/dto/field_parsing.rs

use serde::{Deserialize, Deserializer};
use shared_kernel::errors::Result;

/// Distingue un champ absent (`None`) d'un `null` explicite (`Some(None)`).
/// À utiliser avec `#[serde(default, deserialize_with = "double_option")]`.
pub fn double_option<'de, T, D>(deserializer: D) -> std::result::Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Champ texte optionnel d'une création : absent ou blanc = non renseigné.
pub fn parse_optional<T>(value: Option<String>, parse: impl FnOnce(String) -> Result<T>) -> Result<Option<T>> {
    match value {
        Some(raw) if !raw.trim().is_empty() => parse(raw).map(Some),
        _ => Ok(None),
    }
}

/// Champ texte effaçable d'un PATCH : absent = inchangé, `null` ou blanc = effacé.
pub fn parse_nullable<T>(
    value: Option<Option<String>>,
    parse: impl FnOnce(String) -> Result<T>,
) -> Result<Option<Option<T>>> {
    match value {
        None => Ok(None),
        Some(inner) => parse_optional(inner, parse).map(Some),
    }
}
