// crates/shared-kernel/src/domain/media/media_guard.rs

use serde_json::Value;
use crate::domain::media::MediaCandidate;

/// Décide si un champ média doit figurer dans l'ordre de mise à jour.
///
/// `true` uniquement pour une chaîne dont la version sans espaces de bordure
/// n'est pas vide. Toute autre valeur (absente, null, non-chaîne, vide, blanche)
/// préserve l'URL déjà stockée : le champ est alors exclu de l'UPDATE.
pub fn should_update_media(candidate: &MediaCandidate) -> bool {
    match candidate {
        MediaCandidate::Provided(raw) => !raw.trim().is_empty(),
        MediaCandidate::Missing
        | MediaCandidate::Null
        | MediaCandidate::NonString
        | MediaCandidate::Empty
        | MediaCandidate::Blank => false,
    }
}

/// Variante pour les payloads dynamiques (valeur JSON brute, éventuellement absente).
pub fn should_update_media_value(value: Option<&Value>) -> bool {
    should_update_media(&MediaCandidate::from_json(value))
}
