// crates/shared-kernel/src/domain/patch/partial_update_builder.rs

use serde_json::Value;
use crate::domain::media::MediaCandidate;
use crate::domain::patch::{Assignment, PartialUpdate, PatchValue};

/// Construit un UPDATE partiel (sémantique PATCH).
///
/// Les colonnes média passent obligatoirement par le garde (`should_update_media`) :
/// aucun appelant ne peut écraser une URL existante avec une valeur vide.
/// Une colonne renseignée deux fois garde la dernière valeur.
#[derive(Debug)]
pub struct PartialUpdateBuilder {
    table: &'static str,
    assignments: Vec<Assignment>,
    skipped_media: Vec<&'static str>,
}

impl PartialUpdateBuilder {
    pub fn new(table: &'static str) -> Self {
        Self {
            table,
            assignments: Vec::new(),
            skipped_media: Vec::new(),
        }
    }

    pub fn set(mut self, column: &'static str, value: impl Into<PatchValue>) -> Self {
        self.push(column, value.into());
        self
    }

    /// `None` = champ omis par le client, la colonne n'est pas touchée
    pub fn set_opt<V: Into<PatchValue>>(self, column: &'static str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.set(column, v),
            None => self,
        }
    }

    /// La valeur écrite passe par `MediaUrl` : le garde décide de l'inclusion,
    /// `MediaUrl` de la forme. Une valeur acceptée par le garde mais invalide
    /// n'atteint jamais la colonne (le rejet 400 se fait en amont, dans l'entité).
    pub fn media(mut self, column: &'static str, candidate: &MediaCandidate) -> Self {
        match candidate.to_media_url() {
            Ok(Some(url)) => {
                self.skipped_media.retain(|c| *c != column);
                self.push(column, PatchValue::from(url));
            }
            Ok(None) => self.skip_media(column),
            Err(e) => {
                tracing::debug!(column, error = %e, "Invalid media URL left out of update");
                self.skip_media(column);
            }
        }
        self
    }

    /// Point d'entrée générique `(colonne, valeur brute, est_media)`.
    /// Le garde n'est appliqué qu'aux colonnes média ; une valeur absente est ignorée.
    pub fn field(self, column: &'static str, candidate: Option<&Value>, is_media: bool) -> Self {
        if is_media {
            return self.media(column, &MediaCandidate::from_json(candidate));
        }

        match candidate {
            Some(value) => self.set(column, PatchValue::from_json(value)),
            None => self,
        }
    }

    pub fn build(self) -> PartialUpdate {
        PartialUpdate::new(self.table, self.assignments, self.skipped_media)
    }

    fn skip_media(&mut self, column: &'static str) {
        if !self.skipped_media.contains(&column) {
            self.skipped_media.push(column);
        }
    }

    fn push(&mut self, column: &'static str, value: PatchValue) {
        match self.assignments.iter_mut().find(|a| a.column() == column) {
            Some(existing) => *existing = Assignment::new(column, value),
            None => self.assignments.push(Assignment::new(column, value)),
        }
    }
}
