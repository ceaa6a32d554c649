// crates/shared-kernel/src/domain/patch/partial_update.rs

use crate::domain::patch::PatchValue;

#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    column: &'static str,
    value: PatchValue,
}

impl Assignment {
    pub(crate) fn new(column: &'static str, value: PatchValue) -> Self {
        Self { column, value }
    }

    pub fn column(&self) -> &'static str {
        self.column
    }

    pub fn value(&self) -> &PatchValue {
        &self.value
    }
}

/// Résultat figé d'un `PartialUpdateBuilder`.
///
/// Les noms de table et de colonnes sont `'static` : ils viennent du code,
/// jamais du payload, et peuvent donc être injectés tels quels dans le SQL.
#[derive(Debug, Clone, PartialEq)]
pub struct PartialUpdate {
    table: &'static str,
    assignments: Vec<Assignment>,
    skipped_media: Vec<&'static str>,
}

impl PartialUpdate {
    pub(crate) fn new(
        table: &'static str,
        assignments: Vec<Assignment>,
        skipped_media: Vec<&'static str>,
    ) -> Self {
        Self {
            table,
            assignments,
            skipped_media,
        }
    }

    pub fn table(&self) -> &'static str {
        self.table
    }

    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    /// Colonnes média écartées par le garde (valeur stockée préservée)
    pub fn skipped_media(&self) -> &[&'static str] {
        &self.skipped_media
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    pub fn contains(&self, column: &str) -> bool {
        self.assignments.iter().any(|a| a.column == column)
    }

    pub fn value_of(&self, column: &str) -> Option<&PatchValue> {
        self.assignments
            .iter()
            .find(|a| a.column == column)
            .map(|a| &a.value)
    }

    pub fn columns(&self) -> Vec<&'static str> {
        self.assignments.iter().map(|a| a.column).collect()
    }
}
