// crates/shared-kernel/src/infrastructure/postgres/patch/postgres_partial_update.rs

use sqlx::query_builder::Separated;
use sqlx::types::Json;
use sqlx::{Postgres, QueryBuilder};
use uuid::Uuid;
use crate::domain::patch::{PartialUpdate, PatchValue};

/// Ajoute `col = $n` pour chaque affectation retenue, séparées par des virgules.
pub fn push_assignments<'qb, 'args>(
    separated: &mut Separated<'qb, 'args, Postgres, &'static str>,
    update: &PartialUpdate,
) {
    for assignment in update.assignments() {
        separated.push(format!("{} = ", assignment.column()));

        match assignment.value().clone() {
            PatchValue::Text(v) => separated.push_bind_unseparated(v),
            PatchValue::NullableText(v) => separated.push_bind_unseparated(v),
            PatchValue::Bool(v) => separated.push_bind_unseparated(v),
            PatchValue::BigInt(v) => separated.push_bind_unseparated(v),
            PatchValue::Float(v) => separated.push_bind_unseparated(v),
            PatchValue::Uuid(v) => separated.push_bind_unseparated(v),
            PatchValue::Json(v) => separated.push_bind_unseparated(Json(v)),
        };
    }
}

/// `UPDATE <table> SET ..., version = version + 1 WHERE id = $id AND version = $expected`
///
/// Zéro ligne affectée signale soit une ligne absente, soit une version divergente.
pub fn build_versioned_update(
    update: &PartialUpdate,
    id: Uuid,
    expected_version: i32,
) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::<Postgres>::new(format!("UPDATE {} SET ", update.table()));

    {
        let mut separated = qb.separated(", ");
        push_assignments(&mut separated, update);
        separated.push("version = version + 1");
    }

    qb.push(" WHERE id = ")
        .push_bind(id)
        .push(" AND version = ")
        .push_bind(expected_version);

    if !update.skipped_media().is_empty() {
        tracing::debug!(
            table = update.table(),
            preserved = ?update.skipped_media(),
            "Media columns preserved by update guard"
        );
    }

    qb
}
