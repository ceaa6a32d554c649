// crates/shared-kernel/src/infrastructure/postgres/utils/postgres_migrations.rs

/// Objets SQL partagés (fonctions de trigger) dont dépendent les migrations des modules.
pub async fn run_kernel_postgres_migrations(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    let schema = include_str!("../../../../migrations/postgres/202601010000_foundation.sql");
    sqlx::raw_sql(schema).execute(pool).await?;
    tracing::info!("✅ Shared kernel migrations applied");
    Ok(())
}
