// crates/marketplace/src/infrastructure/postgres/utils/postgres_migrations.rs

use shared_kernel::infrastructure::postgres::utils::run_kernel_postgres_migrations;

/// Kernel d'abord : les triggers des tables marketplace en dépendent.
pub async fn run_marketplace_migrations(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    run_kernel_postgres_migrations(pool).await?;

    sqlx::migrate!("./migrations/postgres")
        .run(pool)
        .await?;

    tracing::info!("✅ Marketplace migrations applied");
    Ok(())
}
