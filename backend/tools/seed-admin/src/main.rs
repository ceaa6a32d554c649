// backend/tools/seed-admin/src/main.rs

use std::sync::Arc;
use anyhow::Context;
use tracing_subscriber::EnvFilter;

use marketplace::application::seed_admin::{SeedAdminCommand, SeedAdminOutcome, SeedAdminUseCase};
use marketplace::infrastructure::postgres::repositories::PostgresAdminAccountRepository;
use marketplace::infrastructure::postgres::utils::run_marketplace_migrations;
use marketplace::infrastructure::security::Pbkdf2PasswordHasher;
use shared_kernel::infrastructure::postgres::factories::PostgresContext;
use shared_kernel::infrastructure::postgres::transactions::PostgresTransactionManager;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let email = std::env::var("ADMIN_EMAIL").context("ADMIN_EMAIL must be set")?;
    let password = std::env::var("ADMIN_PASSWORD").context("ADMIN_PASSWORD must be set")?;
    let display_name = std::env::var("ADMIN_DISPLAY_NAME").ok();

    let command = SeedAdminCommand::try_new(&email, password, display_name.as_deref())?;

    let pg_ctx = PostgresContext::builder("MARKETPLACE")?.build().await?;
    run_marketplace_migrations(&pg_ctx.pool()).await?;

    let use_case = SeedAdminUseCase::new(
        Arc::new(PostgresAdminAccountRepository::new(pg_ctx.pool())),
        Arc::new(Pbkdf2PasswordHasher::new()),
        Arc::new(PostgresTransactionManager::new(pg_ctx.pool())),
    );

    match use_case.execute(command).await? {
        SeedAdminOutcome::Created(admin) => {
            tracing::info!(email = %admin.email(), id = %admin.id(), "✅ Admin account created");
        }
        SeedAdminOutcome::AlreadyPresent => {
            tracing::info!(%email, "Admin account already present, nothing to do");
        }
    }

    Ok(())
}
