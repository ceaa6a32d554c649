// crates/marketplace/tests/common/setup_infrastructure.rs

use sqlx::PgPool;
use testcontainers::ContainerAsync;
use testcontainers_modules::postgres::Postgres as PostgresImage;
use marketplace::infrastructure::postgres::utils::run_marketplace_migrations;
use shared_kernel::infrastructure::postgres::utils::setup_test_postgres;

pub async fn setup_postgres_test_db() -> (PgPool, ContainerAsync<PostgresImage>) {
    let (pool, container) = setup_test_postgres().await;

    run_marketplace_migrations(&pool)
        .await
        .expect("Failed to apply marketplace migrations");

    (pool, container)
}
