// crates/shared-kernel/src/infrastructure/postgres/factories/postgres_context.rs

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::infrastructure::postgres::factories::{PostgresConfig, PostgresContextBuilder};

pub struct PostgresContext {
    pool: PgPool,
    config: PostgresConfig,
}

impl PostgresContext {
    /// Builder alimenté par l'environnement (`<PREFIX>_DB_URL`, ...)
    pub fn builder(prefix: &str) -> AppResult<PostgresContextBuilder> {
        PostgresContextBuilder::from_env(prefix)
    }

    pub fn pool(&self) -> PgPool {
        self.pool.clone()
    }

    pub fn config(&self) -> PostgresConfig {
        self.config
    }

    pub(crate) async fn restore(builder: PostgresContextBuilder) -> AppResult<Self> {
        let config = PostgresConfig::new(
            builder.max_connections,
            builder.min_connections,
            builder.connect_timeout,
        );

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(config.connect_timeout)
            .connect(&builder.url)
            .await
            .map_err(|e| {
                AppError::new(
                    ErrorCode::ServiceUnavailable,
                    format!("Postgres connection failed: {}", e),
                )
            })?;

        tracing::info!(
            max = config.max_connections,
            min = config.min_connections,
            "🐘 Postgres pool ready"
        );

        Ok(Self { pool, config })
    }
}
