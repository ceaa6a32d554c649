// crates/shared-kernel/src/infrastructure/postgres/transactions/postgres_transaction_manager.rs

use std::future::Future;
use std::pin::Pin;
use sqlx::{Pool, Postgres};
use crate::domain::transaction::{TransactionManager, TxWork};
use crate::errors::Result;
use crate::infrastructure::postgres::mappers::SqlxErrorExt;
use crate::infrastructure::postgres::transactions::PostgresTransaction;

pub struct PostgresTransactionManager {
    pool: Pool<Postgres>,
}

impl PostgresTransactionManager {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

impl TransactionManager for PostgresTransactionManager {
    fn in_transaction<'a>(&'a self, work: TxWork<'a>) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
        Box::pin(async move {
            let tx = self.pool.begin().await.map_domain_infra("Failed to begin transaction")?;
            let mut wrapped = PostgresTransaction::new(tx);

            // En cas d'erreur, le drop de la transaction sqlx déclenche le ROLLBACK
            work(&mut wrapped).await?;

            wrapped
                .into_inner()
                .commit()
                .await
                .map_domain_infra("Failed to commit transaction")
        })
    }
}
