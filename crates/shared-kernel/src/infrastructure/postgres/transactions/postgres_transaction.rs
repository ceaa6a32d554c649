// crates/shared-kernel/src/infrastructure/postgres/transactions/postgres_transaction.rs

use std::future::Future;
use std::pin::Pin;
use sqlx::{PgConnection, PgPool, Postgres, Transaction as PostgresTx};
use crate::domain::transaction::Transaction;
use crate::errors::{DomainError, Result};

pub struct PostgresTransaction {
    inner: PostgresTx<'static, Postgres>,
}

impl PostgresTransaction {
    pub fn new(tx: PostgresTx<'static, Postgres>) -> Self {
        Self { inner: tx }
    }

    pub fn get_mut(&mut self) -> &mut PostgresTx<'static, Postgres> {
        &mut self.inner
    }

    pub fn into_inner(self) -> PostgresTx<'static, Postgres> {
        self.inner
    }
}

impl Transaction for PostgresTransaction {
    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
}

impl dyn Transaction + '_ {
    /// Exécute `f` sur la transaction fournie, sinon sur une connexion du pool.
    pub async fn execute_on<'a, F, T>(
        pool: &PgPool,
        tx: Option<&'a mut dyn Transaction>,
        f: F,
    ) -> Result<T>
    where
        F: for<'b> FnOnce(&'b mut PgConnection) -> Pin<Box<dyn Future<Output = Result<T>> + Send + 'b>> + Send,
    {
        match tx {
            Some(t) => {
                let sqlx_tx = t.downcast_mut_sqlx()?;
                f(&mut **sqlx_tx).await
            }
            None => {
                let mut conn = pool
                    .acquire()
                    .await
                    .map_err(|e| DomainError::Infrastructure(format!("Pool acquisition failed: {}", e)))?;
                f(&mut *conn).await
            }
        }
    }
}

pub trait TransactionExt {
    fn downcast_mut_sqlx(&mut self) -> Result<&mut PostgresTx<'static, Postgres>>;
}

impl TransactionExt for dyn Transaction + '_ {
    fn downcast_mut_sqlx(&mut self) -> Result<&mut PostgresTx<'static, Postgres>> {
        self.as_any_mut()
            .downcast_mut::<PostgresTransaction>()
            .map(|tx| tx.get_mut())
            .ok_or_else(|| DomainError::Internal("Type mismatch: expected PostgresTransaction".into()))
    }
}
