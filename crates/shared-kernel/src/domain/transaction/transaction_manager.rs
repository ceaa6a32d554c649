// crates/shared-kernel/src/domain/transaction/transaction_manager.rs

use std::future::Future;
use std::pin::Pin;
use crate::domain::transaction::Transaction;
use crate::errors::Result;

pub type TxFuture<'t> = Pin<Box<dyn Future<Output = Result<()>> + Send + 't>>;

/// Unité de travail exécutée dans une transaction. Elle ne fait qu'emprunter la transaction :
/// le commit (ou le rollback en cas d'erreur) reste à la charge du manager.
pub type TxWork<'a> = Box<dyn for<'t> FnOnce(&'t mut dyn Transaction) -> TxFuture<'t> + Send + 'a>;

pub trait TransactionManager: Send + Sync {
    fn in_transaction<'a>(&'a self, work: TxWork<'a>) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>>;
}

pub trait TransactionManagerExt: TransactionManager {
    fn run_in_transaction<'a, F>(&'a self, work: F) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>>
    where
        F: for<'t> FnOnce(&'t mut dyn Transaction) -> TxFuture<'t> + Send + 'a,
    {
        self.in_transaction(Box::new(work))
    }
}

impl<T: TransactionManager + ?Sized> TransactionManagerExt for T {}
