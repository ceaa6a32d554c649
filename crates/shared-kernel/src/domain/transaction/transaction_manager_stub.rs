// crates/shared-kernel/src/domain/transaction/transaction_manager_stub.rs

use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use crate::domain::transaction::{TransactionManager, TxWork};
use crate::domain::transaction::transaction_stub::FakeTransaction;
use crate::errors::Result;

/// Manager de test : exécute le travail sur une `FakeTransaction` et compte les commits.
#[derive(Default)]
pub struct StubTxManager {
    commits: AtomicUsize,
}

impl StubTxManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commits(&self) -> usize {
        self.commits.load(Ordering::SeqCst)
    }
}

impl TransactionManager for StubTxManager {
    fn in_transaction<'a>(&'a self, work: TxWork<'a>) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
        Box::pin(async move {
            let mut tx = FakeTransaction;
            work(&mut tx).await?;
            self.commits.fetch_add(1, Ordering::SeqCst);
            Ok(())
        })
    }
}
