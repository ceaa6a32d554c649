mod transaction;
mod transaction_manager;

pub use transaction::Transaction;
pub use transaction_manager::{TransactionManager, TransactionManagerExt, TxFuture, TxWork};

#[cfg(feature = "test-utils")]
mod transaction_stub;
#[cfg(feature = "test-utils")]
mod transaction_manager_stub;

#[cfg(feature = "test-utils")]
pub use transaction_stub::FakeTransaction;
#[cfg(feature = "test-utils")]
pub use transaction_manager_stub::StubTxManager;
