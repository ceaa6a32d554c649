// crates/shared-kernel/src/domain/transaction/transaction.rs

use std::any::Any;

/// Transaction opaque pour le domaine ; l'infrastructure la downcast vers son type concret.
pub trait Transaction: Send + Sync + Any {
    fn as_any_mut(&mut self) -> &mut dyn Any;
}
