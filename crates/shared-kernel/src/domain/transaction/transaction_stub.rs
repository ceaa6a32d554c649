use std::any::Any;
use crate::domain::transaction::Transaction;

pub struct FakeTransaction;

impl Transaction for FakeTransaction {
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
