// crates/marketplace/src/domain/repositories/admin_account_repository.rs

use async_trait::async_trait;
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::errors::Result;

use crate::domain::entities::AdminAccount;
use crate::domain::value_objects::Email;

#[async_trait]
pub trait AdminAccountRepository: Send + Sync {
    async fn find_admin_by_email(&self, email: &Email) -> Result<Option<AdminAccount>>;
    async fn exists_admin_by_email(&self, email: &Email) -> Result<bool>;
    async fn create_admin(&self, admin: &AdminAccount, tx: &mut dyn Transaction) -> Result<()>;
}
