use std::sync::Mutex;
use async_trait::async_trait;
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::errors::{DomainError, Result};

use crate::domain::entities::AdminAccount;
use crate::domain::repositories::AdminAccountRepository;
use crate::domain::value_objects::Email;

#[derive(Default)]
pub struct AdminAccountRepositoryStub {
    pub admins: Mutex<Vec<AdminAccount>>,
    pub error_to_return: Mutex<Option<DomainError>>,
}

#[async_trait]
impl AdminAccountRepository for AdminAccountRepositoryStub {
    async fn find_admin_by_email(&self, email: &Email) -> Result<Option<AdminAccount>> {
        Ok(self.admins.lock().unwrap().iter().find(|a| a.email() == email).cloned())
    }

    async fn exists_admin_by_email(&self, email: &Email) -> Result<bool> {
        if let Some(err) = self.error_to_return.lock().unwrap().clone() {
            return Err(err);
        }
        Ok(self.admins.lock().unwrap().iter().any(|a| a.email() == email))
    }

    async fn create_admin(&self, admin: &AdminAccount, _tx: &mut dyn Transaction) -> Result<()> {
        self.admins.lock().unwrap().push(admin.clone());
        Ok(())
    }
}
