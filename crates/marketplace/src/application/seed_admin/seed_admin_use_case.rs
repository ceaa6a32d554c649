// crates/marketplace/src/application/seed_admin/seed_admin_use_case.rs

use std::sync::Arc;
use shared_kernel::domain::transaction::{TransactionManager, TransactionManagerExt};
use shared_kernel::errors::Result;

use crate::application::seed_admin::SeedAdminCommand;
use crate::domain::entities::AdminAccount;
use crate::domain::repositories::AdminAccountRepository;
use crate::domain::services::PasswordHasher;

#[derive(Debug, Clone, PartialEq)]
pub enum SeedAdminOutcome {
    Created(AdminAccount),
    AlreadyPresent,
}

/// Création idempotente du compte administrateur : relancer le seed ne modifie rien.
pub struct SeedAdminUseCase {
    repo: Arc<dyn AdminAccountRepository>,
    hasher: Arc<dyn PasswordHasher>,
    tx_manager: Arc<dyn TransactionManager>,
}

impl SeedAdminUseCase {
    pub fn new(
        repo: Arc<dyn AdminAccountRepository>,
        hasher: Arc<dyn PasswordHasher>,
        tx_manager: Arc<dyn TransactionManager>,
    ) -> Self {
        Self { repo, hasher, tx_manager }
    }

    pub async fn execute(&self, cmd: SeedAdminCommand) -> Result<SeedAdminOutcome> {
        if self.repo.exists_admin_by_email(&cmd.email).await? {
            tracing::info!(email = %cmd.email, "Admin account already present, nothing to do");
            return Ok(SeedAdminOutcome::AlreadyPresent);
        }

        let password_hash = self.hasher.hash(&cmd.password)?;
        let admin = AdminAccount::new(cmd.email, cmd.display_name, password_hash);

        let repo = self.repo.clone();
        let to_save = admin.clone();
        let saved = self.tx_manager
            .run_in_transaction(move |tx| {
                Box::pin(async move { repo.create_admin(&to_save, tx).await })
            })
            .await;

        match saved {
            Ok(()) => {
                tracing::info!(admin_id = %admin.id(), email = %admin.email(), "Admin account created");
                Ok(SeedAdminOutcome::Created(admin))
            }
            // Un seed concurrent a gagné la course : même résultat qu'un compte déjà présent
            Err(e) if e.is_already_exists() => Ok(SeedAdminOutcome::AlreadyPresent),
            Err(e) => Err(e),
        }
    }
}
