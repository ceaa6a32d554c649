// crates/marketplace/src/application/update_vendor/update_vendor_use_case.rs

use std::sync::Arc;
use shared_kernel::domain::entities::EntityOptionExt;
use shared_kernel::domain::transaction::{TransactionManager, TransactionManagerExt};
use shared_kernel::errors::Result;
use shared_kernel::infrastructure::retry::{with_retry, RetryConfig};

use crate::application::update_vendor::UpdateVendorCommand;
use crate::domain::entities::Vendor;
use crate::domain::repositories::VendorRepository;

pub struct UpdateVendorUseCase {
    repo: Arc<dyn VendorRepository>,
    tx_manager: Arc<dyn TransactionManager>,
    retry: RetryConfig,
}

impl UpdateVendorUseCase {
    pub fn new(repo: Arc<dyn VendorRepository>, tx_manager: Arc<dyn TransactionManager>) -> Self {
        Self { repo, tx_manager, retry: RetryConfig::default() }
    }

    pub fn with_retry_config(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    pub async fn execute(&self, command: UpdateVendorCommand) -> Result<Vendor> {
        with_retry(self.retry, || async {
            self.try_execute_once(&command).await
        }).await
    }

    async fn try_execute_once(&self, cmd: &UpdateVendorCommand) -> Result<Vendor> {
        // 1. Lecture de l'état courant (version attendue pour le verrou optimiste)
        let mut vendor = self.repo.find_vendor_by_id(&cmd.vendor_id, None)
            .await?
            .ok_or_not_found(cmd.vendor_id)?;
        let expected_version = vendor.version();

        // 2. Application en mémoire : les médias vides sont écartés par le garde
        if !vendor.apply_patch(&cmd.params)? {
            tracing::debug!(vendor_id = %cmd.vendor_id, "Vendor patch changes nothing, skipping write");
            return Ok(vendor);
        }

        // 3. UPDATE partiel, uniquement les colonnes acceptées
        let repo = self.repo.clone();
        let vendor_id = cmd.vendor_id;
        let params = cmd.params.clone();
        self.tx_manager.run_in_transaction(move |tx| {
            Box::pin(async move {
                repo.patch_vendor_by_id(&vendor_id, expected_version, &params, tx).await
            })
        }).await?;

        tracing::info!(vendor_id = %vendor.id(), version = vendor.version(), "Vendor updated");
        Ok(vendor)
    }
}
