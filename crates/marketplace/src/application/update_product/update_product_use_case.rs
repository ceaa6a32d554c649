// crates/marketplace/src/application/update_product/update_product_use_case.rs

use std::sync::Arc;
use shared_kernel::domain::entities::EntityOptionExt;
use shared_kernel::domain::transaction::{TransactionManager, TransactionManagerExt};
use shared_kernel::errors::Result;
use shared_kernel::infrastructure::retry::{with_retry, RetryConfig};

use crate::application::update_product::UpdateProductCommand;
use crate::domain::entities::Product;
use crate::domain::repositories::ProductRepository;

pub struct UpdateProductUseCase {
    repo: Arc<dyn ProductRepository>,
    tx_manager: Arc<dyn TransactionManager>,
}

impl UpdateProductUseCase {
    pub fn new(repo: Arc<dyn ProductRepository>, tx_manager: Arc<dyn TransactionManager>) -> Self {
        Self { repo, tx_manager }
    }

    pub async fn execute(&self, command: UpdateProductCommand) -> Result<Product> {
        with_retry(RetryConfig::default(), || async {
            self.try_execute_once(&command).await
        }).await
    }

    async fn try_execute_once(&self, cmd: &UpdateProductCommand) -> Result<Product> {
        let mut product = self.repo.find_product_by_id(&cmd.product_id, None)
            .await?
            .ok_or_not_found(cmd.product_id)?;
        let expected_version = product.version();

        if !product.apply_patch(&cmd.params)? {
            return Ok(product);
        }

        let repo = self.repo.clone();
        let product_id = cmd.product_id;
        let params = cmd.params.clone();
        self.tx_manager.run_in_transaction(move |tx| {
            Box::pin(async move {
                repo.patch_product_by_id(&product_id, expected_version, &params, tx).await
            })
        }).await?;

        tracing::info!(product_id = %product.id(), version = product.version(), "Product updated");
        Ok(product)
    }
}
