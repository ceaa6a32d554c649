// crates/marketplace/src/application/create_product/create_product_use_case.rs

use std::sync::Arc;
use shared_kernel::domain::entities::EntityOptionExt;
use shared_kernel::domain::transaction::{TransactionManager, TransactionManagerExt};
use shared_kernel::errors::Result;

use crate::application::create_product::CreateProductCommand;
use crate::domain::entities::{Product, Vendor};
use crate::domain::repositories::{ProductRepository, VendorRepository};

pub struct CreateProductUseCase {
    vendor_repo: Arc<dyn VendorRepository>,
    product_repo: Arc<dyn ProductRepository>,
    tx_manager: Arc<dyn TransactionManager>,
}

impl CreateProductUseCase {
    pub fn new(
        vendor_repo: Arc<dyn VendorRepository>,
        product_repo: Arc<dyn ProductRepository>,
        tx_manager: Arc<dyn TransactionManager>,
    ) -> Self {
        Self { vendor_repo, product_repo, tx_manager }
    }

    pub async fn execute(&self, cmd: CreateProductCommand) -> Result<Product> {
        let vendor: Vendor = self.vendor_repo
            .find_vendor_by_id(&cmd.vendor_id, None)
            .await?
            .ok_or_not_found(cmd.vendor_id)?;

        let product = Product::builder(*vendor.id(), cmd.name, cmd.price)
            .with_optional_description(cmd.description)
            .with_optional_image_url(cmd.image_url.to_media_url()?)
            .with_availability(cmd.is_available)
            .build();

        let repo = self.product_repo.clone();
        let to_save = product.clone();
        self.tx_manager
            .run_in_transaction(move |tx| {
                Box::pin(async move { repo.create_product(&to_save, tx).await })
            })
            .await?;

        tracing::info!(product_id = %product.id(), vendor_id = %vendor.id(), "Product created");
        Ok(product)
    }
}
