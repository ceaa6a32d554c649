// crates/marketplace/src/domain/repositories/product_repository.rs

use async_trait::async_trait;
use shared_kernel::application::pagination::{PageRequest, PageResponse};
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::errors::Result;

use crate::domain::entities::Product;
use crate::domain::params::PatchProductParams;
use crate::domain::value_objects::{ProductId, VendorId};

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn find_product_by_id(&self, id: &ProductId, tx: Option<&mut dyn Transaction>) -> Result<Option<Product>>;
    async fn list_products_by_vendor(&self, vendor_id: &VendorId, page: PageRequest) -> Result<PageResponse<Product>>;
    async fn create_product(&self, product: &Product, tx: &mut dyn Transaction) -> Result<()>;
    async fn patch_product_by_id(
        &self,
        id: &ProductId,
        expected_version: i32,
        params: &PatchProductParams,
        tx: &mut dyn Transaction,
    ) -> Result<()>;
}
