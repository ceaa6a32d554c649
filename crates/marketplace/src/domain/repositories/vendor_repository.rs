// crates/marketplace/src/domain/repositories/vendor_repository.rs

use async_trait::async_trait;
use shared_kernel::application::pagination::{PageRequest, PageResponse};
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::domain::value_objects::Slug;
use shared_kernel::errors::Result;

use crate::domain::entities::Vendor;
use crate::domain::params::PatchVendorParams;
use crate::domain::value_objects::VendorId;

#[async_trait]
pub trait VendorRepository: Send + Sync {
    async fn find_vendor_by_id(&self, id: &VendorId, tx: Option<&mut dyn Transaction>) -> Result<Option<Vendor>>;
    async fn find_vendor_by_slug(&self, slug: &Slug) -> Result<Option<Vendor>>;
    async fn exists_vendor_by_slug(&self, slug: &Slug) -> Result<bool>;
    async fn list_active_vendors(&self, page: PageRequest) -> Result<PageResponse<Vendor>>;
    async fn create_vendor(&self, vendor: &Vendor, tx: &mut dyn Transaction) -> Result<()>;

    /// UPDATE partiel verrouillé par `expected_version`.
    /// Zéro ligne touchée = `ConcurrencyConflict`.
    async fn patch_vendor_by_id(
        &self,
        id: &VendorId,
        expected_version: i32,
        params: &PatchVendorParams,
        tx: &mut dyn Transaction,
    ) -> Result<()>;
}
