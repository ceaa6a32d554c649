// crates/marketplace/src/application/get_vendor/get_vendor_use_case.rs

use std::sync::Arc;
use shared_kernel::domain::entities::EntityOptionExt;
use shared_kernel::errors::Result;

use crate::application::get_vendor::GetVendorQuery;
use crate::domain::entities::Vendor;
use crate::domain::repositories::VendorRepository;
use crate::domain::value_objects::VendorLookup;

pub struct GetVendorUseCase {
    repo: Arc<dyn VendorRepository>,
}

impl GetVendorUseCase {
    pub fn new(repo: Arc<dyn VendorRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, query: GetVendorQuery) -> Result<Vendor> {
        match query.lookup {
            VendorLookup::Id(id) => self.repo.find_vendor_by_id(&id, None).await?.ok_or_not_found(id),
            VendorLookup::Slug(slug) => self.repo.find_vendor_by_slug(&slug).await?.ok_or_not_found(slug),
        }
    }
}
