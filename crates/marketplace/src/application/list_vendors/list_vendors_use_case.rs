// crates/marketplace/src/application/list_vendors/list_vendors_use_case.rs

use std::sync::Arc;
use shared_kernel::application::pagination::PageResponse;
use shared_kernel::errors::Result;

use crate::application::list_vendors::ListVendorsQuery;
use crate::domain::entities::Vendor;
use crate::domain::repositories::VendorRepository;

/// Annuaire public : uniquement les boutiques actives.
pub struct ListVendorsUseCase {
    repo: Arc<dyn VendorRepository>,
}

impl ListVendorsUseCase {
    pub fn new(repo: Arc<dyn VendorRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, query: ListVendorsQuery) -> Result<PageResponse<Vendor>> {
        self.repo.list_active_vendors(query.page.normalized()).await
    }
}
