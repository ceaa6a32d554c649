// crates/marketplace/src/application/list_vendor_products/list_vendor_products_use_case.rs

use std::sync::Arc;
use shared_kernel::application::pagination::PageResponse;
use shared_kernel::domain::entities::EntityOptionExt;
use shared_kernel::errors::Result;

use crate::application::list_vendor_products::ListVendorProductsQuery;
use crate::domain::entities::{Product, Vendor};
use crate::domain::repositories::{ProductRepository, VendorRepository};

pub struct ListVendorProductsUseCase {
    vendor_repo: Arc<dyn VendorRepository>,
    product_repo: Arc<dyn ProductRepository>,
}

impl ListVendorProductsUseCase {
    pub fn new(vendor_repo: Arc<dyn VendorRepository>, product_repo: Arc<dyn ProductRepository>) -> Self {
        Self { vendor_repo, product_repo }
    }

    pub async fn execute(&self, query: ListVendorProductsQuery) -> Result<PageResponse<Product>> {
        // 404 explicite plutôt qu'une liste vide pour une boutique inconnue
        let _: Vendor = self.vendor_repo
            .find_vendor_by_id(&query.vendor_id, None)
            .await?
            .ok_or_not_found(query.vendor_id)?;

        self.product_repo
            .list_products_by_vendor(&query.vendor_id, query.page.normalized())
            .await
    }
}
