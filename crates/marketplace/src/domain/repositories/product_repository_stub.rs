use std::sync::Mutex;
use async_trait::async_trait;
use shared_kernel::application::pagination::{PageRequest, PageResponse};
use shared_kernel::domain::patch::PartialUpdate;
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::errors::{DomainError, Result};

use crate::domain::entities::Product;
use crate::domain::params::PatchProductParams;
use crate::domain::repositories::ProductRepository;
use crate::domain::value_objects::{ProductId, VendorId};

#[derive(Default)]
pub struct ProductRepositoryStub {
    pub products: Mutex<Vec<Product>>,
    pub last_update: Mutex<Option<PartialUpdate>>,
    pub error_to_return: Mutex<Option<DomainError>>,
}

impl ProductRepositoryStub {
    pub fn with_product(product: Product) -> Self {
        let stub = Self::default();
        stub.products.lock().unwrap().push(product);
        stub
    }

    pub fn stored(&self, id: &ProductId) -> Option<Product> {
        self.products.lock().unwrap().iter().find(|p| p.id() == id).cloned()
    }

    fn check_error(&self) -> Result<()> {
        match self.error_to_return.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryStub {
    async fn find_product_by_id(&self, id: &ProductId, _tx: Option<&mut dyn Transaction>) -> Result<Option<Product>> {
        self.check_error()?;
        Ok(self.stored(id))
    }

    async fn list_products_by_vendor(&self, vendor_id: &VendorId, page: PageRequest) -> Result<PageResponse<Product>> {
        self.check_error()?;
        let products = self.products.lock().unwrap();
        let owned: Vec<Product> = products.iter().filter(|p| p.vendor_id() == vendor_id).cloned().collect();
        let total = owned.len() as u64;
        let items = owned
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect();
        Ok(PageResponse::new(items, total, page))
    }

    async fn create_product(&self, product: &Product, _tx: &mut dyn Transaction) -> Result<()> {
        self.check_error()?;
        self.products.lock().unwrap().push(product.clone());
        Ok(())
    }

    async fn patch_product_by_id(
        &self,
        id: &ProductId,
        expected_version: i32,
        params: &PatchProductParams,
        _tx: &mut dyn Transaction,
    ) -> Result<()> {
        self.check_error()?;
        let mut products = self.products.lock().unwrap();
        let stored = products
            .iter_mut()
            .find(|p| p.id() == id)
            .ok_or_else(|| DomainError::NotFound { entity: "Product", id: id.to_string() })?;

        if stored.version() != expected_version {
            return Err(DomainError::ConcurrencyConflict { reason: "version mismatch".into() });
        }

        stored.apply_patch(params)?;
        *self.last_update.lock().unwrap() = Some(params.to_partial_update());
        Ok(())
    }
}
