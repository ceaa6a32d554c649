use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};
use async_trait::async_trait;
use shared_kernel::application::pagination::{PageRequest, PageResponse};
use shared_kernel::domain::patch::PartialUpdate;
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::domain::value_objects::Slug;
use shared_kernel::errors::{DomainError, Result};

use crate::domain::entities::Vendor;
use crate::domain::params::PatchVendorParams;
use crate::domain::repositories::VendorRepository;
use crate::domain::value_objects::VendorId;

/// Repository en mémoire.
/// `patch_vendor_by_id` applique le patch sur la copie stockée et garde le `PartialUpdate`
/// généré pour que les tests puissent vérifier les colonnes réellement écrites.
#[derive(Default)]
pub struct VendorRepositoryStub {
    pub vendors: Mutex<Vec<Vendor>>,
    pub last_update: Mutex<Option<PartialUpdate>>,
    pub error_to_return: Mutex<Option<DomainError>>,
    pub conflicts_to_inject: AtomicU32,
    pub patch_calls: AtomicU32,
}

impl VendorRepositoryStub {
    pub fn with_vendor(vendor: Vendor) -> Self {
        let stub = Self::default();
        stub.vendors.lock().unwrap().push(vendor);
        stub
    }

    pub fn stored(&self, id: &VendorId) -> Option<Vendor> {
        self.vendors.lock().unwrap().iter().find(|v| v.id() == id).cloned()
    }

    fn check_error(&self) -> Result<()> {
        match self.error_to_return.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl VendorRepository for VendorRepositoryStub {
    async fn find_vendor_by_id(&self, id: &VendorId, _tx: Option<&mut dyn Transaction>) -> Result<Option<Vendor>> {
        self.check_error()?;
        Ok(self.stored(id))
    }

    async fn find_vendor_by_slug(&self, slug: &Slug) -> Result<Option<Vendor>> {
        self.check_error()?;
        Ok(self.vendors.lock().unwrap().iter().find(|v| v.slug() == slug).cloned())
    }

    async fn exists_vendor_by_slug(&self, slug: &Slug) -> Result<bool> {
        Ok(self.vendors.lock().unwrap().iter().any(|v| v.slug() == slug))
    }

    async fn list_active_vendors(&self, page: PageRequest) -> Result<PageResponse<Vendor>> {
        self.check_error()?;
        let vendors = self.vendors.lock().unwrap();
        let active: Vec<Vendor> = vendors.iter().filter(|v| v.is_active()).cloned().collect();
        let total = active.len() as u64;
        let items = active
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect();
        Ok(PageResponse::new(items, total, page))
    }

    async fn create_vendor(&self, vendor: &Vendor, _tx: &mut dyn Transaction) -> Result<()> {
        self.check_error()?;
        let mut vendors = self.vendors.lock().unwrap();
        if vendors.iter().any(|v| v.slug() == vendor.slug()) {
            return Err(DomainError::AlreadyExists {
                entity: "Vendor",
                field: "slug",
                value: vendor.slug().as_str().to_string(),
            });
        }
        vendors.push(vendor.clone());
        Ok(())
    }

    async fn patch_vendor_by_id(
        &self,
        id: &VendorId,
        expected_version: i32,
        params: &PatchVendorParams,
        _tx: &mut dyn Transaction,
    ) -> Result<()> {
        self.patch_calls.fetch_add(1, Ordering::SeqCst);
        self.check_error()?;

        if self
            .conflicts_to_inject
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
        {
            return Err(DomainError::ConcurrencyConflict { reason: "injected".into() });
        }

        let mut vendors = self.vendors.lock().unwrap();
        let stored = vendors
            .iter_mut()
            .find(|v| v.id() == id)
            .ok_or_else(|| DomainError::NotFound { entity: "Vendor", id: id.to_string() })?;

        if stored.version() != expected_version {
            return Err(DomainError::ConcurrencyConflict { reason: "version mismatch".into() });
        }

        stored.apply_patch(params)?;
        *self.last_update.lock().unwrap() = Some(params.to_partial_update());
        Ok(())
    }
}
