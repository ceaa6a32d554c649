use shared_kernel::application::pagination::PageRequest;
use shared_kernel::errors::Result;

use crate::domain::value_objects::VendorId;

#[derive(Debug, Clone, Copy)]
pub struct ListVendorProductsQuery {
    pub vendor_id: VendorId,
    pub page: PageRequest,
}

impl ListVendorProductsQuery {
    pub fn try_new(vendor_id: &str, page: PageRequest) -> Result<Self> {
        Ok(Self { vendor_id: VendorId::try_new(vendor_id)?, page })
    }
}
