use shared_kernel::errors::Result;

use crate::domain::value_objects::VendorLookup;

#[derive(Debug, Clone)]
pub struct GetVendorQuery {
    pub lookup: VendorLookup,
}

impl GetVendorQuery {
    /// `key` vient du chemin `/vendors/{key}` : UUID ou slug
    pub fn try_from_path(key: &str) -> Result<Self> {
        Ok(Self { lookup: VendorLookup::parse(key)? })
    }
}
