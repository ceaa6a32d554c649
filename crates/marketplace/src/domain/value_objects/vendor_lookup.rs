// crates/marketplace/src/domain/value_objects/vendor_lookup.rs

use uuid::Uuid;
use shared_kernel::domain::Identifier;
use shared_kernel::domain::value_objects::Slug;
use shared_kernel::errors::Result;
use crate::domain::value_objects::VendorId;

/// Clé de recherche publique d'une boutique : `/vendors/{uuid}` ou `/vendors/{slug}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VendorLookup {
    Id(VendorId),
    Slug(Slug),
}

impl VendorLookup {
    pub fn parse(key: &str) -> Result<Self> {
        let key = key.trim();
        match Uuid::parse_str(key) {
            Ok(uuid) => Ok(Self::Id(VendorId::from_uuid(uuid))),
            Err(_) => Slug::try_new(key).map(Self::Slug),
        }
    }
}
