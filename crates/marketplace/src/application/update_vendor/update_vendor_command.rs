// crates/marketplace/src/application/update_vendor/update_vendor_command.rs

use shared_kernel::errors::Result;

use crate::domain::params::PatchVendorParams;
use crate::domain::value_objects::{BusinessName, Description, Location, PhoneNumber, VendorId};
use crate::infrastructure::api::http::dto::{parse_nullable, UpdateVendorRequest};

#[derive(Debug, Clone)]
pub struct UpdateVendorCommand {
    pub vendor_id: VendorId,
    pub params: PatchVendorParams,
}

impl UpdateVendorCommand {
    pub fn try_from_request(vendor_id: &str, req: UpdateVendorRequest) -> Result<Self> {
        Ok(Self {
            vendor_id: VendorId::try_new(vendor_id)?,
            params: PatchVendorParams {
                business_name: req.business_name.map(BusinessName::try_new).transpose()?,
                description: parse_nullable(req.description, Description::try_new)?,
                phone: parse_nullable(req.phone, PhoneNumber::try_new)?,
                location: parse_nullable(req.location, Location::try_new)?,
                is_active: req.is_active,
                image_url: req.image_url,
                featured_image_url: req.featured_image_url,
                og_image_url: req.og_image_url,
            },
        })
    }
}
