// crates/marketplace/src/application/create_vendor/create_vendor_command.rs

use shared_kernel::domain::media::MediaCandidate;
use shared_kernel::errors::Result;

use crate::domain::value_objects::{BusinessName, Description, Location, PhoneNumber};
use crate::infrastructure::api::http::dto::{parse_optional, CreateVendorRequest};

#[derive(Debug, Clone)]
pub struct CreateVendorCommand {
    pub business_name: BusinessName,
    pub description: Option<Description>,
    pub phone: Option<PhoneNumber>,
    pub location: Option<Location>,
    pub image_url: MediaCandidate,
    pub featured_image_url: MediaCandidate,
    pub og_image_url: MediaCandidate,
}

impl CreateVendorCommand {
    pub fn new(business_name: BusinessName) -> Self {
        Self {
            business_name,
            description: None,
            phone: None,
            location: None,
            image_url: MediaCandidate::Missing,
            featured_image_url: MediaCandidate::Missing,
            og_image_url: MediaCandidate::Missing,
        }
    }

    pub fn try_from_request(req: CreateVendorRequest) -> Result<Self> {
        Ok(Self {
            business_name: BusinessName::try_new(req.business_name)?,
            description: parse_optional(req.description, Description::try_new)?,
            phone: parse_optional(req.phone, PhoneNumber::try_new)?,
            location: parse_optional(req.location, Location::try_new)?,
            image_url: req.image_url,
            featured_image_url: req.featured_image_url,
            og_image_url: req.og_image_url,
        })
    }
}
