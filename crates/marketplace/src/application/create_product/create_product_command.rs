use shared_kernel::domain::media::MediaCandidate;
use shared_kernel::errors::Result;

use crate::domain::value_objects::{Description, Price, ProductName, VendorId};
use crate::infrastructure::api::http::dto::{parse_optional, CreateProductRequest};

#[derive(Debug, Clone)]
pub struct CreateProductCommand {
    pub vendor_id: VendorId,
    pub name: ProductName,
    pub description: Option<Description>,
    pub price: Price,
    pub is_available: bool,
    pub image_url: MediaCandidate,
}

impl CreateProductCommand {
    pub fn try_from_request(vendor_id: &str, req: CreateProductRequest) -> Result<Self> {
        Ok(Self {
            vendor_id: VendorId::try_new(vendor_id)?,
            name: ProductName::try_new(req.name)?,
            description: parse_optional(req.description, Description::try_new)?,
            price: Price::try_new(req.price_cents)?,
            is_available: req.is_available.unwrap_or(true),
            image_url: req.image_url,
        })
    }
}
