use shared_kernel::errors::Result;

use crate::domain::params::PatchProductParams;
use crate::domain::value_objects::{Description, Price, ProductId, ProductName};
use crate::infrastructure::api::http::dto::{parse_nullable, UpdateProductRequest};

#[derive(Debug, Clone)]
pub struct UpdateProductCommand {
    pub product_id: ProductId,
    pub params: PatchProductParams,
}

impl UpdateProductCommand {
    pub fn try_from_request(product_id: &str, req: UpdateProductRequest) -> Result<Self> {
        Ok(Self {
            product_id: ProductId::try_new(product_id)?,
            params: PatchProductParams {
                name: req.name.map(ProductName::try_new).transpose()?,
                description: parse_nullable(req.description, Description::try_new)?,
                price: req.price_cents.map(Price::try_new).transpose()?,
                is_available: req.is_available,
                image_url: req.image_url,
            },
        })
    }
}
