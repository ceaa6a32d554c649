// crates/marketplace/src/domain/params/patch_product_params.rs

use shared_kernel::domain::media::MediaCandidate;
use shared_kernel::domain::patch::{PartialUpdate, PartialUpdateBuilder};

use crate::domain::value_objects::{Description, Price, ProductName};

pub const PRODUCTS_TABLE: &str = "products";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatchProductParams {
    pub name: Option<ProductName>,
    pub description: Option<Option<Description>>,
    pub price: Option<Price>,
    pub is_available: Option<bool>,
    pub image_url: MediaCandidate,
}

impl PatchProductParams {
    pub fn to_partial_update(&self) -> PartialUpdate {
        PartialUpdateBuilder::new(PRODUCTS_TABLE)
            .set_opt("name", self.name.as_ref().map(|n| n.as_str().to_string()))
            .set_opt("description", self.description.as_ref().map(|d| d.as_ref().map(|d| d.as_str().to_string())))
            .set_opt("price_cents", self.price.map(|p| p.cents()))
            .set_opt("is_available", self.is_available)
            .media("image_url", &self.image_url)
            .build()
    }
}
