// crates/marketplace/src/domain/entities/product.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_kernel::domain::entities::EntityMetadata;
use shared_kernel::domain::value_objects::MediaUrl;
use shared_kernel::errors::Result;

use crate::domain::builders::ProductBuilder;
use crate::domain::entities::vendor::replace_if_changed;
use crate::domain::params::PatchProductParams;
use crate::domain::value_objects::{Description, Price, ProductId, ProductName, VendorId};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Product {
    id: ProductId,
    vendor_id: VendorId,
    name: ProductName,
    description: Option<Description>,
    price: Price,
    image_url: Option<MediaUrl>,
    is_available: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    version: i32,
}

impl Product {
    pub fn builder(vendor_id: VendorId, name: ProductName, price: Price) -> ProductBuilder {
        ProductBuilder::new(vendor_id, name, price)
    }

    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new_from_builder(
        id: ProductId,
        vendor_id: VendorId,
        name: ProductName,
        description: Option<Description>,
        price: Price,
        image_url: Option<MediaUrl>,
        is_available: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        version: i32,
    ) -> Self {
        Self {
            id,
            vendor_id,
            name,
            description,
            price,
            image_url,
            is_available,
            created_at,
            updated_at,
            version,
        }
    }

    pub fn id(&self) -> &ProductId { &self.id }
    pub fn vendor_id(&self) -> &VendorId { &self.vendor_id }
    pub fn name(&self) -> &ProductName { &self.name }
    pub fn description(&self) -> Option<&Description> { self.description.as_ref() }
    pub fn price(&self) -> Price { self.price }
    pub fn image_url(&self) -> Option<&MediaUrl> { self.image_url.as_ref() }
    pub fn is_available(&self) -> bool { self.is_available }
    pub fn created_at(&self) -> DateTime<Utc> { self.created_at }
    pub fn updated_at(&self) -> DateTime<Utc> { self.updated_at }
    pub fn version(&self) -> i32 { self.version }

    /// Même contrat que `Vendor::apply_patch` : l'image n'est remplacée que par une URL non vide.
    pub fn apply_patch(&mut self, params: &PatchProductParams) -> Result<bool> {
        let image_url = params.image_url.to_media_url()?;
        let mut changed = false;

        if let Some(name) = &params.name {
            changed |= replace_if_changed(&mut self.name, name.clone());
        }
        if let Some(description) = &params.description {
            changed |= replace_if_changed(&mut self.description, description.clone());
        }
        if let Some(price) = params.price {
            changed |= replace_if_changed(&mut self.price, price);
        }
        if let Some(is_available) = params.is_available {
            changed |= replace_if_changed(&mut self.is_available, is_available);
        }
        if let Some(url) = image_url {
            changed |= replace_if_changed(&mut self.image_url, Some(url));
        }

        if changed {
            self.version += 1;
            self.updated_at = Utc::now();
        }
        Ok(changed)
    }
}

impl EntityMetadata for Product {
    fn entity_name() -> &'static str { "Product" }
}
