// crates/marketplace/src/domain/builders/product_builder.rs

use chrono::{DateTime, Utc};
use shared_kernel::domain::value_objects::MediaUrl;

use crate::domain::entities::Product;
use crate::domain::value_objects::{Description, Price, ProductId, ProductName, VendorId};

pub struct ProductBuilder {
    id: ProductId,
    vendor_id: VendorId,
    name: ProductName,
    description: Option<Description>,
    price: Price,
    image_url: Option<MediaUrl>,
    is_available: bool,
}

impl ProductBuilder {
    pub fn new(vendor_id: VendorId, name: ProductName, price: Price) -> Self {
        Self {
            id: ProductId::new(),
            vendor_id,
            name,
            description: None,
            price,
            image_url: None,
            is_available: true,
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn restore(
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
    ) -> Product {
        Product::new_from_builder(
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
        )
    }

    pub fn with_optional_description(mut self, description: Option<Description>) -> Self {
        self.description = description;
        self
    }
    pub fn with_optional_image_url(mut self, url: Option<MediaUrl>) -> Self {
        self.image_url = url;
        self
    }
    pub fn with_availability(mut self, is_available: bool) -> Self {
        self.is_available = is_available;
        self
    }

    pub fn build(self) -> Product {
        let now = Utc::now();
        Product::new_from_builder(
            self.id,
            self.vendor_id,
            self.name,
            self.description,
            self.price,
            self.image_url,
            self.is_available,
            now,
            now,
            1,
        )
    }
}
