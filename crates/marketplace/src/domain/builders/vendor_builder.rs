// crates/marketplace/src/domain/builders/vendor_builder.rs

use chrono::{DateTime, Utc};
use shared_kernel::domain::value_objects::{MediaUrl, Slug};

use crate::domain::entities::Vendor;
use crate::domain::value_objects::{BusinessName, Description, Location, PhoneNumber, VendorId};

pub struct VendorBuilder {
    id: VendorId,
    business_name: BusinessName,
    slug: Slug,
    description: Option<Description>,
    phone: Option<PhoneNumber>,
    location: Option<Location>,
    image_url: Option<MediaUrl>,
    featured_image_url: Option<MediaUrl>,
    og_image_url: Option<MediaUrl>,
    is_active: bool,
}

impl VendorBuilder {
    /// Chemin 1 : CREATION (inscription vendeur)
    pub fn new(business_name: BusinessName, slug: Slug) -> Self {
        Self {
            id: VendorId::new(),
            business_name,
            slug,
            description: None,
            phone: None,
            location: None,
            image_url: None,
            featured_image_url: None,
            og_image_url: None,
            is_active: true,
        }
    }

    /// Chemin 2 : RESTAURATION (repository)
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: VendorId,
        business_name: BusinessName,
        slug: Slug,
        description: Option<Description>,
        phone: Option<PhoneNumber>,
        location: Option<Location>,
        image_url: Option<MediaUrl>,
        featured_image_url: Option<MediaUrl>,
        og_image_url: Option<MediaUrl>,
        is_active: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        version: i32,
    ) -> Vendor {
        Vendor::new_from_builder(
            id,
            business_name,
            slug,
            description,
            phone,
            location,
            image_url,
            featured_image_url,
            og_image_url,
            is_active,
            created_at,
            updated_at,
            version,
        )
    }

    pub fn with_id(mut self, id: VendorId) -> Self {
        self.id = id;
        self
    }
    pub fn with_optional_description(mut self, description: Option<Description>) -> Self {
        self.description = description;
        self
    }
    pub fn with_optional_phone(mut self, phone: Option<PhoneNumber>) -> Self {
        self.phone = phone;
        self
    }
    pub fn with_optional_location(mut self, location: Option<Location>) -> Self {
        self.location = location;
        self
    }
    pub fn with_optional_image_url(mut self, url: Option<MediaUrl>) -> Self {
        self.image_url = url;
        self
    }
    pub fn with_optional_featured_image_url(mut self, url: Option<MediaUrl>) -> Self {
        self.featured_image_url = url;
        self
    }
    pub fn with_optional_og_image_url(mut self, url: Option<MediaUrl>) -> Self {
        self.og_image_url = url;
        self
    }
    pub fn with_activity(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub fn build(self) -> Vendor {
        let now = Utc::now();
        Vendor::new_from_builder(
            self.id,
            self.business_name,
            self.slug,
            self.description,
            self.phone,
            self.location,
            self.image_url,
            self.featured_image_url,
            self.og_image_url,
            self.is_active,
            now,
            now,
            1,
        )
    }
}
