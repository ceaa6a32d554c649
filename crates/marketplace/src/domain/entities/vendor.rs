// crates/marketplace/src/domain/entities/vendor.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_kernel::domain::entities::EntityMetadata;
use shared_kernel::domain::value_objects::{MediaUrl, Slug};
use shared_kernel::errors::Result;

use crate::domain::builders::VendorBuilder;
use crate::domain::params::PatchVendorParams;
use crate::domain::value_objects::{BusinessName, Description, Location, PhoneNumber, VendorId};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Vendor {
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
}

impl Vendor {
    pub fn builder(business_name: BusinessName, slug: Slug) -> VendorBuilder {
        VendorBuilder::new(business_name, slug)
    }

    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new_from_builder(
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
    ) -> Self {
        Self {
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
        }
    }

    // --- GETTERS ---

    pub fn id(&self) -> &VendorId { &self.id }
    pub fn business_name(&self) -> &BusinessName { &self.business_name }
    pub fn slug(&self) -> &Slug { &self.slug }
    pub fn description(&self) -> Option<&Description> { self.description.as_ref() }
    pub fn phone(&self) -> Option<&PhoneNumber> { self.phone.as_ref() }
    pub fn location(&self) -> Option<&Location> { self.location.as_ref() }
    pub fn image_url(&self) -> Option<&MediaUrl> { self.image_url.as_ref() }
    pub fn featured_image_url(&self) -> Option<&MediaUrl> { self.featured_image_url.as_ref() }
    pub fn og_image_url(&self) -> Option<&MediaUrl> { self.og_image_url.as_ref() }
    pub fn is_active(&self) -> bool { self.is_active }
    pub fn created_at(&self) -> DateTime<Utc> { self.created_at }
    pub fn updated_at(&self) -> DateTime<Utc> { self.updated_at }
    pub fn version(&self) -> i32 { self.version }

    /// Applique une mise à jour partielle.
    ///
    /// Les champs média ne sont écrits que si le garde accepte la valeur reçue :
    /// un champ absent, nul ou vide laisse l'URL existante intacte.
    /// Retourne `false` si rien n'a changé (aucune écriture nécessaire).
    pub fn apply_patch(&mut self, params: &PatchVendorParams) -> Result<bool> {
        // Validation des URLs avant toute mutation : un rejet laisse l'entité intacte
        let image_url = params.image_url.to_media_url()?;
        let featured_image_url = params.featured_image_url.to_media_url()?;
        let og_image_url = params.og_image_url.to_media_url()?;

        let mut changed = false;

        if let Some(name) = &params.business_name {
            changed |= replace_if_changed(&mut self.business_name, name.clone());
        }
        if let Some(description) = &params.description {
            changed |= replace_if_changed(&mut self.description, description.clone());
        }
        if let Some(phone) = &params.phone {
            changed |= replace_if_changed(&mut self.phone, phone.clone());
        }
        if let Some(location) = &params.location {
            changed |= replace_if_changed(&mut self.location, location.clone());
        }
        if let Some(is_active) = params.is_active {
            changed |= replace_if_changed(&mut self.is_active, is_active);
        }

        if let Some(url) = image_url {
            changed |= replace_if_changed(&mut self.image_url, Some(url));
        }
        if let Some(url) = featured_image_url {
            changed |= replace_if_changed(&mut self.featured_image_url, Some(url));
        }
        if let Some(url) = og_image_url {
            changed |= replace_if_changed(&mut self.og_image_url, Some(url));
        }

        if changed {
            self.apply_change();
        }
        Ok(changed)
    }

    fn apply_change(&mut self) {
        self.version += 1;
        self.updated_at = Utc::now();
    }
}

pub(crate) fn replace_if_changed<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

impl EntityMetadata for Vendor {
    fn entity_name() -> &'static str { "Vendor" }

    fn map_constraint_to_field(constraint: &str) -> &'static str {
        match constraint {
            "vendors_slug_key" => "slug",
            _ => "unique_constraint",
        }
    }
}
