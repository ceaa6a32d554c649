// crates/marketplace/src/domain/params/patch_vendor_params.rs

use shared_kernel::domain::media::MediaCandidate;
use shared_kernel::domain::patch::{PartialUpdate, PartialUpdateBuilder};

use crate::domain::value_objects::{BusinessName, Description, Location, PhoneNumber};

pub const VENDORS_TABLE: &str = "vendors";

/// Mise à jour partielle d'une boutique.
///
/// Champs texte : `None` = inchangé, `Some(None)` = effacé.
/// Champs média : toujours soumis au garde, ils ne peuvent jamais être effacés par un PATCH.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatchVendorParams {
    pub business_name: Option<BusinessName>,
    pub description: Option<Option<Description>>,
    pub phone: Option<Option<PhoneNumber>>,
    pub location: Option<Option<Location>>,
    pub is_active: Option<bool>,
    pub image_url: MediaCandidate,
    pub featured_image_url: MediaCandidate,
    pub og_image_url: MediaCandidate,
}

impl PatchVendorParams {
    pub fn to_partial_update(&self) -> PartialUpdate {
        PartialUpdateBuilder::new(VENDORS_TABLE)
            .set_opt("business_name", self.business_name.as_ref().map(|n| n.as_str().to_string()))
            .set_opt("description", self.description.as_ref().map(|d| d.as_ref().map(|d| d.as_str().to_string())))
            .set_opt("phone", self.phone.as_ref().map(|p| p.as_ref().map(|p| p.as_str().to_string())))
            .set_opt("location", self.location.as_ref().map(|l| l.as_ref().map(|l| l.as_str().to_string())))
            .set_opt("is_active", self.is_active)
            .media("image_url", &self.image_url)
            .media("featured_image_url", &self.featured_image_url)
            .media("og_image_url", &self.og_image_url)
            .build()
    }
}
