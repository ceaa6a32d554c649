// crates/marketplace/src/infrastructure/api/http/dto/vendor_dto.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use shared_kernel::domain::Identifier;
use shared_kernel::domain::media::MediaCandidate;

use crate::domain::entities::Vendor;
use crate::infrastructure::api::http::dto::double_option;

#[derive(Debug, Deserialize)]
pub struct CreateVendorRequest {
    pub business_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub image_url: MediaCandidate,
    #[serde(default)]
    pub featured_image_url: MediaCandidate,
    #[serde(default)]
    pub og_image_url: MediaCandidate,
}

/// Corps d'un `PATCH /vendors/:id`. Les champs média absents valent `Missing`.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateVendorRequest {
    #[serde(default)]
    pub business_name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub phone: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub location: Option<Option<String>>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub image_url: MediaCandidate,
    #[serde(default)]
    pub featured_image_url: MediaCandidate,
    #[serde(default)]
    pub og_image_url: MediaCandidate,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct VendorResponse {
    pub id: Uuid,
    pub business_name: String,
    pub slug: String,
    pub description: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub image_url: Option<String>,
    pub featured_image_url: Option<String>,
    pub og_image_url: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub version: i32,
}

impl From<&Vendor> for VendorResponse {
    fn from(v: &Vendor) -> Self {
        Self {
            id: v.id().as_uuid(),
            business_name: v.business_name().to_string(),
            slug: v.slug().as_str().to_string(),
            description: v.description().map(|d| d.to_string()),
            phone: v.phone().map(|p| p.to_string()),
            location: v.location().map(|l| l.to_string()),
            image_url: v.image_url().map(|u| u.to_string()),
            featured_image_url: v.featured_image_url().map(|u| u.to_string()),
            og_image_url: v.og_image_url().map(|u| u.to_string()),
            is_active: v.is_active(),
            created_at: v.created_at(),
            updated_at: v.updated_at(),
            version: v.version(),
        }
    }
}

impl From<Vendor> for VendorResponse {
    fn from(v: Vendor) -> Self {
        Self::from(&v)
    }
}
