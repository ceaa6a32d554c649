// crates/marketplace/src/infrastructure/api/http/dto/product_dto.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use shared_kernel::domain::Identifier;
use shared_kernel::domain::media::MediaCandidate;

use crate::domain::entities::Product;
use crate::infrastructure::api::http::dto::double_option;

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price_cents: i64,
    #[serde(default)]
    pub is_available: Option<bool>,
    #[serde(default)]
    pub image_url: MediaCandidate,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateProductRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    #[serde(default)]
    pub price_cents: Option<i64>,
    #[serde(default)]
    pub is_available: Option<bool>,
    #[serde(default)]
    pub image_url: MediaCandidate,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ProductResponse {
    pub id: Uuid,
    pub vendor_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price_cents: i64,
    pub image_url: Option<String>,
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub version: i32,
}

impl From<&Product> for ProductResponse {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id().as_uuid(),
            vendor_id: p.vendor_id().as_uuid(),
            name: p.name().to_string(),
            description: p.description().map(|d| d.to_string()),
            price_cents: p.price().cents(),
            image_url: p.image_url().map(|u| u.to_string()),
            is_available: p.is_available(),
            created_at: p.created_at(),
            updated_at: p.updated_at(),
            version: p.version(),
        }
    }
}

impl From<Product> for ProductResponse {
    fn from(p: Product) -> Self {
        Self::from(&p)
    }
}
