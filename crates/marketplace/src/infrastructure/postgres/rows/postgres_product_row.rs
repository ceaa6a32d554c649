// crates/marketplace/src/infrastructure/postgres/rows/postgres_product_row.rs

use chrono::{DateTime, Utc};
use shared_kernel::domain::Identifier;
use shared_kernel::domain::value_objects::MediaUrl;
use shared_kernel::errors::{DomainError, Result};
use sqlx::FromRow;
use uuid::Uuid;

use crate::domain::builders::ProductBuilder;
use crate::domain::entities::Product;
use crate::domain::value_objects::{Description, Price, ProductId, ProductName, VendorId};

#[derive(FromRow, Debug)]
pub struct PostgresProductRow {
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

impl TryFrom<PostgresProductRow> for Product {
    type Error = DomainError;

    fn try_from(row: PostgresProductRow) -> Result<Self> {
        if row.price_cents < 0 {
            return Err(DomainError::Internal(format!("Negative price_cents for product {}", row.id)));
        }

        Ok(ProductBuilder::restore(
            ProductId::from_uuid(row.id),
            VendorId::from_uuid(row.vendor_id),
            ProductName::from_raw(row.name),
            row.description.map(Description::from_raw),
            Price::from_raw(row.price_cents),
            row.image_url.map(MediaUrl::new_unchecked),
            row.is_available,
            row.created_at,
            row.updated_at,
            row.version,
        ))
    }
}
