// crates/marketplace/src/infrastructure/postgres/rows/postgres_vendor_row.rs

use chrono::{DateTime, Utc};
use shared_kernel::domain::Identifier;
use shared_kernel::domain::value_objects::{MediaUrl, Slug};
use shared_kernel::errors::{DomainError, Result};
use sqlx::FromRow;
use uuid::Uuid;

use crate::domain::builders::VendorBuilder;
use crate::domain::entities::Vendor;
use crate::domain::value_objects::{BusinessName, Description, Location, PhoneNumber, VendorId};

#[derive(FromRow, Debug)]
pub struct PostgresVendorRow {
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

impl TryFrom<PostgresVendorRow> for Vendor {
    type Error = DomainError;

    fn try_from(row: PostgresVendorRow) -> Result<Self> {
        if row.version < 1 {
            return Err(DomainError::Internal(format!("Invalid version {} for vendor {}", row.version, row.id)));
        }

        // Les données en base ont déjà été validées à l'écriture
        Ok(VendorBuilder::restore(
            VendorId::from_uuid(row.id),
            BusinessName::from_raw(row.business_name),
            Slug::from_raw(row.slug),
            row.description.map(Description::from_raw),
            row.phone.map(PhoneNumber::from_raw),
            row.location.map(Location::from_raw),
            row.image_url.map(MediaUrl::new_unchecked),
            row.featured_image_url.map(MediaUrl::new_unchecked),
            row.og_image_url.map(MediaUrl::new_unchecked),
            row.is_active,
            row.created_at,
            row.updated_at,
            row.version,
        ))
    }
}
