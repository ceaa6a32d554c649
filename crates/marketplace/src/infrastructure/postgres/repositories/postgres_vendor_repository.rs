// crates/marketplace/src/infrastructure/postgres/repositories/postgres_vendor_repository.rs

use async_trait::async_trait;
use sqlx::PgPool;
use shared_kernel::application::pagination::{PageRequest, PageResponse};
use shared_kernel::domain::Identifier;
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::domain::value_objects::Slug;
use shared_kernel::errors::{DomainError, Result};
use shared_kernel::infrastructure::postgres::mappers::SqlxErrorExt;
use shared_kernel::infrastructure::postgres::patch::build_versioned_update;
use shared_kernel::infrastructure::postgres::transactions::TransactionExt;

use crate::domain::entities::Vendor;
use crate::domain::params::PatchVendorParams;
use crate::domain::repositories::VendorRepository;
use crate::domain::value_objects::VendorId;
use crate::infrastructure::postgres::rows::PostgresVendorRow;

pub struct PostgresVendorRepository {
    pool: PgPool,
}

impl PostgresVendorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VendorRepository for PostgresVendorRepository {
    async fn find_vendor_by_id(&self, id: &VendorId, tx: Option<&mut dyn Transaction>) -> Result<Option<Vendor>> {
        let uid = id.as_uuid();

        <dyn Transaction>::execute_on(&self.pool, tx, |conn| Box::pin(async move {
            let row = sqlx::query_as::<_, PostgresVendorRow>("SELECT * FROM vendors WHERE id = $1")
                .bind(uid)
                .fetch_optional(&mut *conn)
                .await
                .map_domain::<Vendor>()?;

            row.map(Vendor::try_from).transpose()
        })).await
    }

    async fn find_vendor_by_slug(&self, slug: &Slug) -> Result<Option<Vendor>> {
        let row = sqlx::query_as::<_, PostgresVendorRow>("SELECT * FROM vendors WHERE slug = $1")
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_domain::<Vendor>()?;

        row.map(Vendor::try_from).transpose()
    }

    async fn exists_vendor_by_slug(&self, slug: &Slug) -> Result<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM vendors WHERE slug = $1)")
            .bind(slug.as_str())
            .fetch_one(&self.pool)
            .await
            .map_domain::<Vendor>()
    }

    async fn list_active_vendors(&self, page: PageRequest) -> Result<PageResponse<Vendor>> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM vendors WHERE is_active")
            .fetch_one(&self.pool)
            .await
            .map_domain::<Vendor>()?;

        let rows = sqlx::query_as::<_, PostgresVendorRow>(
            "SELECT * FROM vendors WHERE is_active ORDER BY created_at DESC, id DESC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_domain::<Vendor>()?;

        let items = rows.into_iter().map(Vendor::try_from).collect::<Result<Vec<_>>>()?;
        Ok(PageResponse::new(items, total.max(0) as u64, page))
    }

    async fn create_vendor(&self, vendor: &Vendor, tx: &mut dyn Transaction) -> Result<()> {
        let v = vendor.clone();

        <dyn Transaction>::execute_on(&self.pool, Some(tx), |conn| Box::pin(async move {
            let sql = r#"
                INSERT INTO vendors (
                    id, business_name, slug, description, phone, location,
                    image_url, featured_image_url, og_image_url,
                    is_active, created_at, updated_at, version
                ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            "#;

            sqlx::query(sql)
                .bind(v.id().as_uuid())
                .bind(v.business_name().as_str())
                .bind(v.slug().as_str())
                .bind(v.description().map(|d| d.as_str()))
                .bind(v.phone().map(|p| p.as_str()))
                .bind(v.location().map(|l| l.as_str()))
                .bind(v.image_url().map(|u| u.as_str()))
                .bind(v.featured_image_url().map(|u| u.as_str()))
                .bind(v.og_image_url().map(|u| u.as_str()))
                .bind(v.is_active())
                .bind(v.created_at())
                .bind(v.updated_at())
                .bind(v.version())
                .execute(&mut *conn)
                .await
                .map_domain::<Vendor>()?;

            Ok(())
        })).await
    }

    async fn patch_vendor_by_id(
        &self,
        id: &VendorId,
        expected_version: i32,
        params: &PatchVendorParams,
        tx: &mut dyn Transaction,
    ) -> Result<()> {
        let update = params.to_partial_update();
        if update.is_empty() {
            return Ok(());
        }

        let sqlx_tx = tx.downcast_mut_sqlx()?;
        let mut qb = build_versioned_update(&update, id.as_uuid(), expected_version);

        let result = qb
            .build()
            .execute(&mut **sqlx_tx)
            .await
            .map_domain::<Vendor>()?;

        if result.rows_affected() > 0 {
            return Ok(());
        }

        // Zéro ligne : boutique absente ou version divergente
        let exists = sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM vendors WHERE id = $1)")
            .bind(id.as_uuid())
            .fetch_one(&mut **sqlx_tx)
            .await
            .map_domain::<Vendor>()?;

        if exists {
            Err(DomainError::ConcurrencyConflict {
                reason: format!("Vendor version mismatch for {} (expected {})", id, expected_version),
            })
        } else {
            Err(DomainError::NotFound { entity: "Vendor", id: id.to_string() })
        }
    }
}
