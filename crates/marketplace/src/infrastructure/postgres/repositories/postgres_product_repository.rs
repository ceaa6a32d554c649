// crates/marketplace/src/infrastructure/postgres/repositories/postgres_product_repository.rs

use async_trait::async_trait;
use sqlx::PgPool;
use shared_kernel::application::pagination::{PageRequest, PageResponse};
use shared_kernel::domain::Identifier;
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::errors::{DomainError, Result};
use shared_kernel::infrastructure::postgres::mappers::SqlxErrorExt;
use shared_kernel::infrastructure::postgres::patch::build_versioned_update;
use shared_kernel::infrastructure::postgres::transactions::TransactionExt;

use crate::domain::entities::Product;
use crate::domain::params::PatchProductParams;
use crate::domain::repositories::ProductRepository;
use crate::domain::value_objects::{ProductId, VendorId};
use crate::infrastructure::postgres::rows::PostgresProductRow;

pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn find_product_by_id(&self, id: &ProductId, tx: Option<&mut dyn Transaction>) -> Result<Option<Product>> {
        let uid = id.as_uuid();

        <dyn Transaction>::execute_on(&self.pool, tx, |conn| Box::pin(async move {
            let row = sqlx::query_as::<_, PostgresProductRow>("SELECT * FROM products WHERE id = $1")
                .bind(uid)
                .fetch_optional(&mut *conn)
                .await
                .map_domain::<Product>()?;

            row.map(Product::try_from).transpose()
        })).await
    }

    async fn list_products_by_vendor(&self, vendor_id: &VendorId, page: PageRequest) -> Result<PageResponse<Product>> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM products WHERE vendor_id = $1")
            .bind(vendor_id.as_uuid())
            .fetch_one(&self.pool)
            .await
            .map_domain::<Product>()?;

        let rows = sqlx::query_as::<_, PostgresProductRow>(
            "SELECT * FROM products WHERE vendor_id = $1 ORDER BY created_at ASC, id ASC LIMIT $2 OFFSET $3",
        )
        .bind(vendor_id.as_uuid())
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_domain::<Product>()?;

        let items = rows.into_iter().map(Product::try_from).collect::<Result<Vec<_>>>()?;
        Ok(PageResponse::new(items, total.max(0) as u64, page))
    }

    async fn create_product(&self, product: &Product, tx: &mut dyn Transaction) -> Result<()> {
        let p = product.clone();

        <dyn Transaction>::execute_on(&self.pool, Some(tx), |conn| Box::pin(async move {
            let sql = r#"
                INSERT INTO products (
                    id, vendor_id, name, description, price_cents, image_url,
                    is_available, created_at, updated_at, version
                ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#;

            sqlx::query(sql)
                .bind(p.id().as_uuid())
                .bind(p.vendor_id().as_uuid())
                .bind(p.name().as_str())
                .bind(p.description().map(|d| d.as_str()))
                .bind(p.price().cents())
                .bind(p.image_url().map(|u| u.as_str()))
                .bind(p.is_available())
                .bind(p.created_at())
                .bind(p.updated_at())
                .bind(p.version())
                .execute(&mut *conn)
                .await
                .map_domain::<Product>()?;

            Ok(())
        })).await
    }

    async fn patch_product_by_id(
        &self,
        id: &ProductId,
        expected_version: i32,
        params: &PatchProductParams,
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
            .map_domain::<Product>()?;

        if result.rows_affected() > 0 {
            return Ok(());
        }

        let exists = sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM products WHERE id = $1)")
            .bind(id.as_uuid())
            .fetch_one(&mut **sqlx_tx)
            .await
            .map_domain::<Product>()?;

        if exists {
            Err(DomainError::ConcurrencyConflict {
                reason: format!("Product version mismatch for {} (expected {})", id, expected_version),
            })
        } else {
            Err(DomainError::NotFound { entity: "Product", id: id.to_string() })
        }
    }
}
