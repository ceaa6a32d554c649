// crates/marketplace/src/infrastructure/postgres/repositories/postgres_admin_account_repository.rs

use async_trait::async_trait;
use sqlx::PgPool;
use shared_kernel::domain::Identifier;
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::errors::Result;
use shared_kernel::infrastructure::postgres::mappers::SqlxErrorExt;

use crate::domain::entities::AdminAccount;
use crate::domain::repositories::AdminAccountRepository;
use crate::domain::value_objects::Email;
use crate::infrastructure::postgres::rows::PostgresAdminAccountRow;

pub struct PostgresAdminAccountRepository {
    pool: PgPool,
}

impl PostgresAdminAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AdminAccountRepository for PostgresAdminAccountRepository {
    async fn find_admin_by_email(&self, email: &Email) -> Result<Option<AdminAccount>> {
        let row = sqlx::query_as::<_, PostgresAdminAccountRow>("SELECT * FROM admin_accounts WHERE email = $1")
            .bind(email.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_domain::<AdminAccount>()?;

        row.map(AdminAccount::try_from).transpose()
    }

    async fn exists_admin_by_email(&self, email: &Email) -> Result<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM admin_accounts WHERE email = $1)")
            .bind(email.as_str())
            .fetch_one(&self.pool)
            .await
            .map_domain::<AdminAccount>()
    }

    async fn create_admin(&self, admin: &AdminAccount, tx: &mut dyn Transaction) -> Result<()> {
        let a = admin.clone();

        <dyn Transaction>::execute_on(&self.pool, Some(tx), |conn| Box::pin(async move {
            sqlx::query(
                "INSERT INTO admin_accounts (id, email, display_name, password_hash, role, created_at) \
                 VALUES ($1, $2, $3, $4, $5, $6)",
            )
            .bind(a.id().as_uuid())
            .bind(a.email().as_str())
            .bind(a.display_name().as_str())
            .bind(a.password_hash().as_str())
            .bind(a.role().as_str())
            .bind(a.created_at())
            .execute(&mut *conn)
            .await
            .map_domain::<AdminAccount>()?;

            Ok(())
        })).await
    }
}
