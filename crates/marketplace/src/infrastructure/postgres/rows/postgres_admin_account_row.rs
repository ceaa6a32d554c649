use chrono::{DateTime, Utc};
use shared_kernel::domain::Identifier;
use shared_kernel::errors::{DomainError, Result};
use sqlx::FromRow;
use uuid::Uuid;

use crate::domain::entities::AdminAccount;
use crate::domain::value_objects::{AdminId, AdminRole, DisplayName, Email, PasswordHash};

#[derive(FromRow, Debug)]
pub struct PostgresAdminAccountRow {
    pub id: Uuid,
    pub email: String,
    pub display_name: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<PostgresAdminAccountRow> for AdminAccount {
    type Error = DomainError;

    fn try_from(row: PostgresAdminAccountRow) -> Result<Self> {
        let role: AdminRole = row.role.parse()
            .map_err(|_| DomainError::Internal(format!("Unknown role '{}' for admin {}", row.role, row.id)))?;

        Ok(AdminAccount::restore(
            AdminId::from_uuid(row.id),
            Email::new_unchecked(row.email),
            DisplayName::from_raw(row.display_name),
            PasswordHash::from_raw(row.password_hash),
            role,
            row.created_at,
        ))
    }
}
