// crates/marketplace/src/domain/entities/admin_account.rs

use chrono::{DateTime, Utc};
use shared_kernel::domain::entities::EntityMetadata;

use crate::domain::value_objects::{AdminId, AdminRole, DisplayName, Email, PasswordHash};

#[derive(Debug, Clone, PartialEq)]
pub struct AdminAccount {
    id: AdminId,
    email: Email,
    display_name: DisplayName,
    password_hash: PasswordHash,
    role: AdminRole,
    created_at: DateTime<Utc>,
}

impl AdminAccount {
    pub fn new(email: Email, display_name: DisplayName, password_hash: PasswordHash) -> Self {
        Self {
            id: AdminId::new(),
            email,
            display_name,
            password_hash,
            role: AdminRole::Admin,
            created_at: Utc::now(),
        }
    }

    /// Reconstruction depuis la base
    pub fn restore(
        id: AdminId,
        email: Email,
        display_name: DisplayName,
        password_hash: PasswordHash,
        role: AdminRole,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self { id, email, display_name, password_hash, role, created_at }
    }

    pub fn id(&self) -> &AdminId { &self.id }
    pub fn email(&self) -> &Email { &self.email }
    pub fn display_name(&self) -> &DisplayName { &self.display_name }
    pub fn password_hash(&self) -> &PasswordHash { &self.password_hash }
    pub fn role(&self) -> AdminRole { self.role }
    pub fn created_at(&self) -> DateTime<Utc> { self.created_at }
}

impl EntityMetadata for AdminAccount {
    fn entity_name() -> &'static str { "AdminAccount" }

    fn map_constraint_to_field(constraint: &str) -> &'static str {
        match constraint {
            "admin_accounts_email_key" => "email",
            _ => "unique_constraint",
        }
    }
}
