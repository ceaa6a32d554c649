// crates/marketplace/src/application/seed_admin/seed_admin_command.rs

use std::fmt;
use shared_kernel::errors::{DomainError, Result};

use crate::domain::value_objects::{DisplayName, Email};

#[derive(Clone)]
pub struct SeedAdminCommand {
    pub email: Email,
    pub password: String,
    pub display_name: DisplayName,
}

impl SeedAdminCommand {
    pub const MIN_PASSWORD_LEN: usize = 12;

    pub fn try_new(email: &str, password: String, display_name: Option<&str>) -> Result<Self> {
        if password.chars().count() < Self::MIN_PASSWORD_LEN {
            return Err(DomainError::validation(
                "password",
                format!("Password must be at least {} chars", Self::MIN_PASSWORD_LEN),
            ));
        }

        Ok(Self {
            email: Email::try_new(email)?,
            password,
            display_name: match display_name {
                Some(name) => DisplayName::try_new(name)?,
                None => DisplayName::default(),
            },
        })
    }
}

// Le mot de passe ne doit jamais finir dans les logs
impl fmt::Debug for SeedAdminCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeedAdminCommand")
            .field("email", &self.email)
            .field("password", &"***")
            .field("display_name", &self.display_name)
            .finish()
    }
}
