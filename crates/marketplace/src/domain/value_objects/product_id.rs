// crates/marketplace/src/domain/value_objects/product_id.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;
use shared_kernel::domain::Identifier;
use shared_kernel::domain::value_objects::ValueObject;
use shared_kernel::errors::{DomainError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProductId(Uuid);

impl ProductId {
    /// UUID v7 : séquentiel, adapté aux index B-tree
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn try_new(id: impl Into<String>) -> Result<Self> {
        Self::from_str(&id.into())
    }
}

impl Identifier for ProductId {
    fn as_uuid(&self) -> Uuid {
        self.0
    }

    fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl ValueObject for ProductId {
    fn validate(&self) -> Result<()> {
        if self.0.is_nil() {
            return Err(DomainError::validation("product_id", "Product ID cannot be nil"));
        }
        Ok(())
    }
}

impl Default for ProductId {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for ProductId {
    type Err = DomainError;
    fn from_str(s: &str) -> Result<Self> {
        let id = Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|_| DomainError::validation("product_id", format!("'{}' is not a valid UUID", s)))?;
        id.validate()?;
        Ok(id)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
