// crates/marketplace/src/domain/value_objects/admin_id.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;
use shared_kernel::domain::Identifier;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AdminId(Uuid);

impl AdminId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Identifier for AdminId {
    fn as_uuid(&self) -> Uuid {
        self.0
    }

    fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for AdminId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AdminId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
