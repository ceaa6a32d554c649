// crates/marketplace/src/domain/services/password_hasher.rs

use shared_kernel::errors::Result;

use crate::domain::value_objects::PasswordHash;

/// Port de hachage : le domaine ne connaît ni l'algorithme ni le format d'encodage.
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, password: &str) -> Result<PasswordHash>;
    fn verify(&self, password: &str, hash: &PasswordHash) -> Result<bool>;
}
