// crates/marketplace/src/infrastructure/security/pbkdf2_password_hasher.rs

use pbkdf2::password_hash::{self, PasswordHasher as _, PasswordVerifier as _, SaltString};
use pbkdf2::{Algorithm, Params, Pbkdf2};
use rand::Rng;
use shared_kernel::errors::{DomainError, Result};

use crate::domain::services::PasswordHasher;
use crate::domain::value_objects::PasswordHash;

const SALT_LEN: usize = 16;
const HASH_LEN: usize = 32;

/// PBKDF2-HMAC-SHA256 au format PHC (`$pbkdf2-sha256$i=<rounds>,l=32$<salt>$<hash>`).
/// Le nombre de tours est stocké avec l'empreinte : il peut augmenter sans invalider l'existant.
#[derive(Debug, Clone, Copy)]
pub struct Pbkdf2PasswordHasher {
    rounds: u32,
}

impl Pbkdf2PasswordHasher {
    pub const DEFAULT_ROUNDS: u32 = 100_000;

    pub fn new() -> Self {
        Self { rounds: Self::DEFAULT_ROUNDS }
    }

    pub fn with_rounds(rounds: u32) -> Self {
        Self { rounds: rounds.max(1) }
    }

    fn params(&self) -> Params {
        Params { rounds: self.rounds, output_length: HASH_LEN }
    }
}

impl Default for Pbkdf2PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

fn internal(e: password_hash::Error) -> DomainError {
    DomainError::Internal(format!("Password hashing failed: {e}"))
}

impl PasswordHasher for Pbkdf2PasswordHasher {
    fn hash(&self, password: &str) -> Result<PasswordHash> {
        let mut salt = [0u8; SALT_LEN];
        rand::rng().fill(&mut salt);
        let salt = SaltString::encode_b64(&salt).map_err(internal)?;

        let hash = Pbkdf2
            .hash_password_customized(
                password.as_bytes(),
                Some(Algorithm::Pbkdf2Sha256.ident()),
                None,
                self.params(),
                &salt,
            )
            .map_err(internal)?;

        Ok(PasswordHash::from_raw(hash.to_string()))
    }

    fn verify(&self, password: &str, hash: &PasswordHash) -> Result<bool> {
        // Empreinte illisible : refus, jamais d'erreur exploitable côté appelant
        let Ok(parsed) = password_hash::PasswordHash::new(hash.as_str()) else {
            tracing::warn!("Stored password hash is not a valid PHC string");
            return Ok(false);
        };

        // Comparaison en temps constant assurée par password-hash
        match Pbkdf2.verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            Err(e) => Err(internal(e)),
        }
    }
}
