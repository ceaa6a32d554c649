// crates/marketplace/src/domain/value_objects/password_hash.rs

use std::fmt;

/// Empreinte encodée d'un mot de passe, chaîne PHC (`$pbkdf2-sha256$i=<rounds>,l=32$<salt>$<hash>`).
/// Jamais sérialisée vers l'extérieur ; `Debug` masque la valeur.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    pub fn from_raw(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(***)")
    }
}
