// crates/shared-kernel/src/domain/identifier.rs

use uuid::Uuid;

/// Contrat commun des identifiants d'agrégats (UUID v7 en base).
pub trait Identifier:
    serde::Serialize + for<'de> serde::Deserialize<'de> + Clone + Send + Sync + PartialEq
{
    fn as_uuid(&self) -> Uuid;
    fn as_string(&self) -> String {
        self.as_uuid().to_string()
    }
    fn from_uuid(uuid: Uuid) -> Self;
}
