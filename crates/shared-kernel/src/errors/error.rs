// crates/shared-kernel/src/errors/error.rs

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Validation failed for field '{field}': {reason}")]
    Validation {
        field: &'static str,
        reason: String,
    },

    #[error("{entity} not found with id '{id}'")]
    NotFound {
        entity: &'static str,
        id: String,
    },

    #[error("{entity} already exists with {field} = '{value}'")]
    AlreadyExists {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    /// Version divergente lors d'une écriture (verrou optimiste)
    #[error("Concurrency conflict: {reason}")]
    ConcurrencyConflict { reason: String },

    /// Abandon après épuisement des tentatives de retry
    #[error("Operation failed after maximum retries: {0}")]
    TooManyConflicts(String),

    #[error("Unauthorized access: {reason}")]
    Unauthorized { reason: String },

    #[error("Forbidden: {reason}")]
    Forbidden { reason: String },

    /// Panne technique (DB, pool, réseau)
    #[error("Infrastructure failure: {0}")]
    Infrastructure(String),

    #[error("Internal domain error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }

    pub fn is_concurrency_conflict(&self) -> bool {
        matches!(self, Self::ConcurrencyConflict { .. })
    }

    pub fn is_already_exists(&self) -> bool {
        matches!(self, Self::AlreadyExists { .. })
    }
}
