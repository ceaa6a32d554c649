use crate::errors::{AppError, DomainError};

/// Result du domaine : agrégats, use cases, repositories.
pub type Result<T> = std::result::Result<T, DomainError>;

/// Result d'application : binaires, handlers HTTP.
pub type AppResult<T> = std::result::Result<T, AppError>;
