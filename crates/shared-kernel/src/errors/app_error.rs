// crates/shared-kernel/src/errors/app_error.rs

use crate::errors::{DomainError, ErrorCode};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Erreur exposée aux clients (API, CLI). Le détail technique reste dans les logs.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl AppError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }
}

impl From<DomainError> for AppError {
    fn from(error: DomainError) -> Self {
        match error {
            DomainError::NotFound { entity, id } => Self::new(
                ErrorCode::NotFound,
                format!("{entity} with id '{id}' not found"),
            ),

            DomainError::AlreadyExists {
                entity,
                field,
                value,
            } => Self::new(
                ErrorCode::AlreadyExists,
                format!("{entity} with {field} '{value}' already exists"),
            ),

            DomainError::ConcurrencyConflict { reason } => {
                Self::new(ErrorCode::ConcurrencyConflict, reason)
            }

            DomainError::Validation { field, reason } => Self::new(
                ErrorCode::ValidationFailed,
                format!("Validation failed for {field}"),
            )
            .with_details(serde_json::json!({ "field": field, "reason": reason })),

            DomainError::Unauthorized { reason } => Self::new(ErrorCode::Unauthorized, reason),

            DomainError::Forbidden { reason } => Self::new(ErrorCode::Forbidden, reason),

            // Détail masqué côté client
            DomainError::Infrastructure(_)
            | DomainError::Internal(_)
            | DomainError::TooManyConflicts(_) => {
                tracing::error!("Unexpected failure surfaced to client: {}", error);
                Self::new(
                    ErrorCode::InternalError,
                    "An unexpected error occurred. Please try again later.",
                )
            }
        }
    }
}

#[cfg(feature = "postgres")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!("Database infrastructure error: {:?}", err);

        Self::new(ErrorCode::InternalError, "A database error occurred")
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {}
