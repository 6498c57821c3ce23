use crate::types::DbId;
use crate::validation::FieldError;

/// Closed error taxonomy for every client/asset operation.
///
/// Each variant belongs to exactly one [`ErrorKind`], which fixes the HTTP
/// status the API layer answers with.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Request input failed shape, type or constraint checks.
    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// A filtered read by parent id matched no rows.
    #[error("No {entity} found for {parent} with id {parent_id}")]
    NotFoundForParent {
        entity: &'static str,
        parent: &'static str,
        parent_id: DbId,
    },

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Build a validation error carrying a single field entry.
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        CoreError::Validation(vec![FieldError::new(field, message)])
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::Validation(_) => ErrorKind::Validation,
            CoreError::NotFound { .. } | CoreError::NotFoundForParent { .. } => {
                ErrorKind::NotFound
            }
            CoreError::Conflict(_) => ErrorKind::Conflict,
            CoreError::Internal(_) => ErrorKind::Internal,
        }
    }
}

/// Discriminant of a [`CoreError`], carrying its fixed status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Conflict,
    Internal,
}

impl ErrorKind {
    /// HTTP status code for this kind.
    pub fn status_code(self) -> u16 {
        match self {
            ErrorKind::Validation => 400,
            ErrorKind::NotFound => 404,
            ErrorKind::Conflict => 409,
            ErrorKind::Internal => 500,
        }
    }

    /// Machine-readable code placed in error response bodies.
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::Validation => "VALIDATION_ERROR",
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::Conflict => "CONFLICT",
            ErrorKind::Internal => "INTERNAL_ERROR",
        }
    }
}
