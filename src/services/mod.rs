use log::error;
use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod contact;

/// The only error shapes exposed past the service boundary. The transport
/// layer maps them one-to-one onto response statuses.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    /// Deliberate not-found condition for a contact id. Raised directly by
    /// the service and propagated as-is, never re-classified.
    pub fn contact_not_found(id: &str) -> Self {
        ServiceError::NotFound(format!("Contact with id \"{id}\" not found"))
    }

    /// Translates an arbitrary storage failure into one of the stable error
    /// kinds. The raw error is logged with the operation context and never
    /// shown to the caller.
    pub fn classify(err: RepositoryError, context: &str) -> Self {
        error!("{context}: {err}");

        match err {
            RepositoryError::UniqueViolation(_) => {
                ServiceError::Conflict(format!("{context}: duplicate entry"))
            }
            _ => ServiceError::Internal(format!("{context}: internal server error")),
        }
    }
}
