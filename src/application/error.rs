// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("infrastructure failure: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }

    /// True when a write lost a uniqueness race, e.g. two writers deriving the
    /// same slug.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Domain(DomainError::Conflict(_)))
    }

    /// True when the underlying record store could not be reached.
    pub fn is_store_unavailable(&self) -> bool {
        matches!(self, Self::Domain(DomainError::StoreUnavailable(_)))
    }
}
