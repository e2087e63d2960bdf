//! The module contains the errors the engine can throw.
//!
//! The variants follow the REST surface: [`NotFound`] becomes 404,
//! [`Conflict`] 409, [`MissingReference`] and [`Validation`] 400, and
//! [`Database`] a generic 500.
//!
//! [`NotFound`]: EngineError::NotFound
//! [`Conflict`]: EngineError::Conflict
//! [`MissingReference`]: EngineError::MissingReference
//! [`Validation`]: EngineError::Validation
//! [`Database`]: EngineError::Database
use sea_orm::DbErr;
use thiserror::Error;

/// Engine custom errors. The payload is the user-facing message.
#[derive(Error, Debug)]
pub enum EngineError {
    /// The requested row does not exist.
    #[error("{0}")]
    NotFound(String),
    /// A unique value is taken, or dependent rows block a delete.
    #[error("{0}")]
    Conflict(String),
    /// A referenced row is missing on write.
    #[error("{0}")]
    MissingReference(String),
    /// A field failed validation.
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::NotFound(a), Self::NotFound(b)) => a == b,
            (Self::Conflict(a), Self::Conflict(b)) => a == b,
            (Self::MissingReference(a), Self::MissingReference(b)) => a == b,
            (Self::Validation(a), Self::Validation(b)) => a == b,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
