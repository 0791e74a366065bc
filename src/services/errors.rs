use thiserror::Error;

/// Generic error type used by service layer functions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// Requested resource was not found.
    #[error("not found")]
    NotFound,
    /// A domain validation rule failed; carries the reason message.
    #[error("{0}")]
    Validation(String),
    /// The request payload was malformed or missing required fields.
    #[error("{0}")]
    Form(String),
    /// A concurrent modification was lost between read and write.
    #[error("conflict")]
    Conflict,
    /// An unexpected internal error occurred.
    #[error("internal error")]
    Internal,
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;
