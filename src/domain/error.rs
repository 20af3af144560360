use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Password hashing failed: {0}")]
    Hashing(String),

    #[error("Malformed credential digest")]
    MalformedDigest,
}

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Username or email already exists")]
    Duplicate,

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Terminal failure of a single registration attempt.
///
/// Carries only what is safe to show the caller; store diagnostics are
/// dropped on conversion from [`RepositoryError`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("Validation failed")]
    Validation(Vec<String>),

    #[error("Username or email already exists")]
    Duplicate,

    #[error("Database error occurred")]
    StoreUnavailable,

    #[error("Internal error occurred")]
    Internal,
}

impl From<RepositoryError> for RegistrationError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::Duplicate => RegistrationError::Duplicate,
            RepositoryError::Unavailable(_) => RegistrationError::StoreUnavailable,
        }
    }
}

impl From<DomainError> for RegistrationError {
    fn from(error: DomainError) -> Self {
        match error {
            DomainError::Repository(e) => e.into(),
            DomainError::Hashing(_) | DomainError::MalformedDigest => RegistrationError::Internal,
        }
    }
}
