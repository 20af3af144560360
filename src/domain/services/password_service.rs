use crate::domain::{error::DomainError, models::credential::CredentialDigest};

/// Service for hashing and verifying passwords
pub trait PasswordHasher: Clone {
    /// Derive a salted digest from a plain text password
    fn hash(&self, plain_password: &str) -> Result<CredentialDigest, DomainError>;

    /// Verify a plain text password against a stored digest
    fn verify(&self, plain_password: &str, digest: &CredentialDigest) -> Result<bool, DomainError>;
}
