use rand_core::{OsRng, TryRngCore};
use sha2::{Digest, Sha256};

use crate::domain::{
    error::DomainError, models::credential::CredentialDigest,
    services::password_service::PasswordHasher,
};

/// 256-bit salt
pub const SALT_LEN: usize = 32;

#[derive(Clone)]
pub struct Sha256PasswordHasher;

impl Sha256PasswordHasher {
    pub fn new() -> Self {
        Self
    }

    fn digest(salt: &[u8], plain_password: &str) -> Vec<u8> {
        let mut hasher = Sha256::new();
        hasher.update(salt);
        hasher.update(plain_password.as_bytes());
        hasher.finalize().to_vec()
    }
}

impl Default for Sha256PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher for Sha256PasswordHasher {
    fn hash(&self, plain_password: &str) -> Result<CredentialDigest, DomainError> {
        let mut salt = [0u8; SALT_LEN];
        OsRng
            .try_fill_bytes(&mut salt)
            .map_err(|e| DomainError::Hashing(e.to_string()))?;

        let hash = hex::encode(Self::digest(&salt, plain_password));

        Ok(CredentialDigest::new(hex::encode(salt), hash))
    }

    fn verify(&self, plain_password: &str, digest: &CredentialDigest) -> Result<bool, DomainError> {
        let salt = hex::decode(digest.salt()).map_err(|_| DomainError::MalformedDigest)?;
        // Compare bytes so hex case in the stored form does not matter
        let expected = hex::decode(digest.hash()).map_err(|_| DomainError::MalformedDigest)?;

        Ok(Self::digest(&salt, plain_password) == expected)
    }
}
