use std::fmt;
use std::str::FromStr;

use crate::domain::error::DomainError;

/// Separator between salt and hash in the stored form. Never produced by hex.
pub const DIGEST_SEPARATOR: char = ':';

/// Value object representing a salted password digest
#[derive(Clone, PartialEq, Eq)]
pub struct CredentialDigest {
    salt: String,
    hash: String,
}

impl CredentialDigest {
    /// Create a digest from hex-encoded salt and hash
    pub fn new(salt: String, hash: String) -> Self {
        Self { salt, hash }
    }

    pub fn salt(&self) -> &str {
        &self.salt
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }
}

// Never print salt or hash in debug output
impl fmt::Debug for CredentialDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialDigest")
            .field("salt", &"[REDACTED]")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

/// Stored form: `salt:hash`
impl fmt::Display for CredentialDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.salt, DIGEST_SEPARATOR, self.hash)
    }
}

impl FromStr for CredentialDigest {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (salt, hash) = s
            .split_once(DIGEST_SEPARATOR)
            .ok_or(DomainError::MalformedDigest)?;

        let is_hex = |part: &str| !part.is_empty() && part.chars().all(|c| c.is_ascii_hexdigit());
        if !is_hex(salt) || !is_hex(hash) {
            return Err(DomainError::MalformedDigest);
        }

        Ok(Self::new(salt.to_string(), hash.to_string()))
    }
}
