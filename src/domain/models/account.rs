use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::models::credential::CredentialDigest;

/// Input of a registration attempt. The password is plaintext and transient.
#[derive(Clone, Serialize, Deserialize)]
pub struct RegistrationRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl fmt::Debug for RegistrationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationRequest")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Persisted account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    username: String,
    email: String,
    password_hash: CredentialDigest,
}

impl Account {
    pub fn new(username: String, email: String, password_hash: CredentialDigest) -> Self {
        Self {
            username,
            email,
            password_hash,
        }
    }

    // getterのみ提供
    pub fn username(&self) -> &str {
        &self.username
    }
    pub fn email(&self) -> &str {
        &self.email
    }
    pub fn password_hash(&self) -> &CredentialDigest {
        &self.password_hash
    }
}

/// Public view of a freshly registered account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredUser {
    pub username: String,
    pub email: String,
}

impl From<Account> for RegisteredUser {
    fn from(account: Account) -> Self {
        Self {
            username: account.username,
            email: account.email,
        }
    }
}
