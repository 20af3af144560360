use async_trait::async_trait;

use crate::domain::{error::RepositoryError, models::credential::CredentialDigest};

/// Account store.
///
/// `insert` must perform its uniqueness check and the write as one atomic
/// unit, so that two concurrent inserts of the same username or email cannot
/// both succeed. Matching is exact (case-sensitive).
#[async_trait]
pub trait AccountRepository {
    /// True if any account has this username or this email
    async fn is_taken(&self, username: &str, email: &str) -> Result<bool, RepositoryError>;

    /// Persist a new account, or fail with [`RepositoryError::Duplicate`]
    async fn insert(
        &self,
        username: &str,
        email: &str,
        digest: &CredentialDigest,
    ) -> Result<(), RepositoryError>;
}
