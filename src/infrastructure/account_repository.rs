use async_trait::async_trait;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, SqlErr,
};

use crate::domain::{
    error::RepositoryError, models::credential::CredentialDigest,
    repositories::account_repository::AccountRepository,
};
use crate::infrastructure::entity::users;

#[derive(Clone)]
pub struct SqlAccountRepository {
    db: DatabaseConnection,
}

impl SqlAccountRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn exists<C: ConnectionTrait>(
        conn: &C,
        username: &str,
        email: &str,
    ) -> Result<bool, RepositoryError> {
        let matches = users::Entity::find()
            .filter(
                Condition::any()
                    .add(users::Column::Username.eq(username))
                    .add(users::Column::Email.eq(email)),
            )
            .count(conn)
            .await
            .map_err(translate)?;

        Ok(matches > 0)
    }
}

/// Unique-constraint violations become `Duplicate`; everything else is the
/// store being unavailable.
fn translate(err: DbErr) -> RepositoryError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => RepositoryError::Duplicate,
        _ => RepositoryError::Unavailable(err.to_string()),
    }
}

#[async_trait]
impl AccountRepository for SqlAccountRepository {
    async fn is_taken(&self, username: &str, email: &str) -> Result<bool, RepositoryError> {
        Self::exists(&self.db, username, email).await
    }

    async fn insert(
        &self,
        username: &str,
        email: &str,
        digest: &CredentialDigest,
    ) -> Result<(), RepositoryError> {
        let model = users::ActiveModel {
            username: Set(username.to_string()),
            email: Set(email.to_string()),
            password: Set(digest.to_string()),
            ..Default::default()
        };

        // One statement against the UNIQUE columns is the atomic check-and-insert.
        // It starts as a write, so SQLite waits on the busy timeout instead of
        // failing a read-to-write lock upgrade.
        users::Entity::insert(model)
            .exec(&self.db)
            .await
            .map_err(translate)?;

        Ok(())
    }
}
