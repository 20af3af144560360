use std::fmt;

use sea_orm::entity::prelude::*;

/// `password` holds the `salt:hash` digest, never plaintext.
#[derive(Clone, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password: String,
}

// Rows end up in sqlx/sea-orm debug logs; keep the digest out of them
impl fmt::Debug for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Model")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_password() {
        let row = Model {
            id: 1,
            username: "john_doe".to_string(),
            email: "john@example.com".to_string(),
            password: "ab01:cd23".to_string(),
        };

        let debug = format!("{:?}", row);
        assert!(debug.contains("john_doe"));
        assert!(!debug.contains("ab01"));
        assert!(!debug.contains("cd23"));
    }
}
