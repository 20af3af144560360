use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Schema};

use crate::{config::Config, infrastructure::entity::users};

/// Open the connection pool and make sure the `users` table exists.
pub async fn connect(config: &Config) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(config.max_connections)
        .min_connections(1)
        .sqlx_logging(config.sqlx_logging);

    let db = Database::connect(opt).await?;
    ensure_schema(&db).await?;

    tracing::info!("Database connected and schema ensured");
    Ok(db)
}

/// Create `users` with UNIQUE username and email if it is missing.
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);
    let stmt = schema
        .create_table_from_entity(users::Entity)
        .if_not_exists()
        .to_owned();

    db.execute(backend.build(&stmt)).await?;
    Ok(())
}

/// Single-connection in-memory SQLite with the schema in place.
#[cfg(test)]
pub async fn memory_db() -> DatabaseConnection {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).min_connections(1).sqlx_logging(false);

    let db = Database::connect(opt).await.unwrap();
    ensure_schema(&db).await.unwrap();
    db
}

/// Multi-connection SQLite pool over a file in `dir`, so concurrent callers
/// really hold separate connections.
#[cfg(test)]
pub async fn file_db(dir: &tempfile::TempDir) -> DatabaseConnection {
    let config = Config {
        database_url: format!(
            "sqlite://{}?mode=rwc",
            dir.path().join("accounts.db").display()
        ),
        max_connections: 8,
        ..Config::default()
    };

    connect(&config).await.unwrap()
}
