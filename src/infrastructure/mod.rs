pub mod account_repository;
pub mod database;
pub mod entity;
pub mod sha256_password_hasher;
pub mod tracing_registration_logger;
