pub mod account_repository;
