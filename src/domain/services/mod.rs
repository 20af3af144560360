pub mod password_service;
pub mod registration_logger;
