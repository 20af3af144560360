pub mod registration_handler;
