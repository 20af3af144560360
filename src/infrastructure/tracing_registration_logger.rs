use crate::domain::services::registration_logger::RegistrationLogger;

/// Emits registration events through `tracing`.
#[derive(Clone, Default)]
pub struct TracingRegistrationLogger;

impl TracingRegistrationLogger {
    pub fn new() -> Self {
        Self
    }
}

impl RegistrationLogger for TracingRegistrationLogger {
    fn attempt(&self, username: &str) {
        tracing::info!(username = %username, "Registration attempt");
    }

    fn validation_failed(&self, username: &str, error_count: usize) {
        tracing::info!(username = %username, error_count, "Registration rejected by validation");
    }

    fn duplicate(&self, username: &str) {
        tracing::warn!(username = %username, "Duplicate registration attempt");
    }

    fn store_error(&self, username: &str, detail: &str) {
        tracing::error!(username = %username, error = %detail, "Account store error during registration");
    }

    fn hashing_failed(&self, username: &str, detail: &str) {
        tracing::error!(username = %username, error = %detail, "Password hashing failed");
    }

    fn registered(&self, username: &str) {
        tracing::info!(username = %username, "User registered");
    }
}
