/// Sink for registration events.
///
/// Events are keyed by username only. Implementations must never receive the
/// password or its digest, so none of these methods take them.
pub trait RegistrationLogger: Clone {
    fn attempt(&self, username: &str);

    fn validation_failed(&self, username: &str, error_count: usize);

    fn duplicate(&self, username: &str);

    /// `detail` is internal store diagnostics and stays in the log.
    fn store_error(&self, username: &str, detail: &str);

    fn hashing_failed(&self, username: &str, detail: &str);

    fn registered(&self, username: &str);
}
