/// Logging port injected into every use case.
///
/// Callers pass fully formatted messages. Credentials must never appear in them.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
