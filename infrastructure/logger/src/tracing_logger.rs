use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards domain log lines to `tracing` under the `inventory` target, so
/// `RUST_LOG=inventory=debug` selects them.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "inventory", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "inventory", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "inventory", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "inventory", "{}", message);
    }
}
