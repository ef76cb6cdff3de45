use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards business log lines to `tracing`, tagged with the component
/// (users, categories, ...) the use case belongs to.
pub struct TracingLogger {
    component: &'static str,
}

impl TracingLogger {
    pub fn new(component: &'static str) -> Self {
        Self { component }
    }
}

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "stockroom", component = self.component, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "stockroom", component = self.component, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "stockroom", component = self.component, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "stockroom", component = self.component, "{}", message);
    }
}
