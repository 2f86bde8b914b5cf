//! Tracing library adapter implementation.

use crate::log::{LogLevel, Logger};
use std::fmt::Arguments;

/// Logger forwarding to the `tracing` crate under the `heatlayer` target.
///
/// Output depends on the installed subscriber; see
/// [`init_logging`](crate::logging::init_logging).
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl TracingLogger {
    pub fn new() -> Self {
        Self
    }
}

impl Logger for TracingLogger {
    fn log(&self, level: LogLevel, args: Arguments<'_>) {
        match level {
            LogLevel::Trace => tracing::trace!(target: "heatlayer", "{}", args),
            LogLevel::Debug => tracing::debug!(target: "heatlayer", "{}", args),
            LogLevel::Info => tracing::info!(target: "heatlayer", "{}", args),
            LogLevel::Warn => tracing::warn!(target: "heatlayer", "{}", args),
            LogLevel::Error => tracing::error!(target: "heatlayer", "{}", args),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracing_logger_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TracingLogger>();
    }

    #[test]
    fn test_tracing_logger_without_subscriber() {
        // No subscriber installed: messages are dropped, not panicking.
        let logger: Box<dyn Logger> = Box::new(TracingLogger::new());
        logger.info(format_args!("tile {}", "0/0/0"));
        logger.trace(format_args!("filtered"));
    }
}
