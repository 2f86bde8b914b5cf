//! Logger trait definition.

use std::fmt::{self, Arguments};

/// Log level for filtering messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Per-tile filtering detail
    Trace,
    /// Per-tile rendering summaries
    Debug,
    /// Point set changes
    Info,
    /// Recoverable problems
    Warn,
    /// Failures
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        };
        f.write_str(name)
    }
}

/// Logging interface used by the tile generator.
///
/// Implementations must be `Send + Sync` so a generator holding one can be
/// shared between rendering threads.
///
/// # Example
///
/// ```
/// use heatlayer::log::{Logger, NoOpLogger};
/// use heatlayer::log_info;
/// use std::sync::Arc;
///
/// let logger: Arc<dyn Logger> = Arc::new(NoOpLogger);
/// log_info!(logger, "Rendered {} tiles", 12);
/// ```
pub trait Logger: Send + Sync {
    /// Log a message at the specified level.
    fn log(&self, level: LogLevel, args: Arguments<'_>);

    fn trace(&self, args: Arguments<'_>) {
        self.log(LogLevel::Trace, args);
    }

    fn debug(&self, args: Arguments<'_>) {
        self.log(LogLevel::Debug, args);
    }

    fn info(&self, args: Arguments<'_>) {
        self.log(LogLevel::Info, args);
    }

    fn warn(&self, args: Arguments<'_>) {
        self.log(LogLevel::Warn, args);
    }

    fn error(&self, args: Arguments<'_>) {
        self.log(LogLevel::Error, args);
    }
}

#[macro_export]
macro_rules! log_trace {
    ($logger:expr, $($arg:tt)*) => {
        $logger.trace(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        $logger.debug(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $logger.info(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)*) => {
        $logger.warn(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {
        $logger.error(format_args!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Logger capturing formatted messages.
    #[derive(Default)]
    struct CapturingLogger {
        lines: Mutex<Vec<String>>,
    }

    impl Logger for CapturingLogger {
        fn log(&self, level: LogLevel, args: Arguments<'_>) {
            self.lines.lock().unwrap().push(format!("{} {}", level, args));
        }
    }

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Trace < LogLevel::Debug);
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Error);
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevel::Warn.to_string(), "WARN");
    }

    #[test]
    fn test_macros_route_to_levels() {
        let logger = CapturingLogger::default();
        log_trace!(logger, "t{}", 1);
        log_debug!(logger, "d{}", 2);
        log_info!(logger, "i{}", 3);
        log_warn!(logger, "w{}", 4);
        log_error!(logger, "e{}", 5);

        let lines = logger.lines.lock().unwrap();
        assert_eq!(
            *lines,
            vec!["TRACE t1", "DEBUG d2", "INFO i3", "WARN w4", "ERROR e5"]
        );
    }
}
