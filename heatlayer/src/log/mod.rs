//! Logging abstraction layer.
//!
//! Library components log through the [`Logger`] trait rather than calling
//! `tracing` directly, so an embedding application decides whether and
//! where output goes:
//!
//! - [`TracingLogger`]: forwards to `tracing` (used by the CLI)
//! - [`NoOpLogger`]: discards everything (generator default, tests)
//!
//! Use the `log_*!` macros with any `Logger`:
//!
//! ```
//! use heatlayer::log::{Logger, TracingLogger};
//! use heatlayer::log_debug;
//! use std::sync::Arc;
//!
//! let logger: Arc<dyn Logger> = Arc::new(TracingLogger);
//! log_debug!(logger, "tile {}/{}/{} rendered", 4, 2, 3);
//! ```

mod noop;
mod tracing_adapter;
mod r#trait;

pub use noop::NoOpLogger;
pub use r#trait::{LogLevel, Logger};
pub use tracing_adapter::TracingLogger;
