//!
//! Logger of the payments SDK models.
//!

pub use tracing::{debug, error, event as log, info, instrument, warn};
pub use tracing::{Level, Span};

pub mod config;
mod setup;

pub use self::config::{Config, Log, LogConsole, LogFormat};
pub use setup::{setup, LoggerError, TelemetryGuard};
