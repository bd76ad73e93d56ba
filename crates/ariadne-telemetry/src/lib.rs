//! Structured logging for Ariadne.
//!
//! Conversion emits `tracing` events; this crate installs a subscriber that
//! renders them as JSON (production) or in a human-readable form
//! (development).
//!
//! # Example
//!
//! ```rust,ignore
//! use ariadne_telemetry::{init_logging, LogConfig};
//!
//! init_logging(&LogConfig::development())?;
//!
//! tracing::info!(parameter = "user_id", "Converting parameter");
//! ```

#![doc(html_root_url = "https://docs.rs/ariadne-telemetry/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
pub mod logging;

pub use error::TelemetryError;
pub use logging::{create_env_filter, init_logging, LogConfig};

/// Result type for telemetry operations.
pub type TelemetryResult<T> = Result<T, TelemetryError>;
