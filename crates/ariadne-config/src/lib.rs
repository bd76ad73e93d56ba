//! Typed configuration for Ariadne.
//!
//! Configuration is layered: defaults, then a TOML or JSON file, then
//! environment variables. Unknown fields are rejected.
//!
//! # Example
//!
//! ```no_run
//! use ariadne_config::ConfigLoader;
//!
//! # fn main() -> Result<(), ariadne_config::ConfigError> {
//! let config = ConfigLoader::new()
//!     .with_optional_file("ariadne.toml")?
//!     .with_env_prefix("ARIADNE")
//!     .load()?;
//!
//! println!("boolean parsing: {:?}", config.converter.bool_parsing);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration File Format
//!
//! ```toml
//! [converter]
//! bool_parsing = "strict"   # or "lenient"
//!
//! [logging]
//! enabled = true
//! level = "info"
//! format = "json"           # or "pretty"
//! ansi_enabled = false
//! include_location = false
//! ```
//!
//! # Environment Variable Overrides
//!
//! - `ARIADNE__CONVERTER__BOOL_PARSING`
//! - `ARIADNE__LOGGING__ENABLED`
//! - `ARIADNE__LOGGING__LEVEL`
//! - `ARIADNE__LOGGING__FORMAT`
//! - `ARIADNE__LOGGING__ANSI_ENABLED`
//! - `ARIADNE__LOGGING__INCLUDE_LOCATION`

#![doc(html_root_url = "https://docs.rs/ariadne-config/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod error;
mod loader;
mod schema;

pub use config::{AriadneConfig, AriadneConfigBuilder};
pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use schema::{LogFormat, LoggingConfig};
