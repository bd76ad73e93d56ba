//! # Ariadne
//!
//! **Typed request-parameter conversion for URL routing**
//!
//! Ariadne sits between a router and its handlers. It turns the raw strings
//! bound to path and query parameters into the typed values a handler
//! declares, and turns typed values back into the raw strings a URL builder
//! needs.
//!
//! - **Closed type model** – six scalar kinds, flat lists of them, and
//!   single-bound wildcards, all resolved before dispatch
//! - **Exact failures** – missing, multi-valued, unsupported and unparsable
//!   parameters each have their own error
//! - **Stateless** – one converter serves every request on every thread
//!
//! ## Quick Start
//!
//! ```rust
//! use ariadne::prelude::*;
//!
//! let service = DefaultConversionService::new();
//! let params = Parameters::from_query("user_id=42&tag=a&tag=b").unwrap();
//!
//! let fields = [
//!     FieldSpec::required("user_id", ScalarKind::Long),
//!     FieldSpec::required("tag", TypeDescriptor::list_of(ScalarKind::Text.into())),
//!     FieldSpec::optional("page", ScalarKind::Int),
//! ];
//!
//! let values = service.decode_fields(&params, &fields).unwrap();
//! assert_eq!(values[0].1, ConvertedValue::Scalar(ScalarValue::Long(42)));
//! assert!(values[2].1.is_null());
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Router ── Parameters ──► ConversionService::from_request ──► Handler
//!                                                                 │
//! URL builder ◄── (name, raw) ◄── ConversionService::encode_fields ◄┘
//! ```

#![doc(html_root_url = "https://docs.rs/ariadne/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export parameter storage
pub use ariadne_params as params;

// Re-export conversion types
pub use ariadne_convert as convert;

// Re-export configuration
pub use ariadne_config as config;

// Re-export telemetry
pub use ariadne_telemetry as telemetry;

use ariadne_config::AriadneConfig;
use ariadne_convert::DefaultConversionService;
use ariadne_telemetry::TelemetryResult;

/// Initializes logging from `config` and returns a converter using its
/// converter options.
///
/// Logging is installed globally, so call this once per process.
///
/// # Errors
///
/// Returns a [`TelemetryError`](ariadne_telemetry::TelemetryError) if logging
/// cannot be initialized.
///
/// # Example
///
/// ```rust
/// use ariadne::config::AriadneConfig;
///
/// let mut config = AriadneConfig::default();
/// config.logging.enabled = false;
///
/// let service = ariadne::bootstrap(&config).unwrap();
/// assert_eq!(service.options(), &config.converter);
/// ```
pub fn bootstrap(config: &AriadneConfig) -> TelemetryResult<DefaultConversionService> {
    ariadne_telemetry::init_logging(&config.log_config())?;

    let service = DefaultConversionService::with_options(config.converter_options());
    tracing::info!(
        bool_parsing = ?config.converter.bool_parsing,
        "Conversion service ready"
    );
    Ok(service)
}

/// Prelude module for convenient imports.
///
/// # Example
///
/// ```rust
/// use ariadne::prelude::*;
///
/// let service = DefaultConversionService::new();
/// let raws = service.to_parameter_strings(&Value::from(7), "n", false).unwrap();
/// assert_eq!(raws, vec!["7"]);
/// ```
pub mod prelude {
    pub use ariadne_config::{AriadneConfig, ConfigLoader};
    pub use ariadne_convert::{
        BoolParsing, ConversionError, ConversionResult, ConversionService, ConvertedValue,
        ConverterOptions, DefaultConversionService, FieldSpec, ScalarKind, ScalarValue, Shape,
        TypeDescriptor, Value,
    };
    pub use ariadne_params::{ParameterLookup, Parameters};
}
