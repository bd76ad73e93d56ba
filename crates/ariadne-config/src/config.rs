//! Main configuration types.
//!
//! This module provides the top-level [`AriadneConfig`] struct and its builder.

use ariadne_convert::{BoolParsing, ConverterOptions};
use ariadne_telemetry::LogConfig;
use serde::{Deserialize, Serialize};

use crate::{ConfigError, LogFormat, LoggingConfig};

/// Complete Ariadne configuration.
///
/// Use [`ConfigLoader`](crate::ConfigLoader) to load it from files and
/// environment variables.
///
/// # Example
///
/// ```
/// use ariadne_config::AriadneConfig;
/// use ariadne_convert::BoolParsing;
///
/// let config = AriadneConfig::default();
/// assert_eq!(config.converter.bool_parsing, BoolParsing::Strict);
/// assert_eq!(config.logging.level, "info");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct AriadneConfig {
    /// Converter options.
    #[serde(default)]
    pub converter: ConverterOptions,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AriadneConfig {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```
    /// use ariadne_config::AriadneConfig;
    /// use ariadne_convert::BoolParsing;
    ///
    /// let config = AriadneConfig::builder()
    ///     .bool_parsing(BoolParsing::Lenient)
    ///     .log_level("warn")
    ///     .build();
    ///
    /// assert_eq!(config.converter.bool_parsing, BoolParsing::Lenient);
    /// assert_eq!(config.logging.level, "warn");
    /// ```
    #[must_use]
    pub fn builder() -> AriadneConfigBuilder {
        AriadneConfigBuilder::new()
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the log level is not a valid
    /// filter directive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.logging.enabled {
            ariadne_telemetry::create_env_filter(&self.logging.level)
                .map_err(|e| ConfigError::invalid_value("logging.level", e.to_string()))?;
        }
        Ok(())
    }

    /// Create a development configuration preset.
    ///
    /// Pretty, colored debug logs with source locations.
    ///
    /// # Example
    ///
    /// ```
    /// use ariadne_config::{AriadneConfig, LogFormat};
    ///
    /// let config = AriadneConfig::development();
    /// assert_eq!(config.logging.format, LogFormat::Pretty);
    /// ```
    #[must_use]
    pub fn development() -> Self {
        let mut config = Self::default();
        config.logging.level = "debug".to_string();
        config.logging.format = LogFormat::Pretty;
        config.logging.ansi_enabled = true;
        config.logging.include_location = true;
        config
    }

    /// Create a production configuration preset.
    ///
    /// JSON logs at info level and strict boolean parsing.
    #[must_use]
    pub fn production() -> Self {
        let mut config = Self::default();
        config.logging.level = "info".to_string();
        config.logging.format = LogFormat::Json;
        config.logging.ansi_enabled = false;
        config.converter.bool_parsing = BoolParsing::Strict;
        config
    }

    /// Returns the converter options section.
    #[must_use]
    pub fn converter_options(&self) -> ConverterOptions {
        self.converter
    }

    /// Returns the logging setup described by the logging section.
    #[must_use]
    pub fn log_config(&self) -> LogConfig {
        self.logging.to_log_config()
    }
}

/// Builder for [`AriadneConfig`].
#[derive(Debug, Default)]
pub struct AriadneConfigBuilder {
    config: AriadneConfig,
}

impl AriadneConfigBuilder {
    /// Creates a builder starting from defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the converter options.
    #[must_use]
    pub fn converter(mut self, converter: ConverterOptions) -> Self {
        self.config.converter = converter;
        self
    }

    /// Sets the boolean parsing rule.
    #[must_use]
    pub fn bool_parsing(mut self, bool_parsing: BoolParsing) -> Self {
        self.config.converter.bool_parsing = bool_parsing;
        self
    }

    /// Sets the logging section.
    #[must_use]
    pub fn logging(mut self, logging: LoggingConfig) -> Self {
        self.config.logging = logging;
        self
    }

    /// Sets the log filter directive.
    #[must_use]
    pub fn log_level(mut self, level: impl Into<String>) -> Self {
        self.config.logging.level = level.into();
        self
    }

    /// Builds the configuration.
    #[must_use]
    pub fn build(self) -> AriadneConfig {
        self.config
    }
}
