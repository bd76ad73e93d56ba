//! Conversion error types.
//!
//! Every failure is deterministic for a given input and is surfaced to the
//! caller as-is. Translating it into a response is up to the routing engine.

use thiserror::Error;

use crate::{ScalarKind, TypeDescriptor};

/// Result type alias using [`ConversionError`].
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Error raised by a conversion in either direction.
///
/// # Example
///
/// ```rust
/// use ariadne_convert::ConversionError;
///
/// let err = ConversionError::missing_parameter("user_id");
/// assert_eq!(err.error_code(), "MISSING_PARAMETER");
/// assert_eq!(err.parameter(), Some("user_id"));
/// assert!(err.to_string().contains("user_id"));
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// A required parameter has no binding in the request.
    #[error("parameter '{name}' was not found in the request")]
    MissingParameter {
        /// The parameter name.
        name: String,
    },

    /// A single-valued parameter was bound to zero or several values.
    #[error("parameter '{name}' of type {ty} expects exactly one value, got {count}")]
    MultipleValuesForSingleValuedParameter {
        /// The parameter name.
        name: String,
        /// The declared type.
        ty: TypeDescriptor,
        /// How many raw values were bound.
        count: usize,
    },

    /// The declared type, or the runtime value on the inverse path, has no
    /// conversion rule.
    #[error("type {ty} is not supported in parameter conversion{}", parameter_suffix(.parameter.as_deref()))]
    UnsupportedType {
        /// Display form of the offending type.
        ty: String,
        /// The parameter name, when known.
        parameter: Option<String>,
    },

    /// A raw string could not be parsed as the target kind.
    #[error("cannot convert '{raw}' to {kind}{}: {reason}", parameter_suffix(.parameter.as_deref()))]
    ConversionFailure {
        /// The offending raw string.
        raw: String,
        /// The target kind.
        kind: ScalarKind,
        /// The parser's explanation.
        reason: String,
        /// The parameter name, when known.
        parameter: Option<String>,
    },
}

fn parameter_suffix(parameter: Option<&str>) -> String {
    parameter
        .map(|name| format!(" (parameter '{name}')"))
        .unwrap_or_default()
}

impl ConversionError {
    /// Creates an error for an absent required parameter.
    #[must_use]
    pub fn missing_parameter(name: impl Into<String>) -> Self {
        Self::MissingParameter { name: name.into() }
    }

    /// Creates an error for a single-valued parameter with `count` values.
    #[must_use]
    pub fn multiple_values(name: impl Into<String>, ty: &TypeDescriptor, count: usize) -> Self {
        Self::MultipleValuesForSingleValuedParameter {
            name: name.into(),
            ty: ty.clone(),
            count,
        }
    }

    /// Creates an error for a declared type without a conversion rule.
    #[must_use]
    pub fn unsupported_type(ty: &TypeDescriptor) -> Self {
        Self::UnsupportedType {
            ty: ty.to_string(),
            parameter: None,
        }
    }

    /// Creates an error for a runtime value of an unknown kind.
    #[must_use]
    pub fn unsupported_value(type_name: impl Into<String>, parameter: impl Into<String>) -> Self {
        Self::UnsupportedType {
            ty: type_name.into(),
            parameter: Some(parameter.into()),
        }
    }

    /// Creates an error for a raw string that failed to parse.
    #[must_use]
    pub fn conversion_failure(
        raw: impl Into<String>,
        kind: ScalarKind,
        reason: impl Into<String>,
    ) -> Self {
        Self::ConversionFailure {
            raw: raw.into(),
            kind,
            reason: reason.into(),
            parameter: None,
        }
    }

    /// Attaches the parameter name to errors raised below the field level.
    ///
    /// Errors that already name a parameter are returned unchanged.
    #[must_use]
    pub fn for_parameter(mut self, name: &str) -> Self {
        match &mut self {
            Self::UnsupportedType { parameter, .. } | Self::ConversionFailure { parameter, .. }
                if parameter.is_none() =>
            {
                *parameter = Some(name.to_string());
            }
            _ => {}
        }
        self
    }

    /// Returns the parameter name if the error is tied to one.
    #[must_use]
    pub fn parameter(&self) -> Option<&str> {
        match self {
            Self::MissingParameter { name }
            | Self::MultipleValuesForSingleValuedParameter { name, .. } => Some(name),
            Self::UnsupportedType { parameter, .. } | Self::ConversionFailure { parameter, .. } => {
                parameter.as_deref()
            }
        }
    }

    /// Returns a stable code for this error, suitable for error envelopes.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::MissingParameter { .. } => "MISSING_PARAMETER",
            Self::MultipleValuesForSingleValuedParameter { .. } => "MULTIPLE_VALUES",
            Self::UnsupportedType { .. } => "UNSUPPORTED_TYPE",
            Self::ConversionFailure { .. } => "CONVERSION_FAILURE",
        }
    }
}
