//! Declared-type descriptors.
//!
//! A [`TypeDescriptor`] describes the declared type of a handler field as the
//! discovery layer knows it, including list and wildcard indirections. The
//! converter never builds descriptors itself; it only reads them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{ConversionError, ConversionResult};

/// The closed set of scalar kinds a parameter may convert to.
///
/// Two kinds are never interchangeable, even when numerically compatible:
/// a `Long` descriptor does not accept a value parsed as `Int`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarKind {
    /// 32-bit signed integer.
    Int,
    /// 32-bit float.
    Float,
    /// 64-bit float.
    Double,
    /// 64-bit signed integer.
    Long,
    /// Boolean.
    Bool,
    /// UTF-8 text.
    Text,
}

impl ScalarKind {
    /// All supported kinds, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Int,
        Self::Float,
        Self::Double,
        Self::Long,
        Self::Bool,
        Self::Text,
    ];

    /// Returns the Rust type name this kind converts to.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Int => "i32",
            Self::Float => "f32",
            Self::Double => "f64",
            Self::Long => "i64",
            Self::Bool => "bool",
            Self::Text => "String",
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// Declared type of a field that takes part in parameter conversion.
///
/// # Example
///
/// ```rust
/// use ariadne_convert::{ScalarKind, Shape, TypeDescriptor};
///
/// let ids = TypeDescriptor::list_of(TypeDescriptor::scalar(ScalarKind::Long));
/// assert_eq!(ids.to_string(), "Vec<i64>");
/// assert_eq!(ids.shape().unwrap(), Shape::List(ScalarKind::Long));
///
/// let deferred = TypeDescriptor::wildcard(TypeDescriptor::scalar(ScalarKind::Int));
/// assert_eq!(deferred.shape().unwrap(), Shape::Scalar(ScalarKind::Int));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeDescriptor {
    /// A single scalar value.
    Scalar(ScalarKind),
    /// An ordered list whose elements must resolve to a scalar kind.
    List(Box<TypeDescriptor>),
    /// A deferred type reference, resolved to its upper bound before use.
    Wildcard {
        /// Declared upper bounds. Exactly one is supported.
        upper_bounds: Vec<TypeDescriptor>,
    },
    /// Any other declared type, identified by name for diagnostics.
    Unsupported(String),
}

/// The resolved shape a [`TypeDescriptor`] converts through.
///
/// Wildcards are collapsed and list elements checked before a shape is
/// produced, so matching on it is exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Exactly one raw value, converted to this kind.
    Scalar(ScalarKind),
    /// Any number of raw values, each converted to this kind.
    List(ScalarKind),
}

impl TypeDescriptor {
    /// Creates a scalar descriptor.
    #[must_use]
    pub const fn scalar(kind: ScalarKind) -> Self {
        Self::Scalar(kind)
    }

    /// Creates a list descriptor with the given element type.
    #[must_use]
    pub fn list_of(element: TypeDescriptor) -> Self {
        Self::List(Box::new(element))
    }

    /// Creates a wildcard with a single upper bound.
    #[must_use]
    pub fn wildcard(upper_bound: TypeDescriptor) -> Self {
        Self::Wildcard {
            upper_bounds: vec![upper_bound],
        }
    }

    /// Creates a descriptor for a type the converter has no rule for.
    #[must_use]
    pub fn unsupported(name: impl Into<String>) -> Self {
        Self::Unsupported(name.into())
    }

    /// Follows wildcards down to a concrete descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::UnsupportedType`] if a wildcard does not
    /// declare exactly one upper bound.
    pub fn resolve(&self) -> ConversionResult<&TypeDescriptor> {
        let mut current = self;
        while let Self::Wildcard { upper_bounds } = current {
            match upper_bounds.as_slice() {
                [bound] => current = bound,
                _ => return Err(ConversionError::unsupported_type(current)),
            }
        }
        Ok(current)
    }

    /// Resolves this descriptor to the shape conversion dispatches on.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::UnsupportedType`] for unsupported types,
    /// for lists whose element is not a scalar, and for wildcards without
    /// exactly one upper bound.
    pub fn shape(&self) -> ConversionResult<Shape> {
        match self.resolve()? {
            Self::Scalar(kind) => Ok(Shape::Scalar(*kind)),
            Self::List(element) => match element.resolve()? {
                Self::Scalar(kind) => Ok(Shape::List(*kind)),
                _ => Err(ConversionError::unsupported_type(self)),
            },
            other => Err(ConversionError::unsupported_type(other)),
        }
    }
}

impl From<ScalarKind> for TypeDescriptor {
    fn from(kind: ScalarKind) -> Self {
        Self::Scalar(kind)
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(kind) => write!(f, "{kind}"),
            Self::List(element) => write!(f, "Vec<{element}>"),
            Self::Wildcard { upper_bounds } if upper_bounds.is_empty() => f.write_str("?"),
            Self::Wildcard { upper_bounds } => {
                f.write_str("? extends ")?;
                for (i, bound) in upper_bounds.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" & ")?;
                    }
                    write!(f, "{bound}")?;
                }
                Ok(())
            }
            Self::Unsupported(name) => f.write_str(name),
        }
    }
}
