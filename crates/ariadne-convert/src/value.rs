//! Typed values on both sides of a conversion.
//!
//! [`ConvertedValue`] is what the forward path hands to a handler;
//! [`Value`] is what the inverse path accepts when building a URL.

use std::fmt;

use crate::ScalarKind;

/// A single typed value of one of the supported scalar kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue {
    /// 32-bit signed integer.
    Int(i32),
    /// 32-bit float.
    Float(f32),
    /// 64-bit float.
    Double(f64),
    /// 64-bit signed integer.
    Long(i64),
    /// Boolean.
    Bool(bool),
    /// UTF-8 text.
    Text(String),
}

impl ScalarValue {
    /// Returns the kind of this value.
    #[must_use]
    pub const fn kind(&self) -> ScalarKind {
        match self {
            Self::Int(_) => ScalarKind::Int,
            Self::Float(_) => ScalarKind::Float,
            Self::Double(_) => ScalarKind::Double,
            Self::Long(_) => ScalarKind::Long,
            Self::Bool(_) => ScalarKind::Bool,
            Self::Text(_) => ScalarKind::Text,
        }
    }

    /// Renders the value as the raw string placed in a URL.
    ///
    /// Parsing the result back as [`kind`](Self::kind) yields the same value.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Returns the value if it is an `i32`.
    #[must_use]
    pub const fn as_i32(&self) -> Option<i32> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the value if it is an `f32`.
    #[must_use]
    pub const fn as_f32(&self) -> Option<f32> {
        match self {
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the value if it is an `f64`.
    #[must_use]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Double(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the value if it is an `i64`.
    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Long(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the value if it is a `bool`.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the value if it is text.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Double(v) => write!(f, "{v}"),
            Self::Long(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Text(v) => f.write_str(v),
        }
    }
}

macro_rules! impl_scalar_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for ScalarValue {
                fn from(v: $ty) -> Self {
                    Self::$variant(v.into())
                }
            }

            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Self::Scalar(v.into())
                }
            }
        )*
    };
}

impl_scalar_from!(
    i32 => Int,
    f32 => Float,
    f64 => Double,
    i64 => Long,
    bool => Bool,
    String => Text,
    &str => Text,
);

/// Result of converting a request parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertedValue {
    /// The parameter was optional and absent.
    Null,
    /// A single-valued parameter.
    Scalar(ScalarValue),
    /// A list parameter, in request order.
    List(Vec<ScalarValue>),
}

impl ConvertedValue {
    /// Returns true for [`ConvertedValue::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the scalar if this is a single value.
    #[must_use]
    pub const fn as_scalar(&self) -> Option<&ScalarValue> {
        match self {
            Self::Scalar(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the elements if this is a list.
    #[must_use]
    pub fn as_list(&self) -> Option<&[ScalarValue]> {
        match self {
            Self::List(v) => Some(v),
            _ => None,
        }
    }

    /// Consumes the value, returning the elements if this is a list.
    #[must_use]
    pub fn into_list(self) -> Option<Vec<ScalarValue>> {
        match self {
            Self::List(v) => Some(v),
            _ => None,
        }
    }
}

/// A value to be rendered into URL parameter strings.
///
/// Callers build this from their typed fields. Anything the converter has no
/// rendering for is passed as [`Value::Opaque`] and is rejected.
///
/// # Example
///
/// ```rust
/// use ariadne_convert::Value;
///
/// let ids: Value = vec![1_i64, 2, 3].into();
/// let page: Value = Some(2).into();
/// let none: Value = Option::<i32>::None.into();
///
/// assert!(matches!(ids, Value::Sequence(ref items) if items.len() == 3));
/// assert!(matches!(page, Value::Scalar(_)));
/// assert_eq!(none, Value::Null);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// No value; renders to no strings.
    Null,
    /// A single scalar; renders to one string.
    Scalar(ScalarValue),
    /// An ordered sequence; renders element by element.
    Sequence(Vec<Value>),
    /// A value of an unsupported runtime type, identified by name.
    Opaque(String),
}

impl Value {
    /// Creates an opaque value for a runtime type the converter cannot render.
    #[must_use]
    pub fn opaque(type_name: impl Into<String>) -> Self {
        Self::Opaque(type_name.into())
    }
}

impl From<ScalarValue> for Value {
    fn from(v: ScalarValue) -> Self {
        Self::Scalar(v)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl From<ConvertedValue> for Value {
    fn from(v: ConvertedValue) -> Self {
        match v {
            ConvertedValue::Null => Self::Null,
            ConvertedValue::Scalar(s) => Self::Scalar(s),
            ConvertedValue::List(items) => Self::Sequence(items.into_iter().map(Self::Scalar).collect()),
        }
    }
}
