//! # Ariadne Convert
//!
//! Typed conversion between raw request parameters and the values route
//! handlers declare.
//!
//! The forward path takes the raw strings bound to a parameter name (from
//! path segments or the query string) and produces a typed value for the
//! field's declared [`TypeDescriptor`]. The inverse path takes a typed
//! [`Value`] and renders the ordered raw strings a URL builder places under
//! that name.
//!
//! ## Supported types
//!
//! | Descriptor | Raw values | Result |
//! |------------|------------|--------|
//! | `Scalar(kind)` | exactly one | [`ConvertedValue::Scalar`] |
//! | `List(Scalar(kind))` | any number | [`ConvertedValue::List`], in order |
//! | `Wildcard` with one bound | as for the bound | as for the bound |
//! | anything else | - | [`ConversionError::UnsupportedType`] |
//!
//! The scalar kinds are `i32`, `f32`, `f64`, `i64`, `bool` and `String`.
//! Kinds never widen into one another.
//!
//! ## Example
//!
//! ```rust
//! use ariadne_convert::{
//!     ConversionService, ConvertedValue, DefaultConversionService, FieldSpec, ScalarKind,
//!     ScalarValue, TypeDescriptor, Value,
//! };
//! use ariadne_params::Parameters;
//!
//! let service = DefaultConversionService::new();
//! let params = Parameters::from_query("ids=1&ids=2&ids=3").unwrap();
//! let ids = TypeDescriptor::list_of(TypeDescriptor::scalar(ScalarKind::Int));
//!
//! let value = service.from_request(&params, "ids", &ids, false).unwrap();
//! assert_eq!(
//!     value,
//!     ConvertedValue::List(vec![ScalarValue::Int(1), ScalarValue::Int(2), ScalarValue::Int(3)])
//! );
//!
//! // And back again for URL construction.
//! let raws = service.to_parameter_strings(&Value::from(value), "ids", false).unwrap();
//! assert_eq!(raws, vec!["1", "2", "3"]);
//!
//! // Absent optional fields convert to null.
//! let page = FieldSpec::optional("page", ScalarKind::Int);
//! let decoded = service.decode_fields(&params, &[page]).unwrap();
//! assert!(decoded[0].1.is_null());
//! ```
//!
//! ## Error Handling
//!
//! Every failure is a [`ConversionError`] and is returned immediately; there
//! is no default substitution or partial list result.
//!
//! ```rust
//! use ariadne_convert::{ConversionService, DefaultConversionService, ScalarKind, TypeDescriptor};
//! use ariadne_params::Parameters;
//!
//! let params = Parameters::from_query("id=1&id=2").unwrap();
//! let err = DefaultConversionService::new()
//!     .from_request(&params, "id", &TypeDescriptor::scalar(ScalarKind::Int), false)
//!     .unwrap_err();
//!
//! assert_eq!(err.error_code(), "MULTIPLE_VALUES");
//! ```

#![doc(html_root_url = "https://docs.rs/ariadne-convert/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod converter;
mod error;
mod field;
mod options;
mod service;
mod types;
mod value;

pub use converter::DefaultConversionService;
pub use error::{ConversionError, ConversionResult};
pub use field::FieldSpec;
pub use options::{BoolParsing, ConverterOptions};
pub use service::ConversionService;
pub use types::{ScalarKind, Shape, TypeDescriptor};
pub use value::{ConvertedValue, ScalarValue, Value};

// Re-export the lookup context consumed by the forward path
pub use ariadne_params::{ParameterLookup, Parameters};
