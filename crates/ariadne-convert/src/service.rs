//! The conversion contract.
//!
//! The [`ConversionService`] trait is what the routing engine depends on.
//! [`DefaultConversionService`](crate::DefaultConversionService) is the
//! reference implementation; other implementations must honor the same
//! rules.

use ariadne_params::ParameterLookup;

use crate::{ConversionResult, ConvertedValue, FieldSpec, TypeDescriptor, Value};

/// Bidirectional mapping between raw request parameters and typed values.
///
/// Implementations hold no per-request state and may be shared across
/// threads, typically behind an `Arc<dyn ConversionService>`.
///
/// # Example
///
/// ```rust
/// use ariadne_convert::{
///     ConversionService, ConvertedValue, DefaultConversionService, ScalarKind, ScalarValue,
///     TypeDescriptor, Value,
/// };
/// use ariadne_params::Parameters;
///
/// let service = DefaultConversionService::new();
/// let mut params = Parameters::new();
/// params.append("id", "42");
///
/// let id = service
///     .from_request(&params, "id", &TypeDescriptor::scalar(ScalarKind::Int), false)
///     .unwrap();
/// assert_eq!(id, ConvertedValue::Scalar(ScalarValue::Int(42)));
///
/// let raw = service.to_parameter_strings(&Value::from(42), "id", false).unwrap();
/// assert_eq!(raw, vec!["42".to_string()]);
/// ```
pub trait ConversionService: Send + Sync {
    /// Converts the raw values bound to `name` into a value of type `ty`.
    ///
    /// An unbound name yields [`ConvertedValue::Null`] when `optional` is
    /// set. A name bound to an empty list counts as bound.
    ///
    /// # Errors
    ///
    /// Returns a [`ConversionError`](crate::ConversionError) describing the
    /// first failure; no partial result is produced.
    fn from_request(
        &self,
        ctx: &dyn ParameterLookup,
        name: &str,
        ty: &TypeDescriptor,
        optional: bool,
    ) -> ConversionResult<ConvertedValue>;

    /// Renders `value` into the ordered raw strings for parameter `name`.
    ///
    /// `Null` renders to nothing, a sequence renders element by element, and
    /// a scalar renders to exactly one string. `optional` does not change
    /// the result.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::UnsupportedType`](crate::ConversionError::UnsupportedType)
    /// if any part of `value` has no rendering.
    fn to_parameter_strings(
        &self,
        value: &Value,
        name: &str,
        optional: bool,
    ) -> ConversionResult<Vec<String>>;

    /// Converts every field in order, returning `(name, value)` pairs.
    ///
    /// # Errors
    ///
    /// Stops at the first field that fails to convert.
    fn decode_fields(
        &self,
        ctx: &dyn ParameterLookup,
        fields: &[FieldSpec],
    ) -> ConversionResult<Vec<(String, ConvertedValue)>> {
        fields
            .iter()
            .map(|field| {
                self.from_request(ctx, field.name(), field.ty(), field.is_optional())
                    .map(|value| (field.name().to_string(), value))
            })
            .collect()
    }

    /// Renders every field in order into `(name, raw string)` pairs for URL
    /// assembly. A field contributes one pair per rendered string.
    ///
    /// # Errors
    ///
    /// Stops at the first value that cannot be rendered.
    fn encode_fields(&self, values: &[(FieldSpec, Value)]) -> ConversionResult<Vec<(String, String)>> {
        let mut pairs = Vec::with_capacity(values.len());
        for (field, value) in values {
            let raws = self.to_parameter_strings(value, field.name(), field.is_optional())?;
            pairs.extend(raws.into_iter().map(|raw| (field.name().to_string(), raw)));
        }
        Ok(pairs)
    }
}
