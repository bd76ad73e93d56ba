//! The default scalar/list converter.

use std::fmt::Display;
use std::str::FromStr;

use ariadne_params::ParameterLookup;

use crate::{
    ConversionError, ConversionResult, ConversionService, ConvertedValue, ConverterOptions,
    ScalarKind, ScalarValue, Shape, TypeDescriptor, Value,
};

/// Reference [`ConversionService`] for the six scalar kinds and flat lists of
/// them.
///
/// The service is stateless apart from its immutable options, so one instance
/// can serve every request.
///
/// # Example
///
/// ```rust
/// use ariadne_convert::{
///     ConvertedValue, DefaultConversionService, ScalarKind, ScalarValue, TypeDescriptor,
/// };
///
/// let service = DefaultConversionService::new();
/// let ty = TypeDescriptor::list_of(TypeDescriptor::scalar(ScalarKind::Int));
/// let raws = vec!["1".to_string(), "2".to_string(), "3".to_string()];
///
/// let value = service.convert_values("ids", &raws, &ty).unwrap();
/// assert_eq!(
///     value,
///     ConvertedValue::List(vec![ScalarValue::Int(1), ScalarValue::Int(2), ScalarValue::Int(3)])
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DefaultConversionService {
    options: ConverterOptions,
}

impl DefaultConversionService {
    /// Creates a converter with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a converter with the given options.
    #[must_use]
    pub fn with_options(options: ConverterOptions) -> Self {
        Self { options }
    }

    /// Returns the active options.
    #[must_use]
    pub fn options(&self) -> &ConverterOptions {
        &self.options
    }

    /// Converts one raw string to the scalar type `ty` resolves to.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::UnsupportedType`] if `ty` does not resolve
    /// to a scalar kind, and [`ConversionError::ConversionFailure`] if `raw`
    /// does not parse.
    pub fn convert_scalar(&self, raw: &str, ty: &TypeDescriptor) -> ConversionResult<ScalarValue> {
        match ty.shape()? {
            Shape::Scalar(kind) => self.parse_scalar(raw, kind),
            Shape::List(_) => Err(ConversionError::unsupported_type(ty)),
        }
    }

    /// Converts the raw values bound to `name` according to the shape of `ty`.
    ///
    /// List types convert every element in order; any failing element fails
    /// the whole call. Scalar types require exactly one raw value.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::MultipleValuesForSingleValuedParameter`]
    /// when a scalar type receives zero or several values, plus any error of
    /// [`convert_scalar`](Self::convert_scalar).
    pub fn convert_values(
        &self,
        name: &str,
        raws: &[String],
        ty: &TypeDescriptor,
    ) -> ConversionResult<ConvertedValue> {
        match ty.shape()? {
            Shape::List(kind) => raws
                .iter()
                .map(|raw| self.parse_scalar(raw, kind))
                .collect::<ConversionResult<Vec<_>>>()
                .map(ConvertedValue::List),
            Shape::Scalar(kind) => match raws {
                [raw] => self.parse_scalar(raw, kind).map(ConvertedValue::Scalar),
                _ => Err(ConversionError::multiple_values(name, ty, raws.len())),
            },
        }
    }

    fn parse_scalar(&self, raw: &str, kind: ScalarKind) -> ConversionResult<ScalarValue> {
        match kind {
            ScalarKind::Int => parse_number(raw, kind).map(ScalarValue::Int),
            ScalarKind::Float => parse_number(raw, kind).map(ScalarValue::Float),
            ScalarKind::Double => parse_number(raw, kind).map(ScalarValue::Double),
            ScalarKind::Long => parse_number(raw, kind).map(ScalarValue::Long),
            ScalarKind::Bool => self
                .options
                .bool_parsing
                .parse(raw)
                .map(ScalarValue::Bool)
                .ok_or_else(|| {
                    ConversionError::conversion_failure(raw, kind, "expected 'true' or 'false'")
                }),
            ScalarKind::Text => Ok(ScalarValue::Text(raw.to_string())),
        }
    }
}

fn render_into(value: &Value, name: &str, out: &mut Vec<String>) -> ConversionResult<()> {
    match value {
        Value::Null => {}
        Value::Scalar(scalar) => out.push(scalar.render()),
        Value::Sequence(items) => {
            for item in items {
                render_into(item, name, out)?;
            }
        }
        Value::Opaque(type_name) => {
            return Err(ConversionError::unsupported_value(type_name.as_str(), name));
        }
    }
    Ok(())
}

fn parse_number<T>(raw: &str, kind: ScalarKind) -> ConversionResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    raw.parse()
        .map_err(|e: T::Err| ConversionError::conversion_failure(raw, kind, e.to_string()))
}

impl ConversionService for DefaultConversionService {
    fn from_request(
        &self,
        ctx: &dyn ParameterLookup,
        name: &str,
        ty: &TypeDescriptor,
        optional: bool,
    ) -> ConversionResult<ConvertedValue> {
        let result = match ctx.get_all(name) {
            Some(raws) => self.convert_values(name, raws, ty),
            None if optional => Ok(ConvertedValue::Null),
            None => Err(ConversionError::missing_parameter(name)),
        }
        .map_err(|e| e.for_parameter(name));

        match &result {
            Ok(value) => {
                tracing::trace!(
                    parameter = name,
                    declared_type = %ty,
                    null = value.is_null(),
                    "Parameter converted"
                );
            }
            Err(e) => {
                tracing::debug!(
                    parameter = name,
                    declared_type = %ty,
                    error_code = e.error_code(),
                    error = %e,
                    "Parameter conversion failed"
                );
            }
        }
        result
    }

    fn to_parameter_strings(
        &self,
        value: &Value,
        name: &str,
        _optional: bool,
    ) -> ConversionResult<Vec<String>> {
        let mut out = Vec::new();
        if let Err(e) = render_into(value, name, &mut out) {
            tracing::debug!(
                parameter = name,
                error_code = e.error_code(),
                error = %e,
                "Parameter rendering failed"
            );
            return Err(e);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BoolParsing, FieldSpec};
    use ariadne_params::Parameters;

    fn scalar(kind: ScalarKind) -> TypeDescriptor {
        TypeDescriptor::scalar(kind)
    }

    fn raws(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    fn service() -> DefaultConversionService {
        DefaultConversionService::new()
    }

    #[test]
    fn test_convert_each_scalar_kind() {
        let s = service();
        assert_eq!(s.convert_scalar("-7", &scalar(ScalarKind::Int)).unwrap(), ScalarValue::Int(-7));
        assert_eq!(s.convert_scalar("1.5", &scalar(ScalarKind::Float)).unwrap(), ScalarValue::Float(1.5));
        assert_eq!(s.convert_scalar("2.25", &scalar(ScalarKind::Double)).unwrap(), ScalarValue::Double(2.25));
        assert_eq!(
            s.convert_scalar("9000000000", &scalar(ScalarKind::Long)).unwrap(),
            ScalarValue::Long(9_000_000_000)
        );
        assert_eq!(s.convert_scalar("true", &scalar(ScalarKind::Bool)).unwrap(), ScalarValue::Bool(true));
        assert_eq!(
            s.convert_scalar("hello", &scalar(ScalarKind::Text)).unwrap(),
            ScalarValue::Text("hello".into())
        );
    }

    #[test]
    fn test_no_numeric_widening() {
        let err = service()
            .convert_scalar("9000000000", &scalar(ScalarKind::Int))
            .unwrap_err();
        assert!(matches!(
            err,
            ConversionError::ConversionFailure { kind: ScalarKind::Int, .. }
        ));

        let err = service().convert_scalar("1.0", &scalar(ScalarKind::Long)).unwrap_err();
        assert_eq!(err.error_code(), "CONVERSION_FAILURE");
    }

    #[test]
    fn test_conversion_failure_carries_input() {
        let err = service().convert_scalar("abc", &scalar(ScalarKind::Double)).unwrap_err();
        match err {
            ConversionError::ConversionFailure { raw, kind, .. } => {
                assert_eq!(raw, "abc");
                assert_eq!(kind, ScalarKind::Double);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_wildcard_scalar_resolves() {
        let ty = TypeDescriptor::wildcard(scalar(ScalarKind::Long));
        assert_eq!(service().convert_scalar("5", &ty).unwrap(), ScalarValue::Long(5));
    }

    #[test]
    fn test_convert_scalar_rejects_list_type() {
        let ty = TypeDescriptor::list_of(scalar(ScalarKind::Int));
        let err = service().convert_scalar("1", &ty).unwrap_err();
        assert_eq!(err.error_code(), "UNSUPPORTED_TYPE");
    }

    #[test]
    fn test_strict_bool_rejects_other_text() {
        let err = service().convert_scalar("yes", &scalar(ScalarKind::Bool)).unwrap_err();
        assert_eq!(err.error_code(), "CONVERSION_FAILURE");
    }

    #[test]
    fn test_lenient_bool_maps_other_text_to_false() {
        let s = DefaultConversionService::with_options(ConverterOptions {
            bool_parsing: BoolParsing::Lenient,
        });
        assert_eq!(s.convert_scalar("yes", &scalar(ScalarKind::Bool)).unwrap(), ScalarValue::Bool(false));
        assert_eq!(s.options().bool_parsing, BoolParsing::Lenient);
    }

    #[test]
    fn test_list_preserves_order() {
        let ty = TypeDescriptor::list_of(scalar(ScalarKind::Int));
        let value = service().convert_values("ids", &raws(&["3", "1", "2"]), &ty).unwrap();
        assert_eq!(
            value,
            ConvertedValue::List(vec![ScalarValue::Int(3), ScalarValue::Int(1), ScalarValue::Int(2)])
        );
    }

    #[test]
    fn test_list_fails_as_a_whole() {
        let ty = TypeDescriptor::list_of(scalar(ScalarKind::Int));
        let err = service().convert_values("ids", &raws(&["1", "x", "3"]), &ty).unwrap_err();
        assert!(matches!(err, ConversionError::ConversionFailure { ref raw, .. } if raw == "x"));
    }

    #[test]
    fn test_empty_list_for_list_type() {
        let ty = TypeDescriptor::list_of(scalar(ScalarKind::Text));
        assert_eq!(service().convert_values("tags", &[], &ty).unwrap(), ConvertedValue::List(Vec::new()));
    }

    #[test]
    fn test_scalar_requires_exactly_one_value() {
        let ty = scalar(ScalarKind::Int);

        let err = service().convert_values("id", &raws(&["1", "2"]), &ty).unwrap_err();
        assert_eq!(err, ConversionError::multiple_values("id", &ty, 2));

        let err = service().convert_values("id", &[], &ty).unwrap_err();
        assert_eq!(err, ConversionError::multiple_values("id", &ty, 0));
    }

    #[test]
    fn test_unsupported_type_wins_over_cardinality() {
        let ty = TypeDescriptor::unsupported("UserProfile");
        let err = service().convert_values("user", &raws(&["a", "b"]), &ty).unwrap_err();
        assert_eq!(err.error_code(), "UNSUPPORTED_TYPE");
    }

    #[test]
    fn test_from_request_missing_required() {
        let params = Parameters::new();
        let err = service()
            .from_request(&params, "id", &scalar(ScalarKind::Int), false)
            .unwrap_err();
        assert_eq!(err, ConversionError::missing_parameter("id"));
    }

    #[test]
    fn test_from_request_missing_optional() {
        let params = Parameters::new();
        let value = service()
            .from_request(&params, "id", &scalar(ScalarKind::Int), true)
            .unwrap();
        assert!(value.is_null());
    }

    #[test]
    fn test_from_request_present_empty_is_not_absent() {
        let mut params = Parameters::new();
        params.insert_empty("id");

        let err = service()
            .from_request(&params, "id", &scalar(ScalarKind::Int), true)
            .unwrap_err();
        assert_eq!(err.error_code(), "MULTIPLE_VALUES");

        let list = TypeDescriptor::list_of(scalar(ScalarKind::Int));
        let value = service().from_request(&params, "id", &list, false).unwrap();
        assert_eq!(value, ConvertedValue::List(Vec::new()));
    }

    #[test]
    fn test_from_request_empty_text() {
        let mut params = Parameters::new();
        params.append("q", "");

        let value = service()
            .from_request(&params, "q", &scalar(ScalarKind::Text), false)
            .unwrap();
        assert_eq!(value, ConvertedValue::Scalar(ScalarValue::Text(String::new())));
    }

    #[test]
    fn test_from_request_names_parameter_on_parse_failure() {
        let mut params = Parameters::new();
        params.append("limit", "ten");

        let err = service()
            .from_request(&params, "limit", &scalar(ScalarKind::Int), false)
            .unwrap_err();
        assert_eq!(err.parameter(), Some("limit"));
    }

    #[test]
    fn test_to_parameter_strings() {
        let s = service();
        assert_eq!(s.to_parameter_strings(&Value::Null, "x", true).unwrap(), Vec::<String>::new());
        assert_eq!(
            s.to_parameter_strings(&Value::from(vec![1, 2, 3]), "x", false).unwrap(),
            raws(&["1", "2", "3"])
        );
        assert_eq!(s.to_parameter_strings(&Value::from(42), "x", false).unwrap(), raws(&["42"]));
    }

    #[test]
    fn test_to_parameter_strings_flattens_nested_sequences() {
        let value = Value::Sequence(vec![
            Value::from(vec!["a", "b"]),
            Value::Null,
            Value::from("c"),
        ]);
        assert_eq!(
            service().to_parameter_strings(&value, "x", false).unwrap(),
            raws(&["a", "b", "c"])
        );
    }

    #[test]
    fn test_to_parameter_strings_rejects_opaque() {
        let value = Value::from(vec![Value::from(1), Value::opaque("Uuid")]);
        let err = service().to_parameter_strings(&value, "ids", false).unwrap_err();

        assert_eq!(err.error_code(), "UNSUPPORTED_TYPE");
        assert_eq!(err.parameter(), Some("ids"));
        assert!(err.to_string().contains("Uuid"));
    }

    #[test]
    fn test_decode_fields_in_order() {
        let params = Parameters::from_query("id=7&tag=a&tag=b").unwrap();
        let fields = [
            FieldSpec::required("id", ScalarKind::Long),
            FieldSpec::required("tag", TypeDescriptor::list_of(scalar(ScalarKind::Text))),
            FieldSpec::optional("page", ScalarKind::Int),
        ];

        let decoded = service().decode_fields(&params, &fields).unwrap();
        assert_eq!(
            decoded,
            vec![
                ("id".to_string(), ConvertedValue::Scalar(ScalarValue::Long(7))),
                (
                    "tag".to_string(),
                    ConvertedValue::List(vec![ScalarValue::from("a"), ScalarValue::from("b")])
                ),
                ("page".to_string(), ConvertedValue::Null),
            ]
        );
    }

    #[test]
    fn test_decode_fields_stops_at_first_failure() {
        let params = Parameters::from_query("id=x").unwrap();
        let fields = [
            FieldSpec::required("id", ScalarKind::Int),
            FieldSpec::required("other", ScalarKind::Int),
        ];

        let err = service().decode_fields(&params, &fields).unwrap_err();
        assert_eq!(err.parameter(), Some("id"));
    }

    #[test]
    fn test_encode_fields() {
        let values = [
            (FieldSpec::required("id", ScalarKind::Int), Value::from(5)),
            (FieldSpec::optional("page", ScalarKind::Int), Value::Null),
            (
                FieldSpec::required("tag", TypeDescriptor::list_of(scalar(ScalarKind::Text))),
                Value::from(vec!["x", "y"]),
            ),
        ];

        let pairs = service().encode_fields(&values).unwrap();
        assert_eq!(
            pairs,
            vec![
                ("id".to_string(), "5".to_string()),
                ("tag".to_string(), "x".to_string()),
                ("tag".to_string(), "y".to_string()),
            ]
        );
    }

    #[test]
    fn test_service_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DefaultConversionService>();

        let shared: std::sync::Arc<dyn ConversionService> = std::sync::Arc::new(service());
        let value = shared.to_parameter_strings(&Value::from(true), "flag", false).unwrap();
        assert_eq!(value, raws(&["true"]));
    }
}
