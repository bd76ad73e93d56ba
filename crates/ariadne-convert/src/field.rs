//! Per-field conversion metadata.

use crate::TypeDescriptor;

/// Name, declared type, and optionality of one field taking part in
/// conversion, as supplied by the discovery layer.
///
/// # Example
///
/// ```rust
/// use ariadne_convert::{FieldSpec, ScalarKind, TypeDescriptor};
///
/// let page = FieldSpec::optional("page", TypeDescriptor::scalar(ScalarKind::Int));
/// assert_eq!(page.name(), "page");
/// assert!(page.is_optional());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldSpec {
    name: String,
    ty: TypeDescriptor,
    optional: bool,
}

impl FieldSpec {
    /// Creates a field spec.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: impl Into<TypeDescriptor>, optional: bool) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            optional,
        }
    }

    /// Creates a field that must be bound in the request.
    #[must_use]
    pub fn required(name: impl Into<String>, ty: impl Into<TypeDescriptor>) -> Self {
        Self::new(name, ty, false)
    }

    /// Creates a field that converts to null when unbound.
    #[must_use]
    pub fn optional(name: impl Into<String>, ty: impl Into<TypeDescriptor>) -> Self {
        Self::new(name, ty, true)
    }

    /// Returns the parameter name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the declared type.
    #[must_use]
    pub fn ty(&self) -> &TypeDescriptor {
        &self.ty
    }

    /// Returns true if absence is acceptable.
    #[must_use]
    pub fn is_optional(&self) -> bool {
        self.optional
    }
}
