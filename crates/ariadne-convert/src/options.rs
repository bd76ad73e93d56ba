//! Converter options.

use serde::{Deserialize, Serialize};

/// How raw strings are parsed as booleans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoolParsing {
    /// Accept `true` or `false` (ASCII case-insensitive); anything else fails.
    #[default]
    Strict,
    /// `true` (ASCII case-insensitive) is true; anything else is false.
    Lenient,
}

impl BoolParsing {
    /// Parses `raw`, returning `None` when strict parsing rejects it.
    #[must_use]
    pub fn parse(self, raw: &str) -> Option<bool> {
        if raw.eq_ignore_ascii_case("true") {
            Some(true)
        } else if raw.eq_ignore_ascii_case("false") {
            Some(false)
        } else {
            match self {
                Self::Strict => None,
                Self::Lenient => Some(false),
            }
        }
    }
}

/// Tunables for [`DefaultConversionService`](crate::DefaultConversionService).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConverterOptions {
    /// Boolean parsing rule.
    #[serde(default)]
    pub bool_parsing: BoolParsing,
}
