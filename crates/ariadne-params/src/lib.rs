//! Request parameter storage for Ariadne.
//!
//! This crate provides the lookup context that typed conversion reads from:
//! every parameter name maps to an ordered list of raw string values, as
//! collected from URL path segments and the query string.
//!
//! # Three-way lookup
//!
//! A lookup distinguishes three states, and callers may rely on the
//! difference:
//!
//! | Result | Meaning |
//! |--------|---------|
//! | `None` | The name was never bound |
//! | `Some(&[])` | The name is bound to an empty list |
//! | `Some(values)` | The name is bound, values in insertion order |
//!
//! # Example
//!
//! ```rust
//! use ariadne_params::{ParameterLookup, Parameters};
//!
//! let params = Parameters::from_query("?tag=a&tag=b&page=2").unwrap();
//!
//! assert_eq!(params.get_all("tag"), Some(&["a".to_string(), "b".to_string()][..]));
//! assert_eq!(params.get("page"), Some("2"));
//! assert_eq!(params.get_all("missing"), None);
//! ```

#![doc(html_root_url = "https://docs.rs/ariadne-params/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod lookup;
mod params;

pub use error::QueryParseError;
pub use lookup::ParameterLookup;
pub use params::Parameters;
