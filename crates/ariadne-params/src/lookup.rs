//! The lookup capability consumed by conversion.

use std::collections::{BTreeMap, HashMap};

use crate::Parameters;

/// Read access to the raw string values bound to a parameter name.
///
/// Implementations must return `None` only when the name is absent, and must
/// preserve insertion order for present values. An empty slice is a valid,
/// distinct answer meaning "bound, but with no values".
///
/// # Example
///
/// ```rust
/// use ariadne_params::ParameterLookup;
/// use std::collections::HashMap;
///
/// let mut map: HashMap<String, Vec<String>> = HashMap::new();
/// map.insert("ids".into(), vec!["1".into(), "2".into()]);
/// map.insert("empty".into(), Vec::new());
///
/// assert_eq!(map.get_all("ids").map(<[String]>::len), Some(2));
/// assert_eq!(map.get_all("empty"), Some(&[][..]));
/// assert_eq!(map.get_all("other"), None);
/// ```
pub trait ParameterLookup {
    /// Returns all raw values bound to `name`, or `None` if it is absent.
    fn get_all(&self, name: &str) -> Option<&[String]>;
}

impl ParameterLookup for Parameters {
    fn get_all(&self, name: &str) -> Option<&[String]> {
        Parameters::get_all(self, name)
    }
}

impl<S: std::hash::BuildHasher> ParameterLookup for HashMap<String, Vec<String>, S> {
    fn get_all(&self, name: &str) -> Option<&[String]> {
        self.get(name).map(Vec::as_slice)
    }
}

impl ParameterLookup for BTreeMap<String, Vec<String>> {
    fn get_all(&self, name: &str) -> Option<&[String]> {
        self.get(name).map(Vec::as_slice)
    }
}

impl<T: ParameterLookup + ?Sized> ParameterLookup for &T {
    fn get_all(&self, name: &str) -> Option<&[String]> {
        (**self).get_all(name)
    }
}
