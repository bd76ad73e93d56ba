//! Multi-valued parameter storage.
//!
//! This module provides [`Parameters`], an insertion-ordered multimap using a
//! small-vector optimization so that the common case (a handful of names)
//! stays on the stack.

use smallvec::SmallVec;

use crate::QueryParseError;

/// Number of parameter names stored inline (stack allocated).
const INLINE_NAMES: usize = 4;

type Entry = (String, Vec<String>);

/// Raw request parameters, keyed by name.
///
/// Names keep the order in which they were first bound; values under a name
/// keep the order in which they were appended. A name may be bound to an
/// empty list, which is observably different from not being bound at all.
///
/// # Example
///
/// ```rust
/// use ariadne_params::Parameters;
///
/// let mut params = Parameters::new();
/// params.append("id", "42");
/// params.append("tag", "red");
/// params.append("tag", "blue");
///
/// assert_eq!(params.get("id"), Some("42"));
/// assert_eq!(params.get_all("tag").map(<[String]>::len), Some(2));
/// assert_eq!(params.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Parameters {
    inner: SmallVec<[Entry; INLINE_NAMES]>,
}

impl Parameters {
    /// Creates an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parameter set with room for `capacity` names.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: SmallVec::with_capacity(capacity),
        }
    }

    /// Decodes an `application/x-www-form-urlencoded` query string.
    ///
    /// A leading `?` is ignored. Repeated keys accumulate in order, and a key
    /// without `=` is bound to a single empty string.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ariadne_params::Parameters;
    ///
    /// let params = Parameters::from_query("q=hello%20world&flag&n=1&n=2").unwrap();
    ///
    /// assert_eq!(params.get("q"), Some("hello world"));
    /// assert_eq!(params.get("flag"), Some(""));
    /// assert_eq!(params.get_all("n").map(<[String]>::len), Some(2));
    /// ```
    pub fn from_query(query: &str) -> Result<Self, QueryParseError> {
        let query = query.strip_prefix('?').unwrap_or(query);
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query)?;
        Ok(pairs.into_iter().collect())
    }

    /// Appends a value under `name`, binding the name if needed.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.position(&name) {
            Some(idx) => self.inner[idx].1.push(value),
            None => self.inner.push((name, vec![value])),
        }
    }

    /// Binds `name` to an empty list unless it is already bound.
    pub fn insert_empty(&mut self, name: impl Into<String>) {
        let name = name.into();
        if self.position(&name).is_none() {
            self.inner.push((name, Vec::new()));
        }
    }

    /// Replaces every value bound to `name`.
    ///
    /// An empty iterator leaves the name bound to an empty list.
    pub fn set_all<I, V>(&mut self, name: impl Into<String>, values: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let name = name.into();
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        match self.position(&name) {
            Some(idx) => self.inner[idx].1 = values,
            None => self.inner.push((name, values)),
        }
    }

    /// Returns the first value bound to `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.get_all(name)
            .and_then(<[String]>::first)
            .map(String::as_str)
    }

    /// Returns every value bound to `name`, or `None` if it is not bound.
    #[must_use]
    pub fn get_all(&self, name: &str) -> Option<&[String]> {
        self.inner
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_slice())
    }

    /// Returns true if `name` is bound, even to an empty list.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Unbinds `name`, returning its values.
    pub fn remove(&mut self, name: &str) -> Option<Vec<String>> {
        self.position(name).map(|idx| self.inner.remove(idx).1)
    }

    /// Returns true if no name is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the number of distinct bound names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns an iterator over `(name, values)` in binding order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.inner.iter().map(|(n, v)| (n.as_str(), v.as_slice()))
    }

    /// Returns an iterator over bound names in binding order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.inner.iter().map(|(n, _)| n.as_str())
    }

    /// Removes every binding, retaining allocated capacity.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.inner.iter().position(|(n, _)| n == name)
    }
}

impl<'a> IntoIterator for &'a Parameters {
    type Item = (&'a str, &'a [String]);
    type IntoIter = std::iter::Map<
        std::slice::Iter<'a, Entry>,
        fn(&'a Entry) -> (&'a str, &'a [String]),
    >;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter().map(|(n, v)| (n.as_str(), v.as_slice()))
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Parameters {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.append(name, value);
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Parameters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        params.extend(iter);
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(v: &[&str]) -> Vec<String> {
        v.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_parameters_new() {
        let params = Parameters::new();
        assert!(params.is_empty());
        assert_eq!(params.len(), 0);
    }

    #[test]
    fn test_append_accumulates_in_order() {
        let mut params = Parameters::new();
        params.append("id", "3");
        params.append("id", "1");
        params.append("id", "2");

        assert_eq!(params.get_all("id"), Some(values(&["3", "1", "2"]).as_slice()));
        assert_eq!(params.get("id"), Some("3"));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_absent_vs_present_empty() {
        let mut params = Parameters::new();
        params.insert_empty("flags");

        assert_eq!(params.get_all("flags"), Some(&[][..]));
        assert_eq!(params.get("flags"), None);
        assert!(params.contains("flags"));

        assert_eq!(params.get_all("other"), None);
        assert!(!params.contains("other"));
    }

    #[test]
    fn test_insert_empty_keeps_existing_values() {
        let mut params = Parameters::new();
        params.append("a", "1");
        params.insert_empty("a");

        assert_eq!(params.get_all("a"), Some(values(&["1"]).as_slice()));
    }

    #[test]
    fn test_set_all_replaces() {
        let mut params = Parameters::new();
        params.append("a", "1");
        params.set_all("a", ["x", "y"]);
        assert_eq!(params.get_all("a"), Some(values(&["x", "y"]).as_slice()));

        params.set_all("a", Vec::<String>::new());
        assert_eq!(params.get_all("a"), Some(&[][..]));
    }

    #[test]
    fn test_remove_and_clear() {
        let mut params = Parameters::new();
        params.append("a", "1");
        params.append("b", "2");

        assert_eq!(params.remove("a"), Some(values(&["1"])));
        assert_eq!(params.remove("a"), None);
        assert_eq!(params.len(), 1);

        params.clear();
        assert!(params.is_empty());
    }

    #[test]
    fn test_iteration_follows_binding_order() {
        let mut params = Parameters::new();
        params.append("b", "1");
        params.append("a", "2");
        params.append("b", "3");

        let names: Vec<_> = params.names().collect();
        assert_eq!(names, vec!["b", "a"]);

        let pairs: Vec<_> = (&params).into_iter().map(|(n, v)| (n, v.len())).collect();
        assert_eq!(pairs, vec![("b", 2), ("a", 1)]);
    }

    #[test]
    fn test_from_iterator_groups_names() {
        let params: Parameters = vec![("a", "1"), ("b", "2"), ("a", "3")].into_iter().collect();

        assert_eq!(params.len(), 2);
        assert_eq!(params.get_all("a"), Some(values(&["1", "3"]).as_slice()));
    }

    #[test]
    fn test_from_query() {
        let params = Parameters::from_query("?ids=1&ids=2&name=J%C3%BCrgen&q=a+b").unwrap();

        assert_eq!(params.get_all("ids"), Some(values(&["1", "2"]).as_slice()));
        assert_eq!(params.get("name"), Some("Jürgen"));
        assert_eq!(params.get("q"), Some("a b"));
    }

    #[test]
    fn test_from_query_key_without_value() {
        let params = Parameters::from_query("verbose&text=").unwrap();

        assert_eq!(params.get("verbose"), Some(""));
        assert_eq!(params.get("text"), Some(""));
    }

    #[test]
    fn test_from_empty_query() {
        let params = Parameters::from_query("").unwrap();
        assert!(params.is_empty());
    }

    #[test]
    fn test_many_names_spill_to_heap() {
        let mut params = Parameters::with_capacity(2);
        for i in 0..10 {
            params.append(format!("key{i}"), format!("value{i}"));
        }

        assert_eq!(params.len(), 10);
        assert_eq!(params.get("key7"), Some("value7"));
    }
}
