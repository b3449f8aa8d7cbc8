//! Request parameters as one ordered multi-value container.
//!
//! Query strings and form bodies both decode into a [`ParamMap`]. A key can
//! repeat (`?tag=a&tag=b`), so every key holds an ordered list of values.
//! Callers that expect exactly one value use [`ParamMap::first`]; callers that
//! want every value use [`ParamMap::all`]. There is no second map type.

use std::fmt;

use indexmap::IndexMap;

/// Parameter name → ordered list of values.
///
/// Keys keep the order in which they first appeared; values keep the order in
/// which they were appended.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParamMap {
    entries: IndexMap<String, Vec<String>>,
}

impl ParamMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes an `application/x-www-form-urlencoded` byte string
    /// (`a=1&b=2`, `+` as space, percent escapes).
    pub fn from_urlencoded(input: &[u8]) -> Self {
        let mut map = Self::new();
        map.extend_urlencoded(input);
        map
    }

    /// Appends every pair of a form-urlencoded byte string.
    pub fn extend_urlencoded(&mut self, input: &[u8]) {
        for (key, value) in url::form_urlencoded::parse(input) {
            self.append(key.into_owned(), value.into_owned());
        }
    }

    /// Appends one value under `key`.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.entry(key.into()).or_default().push(value.into());
    }

    /// The first value of `key`, if the key is present.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.all(key).first().map(String::as_str)
    }

    /// Every value of `key`, in order. Empty if the key is absent.
    pub fn all(&self, key: &str) -> &[String] {
        self.entries.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterates `(key, values)` in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Single-value view: each key with its first value.
    pub fn iter_first(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .filter_map(|(k, v)| v.first().map(|first| (k.as_str(), first.as_str())))
    }
}

impl<K, V> FromIterator<(K, V)> for ParamMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.append(k, v);
        }
        map
    }
}

/// Renders as `{key=[v1, v2], other=[v]}`.
impl fmt::Display for ParamMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, values)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}=[{}]", values.join(", "))?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_form_encoding() {
        let map = ParamMap::from_urlencoded(b"username=kim+lee&note=a%26b&empty=");
        assert_eq!(map.first("username"), Some("kim lee"));
        assert_eq!(map.first("note"), Some("a&b"));
        assert_eq!(map.first("empty"), Some(""));
        assert_eq!(map.first("missing"), None);
    }

    #[test]
    fn repeated_keys_keep_value_order() {
        let map = ParamMap::from_urlencoded(b"tag=b&x=1&tag=a&tag=c");
        assert_eq!(map.all("tag"), ["b", "a", "c"]);
        assert_eq!(map.first("tag"), Some("b"));
        assert_eq!(map.keys().collect::<Vec<_>>(), ["tag", "x"]);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn absent_key_has_no_values() {
        let map = ParamMap::new();
        assert!(map.all("anything").is_empty());
        assert!(!map.contains_key("anything"));
        assert!(map.is_empty());
    }

    #[test]
    fn single_value_view_takes_first() {
        let map: ParamMap = [("a", "1"), ("b", "2"), ("a", "3")].into_iter().collect();
        let single: Vec<_> = map.iter_first().collect();
        assert_eq!(single, [("a", "1"), ("b", "2")]);
    }

    #[test]
    fn many_distinct_keys_decode_in_order() {
        let input: String = (0..50_000).map(|i| format!("k{i}=v{i}&")).collect();
        let map = ParamMap::from_urlencoded(input.as_bytes());
        assert_eq!(map.len(), 50_000);
        assert_eq!(map.first("k0"), Some("v0"));
        assert_eq!(map.first("k49999"), Some("v49999"));
        assert_eq!(map.keys().nth(12_345), Some("k12345"));
    }

    #[test]
    fn display_lists_all_values() {
        let map: ParamMap = [("a", "1"), ("a", "2"), ("b", "x")].into_iter().collect();
        assert_eq!(map.to_string(), "{a=[1, 2], b=[x]}");
    }
}
