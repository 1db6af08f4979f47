//! Default header mapping owned by the client.
//!
//! # Design
//! Keys are case-sensitive strings and insertion order is preserved, so the
//! headers a caller configured come out in the order they went in. Merging
//! overwrites an existing key in place rather than moving it to the end.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An ordered, case-sensitive `name -> value` mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    entries: Vec<(String, String)>,
}

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name` to `value`, replacing an existing entry with the exact same
    /// name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Shallow merge: keys in `other` win, keys only in `self` survive.
    pub fn merge(&mut self, other: Headers) {
        for (name, value) in other.entries {
            self.insert(name, value);
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Header names are case-insensitive on the wire even though this mapping
    /// is not.
    pub fn contains_key_ignore_case(&self, name: &str) -> bool {
        self.entries.iter().any(|(k, _)| k.eq_ignore_ascii_case(name))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Headers {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut headers = Headers::new();
        for (k, v) in iter {
            headers.insert(k, v);
        }
        headers
    }
}

impl IntoIterator for Headers {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for Headers {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Headers {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct HeadersVisitor;

        impl<'de> Visitor<'de> for HeadersVisitor {
            type Value = Headers;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of header names to string values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Headers, A::Error> {
                let mut headers = Headers::new();
                while let Some((k, v)) = access.next_entry::<String, String>()? {
                    headers.insert(k, v);
                }
                Ok(headers)
            }
        }

        deserializer.deserialize_map(HeadersVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_overlays_later_values() {
        let mut headers: Headers = [("Accept", "text/plain"), ("X-A", "1")].into_iter().collect();
        headers.merge([("Accept", "application/json"), ("X-B", "2")].into_iter().collect());

        assert_eq!(headers.get("Accept"), Some("application/json"));
        assert_eq!(headers.get("X-A"), Some("1"));
        assert_eq!(headers.get("X-B"), Some("2"));
        assert_eq!(headers.len(), 3);
    }

    #[test]
    fn merge_keeps_position_of_overwritten_key() {
        let mut headers: Headers = [("A", "1"), ("B", "2")].into_iter().collect();
        headers.merge([("A", "3")].into_iter().collect());
        let names: Vec<&str> = headers.iter().map(|(k, _)| k).collect();
        assert_eq!(names, ["A", "B"]);
    }

    #[test]
    fn merge_is_idempotent() {
        let update: Headers = [("Authorization", "t")].into_iter().collect();
        let mut once: Headers = [("Accept", "application/json")].into_iter().collect();
        once.merge(update.clone());
        let mut twice = once.clone();
        twice.merge(update);
        assert_eq!(once, twice);
    }

    #[test]
    fn keys_are_case_sensitive() {
        let mut headers = Headers::new();
        headers.insert("content-type", "text/plain");
        headers.insert("Content-Type", "application/json");
        assert_eq!(headers.len(), 2);
        assert_eq!(headers.get("content-type"), Some("text/plain"));
        assert!(headers.contains_key_ignore_case("CONTENT-TYPE"));
        assert!(!headers.contains_key_ignore_case("Accept"));
    }

    #[test]
    fn deserializes_from_json_object_in_order() {
        let headers: Headers = serde_json::from_str(r#"{"Z":"1","A":"2"}"#).unwrap();
        let names: Vec<&str> = headers.iter().map(|(k, _)| k).collect();
        assert_eq!(names, ["Z", "A"]);
        assert_eq!(serde_json::to_string(&headers).unwrap(), r#"{"Z":"1","A":"2"}"#);
    }

    #[test]
    fn rejects_non_string_values() {
        let result: Result<Headers, _> = serde_json::from_str(r#"{"A":1}"#);
        assert!(result.is_err());
    }
}
