//! Deterministic builder for HTTP query strings.
//!
//! [`QueryParams`] keeps parameters as ordered key/value pairs. [`QueryParams::encode`]
//! sorts them by key and writes them without percent-escaping, so the same set of
//! parameters always produces the same string.

use std::fmt::Display;

use url::form_urlencoded;

/// Builder for assembling query parameter pairs.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Parse a raw query string (without the leading `?`).
    ///
    /// Uses `application/x-www-form-urlencoded` decoding: `+` becomes a space and
    /// `%XX` sequences are decoded. A key without `=` gets an empty value.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        form_urlencoded::parse(raw.as_bytes())
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect()
    }

    /// Replace every value of `key` with a single value.
    pub fn set<T>(&mut self, key: &str, value: T)
    where
        T: Display,
    {
        self.pairs.retain(|(k, _)| k != key);
        self.pairs.push((key.to_string(), value.to_string()));
    }

    /// First value of `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Encode as `key=value` pairs joined by `&`.
    ///
    /// Keys are sorted lexicographically; values sharing a key keep their relative
    /// order. Nothing is escaped, so values must already be URL-safe.
    #[must_use]
    pub fn encode(&self) -> String {
        let mut sorted: Vec<&(String, String)> = self.pairs.iter().collect();
        // stable: values of one key stay in insertion order
        sorted.sort_by(|a, b| a.0.cmp(&b.0));

        let mut buf = String::new();
        for (key, value) in sorted {
            if !buf.is_empty() {
                buf.push('&');
            }
            buf.push_str(key);
            buf.push('=');
            buf.push_str(value);
        }
        buf
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
