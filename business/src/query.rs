//! Query-string state codec.
//!
//! [`QueryParams`] mirrors the browser's `URLSearchParams`: an ordered list of
//! key/value pairs where `set` overwrites in place and `remove` drops every
//! occurrence. Table state is merged into the current query string with
//! [`QueryParams::merged`], which leaves every parameter it is not told about
//! untouched.

use std::borrow::Cow;
use std::fmt::{self, Display};

/// An ordered, percent-decoded query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

/// A single requested change to a query string.
///
/// `None` removes the key, `Some` overwrites it.
pub type QueryUpdate<'a> = (&'a str, Option<String>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a search string, with or without the leading `?`.
    ///
    /// Never fails: undecodable escapes are kept verbatim.
    pub fn parse(search: &str) -> Self {
        let search = search.strip_prefix('?').unwrap_or(search);
        let pairs = search
            .split('&')
            .filter(|segment| !segment.is_empty())
            .map(|segment| {
                let (key, value) = segment.split_once('=').unwrap_or((segment, ""));
                (decode_component(key), decode_component(value))
            })
            .collect();

        Self { pairs }
    }

    /// Returns the first value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    /// Overwrites the first occurrence of `key` in place and drops any later
    /// duplicates. Appends when the key is absent.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.pairs.iter().position(|(k, _)| k == key) {
            Some(first) => {
                self.pairs[first].1 = value;
                let mut index = 0;
                self.pairs.retain(|(k, _)| {
                    let keep = index <= first || k != key;
                    index += 1;
                    keep
                });
            }
            None => self.pairs.push((key.to_owned(), value)),
        }
    }

    /// Removes every occurrence of `key`.
    pub fn remove(&mut self, key: &str) {
        self.pairs.retain(|(k, _)| k != key);
    }

    /// Applies `updates` to a copy of these params.
    ///
    /// Keys mapped to `None` are removed, keys mapped to `Some` are
    /// overwritten, and every other key keeps its current value and position.
    pub fn merged<'a, I>(&self, updates: I) -> Self
    where
        I: IntoIterator<Item = QueryUpdate<'a>>,
    {
        let mut next = self.clone();
        for (key, value) in updates {
            match value {
                Some(value) => next.set(key, value),
                None => next.remove(key),
            }
        }
        next
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Encodes as `k=v&k2=v2`, without the leading `?`.
impl Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (key, value)) in self.pairs.iter().enumerate() {
            if index > 0 {
                f.write_str("&")?;
            }
            write!(
                f,
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )?;
        }
        Ok(())
    }
}

fn decode_component(raw: &str) -> String {
    let spaced: Cow<'_, str> = if raw.contains('+') {
        Cow::Owned(raw.replace('+', " "))
    } else {
        Cow::Borrowed(raw)
    };

    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced.into_owned(),
    }
}
