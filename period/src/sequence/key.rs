use std::fmt;

use serde::{Deserialize, Serialize};

/// Key addressing an entry of a [`Sequence`](super::Sequence).
///
/// Appended entries receive integer keys; callers may also use names.
///
/// Keys render as plain strings, so a name spelling a decimal integer would
/// be indistinguishable from the index. Converting from `&str` or `String`
/// therefore goes through [`SequenceKey::parse`]: `"4"` is `Index(4)`. Building
/// `Name("4")` by hand bypasses this and does not survive a JSON round trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SequenceKey {
    Index(i64),
    Name(String),
}

impl SequenceKey {
    /// Parses an object key: integers in canonical decimal form become
    /// [`SequenceKey::Index`], anything else (`"04"`, `"+4"`) stays a name.
    pub fn parse(raw: &str) -> Self {
        match raw.parse::<i64>() {
            Ok(index) if index.to_string() == raw => SequenceKey::Index(index),
            _ => SequenceKey::Name(raw.to_string()),
        }
    }
}

impl From<i64> for SequenceKey {
    fn from(value: i64) -> Self {
        SequenceKey::Index(value)
    }
}

impl From<i32> for SequenceKey {
    fn from(value: i32) -> Self {
        SequenceKey::Index(i64::from(value))
    }
}

impl From<&str> for SequenceKey {
    fn from(value: &str) -> Self {
        SequenceKey::parse(value)
    }
}

impl From<String> for SequenceKey {
    fn from(value: String) -> Self {
        match SequenceKey::parse(&value) {
            SequenceKey::Name(_) => SequenceKey::Name(value),
            index => index,
        }
    }
}

impl From<&SequenceKey> for SequenceKey {
    fn from(value: &SequenceKey) -> Self {
        value.clone()
    }
}

impl fmt::Display for SequenceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceKey::Index(index) => write!(f, "{}", index),
            SequenceKey::Name(name) => f.write_str(name),
        }
    }
}
