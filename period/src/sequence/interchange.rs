//! JSON interchange for sequences of intervals.

use serde::de::DeserializeOwned;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;

use super::{Sequence, SequenceKey};
use crate::core::Interval;
use crate::error::{PeriodError, PeriodResult};
use crate::time::Datepoint;

impl<I: Serialize> Serialize for Sequence<I> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(&key.to_string(), value)?;
        }
        map.end()
    }
}

impl<T> Sequence<Interval<T>>
where
    T: Datepoint + Serialize + DeserializeOwned,
{
    /// Parses a JSON array or object of structured intervals.
    ///
    /// Array entries receive consecutive integer keys, object keys are kept.
    /// The whole input is rejected with [`PeriodError::TypeMismatch`] if any
    /// entry is not a valid interval.
    pub fn from_json_str(json: &str) -> PeriodResult<Self> {
        let value: Value = serde_json::from_str(json).map_err(|e| PeriodError::TypeMismatch {
            key: "$".to_string(),
            reason: format!("invalid JSON: {}", e),
        })?;

        let entries: Vec<(SequenceKey, Value)> = match value {
            Value::Array(items) => items
                .into_iter()
                .enumerate()
                .map(|(index, item)| (SequenceKey::Index(index as i64), item))
                .collect(),
            Value::Object(items) => items
                .into_iter()
                .map(|(key, item)| (SequenceKey::parse(&key), item))
                .collect(),
            other => {
                return Err(PeriodError::TypeMismatch {
                    key: "$".to_string(),
                    reason: format!("expected an array or an object, got {}", other),
                })
            }
        };

        let mut sequence = Sequence::new();
        for (key, item) in entries {
            let interval = serde_json::from_value::<Interval<T>>(item).map_err(|e| {
                PeriodError::TypeMismatch {
                    key: key.to_string(),
                    reason: e.to_string(),
                }
            })?;
            sequence.set(key, interval);
        }
        Ok(sequence)
    }

    /// Renders the sequence as a JSON object keyed by entry key.
    ///
    /// Keys are written with their `Display` form and read back through
    /// [`SequenceKey::parse`].
    pub fn to_json_string(&self) -> PeriodResult<String> {
        serde_json::to_string(self).map_err(|e| PeriodError::TypeMismatch {
            key: "$".to_string(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    fn iv(d1: u32, d2: u32, token: &str) -> Interval {
        let start: DateTime<Utc> = Utc.with_ymd_and_hms(2012, 1, d1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2012, 1, d2, 0, 0, 0).unwrap();
        Interval::try_from_token(start, end, token).unwrap()
    }

    #[test]
    fn test_parse_array() {
        let json = r#"[
            {"start": "2012-01-01T00:00:00Z", "end": "2012-01-02T00:00:00Z"},
            {"start": "2012-01-03T00:00:00Z", "end": "2012-01-05T00:00:00Z", "boundaryType": "[]"}
        ]"#;
        let sequence = Sequence::<Interval>::from_json_str(json).unwrap();
        assert_eq!(sequence.get(0), Some(&iv(1, 2, "[)")));
        assert_eq!(sequence.get(1), Some(&iv(3, 5, "[]")));
    }

    #[test]
    fn test_object_keys_roundtrip() {
        let sequence = Sequence::from_entries([
            (SequenceKey::from("winter"), iv(1, 20, "[)")),
            (SequenceKey::from(4), iv(21, 25, "(]")),
        ]);
        let json = sequence.to_json_string().unwrap();
        let back = Sequence::<Interval>::from_json_str(&json).unwrap();
        assert_eq!(back, sequence);
    }

    #[test]
    fn test_numeric_and_padded_names_roundtrip() {
        let mut sequence = Sequence::new();
        sequence.set("4", iv(1, 2, "[)"));
        sequence.set("04", iv(3, 4, "[]"));
        assert_eq!(sequence.keys().next(), Some(&SequenceKey::Index(4)));

        let back = Sequence::<Interval>::from_json_str(&sequence.to_json_string().unwrap()).unwrap();
        assert_eq!(back, sequence);
        assert_eq!(back.get("04"), Some(&iv(3, 4, "[]")));
    }

    #[test]
    fn test_non_interval_entry_is_a_type_mismatch() {
        let json = r#"{"ok": {"start": "2012-01-01T00:00:00Z", "end": "2012-01-02T00:00:00Z"}, "bad": 42}"#;
        match Sequence::<Interval>::from_json_str(json) {
            Err(PeriodError::TypeMismatch { key, .. }) => assert_eq!(key, "bad"),
            other => panic!("expected a type mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_interval_entry_is_rejected() {
        let json = r#"[{"start": "2012-01-05T00:00:00Z", "end": "2012-01-02T00:00:00Z"}]"#;
        assert!(matches!(
            Sequence::<Interval>::from_json_str(json),
            Err(PeriodError::TypeMismatch { .. })
        ));
        assert!(Sequence::<Interval>::from_json_str("\"nope\"").is_err());
        assert!(Sequence::<Interval>::from_json_str("{").is_err());
    }
}
