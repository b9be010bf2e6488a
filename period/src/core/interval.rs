//! The immutable interval value type.
//!
//! An [`Interval`] is a `{start, end, boundary}` triple with `start <= end`.
//! Every transformation returns a new value; nothing here mutates `self`.
//! Relational predicates live in `relation.rs`, set algebra in `algebra.rs`
//! and the lazy walkers in `iter.rs`.

use std::fmt;

use chrono::{DateTime, TimeDelta, Utc};
use serde::{ser::SerializeStruct, Deserialize, Deserializer, Serialize, Serializer};

use super::boundary::BoundaryType;
use crate::config::PeriodConfig;
use crate::error::{PeriodError, PeriodResult};
use crate::time::{is_negative, Datepoint, ToDuration};

/// A contiguous span between two instants.
///
/// Equality is structural: two intervals are equal iff start, end and
/// boundary type all match.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use period::{BoundaryType, Interval};
///
/// let start = Utc.with_ymd_and_hms(2012, 1, 1, 0, 0, 0).unwrap();
/// let end = Utc.with_ymd_and_hms(2012, 2, 1, 0, 0, 0).unwrap();
/// let january = Interval::new(start, end, BoundaryType::IncludeStartExcludeEnd).unwrap();
///
/// assert!(january.contains(start));
/// assert!(!january.contains(end));
/// assert_eq!(january.duration().num_days(), 31);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval<T: Datepoint = DateTime<Utc>> {
    start: T,
    end: T,
    boundary: BoundaryType,
}

impl<T: Datepoint> Interval<T> {
    /// Creates a new interval.
    ///
    /// Fails with [`PeriodError::InvalidIntervalOrder`] if `start > end`.
    /// A zero length interval is accepted for every boundary type.
    pub fn new(start: T, end: T, boundary: BoundaryType) -> PeriodResult<Self> {
        if start > end {
            return Err(PeriodError::invalid_order(&start, &end));
        }
        Ok(Self {
            start,
            end,
            boundary,
        })
    }

    /// Creates a `[)` interval.
    pub fn half_open(start: T, end: T) -> PeriodResult<Self> {
        Self::new(start, end, BoundaryType::default())
    }

    /// Creates an interval from a boundary token such as `"(]"`.
    pub fn try_from_token(start: T, end: T, token: &str) -> PeriodResult<Self> {
        Self::new(start, end, BoundaryType::parse_token(token)?)
    }

    /// Creates an interval using the configured default boundary type.
    pub fn with_config(start: T, end: T, config: &PeriodConfig) -> PeriodResult<Self> {
        Self::new(start, end, config.default_boundary()?)
    }

    /// `[start, start + duration)`
    pub fn after(start: T, duration: impl ToDuration) -> PeriodResult<Self> {
        let duration = forward_duration(duration, "an interval after a start instant")?;
        Self::half_open(start, start.add_duration(duration)?)
    }

    /// `[end - duration, end)`
    pub fn before(end: T, duration: impl ToDuration) -> PeriodResult<Self> {
        let duration = forward_duration(duration, "an interval before an end instant")?;
        Self::half_open(end.sub_duration(duration)?, end)
    }

    /// `[midpoint - duration, midpoint + duration)`
    pub fn around(midpoint: T, duration: impl ToDuration) -> PeriodResult<Self> {
        let duration = forward_duration(duration, "an interval around an instant")?;
        Self::half_open(
            midpoint.sub_duration(duration)?,
            midpoint.add_duration(duration)?,
        )
    }

    /// Builds an interval whose ordering has already been established by the caller.
    pub(crate) fn from_ordered(start: T, end: T, boundary: BoundaryType) -> Self {
        debug_assert!(start <= end, "Invalid interval: start must not be after end");
        Self {
            start,
            end,
            boundary,
        }
    }

    #[inline]
    pub fn start(&self) -> T {
        self.start
    }

    #[inline]
    pub fn end(&self) -> T {
        self.end
    }

    #[inline]
    pub fn boundary_type(&self) -> BoundaryType {
        self.boundary
    }

    #[inline]
    pub fn is_start_included(&self) -> bool {
        self.boundary.is_start_included()
    }

    #[inline]
    pub fn is_start_excluded(&self) -> bool {
        self.boundary.is_start_excluded()
    }

    #[inline]
    pub fn is_end_included(&self) -> bool {
        self.boundary.is_end_included()
    }

    #[inline]
    pub fn is_end_excluded(&self) -> bool {
        self.boundary.is_end_excluded()
    }

    /// Exact `end - start`.
    pub fn duration(&self) -> TimeDelta {
        self.end.elapsed_since(self.start)
    }

    /// Returns `true` if no instant is contained, i.e. a zero length
    /// interval that is not closed on both sides.
    pub fn is_empty(&self) -> bool {
        self.start == self.end && self.boundary != BoundaryType::IncludeAll
    }

    pub fn starting_on(&self, start: T) -> PeriodResult<Self> {
        if start == self.start {
            return Ok(*self);
        }
        Self::new(start, self.end, self.boundary)
    }

    pub fn ending_on(&self, end: T) -> PeriodResult<Self> {
        if end == self.end {
            return Ok(*self);
        }
        Self::new(self.start, end, self.boundary)
    }

    pub fn with_boundary_type(&self, boundary: BoundaryType) -> Self {
        Self { boundary, ..*self }
    }

    /// Keeps the start and places the end `duration` after it.
    ///
    /// A negative duration fails with [`PeriodError::InvalidDurationDirection`].
    pub fn with_duration_after_start(&self, duration: impl ToDuration) -> PeriodResult<Self> {
        let duration = forward_duration(duration, "the duration after the start")?;
        Ok(Self::from_ordered(
            self.start,
            self.start.add_duration(duration)?,
            self.boundary,
        ))
    }

    /// Keeps the end and places the start `duration` before it.
    pub fn with_duration_before_end(&self, duration: impl ToDuration) -> PeriodResult<Self> {
        let duration = forward_duration(duration, "the duration before the end")?;
        Ok(Self::from_ordered(
            self.end.sub_duration(duration)?,
            self.end,
            self.boundary,
        ))
    }

    /// Shifts both endpoints by the same signed duration.
    pub fn move_by(&self, duration: impl ToDuration) -> PeriodResult<Self> {
        let duration = duration.to_duration()?;
        Ok(Self::from_ordered(
            self.start.add_duration(duration)?,
            self.end.add_duration(duration)?,
            self.boundary,
        ))
    }

    /// Shifts only the start; fails if it would move past the end.
    pub fn move_start_date(&self, duration: impl ToDuration) -> PeriodResult<Self> {
        let duration = duration.to_duration()?;
        self.starting_on(self.start.add_duration(duration)?)
    }

    /// Shifts only the end; fails if it would move before the start.
    pub fn move_end_date(&self, duration: impl ToDuration) -> PeriodResult<Self> {
        let duration = duration.to_duration()?;
        self.ending_on(self.end.add_duration(duration)?)
    }

    /// Grows the interval by `duration` on both sides.
    ///
    /// A negative duration shrinks it; shrinking past the midpoint fails with
    /// [`PeriodError::InvalidDurationDirection`].
    pub fn expand(&self, duration: impl ToDuration) -> PeriodResult<Self> {
        let duration = duration.to_duration()?;
        let start = self.start.sub_duration(duration)?;
        let end = self.end.add_duration(duration)?;
        if start > end {
            return Err(PeriodError::InvalidDurationDirection(format!(
                "shrinking {} by {} on both sides inverts the interval",
                self,
                -duration
            )));
        }
        Ok(Self::from_ordered(start, end, self.boundary))
    }

    /// Renders the interval with the datetime pattern from `config`, if any.
    pub fn render(&self, config: &PeriodConfig) -> PeriodResult<String> {
        let (start, end) = match config.datetime_format() {
            Some(pattern) => (
                self.start.format_with(pattern)?,
                self.end.format_with(pattern)?,
            ),
            None => (self.start.render(), self.end.render()),
        };
        Ok(format!(
            "{}{}, {}{}",
            self.boundary.opening_char(),
            start,
            end,
            self.boundary.closing_char()
        ))
    }
}

fn forward_duration(duration: impl ToDuration, what: &str) -> PeriodResult<TimeDelta> {
    let duration = duration.to_duration()?;
    if is_negative(duration) {
        return Err(PeriodError::InvalidDurationDirection(format!(
            "{} must not be negative, got {}",
            what, duration
        )));
    }
    Ok(duration)
}

impl<T: Datepoint> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}, {}{}",
            self.boundary.opening_char(),
            self.start.render(),
            self.end.render(),
            self.boundary.closing_char()
        )
    }
}

impl<T: Datepoint + Serialize> Serialize for Interval<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("Interval", 3)?;
        s.serialize_field("start", &self.start)?;
        s.serialize_field("end", &self.end)?;
        s.serialize_field("boundaryType", &self.boundary)?;
        s.end()
    }
}

impl<'de, T: Datepoint + Deserialize<'de>> Deserialize<'de> for Interval<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase", deny_unknown_fields)]
        struct Raw<U> {
            start: U,
            end: U,
            #[serde(default)]
            boundary_type: BoundaryType,
        }

        let raw = Raw::<T>::deserialize(deserializer)?;
        Interval::new(raw.start, raw.end, raw.boundary_type).map_err(serde::de::Error::custom)
    }
}
