//! Relational predicates between intervals and instants.
//!
//! Every predicate resolves ties at a shared instant through the boundary
//! inclusion flags, never through the raw boundary tokens.

use std::cmp::Ordering;

use chrono::TimeDelta;

use super::interval::Interval;
use crate::time::Datepoint;

impl<T: Datepoint> Interval<T> {
    /// Returns `true` if `instant` is a member of the interval.
    ///
    /// A zero length interval contains its instant only when it is `[]`.
    pub fn contains(&self, instant: T) -> bool {
        let after_start = if self.is_start_included() {
            instant >= self.start()
        } else {
            instant > self.start()
        };
        let before_end = if self.is_end_included() {
            instant <= self.end()
        } else {
            instant < self.end()
        };
        after_start && before_end
    }

    /// Returns `true` if every instant of `other` is also an instant of `self`.
    pub fn contains_interval(&self, other: &Self) -> bool {
        let start_ok = match self.start().cmp(&other.start()) {
            Ordering::Less => true,
            Ordering::Equal => self.is_start_included() || other.is_start_excluded(),
            Ordering::Greater => false,
        };
        let end_ok = match other.end().cmp(&self.end()) {
            Ordering::Less => true,
            Ordering::Equal => self.is_end_included() || other.is_end_excluded(),
            Ordering::Greater => false,
        };
        start_ok && end_ok
    }

    /// Returns `true` if `self` is contained in `other`.
    pub fn is_during(&self, other: &Self) -> bool {
        other.contains_interval(self)
    }

    /// Returns `true` if `self` ends before `other` begins with no shared instant.
    pub fn is_before(&self, other: &Self) -> bool {
        self.end() < other.start()
            || (self.end() == other.start()
                && !(self.is_end_included() && other.is_start_included()))
    }

    /// Returns `true` if every instant of `self` precedes `instant`.
    pub fn is_before_instant(&self, instant: T) -> bool {
        self.end() < instant || (self.end() == instant && self.is_end_excluded())
    }

    /// Returns `true` if `self` begins after `other` ends with no shared instant.
    pub fn is_after(&self, other: &Self) -> bool {
        other.is_before(self)
    }

    /// Returns `true` if every instant of `self` follows `instant`.
    pub fn is_after_instant(&self, instant: T) -> bool {
        instant < self.start() || (instant == self.start() && self.is_start_excluded())
    }

    /// `self` ends exactly where `other` starts and exactly one of the two
    /// touching edges owns the shared instant.
    pub fn borders_on_start(&self, other: &Self) -> bool {
        self.end() == other.start() && self.is_end_included() != other.is_start_included()
    }

    /// `self` starts exactly where `other` ends, see [`Interval::borders_on_start`].
    pub fn borders_on_end(&self, other: &Self) -> bool {
        other.borders_on_start(self)
    }

    /// The two intervals tile with neither a gap nor an overlap.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use period::{BoundaryType, Interval};
    ///
    /// let jan = Utc.with_ymd_and_hms(2012, 1, 1, 0, 0, 0).unwrap();
    /// let feb = Utc.with_ymd_and_hms(2012, 2, 1, 0, 0, 0).unwrap();
    /// let may = Utc.with_ymd_and_hms(2012, 5, 1, 0, 0, 0).unwrap();
    ///
    /// let a = Interval::half_open(jan, feb).unwrap();
    /// let b = Interval::half_open(feb, may).unwrap();
    /// assert!(a.abuts(&b));
    ///
    /// let closed = BoundaryType::IncludeAll;
    /// assert!(!a.with_boundary_type(closed).abuts(&b.with_boundary_type(closed)));
    /// ```
    pub fn abuts(&self, other: &Self) -> bool {
        self.borders_on_start(other) || self.borders_on_end(other)
    }

    /// Returns `true` if the intervals share at least one instant.
    ///
    /// An empty interval shares no instant with anything, even when it lies
    /// inside `other`.
    pub fn overlaps(&self, other: &Self) -> bool {
        !self.is_empty() && !other.is_empty() && self.edges_interleave(other)
    }

    /// Neither interval ends before the other begins.
    pub(crate) fn edges_interleave(&self, other: &Self) -> bool {
        !self.is_before(other) && !other.is_before(self)
    }

    /// Structural equality: start, end and boundary type.
    pub fn equals(&self, other: &Self) -> bool {
        self == other
    }

    /// `self` and `other` start on the same instant and `other` does not own
    /// that instant unless `self` does too.
    pub fn is_started_by(&self, other: &Self) -> bool {
        self.start() == other.start() && (self.is_start_included() || other.is_start_excluded())
    }

    /// `instant` is the included start of `self`.
    pub fn is_started_by_instant(&self, instant: T) -> bool {
        self.start() == instant && self.is_start_included()
    }

    /// `self` starts `other`, i.e. `other.is_started_by(self)`.
    pub fn starts(&self, other: &Self) -> bool {
        other.is_started_by(self)
    }

    /// The end instant counterpart of [`Interval::is_started_by`].
    pub fn is_ended_by(&self, other: &Self) -> bool {
        self.end() == other.end() && (self.is_end_included() || other.is_end_excluded())
    }

    pub fn is_ended_by_instant(&self, instant: T) -> bool {
        self.end() == instant && self.is_end_included()
    }

    /// `self` finishes `other`, i.e. `other.is_ended_by(self)`.
    pub fn finishes(&self, other: &Self) -> bool {
        other.is_ended_by(self)
    }

    /// Three-way comparison of the two durations.
    pub fn compare_duration(&self, other: &Self) -> Ordering {
        self.duration().cmp(&other.duration())
    }

    pub fn duration_less_than(&self, other: &Self) -> bool {
        self.compare_duration(other) == Ordering::Less
    }

    pub fn duration_greater_than(&self, other: &Self) -> bool {
        self.compare_duration(other) == Ordering::Greater
    }

    pub fn same_duration_as(&self, other: &Self) -> bool {
        self.compare_duration(other) == Ordering::Equal
    }

    /// Signed `self.duration() - other.duration()`.
    pub fn duration_diff(&self, other: &Self) -> TimeDelta {
        self.duration() - other.duration()
    }
}
