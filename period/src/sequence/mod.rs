//! Ordered, keyed collections of intervals.
//!
//! A [`Sequence`] keeps insertion order, addresses entries by integer position
//! or by [`SequenceKey`], and composes the pairwise interval algebra into
//! collection-level operations (see `algebra.rs`).
//!
//! Sequences are plain values without internal locking: sharing one between
//! threads for mutation requires external synchronization.

mod algebra;
mod interchange;
mod key;

use std::cmp::Ordering;

use indexmap::IndexMap;

use crate::core::Interval;
use crate::time::Datepoint;

pub use key::SequenceKey;

/// Capability shared by every value a [`Sequence`] can run algebra on.
///
/// Implemented for [`Interval`] itself; domain types carrying an interval
/// (bookings, shifts, ...) implement it to be stored directly.
pub trait AsInterval: Clone {
    type Instant: Datepoint;

    fn as_interval(&self) -> &Interval<Self::Instant>;
}

impl<T: Datepoint> AsInterval for Interval<T> {
    type Instant = T;

    fn as_interval(&self) -> &Interval<T> {
        self
    }
}

/// Insertion ordered map from [`SequenceKey`] to values.
///
/// # Examples
///
/// ```
/// use chrono::{TimeDelta, TimeZone, Utc};
/// use period::{Interval, Sequence};
///
/// let start = Utc.with_ymd_and_hms(2012, 1, 1, 0, 0, 0).unwrap();
/// let mut sequence = Sequence::new();
/// sequence.push(Interval::after(start, TimeDelta::days(1)).unwrap());
/// sequence.set("later", Interval::after(start, TimeDelta::days(3)).unwrap());
///
/// assert_eq!(sequence.len(), 2);
/// assert!(sequence.contains_key("later"));
/// ```
#[derive(Debug, Clone)]
pub struct Sequence<I = Interval> {
    entries: IndexMap<SequenceKey, I>,
    next_index: i64,
}

impl<I> Default for Sequence<I> {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
            next_index: 0,
        }
    }
}

impl<I> Sequence<I> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a sequence from explicit key/value pairs; later duplicates replace earlier ones.
    pub fn from_entries<K, E>(entries: E) -> Self
    where
        K: Into<SequenceKey>,
        E: IntoIterator<Item = (K, I)>,
    {
        let mut sequence = Self::new();
        for (key, value) in entries {
            sequence.set(key, value);
        }
        sequence
    }

    /// Appends `value` under the next integer key and returns that key.
    ///
    /// Keys follow the highest integer key seen so far. Once `i64::MAX` is
    /// taken, the lowest unused non negative index is used instead, so an
    /// existing entry is never replaced.
    pub fn push(&mut self, value: I) -> SequenceKey {
        let index = self.free_index();
        self.next_index = self.next_index.max(index.saturating_add(1));
        let key = SequenceKey::Index(index);
        self.entries.insert(key.clone(), value);
        key
    }

    fn free_index(&self) -> i64 {
        let is_free = |index: &i64| !self.entries.contains_key(&SequenceKey::Index(*index));
        if is_free(&self.next_index) {
            return self.next_index;
        }
        // The counter only stalls on a taken key once it saturated at i64::MAX.
        (0..i64::MAX).find(is_free).unwrap_or(i64::MAX)
    }

    /// Inserts or replaces the value stored under `key`, returning the previous one.
    pub fn set(&mut self, key: impl Into<SequenceKey>, value: I) -> Option<I> {
        let key = key.into();
        if let SequenceKey::Index(index) = key {
            self.next_index = self.next_index.max(index.saturating_add(1));
        }
        self.entries.insert(key, value)
    }

    pub fn get(&self, key: impl Into<SequenceKey>) -> Option<&I> {
        self.entries.get(&key.into())
    }

    /// Entry at `position` in iteration order.
    pub fn get_index(&self, position: usize) -> Option<(&SequenceKey, &I)> {
        self.entries.get_index(position)
    }

    /// Removes the entry under `key`, keeping the order of the others.
    pub fn remove(&mut self, key: impl Into<SequenceKey>) -> Option<I> {
        self.entries.shift_remove(&key.into())
    }

    pub fn contains_key(&self, key: impl Into<SequenceKey>) -> bool {
        self.entries.contains_key(&key.into())
    }

    pub fn contains(&self, value: &I) -> bool
    where
        I: PartialEq,
    {
        self.entries.values().any(|v| v == value)
    }

    /// Key of the first entry equal to `value`.
    pub fn index_of(&self, value: &I) -> Option<&SequenceKey>
    where
        I: PartialEq,
    {
        self.entries
            .iter()
            .find_map(|(key, v)| (v == value).then_some(key))
    }

    pub fn keys(&self) -> impl Iterator<Item = &SequenceKey> {
        self.entries.keys()
    }

    pub fn values(&self) -> impl Iterator<Item = &I> {
        self.entries.values()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, SequenceKey, I> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn first(&self) -> Option<&I> {
        self.entries.first().map(|(_, v)| v)
    }

    pub fn last(&self) -> Option<&I> {
        self.entries.last().map(|(_, v)| v)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.next_index = 0;
    }

    /// Reorders the entries in place; keys stay attached to their values.
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&I, &I) -> Ordering,
    {
        self.entries.sort_by(|_, a, _, b| compare(a, b));
    }

    /// Entries matching `predicate`, as a new sequence with the same keys.
    pub fn filter<F>(&self, mut predicate: F) -> Self
    where
        I: Clone,
        F: FnMut(&SequenceKey, &I) -> bool,
    {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|&(key, value)| predicate(key, value))
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
            next_index: self.next_index,
        }
    }

    /// Applies `f` to every value, keeping keys and order.
    pub fn map<J, F>(&self, mut f: F) -> Sequence<J>
    where
        F: FnMut(&I) -> J,
    {
        Sequence {
            entries: self
                .entries
                .iter()
                .map(|(key, value)| (key.clone(), f(value)))
                .collect(),
            next_index: self.next_index,
        }
    }

    /// `length` entries starting at `offset`; `None` takes everything after it.
    pub fn slice(&self, offset: usize, length: Option<usize>) -> Self
    where
        I: Clone,
    {
        let length = length.unwrap_or(usize::MAX);
        Self {
            entries: self
                .entries
                .iter()
                .skip(offset)
                .take(length)
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
            next_index: self.next_index,
        }
    }

    /// Splits the entries into `(matching, rest)`.
    pub fn partition<F>(&self, mut predicate: F) -> (Self, Self)
    where
        I: Clone,
        F: FnMut(&SequenceKey, &I) -> bool,
    {
        let mut matching = Self::new();
        let mut rest = Self::new();
        for (key, value) in &self.entries {
            let target = if predicate(key, value) {
                &mut matching
            } else {
                &mut rest
            };
            target.set(key.clone(), value.clone());
        }
        (matching, rest)
    }
}

impl<I: AsInterval> Sequence<I> {
    /// Sorts the entries in place by start instant, then end instant.
    pub fn sort(&mut self) {
        self.sort_by(|a, b| compare_intervals(a.as_interval(), b.as_interval()));
    }

    /// Copies of the contained intervals ordered by start instant.
    pub(crate) fn sorted_intervals(&self) -> Vec<Interval<I::Instant>> {
        let mut intervals: Vec<_> = self.values().map(|v| *v.as_interval()).collect();
        intervals.sort_by(compare_intervals);
        intervals
    }
}

fn compare_intervals<T: Datepoint>(a: &Interval<T>, b: &Interval<T>) -> Ordering {
    a.start().cmp(&b.start()).then_with(|| a.end().cmp(&b.end()))
}

impl<I: PartialEq> PartialEq for Sequence<I> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<I> FromIterator<I> for Sequence<I> {
    fn from_iter<It: IntoIterator<Item = I>>(iter: It) -> Self {
        let mut sequence = Self::new();
        sequence.extend(iter);
        sequence
    }
}

impl<I> Extend<I> for Sequence<I> {
    fn extend<It: IntoIterator<Item = I>>(&mut self, iter: It) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<'a, I> IntoIterator for &'a Sequence<I> {
    type Item = (&'a SequenceKey, &'a I);
    type IntoIter = indexmap::map::Iter<'a, SequenceKey, I>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<I> IntoIterator for Sequence<I> {
    type Item = (SequenceKey, I);
    type IntoIter = indexmap::map::IntoIter<SequenceKey, I>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
