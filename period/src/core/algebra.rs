//! Set algebra over intervals: intersection, gap, difference and merge.
//!
//! Derived intervals pick each edge from the operand that supplies it. When
//! both operands supply the same instant the edge is closed iff the
//! operation needs it closed (both for an intersection, either for a merge).

use std::cmp::Ordering;

use super::boundary::BoundaryType;
use super::interval::Interval;
use crate::error::{PeriodError, PeriodResult};
use crate::sequence::Sequence;
use crate::time::Datepoint;

/// One endpoint of an interval together with its inclusion flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Edge<T> {
    at: T,
    included: bool,
}

impl<T: Datepoint> Interval<T> {
    fn start_edge(&self) -> Edge<T> {
        Edge {
            at: self.start(),
            included: self.is_start_included(),
        }
    }

    fn end_edge(&self) -> Edge<T> {
        Edge {
            at: self.end(),
            included: self.is_end_included(),
        }
    }

    fn from_edges(start: Edge<T>, end: Edge<T>) -> Self {
        Interval::from_ordered(
            start.at,
            end.at,
            BoundaryType::from_inclusion(start.included, end.included),
        )
    }

    /// The overlapping part of both intervals.
    ///
    /// Fails with [`PeriodError::NonOverlappingIntervals`] when they share no
    /// instant.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use period::Interval;
    ///
    /// let hour = |h| Utc.with_ymd_and_hms(2013, 1, 1, h, 0, 0).unwrap();
    /// let a = Interval::half_open(hour(10), hour(13)).unwrap();
    /// let b = Interval::half_open(hour(11), hour(14)).unwrap();
    ///
    /// assert_eq!(a.intersect(&b).unwrap(), Interval::half_open(hour(11), hour(13)).unwrap());
    /// ```
    pub fn intersect(&self, other: &Self) -> PeriodResult<Self> {
        if !self.overlaps(other) {
            return Err(PeriodError::NonOverlappingIntervals);
        }

        let start = later(self.start_edge(), other.start_edge(), |a, b| a && b);
        let end = earlier(self.end_edge(), other.end_edge(), |a, b| a && b);
        Ok(Self::from_edges(start, end))
    }

    /// The span strictly between two non overlapping intervals.
    ///
    /// Each edge of the gap is the inverse of the donor edge so that no
    /// instant is owned twice. Fails with [`PeriodError::OverlappingIntervals`]
    /// when neither interval ends before the other begins, which includes an
    /// empty interval lying inside the other one.
    pub fn gap(&self, other: &Self) -> PeriodResult<Self> {
        if self.edges_interleave(other) {
            return Err(PeriodError::OverlappingIntervals);
        }

        let (earlier, later) = if self.is_before(other) {
            (self, other)
        } else {
            (other, self)
        };
        Ok(Self::from_edges(
            Edge {
                at: earlier.end(),
                included: earlier.is_end_excluded(),
            },
            Edge {
                at: later.start(),
                included: later.is_start_excluded(),
            },
        ))
    }

    /// Smallest interval covering `self` and `other`.
    pub fn merge(&self, other: &Self) -> Self {
        let start = earlier(self.start_edge(), other.start_edge(), |a, b| a || b);
        let end = later(self.end_edge(), other.end_edge(), |a, b| a || b);
        Self::from_edges(start, end)
    }

    /// Smallest interval covering `self` and every interval in `others`.
    ///
    /// Fails with [`PeriodError::EmptyArguments`] if `others` is empty.
    pub fn merge_all<'a, I>(&self, others: I) -> PeriodResult<Self>
    where
        I: IntoIterator<Item = &'a Self>,
        T: 'a,
    {
        let mut others = others.into_iter().peekable();
        if others.peek().is_none() {
            return Err(PeriodError::EmptyArguments);
        }
        Ok(others.fold(*self, |acc, next| acc.merge(next)))
    }

    /// Bounding interval of a collection, `None` when it is empty.
    pub fn bounding<'a, I>(intervals: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Self>,
        T: 'a,
    {
        let mut intervals = intervals.into_iter();
        let first = *intervals.next()?;
        Some(intervals.fold(first, |acc, next| acc.merge(next)))
    }

    /// Symmetric difference of the two intervals.
    ///
    /// For overlapping intervals the result is `(leading, trailing)`: the parts
    /// of the merged span before and after the intersection. A shared start
    /// leaves `leading` empty, a shared end leaves `trailing` empty. Disjoint
    /// intervals, including an empty operand, are returned unchanged in
    /// chronological order.
    ///
    /// Fails with [`PeriodError::IdenticalIntervals`] when both are equal.
    pub fn diff(&self, other: &Self) -> PeriodResult<(Option<Self>, Option<Self>)> {
        if self == other {
            return Err(PeriodError::IdenticalIntervals);
        }

        if !self.overlaps(other) {
            return Ok(if chronological(self, other) == Ordering::Greater {
                (Some(*other), Some(*self))
            } else {
                (Some(*self), Some(*other))
            });
        }

        let intersection = self.intersect(other)?;
        let merged = self.merge(other);

        let leading = (merged.start_edge() != intersection.start_edge()).then(|| {
            Self::from_edges(
                merged.start_edge(),
                Edge {
                    at: intersection.start(),
                    included: intersection.is_start_excluded(),
                },
            )
        });
        let trailing = (merged.end_edge() != intersection.end_edge()).then(|| {
            Self::from_edges(
                Edge {
                    at: intersection.end(),
                    included: intersection.is_end_excluded(),
                },
                merged.end_edge(),
            )
        });

        Ok((leading, trailing))
    }

    /// Parts of `self` not covered by `other`: zero, one or two intervals.
    pub fn subtract(&self, other: &Self) -> Sequence<Self> {
        if !self.overlaps(other) {
            return std::iter::once(*self).collect();
        }

        let mut remainder = Vec::with_capacity(2);
        let other_start = other.start_edge();
        if later(self.start_edge(), other_start, |a, b| a && b) == other_start
            && self.start_edge() != other_start
        {
            remainder.push(Self::from_edges(
                self.start_edge(),
                Edge {
                    at: other.start(),
                    included: other.is_start_excluded(),
                },
            ));
        }

        let other_end = other.end_edge();
        if earlier(self.end_edge(), other_end, |a, b| a && b) == other_end
            && self.end_edge() != other_end
        {
            remainder.push(Self::from_edges(
                Edge {
                    at: other.end(),
                    included: other.is_end_excluded(),
                },
                self.end_edge(),
            ));
        }

        remainder.into_iter().collect()
    }
}

/// Total order on intervals: start, end, then start inclusion before exclusion
/// and end exclusion before inclusion.
fn chronological<T: Datepoint>(a: &Interval<T>, b: &Interval<T>) -> Ordering {
    a.start()
        .cmp(&b.start())
        .then_with(|| a.end().cmp(&b.end()))
        .then_with(|| a.is_start_excluded().cmp(&b.is_start_excluded()))
        .then_with(|| a.is_end_included().cmp(&b.is_end_included()))
}

/// The edge positioned later in time; `tie` decides inclusion on a shared instant.
fn later<T: Ord>(a: Edge<T>, b: Edge<T>, tie: impl Fn(bool, bool) -> bool) -> Edge<T> {
    match a.at.cmp(&b.at) {
        Ordering::Greater => a,
        Ordering::Less => b,
        Ordering::Equal => Edge {
            included: tie(a.included, b.included),
            ..a
        },
    }
}

/// The edge positioned earlier in time; `tie` decides inclusion on a shared instant.
fn earlier<T: Ord>(a: Edge<T>, b: Edge<T>, tie: impl Fn(bool, bool) -> bool) -> Edge<T> {
    match a.at.cmp(&b.at) {
        Ordering::Less => a,
        Ordering::Greater => b,
        Ordering::Equal => Edge {
            included: tie(a.included, b.included),
            ..a
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeDelta, TimeZone, Utc};

    fn at(d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2013, 1, d, h, 0, 0).unwrap()
    }

    fn iv(start: DateTime<Utc>, end: DateTime<Utc>, token: &str) -> Interval {
        Interval::try_from_token(start, end, token).unwrap()
    }

    #[test]
    fn test_intersect_boundaries() {
        let a = iv(at(1, 10), at(1, 13), "[]");
        let b = iv(at(1, 11), at(1, 14), "()");
        assert_eq!(a.intersect(&b).unwrap(), iv(at(1, 11), at(1, 13), "(]"));
        assert_eq!(b.intersect(&a).unwrap(), iv(at(1, 11), at(1, 13), "(]"));
    }

    #[test]
    fn test_intersect_shared_edges() {
        let closed = iv(at(1, 10), at(1, 13), "[]");
        let half_open = iv(at(1, 10), at(1, 13), "[)");
        assert_eq!(closed.intersect(&closed).unwrap(), closed);
        assert_eq!(closed.intersect(&half_open).unwrap(), half_open);

        let touching = iv(at(1, 13), at(1, 15), "[]");
        assert_eq!(
            closed.intersect(&touching).unwrap(),
            iv(at(1, 13), at(1, 13), "[]")
        );
    }

    #[test]
    fn test_intersect_requires_overlap() {
        let a = iv(at(1, 10), at(1, 13), "[)");
        let b = iv(at(1, 13), at(1, 14), "[)");
        assert_eq!(a.intersect(&b), Err(PeriodError::NonOverlappingIntervals));
    }

    #[test]
    fn test_gap_inverts_donor_edges() {
        let a = iv(at(1, 0), at(2, 0), "[]");
        let b = iv(at(4, 0), at(5, 0), "()");
        let gap = a.gap(&b).unwrap();
        assert_eq!(gap, iv(at(2, 0), at(4, 0), "(]"));
        assert_eq!(b.gap(&a).unwrap(), gap);
    }

    #[test]
    fn test_gap_between_abutting_intervals_is_empty() {
        let a = iv(at(1, 0), at(2, 0), "[)");
        let b = iv(at(2, 0), at(3, 0), "[)");
        let gap = a.gap(&b).unwrap();
        assert_eq!(gap.duration(), TimeDelta::zero());
        assert_eq!(gap, iv(at(2, 0), at(2, 0), "[)"));
        assert!(gap.is_empty());
    }

    #[test]
    fn test_gap_between_open_touching_intervals_owns_the_instant() {
        let a = iv(at(1, 0), at(2, 0), "()");
        let b = iv(at(2, 0), at(3, 0), "()");
        let gap = a.gap(&b).unwrap();
        assert_eq!(gap, iv(at(2, 0), at(2, 0), "[]"));
        assert!(gap.contains(at(2, 0)));
    }

    #[test]
    fn test_gap_rejects_overlap() {
        let a = iv(at(1, 0), at(3, 0), "[)");
        let b = iv(at(2, 0), at(4, 0), "[)");
        assert_eq!(a.gap(&b), Err(PeriodError::OverlappingIntervals));
    }

    #[test]
    fn test_merge_prefers_inclusion_on_ties() {
        let a = iv(at(1, 0), at(3, 0), "()");
        let b = iv(at(1, 0), at(2, 0), "[)");
        assert_eq!(a.merge(&b), iv(at(1, 0), at(3, 0), "[)"));

        let c = iv(at(2, 0), at(5, 0), "(]");
        assert_eq!(a.merge(&c), iv(at(1, 0), at(5, 0), "(]"));
    }

    #[test]
    fn test_merge_all() {
        let a = iv(at(2, 0), at(3, 0), "[)");
        let others = [iv(at(1, 0), at(2, 0), "()"), iv(at(4, 0), at(6, 0), "[]")];
        assert_eq!(a.merge_all(&others).unwrap(), iv(at(1, 0), at(6, 0), "(]"));
        assert_eq!(a.merge_all(&[]), Err(PeriodError::EmptyArguments));
    }

    #[test]
    fn test_bounding() {
        let intervals = [iv(at(3, 0), at(4, 0), "[)"), iv(at(1, 0), at(2, 0), "[)")];
        assert_eq!(
            Interval::bounding(&intervals),
            Some(iv(at(1, 0), at(4, 0), "[)"))
        );
        assert_eq!(Interval::<DateTime<Utc>>::bounding(&[]), None);
    }

    #[test]
    fn test_diff_overlapping_in_the_middle() {
        let a = iv(at(1, 10), at(1, 13), "[)");
        let b = iv(at(1, 11), at(1, 14), "[)");
        let (leading, trailing) = a.diff(&b).unwrap();
        let leading = leading.unwrap();
        let trailing = trailing.unwrap();
        assert_eq!(leading, iv(at(1, 10), at(1, 11), "[)"));
        assert_eq!(trailing, iv(at(1, 13), at(1, 14), "[)"));
        assert_eq!(leading.duration().num_seconds(), 3600);
        assert_eq!(trailing.duration().num_seconds(), 3600);
    }

    #[test]
    fn test_diff_shared_start_and_shared_end() {
        let a = iv(at(1, 10), at(1, 13), "[)");
        let longer = iv(at(1, 10), at(1, 15), "[)");
        let (leading, trailing) = a.diff(&longer).unwrap();
        assert_eq!(leading, None);
        assert_eq!(trailing, Some(iv(at(1, 13), at(1, 15), "[)")));

        let earlier_start = iv(at(1, 8), at(1, 13), "[)");
        let (leading, trailing) = a.diff(&earlier_start).unwrap();
        assert_eq!(leading, Some(iv(at(1, 8), at(1, 10), "[)")));
        assert_eq!(trailing, None);
    }

    #[test]
    fn test_diff_keeps_single_instants_owned_by_one_side() {
        let open = iv(at(1, 10), at(1, 13), "()");
        let closed = iv(at(1, 10), at(1, 13), "[]");
        let (leading, trailing) = open.diff(&closed).unwrap();
        assert_eq!(leading, Some(iv(at(1, 10), at(1, 10), "[]")));
        assert_eq!(trailing, Some(iv(at(1, 13), at(1, 13), "[]")));
    }

    #[test]
    fn test_diff_identical_fails() {
        let a = iv(at(1, 10), at(1, 13), "[)");
        assert_eq!(a.diff(&a), Err(PeriodError::IdenticalIntervals));
    }

    #[test]
    fn test_diff_disjoint_returns_both() {
        let a = iv(at(1, 10), at(1, 11), "[)");
        let b = iv(at(1, 12), at(1, 13), "[)");
        assert_eq!(b.diff(&a).unwrap(), (Some(a), Some(b)));
    }

    #[test]
    fn test_empty_operand_is_not_double_counted() {
        let day = iv(at(1, 0), at(1, 10), "[)");
        let empty = iv(at(1, 5), at(1, 5), "()");

        assert_eq!(day.intersect(&empty), Err(PeriodError::NonOverlappingIntervals));
        assert_eq!(day.gap(&empty), Err(PeriodError::OverlappingIntervals));

        let (leading, trailing) = day.diff(&empty).unwrap();
        assert_eq!(leading, Some(day));
        assert_eq!(trailing, Some(empty));
        assert_eq!(empty.diff(&day).unwrap(), (leading, trailing));

        let rest: Vec<_> = day.subtract(&empty).values().copied().collect();
        assert_eq!(rest, vec![day]);
        assert_eq!(empty.subtract(&day).first(), Some(&empty));
    }

    #[test]
    fn test_subtract() {
        let a = iv(at(1, 0), at(5, 0), "[]");
        let middle = iv(at(2, 0), at(3, 0), "[)");
        let rest: Vec<_> = a.subtract(&middle).values().copied().collect();
        assert_eq!(
            rest,
            vec![iv(at(1, 0), at(2, 0), "[)"), iv(at(3, 0), at(5, 0), "[]")]
        );

        let covering = iv(at(1, 0), at(6, 0), "[]");
        assert!(a.subtract(&covering).is_empty());

        let disjoint = iv(at(7, 0), at(8, 0), "[)");
        assert_eq!(a.subtract(&disjoint).first(), Some(&a));

        let open_cover = iv(at(1, 0), at(5, 0), "()");
        let edges: Vec<_> = a.subtract(&open_cover).values().copied().collect();
        assert_eq!(
            edges,
            vec![iv(at(1, 0), at(1, 0), "[]"), iv(at(5, 0), at(5, 0), "[]")]
        );
    }
}
