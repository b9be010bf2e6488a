//! Collection-level algebra built from pairwise interval operations.

use chrono::TimeDelta;
use log::debug;

use super::{AsInterval, Sequence};
use crate::core::Interval;

impl<I: AsInterval> Sequence<I> {
    /// Spans not covered by any member.
    ///
    /// Members are walked in start order while tracking the span covered so
    /// far, so a member nested inside an earlier, longer one never produces a
    /// spurious gap. Overlapping or abutting neighbours contribute nothing,
    /// and empty members cover nothing.
    pub fn get_gaps(&self) -> Sequence<Interval<I::Instant>> {
        let mut gaps = Sequence::new();
        let mut intervals = self.covering_intervals();
        let Some(mut covered) = intervals.next() else {
            return gaps;
        };

        for current in intervals {
            match covered.gap(&current) {
                Ok(gap) if !covered.abuts(&current) => {
                    gaps.push(gap);
                    covered = current;
                }
                _ => covered = covered.merge(&current),
            }
        }

        debug!("Computed {} gap(s) across {} interval(s)", gaps.len(), self.len());
        gaps
    }

    /// Pairwise intersections of every overlapping pair of members.
    ///
    /// Pairs are visited in start order; an intersection equal to one already
    /// collected is not repeated.
    pub fn get_intersections(&self) -> Sequence<Interval<I::Instant>> {
        let mut intersections = Sequence::new();
        let intervals = self.sorted_intervals();

        for (position, first) in intervals.iter().enumerate() {
            for second in &intervals[position + 1..] {
                if second.start() > first.end() {
                    break;
                }
                if let Ok(intersection) = first.intersect(second) {
                    if !intersections.contains(&intersection) {
                        intersections.push(intersection);
                    }
                }
            }
        }

        debug!(
            "Computed {} intersection(s) across {} interval(s)",
            intersections.len(),
            self.len()
        );
        intersections
    }

    /// Smallest interval covering every member, `None` for an empty sequence.
    pub fn get_interval(&self) -> Option<Interval<I::Instant>> {
        Interval::bounding(self.values().map(AsInterval::as_interval))
    }

    /// Alias of [`Sequence::get_interval`].
    pub fn get_boundaries(&self) -> Option<Interval<I::Instant>> {
        self.get_interval()
    }

    /// Members merged into disjoint intervals; overlapping or abutting members
    /// collapse into one. Empty members are dropped.
    pub fn unions(&self) -> Sequence<Interval<I::Instant>> {
        let mut unions = Sequence::new();
        let mut intervals = self.covering_intervals();
        let Some(mut covered) = intervals.next() else {
            return unions;
        };

        for current in intervals {
            if covered.overlaps(&current) || covered.abuts(&current) {
                covered = covered.merge(&current);
            } else {
                unions.push(covered);
                covered = current;
            }
        }
        unions.push(covered);

        debug!("Merged {} interval(s) into {} union(s)", self.len(), unions.len());
        unions
    }

    /// Sum of the member durations; overlapping spans are counted once per member.
    pub fn total_duration(&self) -> TimeDelta {
        self.values()
            .fold(TimeDelta::zero(), |acc, v| acc + v.as_interval().duration())
    }

    /// Non empty members in start order.
    fn covering_intervals(&self) -> impl Iterator<Item = Interval<I::Instant>> {
        self.sorted_intervals()
            .into_iter()
            .filter(|interval| !interval.is_empty())
    }

    /// Every member with `interval` removed from it, in iteration order.
    pub fn subtract_interval(&self, interval: &Interval<I::Instant>) -> Sequence<Interval<I::Instant>> {
        self.values()
            .flat_map(|v| v.as_interval().subtract(interval).into_iter().map(|(_, rest)| rest))
            .collect()
    }
}
