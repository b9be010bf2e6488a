//! Lazy walkers over an interval.
//!
//! All iterators here are finite, cheap to clone, and borrow nothing: calling
//! [`Interval::split`] again (or cloning a fresh iterator) re-walks the span
//! from the beginning.

use std::iter::FusedIterator;

use chrono::TimeDelta;

use super::boundary::BoundaryType;
use super::interval::Interval;
use crate::error::{PeriodError, PeriodResult};
use crate::time::{Datepoint, ToDuration};

fn positive_step(step: impl ToDuration) -> PeriodResult<TimeDelta> {
    let step = step.to_duration()?;
    if step <= TimeDelta::zero() {
        return Err(PeriodError::InvalidDurationDirection(format!(
            "the step must be strictly positive, got {}",
            step
        )));
    }
    Ok(step)
}

impl<T: Datepoint> Interval<T> {
    /// Splits the interval into consecutive pieces of `step`, walking forward.
    ///
    /// Interior edges are `[)` so the pieces tile without gap or overlap; the
    /// first piece keeps the start inclusion and the last one keeps the end
    /// inclusion of `self`. The last piece is truncated when `step` does not
    /// divide the duration.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{TimeDelta, TimeZone, Utc};
    /// use period::Interval;
    ///
    /// let start = Utc.with_ymd_and_hms(2012, 1, 1, 0, 0, 0).unwrap();
    /// let day = Interval::after(start, TimeDelta::days(1)).unwrap();
    ///
    /// assert_eq!(day.split(TimeDelta::hours(1)).unwrap().count(), 24);
    /// ```
    pub fn split(&self, step: impl ToDuration) -> PeriodResult<Split<T>> {
        Ok(Split {
            interval: *self,
            step: positive_step(step)?,
            cursor: Some(self.start()),
        })
    }

    /// Splits the interval walking backward from the end.
    ///
    /// Pieces are yielded from the latest to the earliest; the earliest one is
    /// truncated when `step` does not divide the duration.
    pub fn split_backwards(&self, step: impl ToDuration) -> PeriodResult<SplitBackwards<T>> {
        Ok(SplitBackwards {
            interval: *self,
            step: positive_step(step)?,
            cursor: Some(self.end()),
        })
    }

    /// Instants contained in the interval, from the start, spaced by `step`.
    ///
    /// The start instant is skipped when `exclude_start` is set or when the
    /// boundary excludes it.
    pub fn date_period(&self, step: impl ToDuration, exclude_start: bool) -> PeriodResult<DatePeriod<T>> {
        Ok(DatePeriod {
            interval: *self,
            step: positive_step(step)?,
            cursor: Some(self.start()),
            exclude_anchor: exclude_start,
            backwards: false,
        })
    }

    /// Instants contained in the interval, from the end backward, spaced by `step`.
    pub fn date_period_backwards(
        &self,
        step: impl ToDuration,
        exclude_end: bool,
    ) -> PeriodResult<DatePeriod<T>> {
        Ok(DatePeriod {
            interval: *self,
            step: -positive_step(step)?,
            cursor: Some(self.end()),
            exclude_anchor: exclude_end,
            backwards: true,
        })
    }
}

/// Forward splitting iterator, see [`Interval::split`].
#[derive(Debug, Clone)]
pub struct Split<T: Datepoint> {
    interval: Interval<T>,
    step: TimeDelta,
    cursor: Option<T>,
}

impl<T: Datepoint> Iterator for Split<T> {
    type Item = Interval<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.cursor?;
        let end = start
            .checked_shift(self.step)
            .filter(|next| *next < self.interval.end())
            .unwrap_or(self.interval.end());

        let is_first = start == self.interval.start();
        let is_last = end == self.interval.end();
        self.cursor = if is_last { None } else { Some(end) };

        let boundary = BoundaryType::from_inclusion(
            !is_first || self.interval.is_start_included(),
            is_last && self.interval.is_end_included(),
        );
        Some(Interval::from_ordered(start, end, boundary))
    }
}

impl<T: Datepoint> FusedIterator for Split<T> {}

/// Backward splitting iterator, see [`Interval::split_backwards`].
#[derive(Debug, Clone)]
pub struct SplitBackwards<T: Datepoint> {
    interval: Interval<T>,
    step: TimeDelta,
    cursor: Option<T>,
}

impl<T: Datepoint> Iterator for SplitBackwards<T> {
    type Item = Interval<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let end = self.cursor?;
        let start = end
            .checked_shift(-self.step)
            .filter(|previous| *previous > self.interval.start())
            .unwrap_or(self.interval.start());

        let is_first = start == self.interval.start();
        let is_last = end == self.interval.end();
        self.cursor = if is_first { None } else { Some(start) };

        let boundary = BoundaryType::from_inclusion(
            !is_first || self.interval.is_start_included(),
            is_last && self.interval.is_end_included(),
        );
        Some(Interval::from_ordered(start, end, boundary))
    }
}

impl<T: Datepoint> FusedIterator for SplitBackwards<T> {}

/// Iterator over evenly spaced instants, see [`Interval::date_period`].
#[derive(Debug, Clone)]
pub struct DatePeriod<T: Datepoint> {
    interval: Interval<T>,
    step: TimeDelta,
    cursor: Option<T>,
    exclude_anchor: bool,
    backwards: bool,
}

impl<T: Datepoint> DatePeriod<T> {
    fn anchor(&self) -> (T, bool) {
        if self.backwards {
            (self.interval.end(), self.interval.is_end_included())
        } else {
            (self.interval.start(), self.interval.is_start_included())
        }
    }

    fn is_past_far_edge(&self, instant: T) -> bool {
        if self.backwards {
            self.interval.is_after_instant(instant)
        } else {
            self.interval.is_before_instant(instant)
        }
    }
}

impl<T: Datepoint> Iterator for DatePeriod<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let (anchor, anchor_included) = self.anchor();
        while let Some(instant) = self.cursor {
            if self.is_past_far_edge(instant) {
                self.cursor = None;
                break;
            }
            self.cursor = instant.checked_shift(self.step);
            if instant == anchor && (self.exclude_anchor || !anchor_included) {
                continue;
            }
            return Some(instant);
        }
        None
    }
}

impl<T: Datepoint> FusedIterator for DatePeriod<T> {}
