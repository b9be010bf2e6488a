use std::fmt::{self, Write};

use chrono::{DateTime, NaiveDateTime, TimeDelta, TimeZone};

use crate::error::{PeriodError, PeriodResult};

/// A totally ordered point in time usable as an interval endpoint.
///
/// Implemented for zoned `chrono::DateTime` values and for
/// `chrono::NaiveDateTime`.
pub trait Datepoint: Copy + Ord + fmt::Debug {
    /// Returns `self + delta`, or `None` when the result is not representable.
    fn checked_shift(self, delta: TimeDelta) -> Option<Self>;

    /// Exact signed time elapsed from `earlier` to `self`.
    fn elapsed_since(self, earlier: Self) -> TimeDelta;

    /// Renders the instant with a chrono `strftime` pattern.
    fn format_with(&self, pattern: &str) -> PeriodResult<String>;

    /// Canonical rendering used by `Display` on intervals.
    fn render(&self) -> String;

    fn add_duration(self, delta: TimeDelta) -> PeriodResult<Self> {
        self.checked_shift(delta).ok_or_else(|| {
            PeriodError::OutOfRange(format!("{:?} + {} is not representable", self, delta))
        })
    }

    fn sub_duration(self, delta: TimeDelta) -> PeriodResult<Self> {
        self.checked_shift(-delta).ok_or_else(|| {
            PeriodError::OutOfRange(format!("{:?} - {} is not representable", self, delta))
        })
    }
}

fn write_pattern<D: fmt::Display>(formatted: D, pattern: &str) -> PeriodResult<String> {
    let mut out = String::new();
    write!(out, "{}", formatted).map_err(|_| {
        PeriodError::Configuration(format!("Invalid datetime format pattern: {}", pattern))
    })?;
    Ok(out)
}

impl<Tz> Datepoint for DateTime<Tz>
where
    Tz: TimeZone,
    Tz::Offset: Copy + fmt::Display,
{
    fn checked_shift(self, delta: TimeDelta) -> Option<Self> {
        self.checked_add_signed(delta)
    }

    fn elapsed_since(self, earlier: Self) -> TimeDelta {
        self.signed_duration_since(earlier)
    }

    fn format_with(&self, pattern: &str) -> PeriodResult<String> {
        write_pattern(self.format(pattern), pattern)
    }

    fn render(&self) -> String {
        self.to_rfc3339()
    }
}

impl Datepoint for NaiveDateTime {
    fn checked_shift(self, delta: TimeDelta) -> Option<Self> {
        self.checked_add_signed(delta)
    }

    fn elapsed_since(self, earlier: Self) -> TimeDelta {
        self.signed_duration_since(earlier)
    }

    fn format_with(&self, pattern: &str) -> PeriodResult<String> {
        write_pattern(self.format(pattern), pattern)
    }

    fn render(&self) -> String {
        self.format("%Y-%m-%dT%H:%M:%S%.f").to_string()
    }
}
