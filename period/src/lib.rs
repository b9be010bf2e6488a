//! Period - date/time interval algebra
//!
//! Immutable intervals with explicit boundary inclusion, the relations and
//! set operations between them, and insertion-ordered [`Sequence`]s that
//! compose those operations over many intervals.
//!
//! ```
//! use chrono::{TimeDelta, TimeZone, Utc};
//! use period::Interval;
//!
//! let start = Utc.with_ymd_and_hms(2012, 1, 1, 0, 0, 0).unwrap();
//! let week = Interval::after(start, TimeDelta::weeks(1)).unwrap();
//! let days: Vec<_> = week.split(TimeDelta::days(1)).unwrap().collect();
//!
//! assert_eq!(days.len(), 7);
//! assert_eq!(days[0].to_string(), "[2012-01-01T00:00:00+00:00, 2012-01-02T00:00:00+00:00)");
//! ```
//!
//! Intervals are `Copy` values and may be shared freely between threads.
//! A [`Sequence`] is mutable and carries no locking of its own.

pub mod config;
pub mod core;
pub mod error;
pub mod sequence;
pub mod time;

pub use crate::config::PeriodConfig;
pub use crate::core::{BoundaryType, DatePeriod, Interval, Split, SplitBackwards};
pub use crate::error::{PeriodError, PeriodResult};
pub use crate::sequence::{AsInterval, Sequence, SequenceKey};
pub use crate::time::{Datepoint, ToDuration};
