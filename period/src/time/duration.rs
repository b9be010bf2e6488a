//! Duration conversions accepted at the API boundary.

use std::time::Duration as StdDuration;

use chrono::TimeDelta;

use crate::error::{PeriodError, PeriodResult};

/// Conversion into the signed duration type used by the algebra.
pub trait ToDuration {
    fn to_duration(self) -> PeriodResult<TimeDelta>;
}

impl ToDuration for TimeDelta {
    fn to_duration(self) -> PeriodResult<TimeDelta> {
        Ok(self)
    }
}

impl ToDuration for &TimeDelta {
    fn to_duration(self) -> PeriodResult<TimeDelta> {
        Ok(*self)
    }
}

impl ToDuration for StdDuration {
    fn to_duration(self) -> PeriodResult<TimeDelta> {
        TimeDelta::from_std(self)
            .map_err(|e| PeriodError::OutOfRange(format!("{:?} as a time delta: {}", self, e)))
    }
}

/// Returns `true` if the duration points backwards in time.
pub fn is_negative(delta: TimeDelta) -> bool {
    delta < TimeDelta::zero()
}
