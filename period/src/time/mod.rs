//! Time collaborators consumed by the interval algebra.
//!
//! The algebra never manipulates calendar values directly: instants are
//! anything implementing [`Datepoint`], and every duration argument goes
//! through [`ToDuration`] before it reaches an [`Interval`](crate::Interval).

pub mod datepoint;
pub mod duration;

pub use datepoint::Datepoint;
pub use duration::{is_negative, ToDuration};
