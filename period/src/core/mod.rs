//! Core interval model.
//!
//! This module defines the boundary types, the immutable [`Interval`] value
//! and everything computed from one or two intervals: relations, set algebra
//! and the lazy walkers produced by splitting.

mod algebra;
pub mod boundary;
pub mod interval;
pub mod iter;
mod relation;

pub use boundary::BoundaryType;
pub use interval::Interval;
pub use iter::{DatePeriod, Split, SplitBackwards};
