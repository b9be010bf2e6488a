//! Boundary types describing which endpoints belong to an interval.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PeriodError, PeriodResult};

/// Inclusion of the start and end instants of an interval.
///
/// The four variants carry exactly two booleans worth of information. All
/// inclusion queries in the algebra go through [`BoundaryType::is_start_included`]
/// and [`BoundaryType::is_end_included`].
///
/// # Examples
///
/// ```
/// use period::BoundaryType;
///
/// let boundary: BoundaryType = "(]".parse().unwrap();
/// assert!(boundary.is_start_excluded());
/// assert!(boundary.is_end_included());
/// assert_eq!(boundary.to_string(), "(]");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum BoundaryType {
    /// `[)`: start included, end excluded.
    #[default]
    IncludeStartExcludeEnd,
    /// `(]`: start excluded, end included.
    ExcludeStartIncludeEnd,
    /// `()`: both endpoints excluded.
    ExcludeAll,
    /// `[]`: both endpoints included.
    IncludeAll,
}

impl BoundaryType {
    pub const ALL: [BoundaryType; 4] = [
        BoundaryType::IncludeStartExcludeEnd,
        BoundaryType::ExcludeStartIncludeEnd,
        BoundaryType::ExcludeAll,
        BoundaryType::IncludeAll,
    ];

    /// Builds the boundary type from the two inclusion flags.
    pub const fn from_inclusion(start_included: bool, end_included: bool) -> Self {
        match (start_included, end_included) {
            (true, false) => BoundaryType::IncludeStartExcludeEnd,
            (false, true) => BoundaryType::ExcludeStartIncludeEnd,
            (false, false) => BoundaryType::ExcludeAll,
            (true, true) => BoundaryType::IncludeAll,
        }
    }

    pub const fn is_start_included(self) -> bool {
        matches!(
            self,
            BoundaryType::IncludeStartExcludeEnd | BoundaryType::IncludeAll
        )
    }

    pub const fn is_start_excluded(self) -> bool {
        !self.is_start_included()
    }

    pub const fn is_end_included(self) -> bool {
        matches!(
            self,
            BoundaryType::ExcludeStartIncludeEnd | BoundaryType::IncludeAll
        )
    }

    pub const fn is_end_excluded(self) -> bool {
        !self.is_end_included()
    }

    /// Same end inclusion, start inclusion replaced.
    pub const fn with_start_included(self, included: bool) -> Self {
        Self::from_inclusion(included, self.is_end_included())
    }

    /// Same start inclusion, end inclusion replaced.
    pub const fn with_end_included(self, included: bool) -> Self {
        Self::from_inclusion(self.is_start_included(), included)
    }

    /// Canonical two character token.
    pub const fn as_str(self) -> &'static str {
        match self {
            BoundaryType::IncludeStartExcludeEnd => "[)",
            BoundaryType::ExcludeStartIncludeEnd => "(]",
            BoundaryType::ExcludeAll => "()",
            BoundaryType::IncludeAll => "[]",
        }
    }

    pub(crate) const fn opening_char(self) -> char {
        if self.is_start_included() {
            '['
        } else {
            '('
        }
    }

    pub(crate) const fn closing_char(self) -> char {
        if self.is_end_included() {
            ']'
        } else {
            ')'
        }
    }

    /// Parses a canonical token.
    pub fn parse_token(token: &str) -> PeriodResult<Self> {
        match token {
            "[)" => Ok(BoundaryType::IncludeStartExcludeEnd),
            "(]" => Ok(BoundaryType::ExcludeStartIncludeEnd),
            "()" => Ok(BoundaryType::ExcludeAll),
            "[]" => Ok(BoundaryType::IncludeAll),
            other => Err(PeriodError::InvalidBoundary(other.to_string())),
        }
    }
}

impl FromStr for BoundaryType {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_token(s)
    }
}

impl TryFrom<String> for BoundaryType {
    type Error = PeriodError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_token(&value)
    }
}

impl TryFrom<&str> for BoundaryType {
    type Error = PeriodError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse_token(value)
    }
}

impl From<BoundaryType> for &'static str {
    fn from(value: BoundaryType) -> Self {
        value.as_str()
    }
}

impl fmt::Display for BoundaryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
