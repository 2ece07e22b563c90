//! Open timestamp interval used for selection

use std::fmt;

/// The open interval `(start, end)`
///
/// Both bounds are exclusive. An interval with `start >= end` is vacuous and
/// contains nothing; that is a valid, empty selection rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimestampRange {
    pub start: i64,
    pub end: i64,
}

impl TimestampRange {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// `start < timestamp < end`
    pub fn contains(&self, timestamp: u64) -> bool {
        let ts = i128::from(timestamp);
        i128::from(self.start) < ts && ts < i128::from(self.end)
    }

    pub fn is_vacuous(&self) -> bool {
        self.start >= self.end
    }
}

impl fmt::Display for TimestampRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.start, self.end)
    }
}
