//! Token vocabularies for rule fields.
//!
//! Stored rule rows carry small string tokens for the interval unit and the
//! weekday, and an integer position selector. Parsing is case-insensitive
//! over a fixed vocabulary; anything else is a validation error. Canonical
//! forms are single characters and round-trip through the same vocabulary.

use chrono::Weekday;

use crate::error::{EngineError, EngineResult};

/// Calendar unit an exact rule steps by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntervalUnit {
    Day,
    Week,
    Month,
    Year,
}

impl IntervalUnit {
    /// ## Summary
    /// Parses an interval-unit token.
    ///
    /// Accepts `d`/`day`/`daily`, `w`/`week`/`weekly`, `m`/`month`/`monthly`,
    /// and `y`/`year`/`yearly`, in any case.
    ///
    /// ## Errors
    /// Returns `ValidationError` for any other token.
    pub fn parse_token(token: &str) -> EngineResult<Self> {
        match token.to_ascii_lowercase().as_str() {
            "d" | "day" | "daily" => Ok(Self::Day),
            "w" | "week" | "weekly" => Ok(Self::Week),
            "m" | "month" | "monthly" => Ok(Self::Month),
            "y" | "year" | "yearly" => Ok(Self::Year),
            _ => Err(EngineError::ValidationError(format!(
                "unknown interval unit token \"{token}\""
            ))),
        }
    }

    /// Canonical single-character form (`D`/`W`/`M`/`Y`).
    #[must_use]
    pub const fn token(self) -> char {
        match self {
            Self::Day => 'D',
            Self::Week => 'W',
            Self::Month => 'M',
            Self::Year => 'Y',
        }
    }
}

impl std::fmt::Display for IntervalUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// Calendar unit a relative rule steps by. Relative rules resolve a weekday
/// within a month, so only month and year steps are meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelativeUnit {
    Month,
    Year,
}

impl RelativeUnit {
    /// ## Summary
    /// Parses an interval-unit token for a relative rule.
    ///
    /// Same vocabulary as [`IntervalUnit::parse_token`], restricted to the
    /// month and year units.
    ///
    /// ## Errors
    /// Returns `ValidationError` for unknown tokens and for day/week tokens.
    pub fn parse_token(token: &str) -> EngineResult<Self> {
        match IntervalUnit::parse_token(token)? {
            IntervalUnit::Month => Ok(Self::Month),
            IntervalUnit::Year => Ok(Self::Year),
            unit @ (IntervalUnit::Day | IntervalUnit::Week) => {
                Err(EngineError::ValidationError(format!(
                    "relative rules recur by month or year, not \"{unit}\""
                )))
            }
        }
    }

    /// Canonical single-character form (`M`/`Y`).
    #[must_use]
    pub const fn token(self) -> char {
        match self {
            Self::Month => 'M',
            Self::Year => 'Y',
        }
    }
}

impl std::fmt::Display for RelativeUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// Position selector for relative rules: the n-th matching weekday of the
/// month, or the last one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ordinal {
    First,
    Second,
    Third,
    Fourth,
    Last,
}

impl Ordinal {
    /// ## Summary
    /// Parses a stored position value. `1`-`4` select the n-th matching
    /// weekday; `5` is the sentinel for the last one in the month.
    ///
    /// ## Errors
    /// Returns `ValidationError` for values outside `1..=5`.
    pub fn from_posn(posn: i64) -> EngineResult<Self> {
        match posn {
            1 => Ok(Self::First),
            2 => Ok(Self::Second),
            3 => Ok(Self::Third),
            4 => Ok(Self::Fourth),
            5 => Ok(Self::Last),
            _ => Err(EngineError::ValidationError(format!(
                "ordinal position must be 1-5, got {posn}"
            ))),
        }
    }

    /// Stored position value (`1`-`5`, `5` = last).
    #[must_use]
    pub const fn posn(self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
            Self::Third => 3,
            Self::Fourth => 4,
            Self::Last => 5,
        }
    }
}

/// ## Summary
/// Parses a weekday token.
///
/// Accepts `n`/`sun`/`sunday`, `m`/`mon`/`monday`, `t`/`tue`/`tuesday`,
/// `w`/`wed`/`wednesday`, `r`/`thu`/`thursday`, `f`/`fri`/`friday`, and
/// `s`/`sat`/`saturday`, in any case.
///
/// ## Errors
/// Returns `ValidationError` for any other token.
pub fn parse_weekday(token: &str) -> EngineResult<Weekday> {
    match token.to_ascii_lowercase().as_str() {
        "n" | "sun" | "sunday" => Ok(Weekday::Sun),
        "m" | "mon" | "monday" => Ok(Weekday::Mon),
        "t" | "tue" | "tuesday" => Ok(Weekday::Tue),
        "w" | "wed" | "wednesday" => Ok(Weekday::Wed),
        "r" | "thu" | "thursday" => Ok(Weekday::Thu),
        "f" | "fri" | "friday" => Ok(Weekday::Fri),
        "s" | "sat" | "saturday" => Ok(Weekday::Sat),
        _ => Err(EngineError::ValidationError(format!(
            "unknown weekday token \"{token}\""
        ))),
    }
}

/// Canonical single-character weekday form (`N`/`M`/`T`/`W`/`R`/`F`/`S`,
/// Sunday first).
#[must_use]
pub const fn weekday_token(weekday: Weekday) -> char {
    match weekday {
        Weekday::Sun => 'N',
        Weekday::Mon => 'M',
        Weekday::Tue => 'T',
        Weekday::Wed => 'W',
        Weekday::Thu => 'R',
        Weekday::Fri => 'F',
        Weekday::Sat => 'S',
    }
}
