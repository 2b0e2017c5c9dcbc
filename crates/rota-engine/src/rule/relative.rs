//! Weekday-of-month recurrence.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};

use crate::error::{EngineError, EngineResult};
use crate::rule::tokens::{Ordinal, RelativeUnit, parse_weekday};

/// Rule for events pinned to a weekday position instead of a fixed span.
///
/// "Every year on the second Monday of January" cannot be expressed as a
/// fixed step; a relative rule names the weekday and its position within the
/// month. Starting 2017-01-07 that rule lands on 2017-01-09, 2018-01-08,
/// 2019-01-14. The start date is a lower bound on the sequence, not
/// necessarily an occurrence, and the end date is an upper bound, not
/// necessarily the last occurrence.
///
/// A negative step walks the calendar backward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RelativeRule {
    unit: RelativeUnit,
    step: i32,
    weekday: Weekday,
    ordinal: Ordinal,
}

impl RelativeRule {
    /// ## Summary
    /// Creates a weekday-of-month rule.
    ///
    /// ## Errors
    /// Returns `ValidationError` if `step` is zero.
    pub fn new(
        unit: RelativeUnit,
        step: i32,
        weekday: Weekday,
        ordinal: Ordinal,
    ) -> EngineResult<Self> {
        if step == 0 {
            return Err(EngineError::ValidationError(
                "relative rule step must be nonzero".to_string(),
            ));
        }
        Ok(Self {
            unit,
            step,
            weekday,
            ordinal,
        })
    }

    /// ## Summary
    /// Parses a stored rule row (`time_interval`, `skip_every`,
    /// `day_of_week`, and `posn` columns as stored).
    ///
    /// ## Errors
    /// Returns `ValidationError` on an unknown unit or weekday token, a
    /// `skip_every` of zero or outside `i32`, or a `posn` outside `1..=5`.
    pub fn parse(
        time_interval: &str,
        skip_every: i64,
        day_of_week: &str,
        posn: i64,
    ) -> EngineResult<Self> {
        let unit = RelativeUnit::parse_token(time_interval)?;
        let step = i32::try_from(skip_every).map_err(|_| {
            EngineError::ValidationError(format!(
                "relative rule step {skip_every} is out of range"
            ))
        })?;
        let weekday = parse_weekday(day_of_week)?;
        let ordinal = Ordinal::from_posn(posn)?;
        Self::new(unit, step, weekday, ordinal)
    }

    #[must_use]
    pub const fn unit(&self) -> RelativeUnit {
        self.unit
    }

    #[must_use]
    pub const fn step(&self) -> i32 {
        self.step
    }

    #[must_use]
    pub const fn weekday(&self) -> Weekday {
        self.weekday
    }

    #[must_use]
    pub const fn ordinal(&self) -> Ordinal {
        self.ordinal
    }

    /// Advances by the rule's step, then resolves the ordinal weekday within
    /// the landed month. Blackout dates are not consulted; only exact rules
    /// honor them.
    ///
    /// `None` only on calendar overflow.
    pub(crate) fn increment(&self, current: NaiveDate) -> Option<NaiveDate> {
        let shifted = self.shift(current)?;
        self.resolve_in_month(shifted.with_day(1)?)
    }

    /// First element of the sequence: the rule resolved within the start
    /// date's own month, advanced until it is on/after the start date.
    /// Backward-walking rules skip the forward snap.
    pub(crate) fn seed(&self, start: NaiveDate) -> Option<NaiveDate> {
        let mut candidate = self.resolve_in_month(start.with_day(1)?)?;
        if self.step > 0 {
            while candidate < start {
                candidate = self.increment(candidate)?;
            }
        }
        Some(candidate)
    }

    fn shift(&self, current: NaiveDate) -> Option<NaiveDate> {
        let months = match self.unit {
            RelativeUnit::Month => self.step,
            RelativeUnit::Year => self.step.checked_mul(12)?,
        };
        if months.is_negative() {
            current.checked_sub_months(Months::new(months.unsigned_abs()))
        } else {
            current.checked_add_months(Months::new(months.unsigned_abs()))
        }
    }

    /// Scans the month day by day from its first day. For ordinal `n` the
    /// n-th weekday match wins; for the last-of-month sentinel a match wins
    /// when adding seven days crosses into the next month.
    fn resolve_in_month(&self, first_of_month: NaiveDate) -> Option<NaiveDate> {
        let month = first_of_month.month();
        match self.ordinal {
            Ordinal::Last => first_of_month
                .iter_days()
                .take_while(|day| day.month() == month)
                .find(|day| {
                    day.weekday() == self.weekday
                        && day
                            .checked_add_days(Days::new(7))
                            .is_none_or(|week_later| week_later.month() != month)
                }),
            ordinal => {
                let mut remaining = ordinal.posn();
                first_of_month
                    .iter_days()
                    .take_while(|day| day.month() == month)
                    .find(|day| {
                        if day.weekday() == self.weekday {
                            remaining -= 1;
                            remaining == 0
                        } else {
                            false
                        }
                    })
            }
        }
    }
}
