//! Fixed-step recurrence.

use chrono::{Days, Months, NaiveDate};

use crate::blackout::BlackoutSet;
use crate::error::{EngineError, EngineResult};
use crate::rule::tokens::IntervalUnit;

/// Rule for events that repeat on a fixed calendar step.
///
/// The event begins on its start date and recurs every `step` units from
/// there: start 2017-01-10 with a monthly step of 1 lands on 2017-02-10,
/// 2017-03-10, 2017-04-10, and so on. A weekly step is seven days; month and
/// year steps clamp the day-of-month the way calendar arithmetic does
/// (2017-01-31 plus one month is 2017-02-28).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExactRule {
    unit: IntervalUnit,
    step: u32,
}

impl ExactRule {
    /// ## Summary
    /// Creates a fixed-step rule.
    ///
    /// ## Errors
    /// Returns `ValidationError` if `step` is zero. A non-positive step is
    /// rejected outright, never silently ignored.
    pub fn new(unit: IntervalUnit, step: u32) -> EngineResult<Self> {
        if step == 0 {
            return Err(EngineError::ValidationError(
                "exact rule step must be positive".to_string(),
            ));
        }
        Ok(Self { unit, step })
    }

    /// ## Summary
    /// Parses a stored rule row (`time_interval` token + `skip_every` count).
    ///
    /// ## Errors
    /// Returns `ValidationError` on an unknown unit token or a `skip_every`
    /// outside `1..=u32::MAX`.
    pub fn parse(time_interval: &str, skip_every: i64) -> EngineResult<Self> {
        let unit = IntervalUnit::parse_token(time_interval)?;
        let step = u32::try_from(skip_every).map_err(|_| {
            EngineError::ValidationError(format!(
                "exact rule step must be positive, got {skip_every}"
            ))
        })?;
        Self::new(unit, step)
    }

    #[must_use]
    pub const fn unit(&self) -> IntervalUnit {
        self.unit
    }

    #[must_use]
    pub const fn step(&self) -> u32 {
        self.step
    }

    /// Advances one step and skips past blackout dates. Landing on a
    /// blackout re-increments from the landed date, so consecutive blackouts
    /// chain. A blackout set blocking every candidate forever would not
    /// terminate; the set is finite in practice.
    ///
    /// `None` only on calendar overflow.
    pub(crate) fn increment(
        &self,
        current: NaiveDate,
        blackouts: &BlackoutSet,
    ) -> Option<NaiveDate> {
        let mut next = self.advance(current)?;
        while blackouts.contains(next) {
            next = self.advance(next)?;
        }
        Some(next)
    }

    fn advance(&self, current: NaiveDate) -> Option<NaiveDate> {
        match self.unit {
            IntervalUnit::Day => current.checked_add_days(Days::new(u64::from(self.step))),
            IntervalUnit::Week => current.checked_add_days(Days::new(7 * u64::from(self.step))),
            IntervalUnit::Month => current.checked_add_months(Months::new(self.step)),
            IntervalUnit::Year => {
                current.checked_add_months(Months::new(self.step.checked_mul(12)?))
            }
        }
    }
}
