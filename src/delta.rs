//! Relative and absolute field adjustments, plus the nominal
//! duration table used to value them.

use core::ops::Neg;

use crate::field::Field;
use crate::instant::{MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE, MS_PER_SECOND};

/// Nominal fixed sizes for the calendar-shaped fields. A nominal
/// month is 30 days and a nominal year 365; calendar-exact month
/// arithmetic belongs to the shift operation, not this table.
pub(crate) const MS_PER_MONTH: i64 = 30 * MS_PER_DAY;
pub(crate) const MS_PER_YEAR: i64 = 365 * MS_PER_DAY;

/// Signed per-field delta for shift arithmetic. Absent fields are
/// zero; construct with struct-update syntax over `Default`, or
/// [`Delta::of`] for a single field picked at runtime.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Delta {
    pub year: i64,
    pub month: i64,
    pub day: i64,
    pub hour: i64,
    pub minute: i64,
    pub second: i64,
    pub millisecond: i64,
}

impl Delta {
    /// Delta with a single field set.
    pub fn of(field: Field, amount: i64) -> Self {
        let mut delta = Self::default();
        match field {
            Field::Year => delta.year = amount,
            Field::Month => delta.month = amount,
            Field::Day => delta.day = amount,
            Field::Hour => delta.hour = amount,
            Field::Minute => delta.minute = amount,
            Field::Second => delta.second = amount,
            Field::Millisecond => delta.millisecond = amount,
        }
        delta
    }

    /// Values the delta against the nominal duration table,
    /// saturating instead of wrapping.
    pub fn as_millis(&self) -> i64 {
        self.year
            .saturating_mul(MS_PER_YEAR)
            .saturating_add(self.month.saturating_mul(MS_PER_MONTH))
            .saturating_add(self.day.saturating_mul(MS_PER_DAY))
            .saturating_add(self.hour.saturating_mul(MS_PER_HOUR))
            .saturating_add(self.minute.saturating_mul(MS_PER_MINUTE))
            .saturating_add(self.second.saturating_mul(MS_PER_SECOND))
            .saturating_add(self.millisecond)
    }

    /// Breaks a millisecond difference into nominal components,
    /// dividing coarsest-first and carrying the remainder down.
    /// Every division truncates toward zero, so components share the
    /// sign of `diff` and [`Delta::as_millis`] reassembles it
    /// exactly.
    pub(crate) fn breakdown(diff: i64) -> Self {
        let year = diff / MS_PER_YEAR;
        let mut rem = diff % MS_PER_YEAR;
        let month = rem / MS_PER_MONTH;
        rem %= MS_PER_MONTH;
        let day = rem / MS_PER_DAY;
        rem %= MS_PER_DAY;
        let hour = rem / MS_PER_HOUR;
        rem %= MS_PER_HOUR;
        let minute = rem / MS_PER_MINUTE;
        rem %= MS_PER_MINUTE;
        let second = rem / MS_PER_SECOND;
        rem %= MS_PER_SECOND;
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            millisecond: rem,
        }
    }
}

impl Neg for Delta {
    type Output = Delta;

    fn neg(self) -> Delta {
        Delta {
            year: self.year.saturating_neg(),
            month: self.month.saturating_neg(),
            day: self.day.saturating_neg(),
            hour: self.hour.saturating_neg(),
            minute: self.minute.saturating_neg(),
            second: self.second.saturating_neg(),
            millisecond: self.millisecond.saturating_neg(),
        }
    }
}

/// Absolute field assignments for the change operation. `None`
/// keeps the current value; an explicit zero is a real assignment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChangeSet {
    pub year: Option<i64>,
    pub month: Option<i64>,
    pub day: Option<i64>,
    pub hour: Option<i64>,
    pub minute: Option<i64>,
    pub second: Option<i64>,
    pub millisecond: Option<i64>,
}

impl ChangeSet {
    /// Builder form, useful for field slots picked at runtime.
    pub fn with(mut self, field: Field, value: i64) -> Self {
        match field {
            Field::Year => self.year = Some(value),
            Field::Month => self.month = Some(value),
            Field::Day => self.day = Some(value),
            Field::Hour => self.hour = Some(value),
            Field::Minute => self.minute = Some(value),
            Field::Second => self.second = Some(value),
            Field::Millisecond => self.millisecond = Some(value),
        }
        self
    }
}
