//! Conversions between the millisecond timeline and calendar form,
//! plus the working field record behind parsing and absolute sets.
//!
//! Instants are naive: there is no zone model, so a millisecond count
//! always maps to the same calendar fields. Counts outside chrono's
//! representable range clamp to its edges rather than failing.

use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

pub(crate) const MS_PER_SECOND: i64 = 1_000;
pub(crate) const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
pub(crate) const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
pub(crate) const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Calendar view of a millisecond instant.
pub(crate) fn datetime_of(millis: i64) -> NaiveDateTime {
    match DateTime::from_timestamp_millis(millis) {
        Some(dt) => dt.naive_utc(),
        None if millis < 0 => NaiveDateTime::MIN,
        None => NaiveDateTime::MAX,
    }
}

/// Millisecond instant of a calendar value.
pub(crate) fn millis_of(dt: NaiveDateTime) -> i64 {
    dt.and_utc().timestamp_millis()
}

/// Current wall-clock instant on the naive timeline.
pub(crate) fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Shifts a calendar value by a millisecond offset, clamping at the
/// representable range.
pub(crate) fn offset(dt: NaiveDateTime, ms: i64) -> NaiveDateTime {
    match dt.checked_add_signed(Duration::milliseconds(ms)) {
        Some(shifted) => shifted,
        None if ms < 0 => NaiveDateTime::MIN,
        None => NaiveDateTime::MAX,
    }
}

/// Working record used by parsing and absolute field application.
/// All seven fields collect first and resolve to a calendar value in
/// one step, so a partially written record never feeds calendar
/// arithmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct FieldSet {
    pub year: i64,
    pub month: i64,
    pub day: i64,
    pub hour: i64,
    pub minute: i64,
    pub second: i64,
    pub millisecond: i64,
}

impl FieldSet {
    /// Snapshot of an instant's calendar fields.
    pub fn of(dt: NaiveDateTime) -> Self {
        Self {
            year: i64::from(dt.year()),
            month: i64::from(dt.month()),
            day: i64::from(dt.day()),
            hour: i64::from(dt.hour()),
            minute: i64::from(dt.minute()),
            second: i64::from(dt.second()),
            millisecond: i64::from(dt.nanosecond()) / 1_000_000,
        }
    }

    /// Resolves the record to a calendar value, normalising fields
    /// that ran out of range: months beyond 1..=12 roll into the
    /// year, day counts from an anchor of 1 (day 0 lands on the last
    /// day of the previous month), and time-of-day accumulates as a
    /// millisecond offset.
    pub fn resolve(self) -> NaiveDateTime {
        let month0 = self.month.saturating_sub(1);
        let year = self.year.saturating_add(month0.div_euclid(12));
        let month = month0.rem_euclid(12) + 1;
        let first = first_of_month(year, month as u32);
        let ms = self
            .day
            .saturating_sub(1)
            .saturating_mul(MS_PER_DAY)
            .saturating_add(self.hour.saturating_mul(MS_PER_HOUR))
            .saturating_add(self.minute.saturating_mul(MS_PER_MINUTE))
            .saturating_add(self.second.saturating_mul(MS_PER_SECOND))
            .saturating_add(self.millisecond);
        offset(first.and_time(NaiveTime::MIN), ms)
    }
}

/// Midnight on the first of the given month, clamped to the
/// representable range for years chrono cannot hold.
fn first_of_month(year: i64, month: u32) -> NaiveDate {
    let clamped = year.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
    match NaiveDate::from_ymd_opt(clamped, month, 1) {
        Some(date) => date,
        None if year < 0 => NaiveDate::MIN,
        None => NaiveDate::MAX,
    }
}
