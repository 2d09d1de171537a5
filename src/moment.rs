//! The public value type: an instant bound to a layout.

use core::cmp::Ordering;
use core::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use chrono::{Datelike, Months, NaiveDateTime, Timelike};

use crate::delta::{ChangeSet, Delta};
use crate::error::{Error, Result};
use crate::field::{spec_of, Field};
use crate::instant::{
    self, FieldSet, MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE, MS_PER_SECOND,
};
use crate::layout::{parse_layout, render_layout, DEFAULT_LAYOUT};

/// An instant paired with the layout it renders through. Immutable:
/// every operation returns a new value.
///
/// Equality, ordering and hashing consider the instant alone; the
/// bound layout is presentation.
#[derive(Clone, Debug)]
pub struct Moment {
    millis: i64,
    layout: String,
}

impl Moment {
    /// Wraps a millisecond instant with the default layout.
    pub fn of(millis: i64) -> Self {
        Self {
            millis,
            layout: DEFAULT_LAYOUT.to_string(),
        }
    }

    /// Current local wall-clock instant.
    pub fn now() -> Self {
        Self::from(instant::now())
    }

    /// Parses `text` against `layout`. Fields the layout does not
    /// cover default to the current instant's values, so two parses
    /// of the same partial text can differ; prefer
    /// [`Moment::parse_at`] when that matters. The result binds
    /// `layout`.
    pub fn parse(text: &str, layout: &str) -> Result<Self> {
        Self::anchored(text, layout, instant::now())
    }

    /// Parses `text` against `layout` with an explicit anchor
    /// supplying the fields the layout does not cover.
    pub fn parse_at(text: &str, layout: &str, anchor: &Moment) -> Result<Self> {
        Self::anchored(text, layout, anchor.datetime())
    }

    fn anchored(text: &str, layout: &str, anchor: NaiveDateTime) -> Result<Self> {
        let dt = parse_layout(text, layout, anchor)?;
        Ok(Self {
            millis: instant::millis_of(dt),
            layout: layout.to_string(),
        })
    }

    /// Rebinds the layout used by `Display` and by textual
    /// comparison operands. The instant is untouched.
    pub fn with_layout(mut self, layout: impl Into<String>) -> Self {
        self.layout = layout.into();
        self
    }

    /// Millisecond instant.
    pub fn millis(&self) -> i64 {
        self.millis
    }

    /// Bound layout.
    pub fn layout(&self) -> &str {
        &self.layout
    }

    /// Calendar view of the instant.
    pub fn datetime(&self) -> NaiveDateTime {
        instant::datetime_of(self.millis)
    }

    pub fn year(&self) -> i64 {
        i64::from(self.datetime().year())
    }

    /// 1 through 12.
    pub fn month(&self) -> i64 {
        i64::from(self.datetime().month())
    }

    pub fn day(&self) -> i64 {
        i64::from(self.datetime().day())
    }

    /// 0 through 23.
    pub fn hour(&self) -> i64 {
        i64::from(self.datetime().hour())
    }

    pub fn minute(&self) -> i64 {
        i64::from(self.datetime().minute())
    }

    pub fn second(&self) -> i64 {
        i64::from(self.datetime().second())
    }

    pub fn millisecond(&self) -> i64 {
        i64::from(self.datetime().nanosecond()) / 1_000_000
    }

    /// 0 through 6, 0 being Sunday.
    pub fn weekday(&self) -> i64 {
        i64::from(self.datetime().weekday().num_days_from_sunday())
    }

    /// Renders through an explicit layout instead of the bound one.
    pub fn format(&self, layout: &str) -> String {
        render_layout(self.datetime(), layout)
    }

    /// Shifts by the delta. Year and month move through calendar
    /// arithmetic, clamping the day to the target month's length
    /// (February 29th plus one year lands on the 28th). Day and
    /// finer fields move as exact millisecond offsets; on the naive
    /// timeline a day is always 24 hours.
    pub fn shift(&self, delta: Delta) -> Self {
        let months = delta.year.saturating_mul(12).saturating_add(delta.month);
        let dt = self.datetime();
        let dt = if months >= 0 {
            let months = u32::try_from(months).unwrap_or(u32::MAX);
            dt.checked_add_months(Months::new(months))
                .unwrap_or(NaiveDateTime::MAX)
        } else {
            let months = u32::try_from(months.unsigned_abs()).unwrap_or(u32::MAX);
            dt.checked_sub_months(Months::new(months))
                .unwrap_or(NaiveDateTime::MIN)
        };
        let ms = delta
            .day
            .saturating_mul(MS_PER_DAY)
            .saturating_add(delta.hour.saturating_mul(MS_PER_HOUR))
            .saturating_add(delta.minute.saturating_mul(MS_PER_MINUTE))
            .saturating_add(delta.second.saturating_mul(MS_PER_SECOND))
            .saturating_add(delta.millisecond);
        self.at(instant::millis_of(instant::offset(dt, ms)))
    }

    /// Sets the given fields absolutely, leaves the rest at their
    /// current values, then lets calendar normalisation settle the
    /// result: month 13 rolls into the next year, day 0 lands on the
    /// last day of the previous month. Out-of-range values are never
    /// an error.
    pub fn change(&self, set: ChangeSet) -> Self {
        let mut fields = FieldSet::of(self.datetime());
        if let Some(value) = set.year {
            fields.year = value;
        }
        if let Some(value) = set.month {
            fields.month = value;
        }
        if let Some(value) = set.day {
            fields.day = value;
        }
        if let Some(value) = set.hour {
            fields.hour = value;
        }
        if let Some(value) = set.minute {
            fields.minute = value;
        }
        if let Some(value) = set.second {
            fields.second = value;
        }
        if let Some(value) = set.millisecond {
            fields.millisecond = value;
        }
        self.at(instant::millis_of(fields.resolve()))
    }

    /// Truncates to the start of `field`: every finer field drops to
    /// its floor, 1 for month and day and 0 for the rest. Nothing is
    /// finer than a millisecond, so `start_of(Field::Millisecond)`
    /// returns the value unchanged.
    pub fn start_of(&self, field: Field) -> Self {
        let mut set = ChangeSet::default();
        for finer in Field::ALL.into_iter().filter(|f| *f > field) {
            set = set.with(finer, spec_of(finer).min_value);
        }
        self.change(set)
    }

    /// Last millisecond inside `field`'s current span: the start of
    /// the next span, stepped back one millisecond.
    /// `end_of(Field::Millisecond)` returns the value unchanged.
    pub fn end_of(&self, field: Field) -> Self {
        if field == Field::Millisecond {
            return self.clone();
        }
        self.start_of(field)
            .shift(Delta::of(field, 1))
            .shift(Delta::of(Field::Millisecond, -1))
    }

    /// True when `self` precedes `other` at the granularity.
    ///
    /// Millisecond granularity compares raw instants; any coarser
    /// granularity compares the two sides truncated with
    /// [`Moment::start_of`]. Textual operands parse with `self`'s
    /// bound layout, anchored to `self`, and can fail; see
    /// [`Error`].
    pub fn is_before(&self, other: impl AsMoment, granularity: Field) -> Result<bool> {
        let other = other.as_moment(self)?;
        Ok(self.truncated(granularity) < other.truncated(granularity))
    }

    /// True when `self` follows `other` at the granularity.
    pub fn is_after(&self, other: impl AsMoment, granularity: Field) -> Result<bool> {
        let other = other.as_moment(self)?;
        Ok(self.truncated(granularity) > other.truncated(granularity))
    }

    /// True when both sides fall inside the same `granularity` span.
    pub fn is_same(&self, other: impl AsMoment, granularity: Field) -> Result<bool> {
        let other = other.as_moment(self)?;
        Ok(self.truncated(granularity) == other.truncated(granularity))
    }

    /// `is_before` or `is_same`.
    pub fn is_same_or_before(&self, other: impl AsMoment, granularity: Field) -> Result<bool> {
        let other = other.as_moment(self)?;
        Ok(self.truncated(granularity) <= other.truncated(granularity))
    }

    /// `is_after` or `is_same`.
    pub fn is_same_or_after(&self, other: impl AsMoment, granularity: Field) -> Result<bool> {
        let other = other.as_moment(self)?;
        Ok(self.truncated(granularity) >= other.truncated(granularity))
    }

    /// Nominal component breakdown of `other - self`, valuing a year
    /// at 365 days and a month at 30. Components share the
    /// difference's sign and [`Delta::as_millis`] reassembles the
    /// difference exactly; for calendar-exact movement use
    /// [`Moment::shift`] instead.
    pub fn measure(&self, other: &Moment) -> Delta {
        Delta::breakdown(other.millis.saturating_sub(self.millis))
    }

    fn truncated(&self, granularity: Field) -> i64 {
        if granularity == Field::Millisecond {
            self.millis
        } else {
            self.start_of(granularity).millis
        }
    }

    fn at(&self, millis: i64) -> Self {
        Self {
            millis,
            layout: self.layout.clone(),
        }
    }
}

impl fmt::Display for Moment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(&self.layout))
    }
}

impl FromStr for Moment {
    type Err = Error;

    /// Parses with [`DEFAULT_LAYOUT`].
    fn from_str(s: &str) -> Result<Self> {
        Moment::parse(s, DEFAULT_LAYOUT)
    }
}

impl From<NaiveDateTime> for Moment {
    fn from(dt: NaiveDateTime) -> Self {
        Moment::of(instant::millis_of(dt))
    }
}

impl PartialEq for Moment {
    fn eq(&self, other: &Self) -> bool {
        self.millis == other.millis
    }
}

impl Eq for Moment {}

impl PartialOrd for Moment {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Moment {
    fn cmp(&self, other: &Self) -> Ordering {
        self.millis.cmp(&other.millis)
    }
}

impl Hash for Moment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.millis.hash(state);
    }
}

/// Comparison operand: a moment, a reference to one, or text parsed
/// with the left-hand side's bound layout and the left-hand side as
/// anchor.
pub trait AsMoment {
    fn as_moment(&self, reference: &Moment) -> Result<Moment>;
}

impl AsMoment for Moment {
    fn as_moment(&self, _reference: &Moment) -> Result<Moment> {
        Ok(self.clone())
    }
}

impl AsMoment for &Moment {
    fn as_moment(&self, _reference: &Moment) -> Result<Moment> {
        Ok((*self).clone())
    }
}

impl AsMoment for &str {
    fn as_moment(&self, reference: &Moment) -> Result<Moment> {
        Moment::parse_at(self, reference.layout(), reference)
    }
}

impl AsMoment for String {
    fn as_moment(&self, reference: &Moment) -> Result<Moment> {
        self.as_str().as_moment(reference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    // -----------------------
    // Helpers
    // -----------------------

    /// Deterministic parse: the epoch anchor zeroes every field the
    /// layout leaves out, milliseconds included.
    fn at(text: &str) -> Moment {
        Moment::parse_at(text, DEFAULT_LAYOUT, &Moment::of(0)).expect("should parse")
    }

    fn delta(field: Field, amount: i64) -> Delta {
        Delta::of(field, amount)
    }

    // -----------------------
    // Construction & accessors
    // -----------------------

    #[test]
    fn parse_exposes_calendar_fields() {
        let day = at("2019-05-15 10:20:30");
        assert_eq!(day.year(), 2019);
        assert_eq!(day.month(), 5);
        assert_eq!(day.day(), 15);
        assert_eq!(day.hour(), 10);
        assert_eq!(day.minute(), 20);
        assert_eq!(day.second(), 30);
        assert_eq!(day.millisecond(), 0);
        assert_eq!(day.millis(), 1_557_915_630_000);
    }

    #[test]
    fn weekday_counts_from_sunday() {
        // 2019-05-15 fell on a Wednesday.
        assert_eq!(at("2019-05-15 10:20:30").weekday(), 3);
        assert_eq!(at("2019-05-12 00:00:00").weekday(), 0);
    }

    #[test]
    fn of_wraps_a_raw_instant() {
        let day = Moment::of(1_557_915_630_000);
        assert_eq!(day.to_string(), "2019-05-15 10:20:30");
        assert_eq!(day.layout(), DEFAULT_LAYOUT);
    }

    #[test]
    fn now_binds_the_default_layout() {
        assert_eq!(Moment::now().layout(), DEFAULT_LAYOUT);
    }

    #[test]
    fn from_str_uses_the_default_layout() {
        let day: Moment = "2019-05-15 10:20:30".parse().expect("should parse");
        assert_eq!(day.year(), 2019);
        assert_eq!(day.second(), 30);

        let bad = "2019/05/15".parse::<Moment>().expect_err("wrong shape");
        assert!(matches!(bad.kind, ErrorKind::NoMatch));
    }

    #[test]
    fn from_datetime_round_trips() {
        let dt = at("2019-05-15 10:20:30").datetime();
        assert_eq!(Moment::from(dt).millis(), 1_557_915_630_000);
    }

    #[test]
    fn parse_binds_the_given_layout() {
        let day =
            Moment::parse_at("2019/05/15", "YYYY/MM/DD", &Moment::of(0)).expect("should parse");
        assert_eq!(day.layout(), "YYYY/MM/DD");
        assert_eq!(day.to_string(), "2019/05/15");
    }

    // -----------------------
    // Display & format
    // -----------------------

    #[test]
    fn display_renders_the_bound_layout() {
        let day = at("2019-05-15 10:20:30");
        assert_eq!(day.to_string(), "2019-05-15 10:20:30");
        assert_eq!(
            day.clone().with_layout("DD.MM.YYYY").to_string(),
            "15.05.2019"
        );
    }

    #[test]
    fn format_takes_an_explicit_layout() {
        let day = at("2019-05-15 10:20:30");
        assert_eq!(day.format("YYYY/MM/DD HH:mm:ss"), "2019/05/15 10:20:30");
        assert_eq!(day.format("H:m:s.z"), "10:20:30.0");
    }

    // -----------------------
    // Shift
    // -----------------------

    #[test]
    fn leap_day_clamps_when_shifting_years() {
        let leap = at("2020-02-29 10:20:30");
        assert_eq!(
            leap.shift(delta(Field::Year, 1)).to_string(),
            "2021-02-28 10:20:30"
        );
        assert_eq!(
            leap.shift(delta(Field::Year, -1)).to_string(),
            "2019-02-28 10:20:30"
        );
    }

    #[test]
    fn month_end_clamps_when_shifting_months() {
        let end = at("2019-01-31 00:00:00");
        assert_eq!(end.shift(delta(Field::Month, 1)).to_string(), "2019-02-28 00:00:00");
        assert_eq!(end.shift(delta(Field::Month, -2)).to_string(), "2018-11-30 00:00:00");
    }

    #[test]
    fn year_and_month_deltas_combine() {
        let day = at("2019-05-15 10:20:30");
        let shifted = day.shift(Delta {
            year: 1,
            month: 1,
            ..Delta::default()
        });
        assert_eq!(shifted.to_string(), "2020-06-15 10:20:30");
    }

    #[test]
    fn sub_month_deltas_are_exact_offsets() {
        let day = at("2019-05-15 10:20:30");
        assert_eq!(
            day.shift(delta(Field::Day, 1)).millis() - day.millis(),
            MS_PER_DAY
        );
        assert_eq!(
            day.shift(delta(Field::Minute, -90)).to_string(),
            "2019-05-15 08:50:30"
        );
        assert_eq!(day.shift(delta(Field::Millisecond, 5)).millisecond(), 5);
    }

    #[test]
    fn zero_delta_is_identity() {
        let day = at("2019-05-15 10:20:30");
        assert_eq!(day.shift(Delta::default()), day);
    }

    #[test]
    fn shift_and_negation_round_trip() {
        let day = at("2019-05-15 10:20:30");
        let step = Delta {
            day: 40,
            hour: 7,
            millisecond: 123,
            ..Delta::default()
        };
        assert_eq!(day.shift(step).shift(-step), day);
    }

    // -----------------------
    // Change
    // -----------------------

    #[test]
    fn change_overwrites_only_present_fields() {
        let day = at("2019-05-15 10:20:30");
        let changed = day.change(ChangeSet {
            hour: Some(0),
            ..ChangeSet::default()
        });
        assert_eq!(changed.to_string(), "2019-05-15 00:20:30");
        assert_eq!(day.change(ChangeSet::default()), day);
    }

    #[test]
    fn change_normalises_out_of_range_values() {
        let day = at("2019-05-15 10:20:30");
        assert_eq!(
            day.change(ChangeSet::default().with(Field::Month, 13)).to_string(),
            "2020-01-15 10:20:30"
        );
        assert_eq!(
            day.change(ChangeSet::default().with(Field::Day, 0)).to_string(),
            "2019-04-30 10:20:30"
        );
        assert_eq!(
            day.change(ChangeSet::default().with(Field::Hour, 25)).to_string(),
            "2019-05-16 01:20:30"
        );
    }

    // -----------------------
    // Boundaries
    // -----------------------

    #[test]
    fn start_of_resets_finer_fields() {
        let day = at("2019-05-15 10:20:30");
        assert_eq!(day.start_of(Field::Year).to_string(), "2019-01-01 00:00:00");
        assert_eq!(day.start_of(Field::Month).to_string(), "2019-05-01 00:00:00");
        assert_eq!(day.start_of(Field::Day).to_string(), "2019-05-15 00:00:00");
        assert_eq!(day.start_of(Field::Hour).to_string(), "2019-05-15 10:00:00");
        assert_eq!(day.start_of(Field::Minute).to_string(), "2019-05-15 10:20:00");
        assert_eq!(day.start_of(Field::Second), day);
        assert_eq!(day.start_of(Field::Millisecond), day);
    }

    #[test]
    fn start_of_zeroes_milliseconds_below_seconds() {
        let noisy = at("2019-05-15 10:20:30").shift(delta(Field::Millisecond, 123));
        assert_eq!(noisy.millisecond(), 123);
        assert_eq!(noisy.start_of(Field::Second).millisecond(), 0);
        assert_eq!(noisy.start_of(Field::Millisecond), noisy);
    }

    #[test]
    fn start_of_is_idempotent() {
        let day = at("2019-05-15 10:20:30");
        for field in Field::ALL {
            let once = day.start_of(field);
            assert_eq!(once.start_of(field), once, "field {field:?}");
        }
    }

    #[test]
    fn end_of_lands_on_the_last_millisecond() {
        let day = at("2019-05-15 10:20:30");
        assert_eq!(day.end_of(Field::Year).to_string(), "2019-12-31 23:59:59");
        assert_eq!(day.end_of(Field::Month).to_string(), "2019-05-31 23:59:59");
        assert_eq!(day.end_of(Field::Day).to_string(), "2019-05-15 23:59:59");
        assert_eq!(day.end_of(Field::Hour).to_string(), "2019-05-15 10:59:59");
        assert_eq!(day.end_of(Field::Minute).to_string(), "2019-05-15 10:20:59");
        assert_eq!(day.end_of(Field::Hour).millisecond(), 999);
        assert_eq!(day.end_of(Field::Millisecond), day);
    }

    #[test]
    fn boundaries_bracket_the_instant() {
        for text in ["2019-05-15 10:20:30", "1969-12-31 23:59:59"] {
            let x = at(text).shift(delta(Field::Millisecond, 123));
            for field in Field::ALL {
                let start = x.start_of(field);
                let end = x.end_of(field);
                assert!(start.millis() <= x.millis(), "start {field:?} on {text}");
                assert!(x.millis() <= end.millis(), "end {field:?} on {text}");
            }
        }
    }

    // -----------------------
    // Comparisons
    // -----------------------

    #[test]
    fn textual_operands_compare_at_second_granularity() {
        let day = at("2019-05-15 10:20:30");
        assert!(day
            .is_before("2019-05-15 10:20:31", Field::Second)
            .expect("valid operand"));
        assert!(!day
            .is_before("2019-05-15 10:20:29", Field::Second)
            .expect("valid operand"));
        assert!(day
            .is_after("2019-05-15 10:20:29", Field::Second)
            .expect("valid operand"));
    }

    #[test]
    fn coarse_granularity_compares_truncations() {
        let day = at("2019-05-15 10:20:30");
        assert!(day
            .is_same("2019-05-15 10:20:31", Field::Minute)
            .expect("valid operand"));
        assert!(!day
            .is_same("2019-05-15 10:21:30", Field::Minute)
            .expect("valid operand"));
        assert!(day
            .is_same("2019-12-01 00:00:00", Field::Year)
            .expect("valid operand"));
    }

    #[test]
    fn millisecond_granularity_compares_raw_instants() {
        let day = at("2019-05-15 10:20:30");
        let later = day.shift(delta(Field::Millisecond, 1));
        assert!(day
            .is_before(&later, Field::Millisecond)
            .expect("valid operand"));
        assert!(day
            .is_same(&later, Field::Second)
            .expect("valid operand"));
    }

    #[test]
    fn exactly_one_relation_holds_at_every_granularity() {
        let day = at("2019-05-15 10:20:30");
        let others = [
            day.clone(),
            day.shift(delta(Field::Millisecond, 1)),
            day.shift(delta(Field::Second, -1)),
            day.shift(delta(Field::Month, 7)),
        ];
        for other in &others {
            for granularity in Field::ALL {
                let before = day.is_before(other, granularity).expect("moment operand");
                let same = day.is_same(other, granularity).expect("moment operand");
                let after = day.is_after(other, granularity).expect("moment operand");
                assert_eq!(
                    [before, same, after].iter().filter(|held| **held).count(),
                    1,
                    "granularity {granularity:?}"
                );
                assert_eq!(
                    day.is_same_or_before(other, granularity).expect("moment operand"),
                    before || same
                );
                assert_eq!(
                    day.is_same_or_after(other, granularity).expect("moment operand"),
                    after || same
                );
            }
        }
    }

    #[test]
    fn textual_operands_use_the_bound_layout() {
        let day = at("2019-05-15 10:20:30").with_layout("YYYY/MM/DD");
        assert!(day
            .is_before("2019/05/16", Field::Day)
            .expect("valid operand"));
        assert!(day
            .is_same(String::from("2019/05/15"), Field::Day)
            .expect("valid operand"));

        let err = day
            .is_before("2019-05-16", Field::Day)
            .expect_err("operand in the wrong layout");
        assert!(matches!(err.kind, ErrorKind::NoMatch));

        let unbound = day
            .with_layout("HH?")
            .is_before("", Field::Hour)
            .expect_err("optional group leaves the hour unbound");
        assert!(matches!(unbound.kind, ErrorKind::NoMatch));
    }

    // -----------------------
    // Measure
    // -----------------------

    #[test]
    fn measure_breaks_down_the_difference() {
        let from = at("2019-01-01 00:00:00");
        let to = from.shift(Delta {
            day: 90,
            minute: 90,
            ..Delta::default()
        });
        assert_eq!(
            from.measure(&to),
            Delta {
                month: 3,
                hour: 1,
                minute: 30,
                ..Delta::default()
            }
        );
        // Reversed, the components flip sign.
        assert_eq!(to.measure(&from), -from.measure(&to));
    }

    #[test]
    fn measure_reassembles_exactly() {
        let from = at("2019-05-15 10:20:30");
        let to = at("2021-02-28 09:00:01").shift(delta(Field::Millisecond, 777));
        assert_eq!(
            from.measure(&to).as_millis(),
            to.millis() - from.millis()
        );
        assert_eq!(from.measure(&from), Delta::default());
    }

    // -----------------------
    // Round-trips
    // -----------------------

    #[test]
    fn render_then_parse_recovers_covered_fields() {
        let layouts = ["YYYY-MM-DD HH:mm:ss", "YYYY-MM-DD HH:mm:ss.z"];
        let instants = [0, 1_557_915_630_123, -1];
        for layout in layouts {
            for millis in instants {
                let x = Moment::of(millis);
                let back = Moment::parse_at(&x.format(layout), layout, &Moment::of(0))
                    .expect("rendered text should parse");
                let truncated = if layout.ends_with(".z") {
                    x.clone()
                } else {
                    x.start_of(Field::Second)
                };
                assert_eq!(back, truncated, "layout {layout}, millis {millis}");
            }
        }
    }

    // -----------------------
    // Identity
    // -----------------------

    #[test]
    fn identity_ignores_the_bound_layout() {
        let day = at("2019-05-15 10:20:30");
        let restyled = day.clone().with_layout("DD/MM/YYYY");
        assert_eq!(day, restyled);
        assert!(day < day.shift(delta(Field::Second, 1)));

        let mut seen = HashSet::new();
        seen.insert(day.clone());
        seen.insert(restyled);
        assert_eq!(seen.len(), 1);
    }
}
