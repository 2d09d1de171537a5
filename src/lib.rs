//! # Tempo (moment-style date/time values)
//!
//! This crate wraps a millisecond instant together with a **layout**
//! (a format template) and provides token-driven formatting and
//! parsing, field arithmetic, boundary computation and
//! granularity-aware comparison. **Every operation returns a new
//! value**; no instance is mutated after construction, so values are
//! freely shareable across threads.
//!
//! Layout tokens (any other character is literal):
//! 1. **Year**: `YYYY` (four digits)
//! 2. **Month**: `MM` / `M` (1-12)
//! 3. **Day**: `DD` / `D`
//! 4. **Hour**: `HH` / `H` (0-23)
//! 5. **Minute**: `mm` / `m`
//! 6. **Second**: `ss` / `s`
//! 7. **Millisecond**: `zz` / `z` (unpadded)
//!
//! Additional rules:
//! - **Token forms are equivalent**: the single- and double-letter
//!   forms of a field behave identically. Month through second render
//!   two-digit padded either way; parsing accepts one or two digits
//!   for both forms.
//! - **No escaping**: literal text that happens to form a token is
//!   substituted. Keep layouts and prose apart.
//! - **Parsing is anchored**: the whole input must match the layout.
//! - **Absent fields default to the anchor**: the current instant for
//!   [`Moment::parse`], an explicit one for [`Moment::parse_at`].
//! - **Out-of-range field values normalise** through the calendar
//!   (month 13 rolls into the next year, day 0 lands on the last day
//!   of the previous month); they are never an error.
//! - **No zone model**: instants live on a naive local timeline.
//!   Zones, locales and non-Gregorian calendars are out of scope.
//!
//! ## Output
//! Parsing returns a strongly typed [`Moment`]. Failures are
//! categorised in [`ErrorKind`] with context. `Display` renders the
//! bound layout.
//!
//! ## Example
//! ```rust
//! use tempo::{Delta, Field, Moment};
//!
//! let day = Moment::parse("2019-05-15 10:20:30", tempo::DEFAULT_LAYOUT).expect("valid text");
//! assert_eq!(day.format("YYYY/MM/DD"), "2019/05/15");
//! assert_eq!(day.start_of(Field::Month).to_string(), "2019-05-01 00:00:00");
//! assert_eq!(day.end_of(Field::Hour).to_string(), "2019-05-15 10:59:59");
//! let next_year = day.shift(Delta { year: 1, ..Delta::default() });
//! assert_eq!(next_year.to_string(), "2020-05-15 10:20:30");
//! assert!(day.is_before("2019-05-15 10:20:31", Field::Second).expect("valid operand"));
//! ```

mod delta;
mod error;
mod field;
mod instant;
mod layout;
mod moment;

pub use delta::{ChangeSet, Delta};
pub use error::{Error, ErrorKind, Result};
pub use field::Field;
pub use layout::DEFAULT_LAYOUT;
pub use moment::{AsMoment, Moment};
