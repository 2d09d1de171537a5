//! Calendar fields and the token table driving both the formatter
//! and the parser.

use std::str::FromStr;

use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::error::{Error, ErrorKind};
use crate::instant::FieldSet;

/// One calendar component, coarsest first. The derived ordering is
/// the significance order used to sequence cascading operations:
/// capture application, start-of resets, change merging.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
    Millisecond,
}

impl Field {
    /// Every field, in significance order.
    pub const ALL: [Field; 7] = [
        Field::Year,
        Field::Month,
        Field::Day,
        Field::Hour,
        Field::Minute,
        Field::Second,
        Field::Millisecond,
    ];
}

impl FromStr for Field {
    type Err = Error;

    /// Accepts the moment-style key vocabulary, case-insensitively:
    /// `year`, `month`, `day` (or `date`), `hour`, `minute`,
    /// `second`, `millisecond`, each also in plural form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.to_ascii_lowercase();
        let field = match key.as_str() {
            "year" | "years" => Field::Year,
            "month" | "months" => Field::Month,
            "day" | "days" | "date" => Field::Day,
            "hour" | "hours" => Field::Hour,
            "minute" | "minutes" => Field::Minute,
            "second" | "seconds" => Field::Second,
            "millisecond" | "milliseconds" => Field::Millisecond,
            _ => return Err(Error::new(ErrorKind::UnknownField, s)),
        };
        Ok(field)
    }
}

/// How a token in a layout maps to a field.
#[derive(Clone, Copy, Debug)]
enum TokenPattern {
    /// The token must equal the text exactly.
    Exact(&'static str),
    /// One or two repetitions of the letter.
    Repeat(char),
}

impl TokenPattern {
    fn matches(self, token: &str) -> bool {
        match self {
            TokenPattern::Exact(text) => token == text,
            TokenPattern::Repeat(letter) => {
                (1..=2).contains(&token.len()) && token.chars().all(|c| c == letter)
            }
        }
    }
}

/// Token table entry: recognition, capture, rendering and
/// application rules for one field.
pub(crate) struct FieldSpec {
    pub field: Field,
    pattern: TokenPattern,
    /// Fragment used for this field's capture group in a parse
    /// pattern.
    pub capture: &'static str,
    /// Floor a coarser field's start-of resets this one to.
    pub min_value: i64,
    /// Two-digit zero padding on render.
    padded: bool,
    extract: fn(NaiveDateTime) -> i64,
    pub apply: fn(i64, &mut FieldSet),
}

impl FieldSpec {
    /// Renders the field's value for an instant, padded per the
    /// table.
    pub fn render(&self, dt: NaiveDateTime) -> String {
        let value = (self.extract)(dt);
        if self.padded && (0..10).contains(&value) {
            format!("0{value}")
        } else {
            value.to_string()
        }
    }
}

/// The seven fields, coarsest first. Table order matches the
/// [`Field`] discriminants.
static FIELDS: [FieldSpec; 7] = [
    FieldSpec {
        field: Field::Year,
        pattern: TokenPattern::Exact("YYYY"),
        capture: r"\d{4}",
        min_value: 0,
        padded: false,
        extract: |dt| i64::from(dt.year()),
        apply: |value, fields| fields.year = value,
    },
    FieldSpec {
        field: Field::Month,
        pattern: TokenPattern::Repeat('M'),
        capture: r"\d{1,2}",
        min_value: 1,
        padded: true,
        extract: |dt| i64::from(dt.month()),
        apply: |value, fields| fields.month = value,
    },
    FieldSpec {
        field: Field::Day,
        pattern: TokenPattern::Repeat('D'),
        capture: r"\d{1,2}",
        min_value: 1,
        padded: true,
        extract: |dt| i64::from(dt.day()),
        apply: |value, fields| fields.day = value,
    },
    FieldSpec {
        field: Field::Hour,
        pattern: TokenPattern::Repeat('H'),
        capture: r"\d{1,2}",
        min_value: 0,
        padded: true,
        extract: |dt| i64::from(dt.hour()),
        apply: |value, fields| fields.hour = value,
    },
    FieldSpec {
        field: Field::Minute,
        pattern: TokenPattern::Repeat('m'),
        capture: r"\d{1,2}",
        min_value: 0,
        padded: true,
        extract: |dt| i64::from(dt.minute()),
        apply: |value, fields| fields.minute = value,
    },
    FieldSpec {
        field: Field::Second,
        pattern: TokenPattern::Repeat('s'),
        capture: r"\d{1,2}",
        min_value: 0,
        padded: true,
        extract: |dt| i64::from(dt.second()),
        apply: |value, fields| fields.second = value,
    },
    FieldSpec {
        field: Field::Millisecond,
        pattern: TokenPattern::Repeat('z'),
        capture: r"\d{1,3}",
        min_value: 0,
        padded: false,
        extract: |dt| i64::from(dt.nanosecond()) / 1_000_000,
        apply: |value, fields| fields.millisecond = value,
    },
];

/// Finds the table entry recognising a scanned token. `YY` is
/// produced by the scanner but deliberately matches no entry.
pub(crate) fn match_token(token: &str) -> Option<&'static FieldSpec> {
    FIELDS.iter().find(|spec| spec.pattern.matches(token))
}

/// Table entry for a field.
pub(crate) fn spec_of(field: Field) -> &'static FieldSpec {
    &FIELDS[field as usize]
}
