//! Layout engine: token scanning, rendering, and parse-pattern
//! construction.
//!
//! A layout is plain text with embedded field tokens. There is no
//! escaping mechanism: literal text that happens to form a token is
//! treated as that token. Rendering substitutes values in a single
//! pass; parsing turns the same layout into an anchored regular
//! expression with one capture group per recognised token.

use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::error::{Error, ErrorKind, Result};
use crate::field::{match_token, FieldSpec};
use crate::instant::FieldSet;

/// Layout bound to values that do not choose their own.
pub const DEFAULT_LAYOUT: &str = "YYYY-MM-DD HH:mm:ss";

// Global token scanner. Alternation order puts the four-digit year
// first so `YYYY` never scans as two `YY`s; `YY` itself scans but
// matches no table entry.
static TOKEN_SCANNER: Lazy<Regex> =
    Lazy::new(|| Regex::new("YYYY|YY|MM?|DD?|HH?|mm?|ss?|zz?").expect("scanner pattern is valid"));

/// Renders an instant through a layout. Recognised tokens substitute
/// the field's value, unrecognised scans substitute nothing, all
/// other text passes through verbatim.
pub(crate) fn render_layout(dt: NaiveDateTime, layout: &str) -> String {
    TOKEN_SCANNER
        .replace_all(layout, |caps: &Captures<'_>| match match_token(&caps[0]) {
            Some(spec) => spec.render(dt),
            None => String::new(),
        })
        .into_owned()
}

/// Builds the anchored parse pattern for a layout together with the
/// specs its capture groups feed, in template order. Literal layout
/// text lands in the pattern verbatim, so text that does not compile
/// as a pattern, or that introduces capture groups of its own,
/// surfaces as [`ErrorKind::BadLayout`].
fn compile_layout(layout: &str) -> Result<(Regex, Vec<&'static FieldSpec>)> {
    let mut specs = Vec::new();
    let body = TOKEN_SCANNER.replace_all(layout, |caps: &Captures<'_>| {
        match match_token(&caps[0]) {
            Some(spec) => {
                specs.push(spec);
                format!("({})", spec.capture)
            }
            None => String::new(),
        }
    });
    let re = Regex::new(&format!("^{body}$"))
        .map_err(|_| Error::new(ErrorKind::BadLayout, layout))?;
    // Literal parentheses would register capture groups of their own
    // and shift every later group off its spec.
    if re.captures_len() != specs.len() + 1 {
        return Err(Error::new(ErrorKind::BadLayout, layout));
    }
    Ok((re, specs))
}

/// Parses `text` against `layout`. Fields the layout does not cover
/// keep the anchor's values. Captured fields apply in significance
/// order regardless of their order in the layout, then the record
/// resolves through calendar normalisation. Literal text with regex
/// structure can leave a token's group out of an otherwise successful
/// match; that surfaces as [`ErrorKind::NoMatch`].
pub(crate) fn parse_layout(
    text: &str,
    layout: &str,
    anchor: NaiveDateTime,
) -> Result<NaiveDateTime> {
    let (re, specs) = compile_layout(layout)?;
    let no_match = || Error::new(ErrorKind::NoMatch, format!("{text:?} against {layout:?}"));
    let caps = re.captures(text).ok_or_else(no_match)?;

    let mut pairs: Vec<(&'static FieldSpec, i64)> = Vec::with_capacity(specs.len());
    for (index, &spec) in specs.iter().enumerate() {
        // A literal `|` or a trailing `?` in the layout can detach a
        // token's group from the match.
        let group = caps.get(index + 1).ok_or_else(no_match)?;
        let value = group.as_str().parse().map_err(|_| no_match())?;
        pairs.push((spec, value));
    }
    pairs.sort_by_key(|(spec, _)| spec.field);

    let mut fields = FieldSet::of(anchor);
    for (spec, value) in pairs {
        (spec.apply)(value, &mut fields);
    }
    Ok(fields.resolve())
}
