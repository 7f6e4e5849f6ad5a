//! Line parser for JAWS dictionary (.jdf) records.
//!
//! A record line opens and closes with a one-character delimiter of the
//! source format's choosing, and that same character separates all seven
//! fields in between:
//!
//! ```text
//! .in-word.out-word.language.synthesizer.voice.output-language.case.
//! ```
//!
//! The delimiter is not fixed; it is whatever character the line starts
//! with. Rust's `regex` crate has no backreferences, so instead of one
//! pattern the parser reads the first character and tokenizes the rest of
//! the line against it.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ParseError;
use crate::rule::Rule;

/// Inline sound markup JAWS allows inside replacement text, e.g.
/// `<sound freq='500' dur='50'/>`. Stripped before the rule is surfaced.
static SOUND_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<sound\b[^<>]*/>").expect("sound tag pattern is valid"));

/// Number of delimiter-separated fields in a record.
const FIELD_COUNT: usize = 7;

/// Parse one line of a JAWS dictionary file into a [`Rule`].
///
/// `None` signals that the caller had no line to offer at all and fails
/// with [`ParseError::MissingInput`]; that is a contract violation, kept
/// distinct from a line that merely does not parse.
///
/// The function is pure: no state is kept between calls, and parsing the
/// same line twice yields field-for-field identical rules.
pub fn parse_line(line: Option<&str>) -> Result<Rule, ParseError> {
    let line = line.ok_or(ParseError::MissingInput)?;
    let fields = tokenize(line)?;
    process(&fields)
}

/// Split `line` into its seven raw fields.
///
/// The grammar is anchored at both ends: the line must open and close with
/// the delimiter and contain exactly seven fields between. A field that
/// happens to contain the delimiter character shifts every later field and
/// breaks the count, so such lines are rejected structurally rather than
/// by scanning field contents.
fn tokenize(line: &str) -> Result<[&str; FIELD_COUNT], ParseError> {
    let delimiter = line.chars().next().ok_or(ParseError::Malformed)?;
    let parts: Vec<&str> = line.split(delimiter).collect();
    // Leading and trailing delimiters contribute one empty part each.
    if parts.len() != FIELD_COUNT + 2 || !parts[0].is_empty() || !parts[FIELD_COUNT + 1].is_empty()
    {
        return Err(ParseError::Malformed);
    }
    let fields: [&str; FIELD_COUNT] = parts[1..=FIELD_COUNT]
        .try_into()
        .map_err(|_| ParseError::Malformed)?;

    let [in_word, out_word, language, _synth, _voice, out_language, case] = fields;
    if in_word.is_empty() || out_word.is_empty() {
        return Err(ParseError::Malformed);
    }
    if !is_unspecified(language) && !language.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return Err(ParseError::Malformed);
    }
    // Output language is shape-checked here and never surfaced.
    if out_language != "*"
        && (out_language.is_empty() || !out_language.bytes().all(|b| b.is_ascii_digit()))
    {
        return Err(ParseError::Malformed);
    }
    if case != "0" && case != "1" {
        return Err(ParseError::Malformed);
    }
    Ok(fields)
}

/// Normalize the raw fields of a grammar-matched line into a [`Rule`].
fn process(fields: &[&str; FIELD_COUNT]) -> Result<Rule, ParseError> {
    let [in_word, out_word, language, synthesizer, voice, _out_language, case] = *fields;

    let out_word = SOUND_TAG.replace_all(out_word, "").into_owned();
    if out_word.is_empty() {
        return Err(ParseError::EmptyReplacement);
    }

    Ok(Rule {
        in_word: in_word.to_string(),
        out_word,
        language: normalize(language),
        synthesizer: normalize(synthesizer),
        voice: normalize(voice),
        case_sensitive: case == "1",
    })
}

/// Empty and the `*` wildcard both mean "unspecified".
fn is_unspecified(field: &str) -> bool {
    field.is_empty() || field == "*"
}

fn normalize(field: &str) -> Option<String> {
    if is_unspecified(field) {
        None
    } else {
        Some(field.to_string())
    }
}
