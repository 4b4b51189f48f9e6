//! Quote, bracket and exception-token span shielding
//!
//! Operates on one physical line. Terminal punctuation inside a matched
//! delimiter pair is not a boundary, so each mark in a span is swapped for
//! its sentinel. Bracketing kinds run in a fixed precedence order; a span
//! already shielded by an earlier kind cannot re-open because its interior
//! marks are sentinels by then. An unmatched delimiter simply produces no
//! span, leaving its interior unshielded; the result is a tolerated
//! over-split.
//!
//! Exception tokens (proper nouns carrying a literal "!") are shielded first
//! and wherever they occur, quoted or not.

use std::sync::LazyLock;

use fancy_regex::Regex as FancyRegex;
use regex::Regex;

use crate::language::LanguageProfile;
use crate::sentinel;

static CURLY_DOUBLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"”(?:[^”\\]|\\.)*”"#).expect("valid pattern"));
static CURLY_PAIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"“(?:[^”\\]|\\.)*”"#).expect("valid pattern"));
static GUILLEMET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"«(?:[^»\\]|\\.)*»"#).expect("valid pattern"));
static DOUBLE_QUOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""(?:[^"\\]|\\.)*""#).expect("valid pattern"));
static LOW_QUOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"„(?:[^“\\]|\\.)*“"#).expect("valid pattern"));
static LOW_COMMA_QUOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#",,(?:[^“\\]|\\.)*“"#).expect("valid pattern"));
// Preceding whitespace keeps apostrophes from opening a span.
static SINGLE_QUOTE: LazyLock<FancyRegex> =
    LazyLock::new(|| FancyRegex::new(r"(?<=\s)'(?:[^']|'[a-zA-Z])*'").expect("valid pattern"));
static CORNER_QUOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"「(?:[^「」\\]|\\.)*」").expect("valid pattern"));
static PARENS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((?:[^()\\]|\\.)*\)").expect("valid pattern"));
static WIDE_PARENS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"（(?:[^（）\\]|\\.)*）").expect("valid pattern"));

/// Shield terminal marks inside every protected span of `line`.
pub(crate) fn shield(line: &str, profile: &LanguageProfile) -> String {
    let mut line = line.to_string();

    for token in &profile.exclamation_tokens {
        if line.contains(token.as_str()) {
            line = line.replace(token.as_str(), &shield_chars(token));
        }
    }

    line = shield_spans(&line, &CURLY_DOUBLE);
    line = shield_spans(&line, &CURLY_PAIR);
    line = shield_spans(&line, &GUILLEMET);
    if profile.low_quotes {
        line = shield_spans(&line, &LOW_QUOTE);
        line = shield_spans(&line, &LOW_COMMA_QUOTE);
    } else {
        line = shield_spans(&line, &DOUBLE_QUOTE);
    }
    line = shield_fancy_spans(&line, &SINGLE_QUOTE);
    line = shield_spans(&line, &CORNER_QUOTE);
    line = shield_spans(&line, &PARENS);
    shield_spans(&line, &WIDE_PARENS)
}

fn shield_spans(line: &str, pattern: &Regex) -> String {
    pattern
        .replace_all(line, |caps: &regex::Captures<'_>| shield_chars(&caps[0]))
        .into_owned()
}

fn shield_fancy_spans(line: &str, pattern: &FancyRegex) -> String {
    pattern
        .replace_all(line, |caps: &fancy_regex::Captures<'_>| shield_chars(&caps[0]))
        .into_owned()
}

fn shield_chars(span: &str) -> String {
    span.chars()
        .map(|c| sentinel::shield_terminal(c).unwrap_or(c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::LanguageProfile;
    use crate::sentinel::decode;

    fn en(line: &str) -> String {
        shield(line, &LanguageProfile::get("en"))
    }

    #[test]
    fn double_quoted_span_is_shielded() {
        let out = en(r#"She said, "Go home. Now." and left."#);
        assert!(out.contains("home∯ Now∯"), "got: {out}");
        assert!(out.ends_with("and left."));
        assert_eq!(decode(&out), r#"She said, "Go home. Now." and left."#);
    }

    #[test]
    fn apostrophes_do_not_open_single_quote_spans() {
        let out = en("It isn't Tom's fault. He tried.");
        assert_eq!(out, "It isn't Tom's fault. He tried.");
    }

    #[test]
    fn single_quote_span_after_whitespace_is_shielded() {
        let out = en("He whispered 'Stop. Look.' and ran.");
        assert!(out.contains("Stop∯ Look∯"), "got: {out}");
    }

    #[test]
    fn parenthesized_marks_are_shielded() {
        let out = en("The result (finally! we thought) came in.");
        assert!(out.contains("finally"));
        assert!(!out.contains("finally!"));
    }

    #[test]
    fn exclamation_tokens_keep_their_literal_mark() {
        let out = en("They bought Yahoo! last year.");
        assert!(!out.contains("Yahoo!"));
        assert_eq!(decode(&out), "They bought Yahoo! last year.");
    }

    #[test]
    fn low_quotes_for_german_profile() {
        let out = shield("Sie sagte: „Geh heim. Jetzt.“ und ging.", &LanguageProfile::get("de"));
        assert!(out.contains("heim∯ Jetzt∯"), "got: {out}");
    }

    #[test]
    fn unmatched_quote_shields_nothing() {
        let line = r#"An "unmatched quote. It stays"#;
        // the span scan finds no pair, the period stays live
        assert_eq!(en(line), line);
    }
}
