//! Compound punctuation normalization
//!
//! Default-Latin-profile pass. Runs of two marks ("?!", "??", …) collapse to
//! a single sentinel standing for one boundary. A lone "?" or "!" used as
//! emphasis inside a clause (directly before a closing quote, a lowercase
//! continuation, or a comma plus lowercase continuation) is shielded rather
//! than split on.

use std::sync::LazyLock;

use fancy_regex::Regex as FancyRegex;

use crate::sentinel;

static QUESTION_BEFORE_QUOTE: LazyLock<FancyRegex> =
    LazyLock::new(|| FancyRegex::new(r#"\?(?=['"])"#).expect("valid pattern"));
static EXCLAMATION_BEFORE_QUOTE: LazyLock<FancyRegex> =
    LazyLock::new(|| FancyRegex::new(r#"!(?=['"])"#).expect("valid pattern"));
static EXCLAMATION_BEFORE_LOWER: LazyLock<FancyRegex> =
    LazyLock::new(|| FancyRegex::new(r"!(?=\s[a-z])").expect("valid pattern"));
static EXCLAMATION_BEFORE_COMMA_LOWER: LazyLock<FancyRegex> =
    LazyLock::new(|| FancyRegex::new(r"!(?=,\s[a-z])").expect("valid pattern"));

/// Collapse double marks and shield emphasis marks in `line`.
pub(crate) fn normalize(line: &str) -> String {
    let mut line = line
        .replace("?!", &sentinel::INTERROBANG.to_string())
        .replace("!?", &sentinel::REVERSE_INTERROBANG.to_string())
        .replace("??", &sentinel::DOUBLE_QUESTION.to_string())
        .replace("!!", &sentinel::DOUBLE_EXCLAMATION.to_string());

    line = QUESTION_BEFORE_QUOTE
        .replace_all(&line, sentinel::SHIELDED_QUESTION.to_string())
        .into_owned();
    line = EXCLAMATION_BEFORE_QUOTE
        .replace_all(&line, sentinel::SHIELDED_EXCLAMATION.to_string())
        .into_owned();
    line = EXCLAMATION_BEFORE_LOWER
        .replace_all(&line, sentinel::SHIELDED_EXCLAMATION.to_string())
        .into_owned();
    EXCLAMATION_BEFORE_COMMA_LOWER
        .replace_all(&line, sentinel::SHIELDED_EXCLAMATION.to_string())
        .into_owned()
}
