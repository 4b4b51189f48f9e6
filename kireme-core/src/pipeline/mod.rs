//! The staged rewrite pipeline
//!
//! A fixed total order of deterministic passes over an immutable-per-call
//! buffer: ellipsis protection, abbreviation/numeric disambiguation, then per
//! physical line the inline-period shield, span shield and compound
//! normalizer, and finally the boundary splitter. Each pass consumes the
//! previous pass's output; later passes never re-examine characters an
//! earlier pass shielded. There is no backtracking.

mod abbreviation;
mod compound;
mod ellipsis;
mod spans;
mod splitter;

pub(crate) use abbreviation::AbbrevRules;

use std::sync::LazyLock;

use regex::Regex;

use crate::language::LanguageProfile;
use crate::sentinel;

// Periods flanked by word characters (emails, bare decimals) never split.
static INLINE_PERIOD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w)\.(\w)").expect("valid pattern"));

/// Run the full pipeline over `text` and return the sentence sequence.
///
/// Physical lines are delimited by `\r`, the list-guard line-break marker;
/// embedded `\n` characters are carried through as sentinels.
pub(crate) fn run(text: &str, profile: &LanguageProfile, abbrev: &AbbrevRules) -> Vec<String> {
    let buf = ellipsis::shield(text);
    let buf = abbrev.shield(&buf);

    let mut candidates = Vec::new();
    for line in buf.split('\r') {
        if line.is_empty() {
            continue;
        }
        // Inline periods are shielded before newlines become sentinels; a
        // period at end of line must stay a live boundary.
        let mut line = INLINE_PERIOD.replace_all(line, "${1}∮${2}").into_owned();
        line = line.replace('\n', &sentinel::EMBEDDED_NEWLINE.to_string());

        if !profile.has_terminal(&line) {
            candidates.push(line);
            continue;
        }

        line = spans::shield(&line, profile);
        if profile.compound_marks {
            line = compound::normalize(&line);
        }
        line = splitter::pre_split_shield(&line, profile);
        splitter::split_into(&line, profile, &mut candidates);
    }

    splitter::build(candidates)
}
