//! Boundary splitting and sentence assembly
//!
//! Splits a fully shielded line after each live terminal mark, absorbing any
//! directly attached closing quotes or brackets into the segment they end.
//! The builder then decodes sentinels, trims and filters the candidates, and
//! applies one refinement: a decoded candidate containing
//! `[terminal][closing quote] [uppercase]` reliably holds two sentences even
//! though both sat inside one shielded span, so it is split at that space.

use std::sync::LazyLock;

use fancy_regex::Regex as FancyRegex;
use regex::Regex;

use crate::language::LanguageProfile;
use crate::sentinel;

/// Closing delimiters glued onto the segment their terminal mark ends.
const CLOSERS: &[char] = &['\'', '"', '”', '’', '“', '」', '』', ')', '）', ']', '»'];

// Colon inside a digital time is never a boundary (Arabic/Persian profiles
// list ':' as a terminal).
static DIGITAL_TIME: LazyLock<FancyRegex> =
    LazyLock::new(|| FancyRegex::new(r"(?<=\d):(?=\d)").expect("valid pattern"));

// An Arabic comma followed by another comma-terminated item chains a list.
static COMMA_CHAIN: LazyLock<FancyRegex> =
    LazyLock::new(|| FancyRegex::new(r"،(?=\s\S+،)").expect("valid pattern"));

// Two sentences folded into one shielded quoted span.
static QUOTE_END_REFINEMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[!?.]["'“](\s)[A-Z]"#).expect("valid pattern"));

static UNDERSCORE_FILL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_{3,}").expect("valid pattern"));

static WIDE_SPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{3,}").expect("valid pattern"));

/// Language-specific shielding applied just before splitting.
pub(crate) fn pre_split_shield(line: &str, profile: &LanguageProfile) -> String {
    let mut line = std::borrow::Cow::Borrowed(line);
    if profile.digital_time_colon {
        line = std::borrow::Cow::Owned(
            DIGITAL_TIME.replace_all(&line, sentinel::TIME_COLON.to_string()).into_owned(),
        );
    }
    if profile.serial_comma {
        line = std::borrow::Cow::Owned(
            COMMA_CHAIN.replace_all(&line, sentinel::SERIAL_COMMA.to_string()).into_owned(),
        );
    }
    line.into_owned()
}

/// Split `line` into candidate segments, appending them to `out`.
pub(crate) fn split_into(line: &str, profile: &LanguageProfile, out: &mut Vec<String>) {
    let is_boundary = |c: char| {
        profile.is_terminal(c)
            || (profile.compound_marks
                && matches!(
                    c,
                    sentinel::INTERROBANG
                        | sentinel::REVERSE_INTERROBANG
                        | sentinel::DOUBLE_QUESTION
                        | sentinel::DOUBLE_EXCLAMATION
                        | sentinel::EMBEDDED_NEWLINE
                ))
    };

    let chars: Vec<(usize, char)> = line.char_indices().collect();
    let mut start = 0usize;
    let mut i = 0usize;
    while i < chars.len() {
        let (pos, c) = chars[i];
        if is_boundary(c) {
            let mut end = pos + c.len_utf8();
            let mut j = i + 1;
            while j < chars.len() && CLOSERS.contains(&chars[j].1) {
                end = chars[j].0 + chars[j].1.len_utf8();
                j += 1;
            }
            out.push(line[start..end].to_string());
            start = end;
            i = j;
        } else {
            i += 1;
        }
    }
    if start < line.len() {
        out.push(line[start..].to_string());
    }
}

/// Decode, trim and filter candidates into the final sentence sequence.
pub(crate) fn build(candidates: Vec<String>) -> Vec<String> {
    let mut sentences = Vec::new();
    for raw in candidates {
        let decoded = sentinel::decode(&raw);
        if UNDERSCORE_FILL.replace_all(&decoded, "").trim().is_empty() {
            continue;
        }
        let collapsed = WIDE_SPACE_RUN.replace_all(&decoded, " ");
        let flat = collapsed.replace('\n', "");
        for part in refine(flat.trim()) {
            let part = part.trim();
            // stray fragments (bare list markers, lone quotes) are not sentences
            if part.chars().count() >= 2 {
                sentences.push(part.to_string());
            }
        }
    }
    sentences
}

/// Split a decoded sentence at `[terminal][closing quote] [uppercase]` seams.
fn refine(sentence: &str) -> Vec<&str> {
    let mut seams = Vec::new();
    for caps in QUOTE_END_REFINEMENT.captures_iter(sentence) {
        let space = caps.get(1).expect("group 1 always participates");
        seams.push((space.start(), space.end()));
    }
    if seams.is_empty() {
        return vec![sentence];
    }
    let mut parts = Vec::with_capacity(seams.len() + 1);
    let mut start = 0usize;
    for (seam_start, seam_end) in seams {
        parts.push(&sentence[start..seam_start]);
        start = seam_end;
    }
    parts.push(&sentence[start..]);
    parts
}
