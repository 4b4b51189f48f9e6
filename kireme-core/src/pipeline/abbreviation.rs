//! Abbreviation and numeric disambiguation
//!
//! Shields every period that is provably not a sentence boundary: initials,
//! lexicon abbreviations, decimals, list markers, multi-period acronyms,
//! time-of-day markers and degree coordinates. Two fixups run the other way
//! and restore a shielded period to a literal boundary: a meridiem marker
//! followed by an uppercase word, and a shielded acronym followed by a
//! configured sentence-starter word.
//!
//! The rules are strictly ordered; each rewrites the buffer produced by the
//! previous one. Lexicon rules are compiled once per [`AbbrevRules`] so a
//! `Segmenter` pays the regex-construction cost a single time.

use std::sync::LazyLock;

use fancy_regex::Regex as FancyRegex;
use regex::Regex;

use crate::language::{AbbrevCategory, AbbrevEntry, AbbrevPolicy, LanguageProfile};

// Possessive abbreviation periods: "JFK Jr.'s" never ends a sentence.
static POSSESSIVE: LazyLock<FancyRegex> =
    LazyLock::new(|| FancyRegex::new(r"\.(?='s\s|'s$)").expect("valid pattern"));

// A lone letter before a period and whitespace is an initial in a name.
static INITIAL_UPPER: LazyLock<FancyRegex> =
    LazyLock::new(|| FancyRegex::new(r"(?m)(^|\s)([A-Z])\.(?=\s)").expect("valid pattern"));
static INITIAL_LOWER: LazyLock<FancyRegex> =
    LazyLock::new(|| FancyRegex::new(r"(?m)(^|\s)([a-z])\.(?=\s)").expect("valid pattern"));

// Decimal and digit-adjacent periods.
static NUMBER: LazyLock<FancyRegex> =
    LazyLock::new(|| FancyRegex::new(r"(?<=\d)\.(?=\S)|\.(?=\d)").expect("valid pattern"));

// 1–2 digit outline markers at line start ("1. ", "12.)").
static LIST_MARKER: LazyLock<FancyRegex> =
    LazyLock::new(|| FancyRegex::new(r"(?m)(^|\r)(\d{1,2})\.(?=\s\S|\))").expect("valid pattern"));

// Whitespace- or hyphen-preceded ordinals ("am 5. Januar").
static ORDINAL: LazyLock<FancyRegex> = LazyLock::new(|| {
    FancyRegex::new(r"([\s-])([1-9][0-9]|[0-9])\.(?=\s)").expect("valid pattern")
});

// Multi-period abbreviations ("U.S.A.", "i.e.", "J.C.") shield as a unit.
static MULTI_PERIOD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[a-zA-Z](?:\.[a-zA-Z])+\.").expect("valid pattern"));

// A meridiem marker directly before an uppercase word is a genuine end.
static MERIDIEM_BOUNDARY: LazyLock<FancyRegex> = LazyLock::new(|| {
    FancyRegex::new(r"(?:(?<=a∯m)|(?<=A∯M)|(?<=p∯m)|(?<=P∯M))∯(?=\s[A-Z])").expect("valid pattern")
});

// Degree markers in geo coordinates: "38°. 47" is one coordinate, not two sentences.
static GEO_DEGREE: LazyLock<FancyRegex> =
    LazyLock::new(|| FancyRegex::new(r"(?<=[a-zA-Z]°)\.(?=\s*\d)").expect("valid pattern"));

/// Lexicon and fixup rules compiled for one language profile.
pub(crate) struct AbbrevRules {
    entries: Vec<CompiledEntry>,
    acronym_boundary: Option<FancyRegex>,
    lowercase_initials: bool,
    numeric_ordinals: bool,
}

struct CompiledEntry {
    /// Lowercase token for the cheap containment pre-check.
    needle: String,
    shield: FancyRegex,
}

impl AbbrevRules {
    /// Compile the per-entry shield rules for `entries` under `profile`'s policy.
    pub(crate) fn new(profile: &LanguageProfile, entries: &[AbbrevEntry]) -> Self {
        let compiled = entries
            .iter()
            .map(|entry| CompiledEntry {
                needle: entry.token.to_lowercase(),
                shield: FancyRegex::new(&entry_pattern(entry, profile.abbreviation_policy))
                    .expect("escaped token yields a valid pattern"),
            })
            .collect();

        Self {
            entries: compiled,
            acronym_boundary: acronym_boundary_pattern(&profile.sentence_starters),
            lowercase_initials: profile.lowercase_initials,
            numeric_ordinals: profile.numeric_ordinals,
        }
    }

    /// Run rules 1–8 over `text`, in order.
    pub(crate) fn shield(&self, text: &str) -> String {
        let mut buf = POSSESSIVE.replace_all(text, "∯").into_owned();

        buf = INITIAL_UPPER.replace_all(&buf, "${1}${2}∯").into_owned();
        if self.lowercase_initials {
            buf = INITIAL_LOWER.replace_all(&buf, "${1}${2}∯").into_owned();
        }

        let haystack = buf.to_lowercase();
        for entry in &self.entries {
            if !haystack.contains(&entry.needle) {
                continue;
            }
            buf = entry.shield.replace_all(&buf, "${1}${2}∯").into_owned();
        }

        buf = NUMBER.replace_all(&buf, "∯").into_owned();
        buf = LIST_MARKER.replace_all(&buf, "${1}${2}∯").into_owned();
        if self.numeric_ordinals {
            buf = ORDINAL.replace_all(&buf, "${1}${2}∯").into_owned();
        }

        buf = shield_multi_period(&buf);
        buf = MERIDIEM_BOUNDARY.replace_all(&buf, ".").into_owned();

        if let Some(fixup) = &self.acronym_boundary {
            buf = fixup.replace_all(&buf, "${1}.").into_owned();
        }

        GEO_DEGREE.replace_all(&buf, "∯").into_owned()
    }
}

/// Build the shield pattern for one lexicon entry.
///
/// Group 1 captures the line-start/whitespace context, group 2 the token as
/// written in the text; the trailing period becomes the sentinel. Trailing
/// context is lookahead only, so adjacent occurrences never overlap.
fn entry_pattern(entry: &AbbrevEntry, policy: AbbrevPolicy) -> String {
    let token = fancy_regex::escape(&entry.token);
    let prefix = format!(r"(?m)(^|\s)((?i:{token}))");
    match policy {
        AbbrevPolicy::BeforeWhitespace => format!(r"{prefix}\.(?=\s)"),
        AbbrevPolicy::Always => format!(r"{prefix}\."),
        AbbrevPolicy::AfterWhitespace | AbbrevPolicy::Contextual => match entry.category {
            AbbrevCategory::TitlePrefix => format!(r"{prefix}\.(?=\s)"),
            AbbrevCategory::NumericUnit => format!(r"{prefix}\.(?=\s\d|\s+\()"),
            AbbrevCategory::Plain if policy == AbbrevPolicy::AfterWhitespace => {
                format!(r"{prefix}\.")
            }
            AbbrevCategory::Plain => {
                format!(r"{prefix}\.(?=[.:?,]|\s(?:\p{{Ll}}|I\s|I'm|I'll|\d))")
            }
        },
    }
}

/// Fixup pattern restoring a shielded acronym period before a starter word.
fn acronym_boundary_pattern(starters: &[String]) -> Option<FancyRegex> {
    if starters.is_empty() {
        return None;
    }
    let words = starters
        .iter()
        .map(|w| fancy_regex::escape(w).into_owned())
        .collect::<Vec<_>>()
        .join("|");
    let pattern = format!(r"\b(U∯S∯A|U\.S\.A|U∯S|U\.S|U∯K|U\.K|E∯U|E\.U|I)∯(?=\s(?:{words})\s)");
    Some(FancyRegex::new(&pattern).expect("escaped starters yield a valid pattern"))
}

/// Shield every period of each multi-period abbreviation occurrence.
///
/// Longer units substitute first: a unit that prefixes a longer one
/// ("U.S." in "U.S.A.") must not rewrite the longer unit's interior.
fn shield_multi_period(text: &str) -> String {
    let mut found: Vec<&str> = MULTI_PERIOD.find_iter(text).map(|m| m.as_str()).collect();
    found.sort_unstable_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    found.dedup();

    let mut buf = text.to_string();
    for unit in found {
        buf = buf.replace(unit, &unit.replace('.', "∯"));
    }
    buf
}
