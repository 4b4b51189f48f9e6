//! Language punctuation profiles
//!
//! A [`LanguageProfile`] carries the terminal-punctuation inventory and the
//! behavioral toggles for one language, together with its abbreviation
//! lexicon and boundary word lists. Profiles are deserialized from TOML
//! embedded at compile time and cached in a process-wide registry; lookup by
//! an unknown code falls back to the default Latin profile with an empty
//! lexicon, degrading to plain punctuation splitting.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use serde::Deserialize;

use crate::error::{ProfileError, Result};

/// How lexicon abbreviations interact with a trailing period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AbbrevPolicy {
    /// Shield depending on the token that follows (default Latin behavior).
    #[default]
    Contextual,
    /// Shield every occurrence unconditionally (Arabic/Persian family).
    Always,
    /// Shield plain entries at string start or after whitespace (Russian family).
    AfterWhitespace,
    /// Shield every entry when followed by whitespace (German family).
    BeforeWhitespace,
}

/// Category tag of one abbreviation lexicon entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbbrevCategory {
    /// Ordinary abbreviation; boundary status depends on the following token.
    Plain,
    /// Personal/title prefix ("Dr.", "Prof."); never a boundary before whitespace.
    TitlePrefix,
    /// Unit-like abbreviation ("No.", "pp."); shielded only before a number.
    NumericUnit,
}

/// One abbreviation string with its category tag.
#[derive(Debug, Clone)]
pub struct AbbrevEntry {
    /// The abbreviation without its trailing period, lowercase.
    pub token: String,
    /// Behavioral category.
    pub category: AbbrevCategory,
}

/// Per-language terminal punctuation set and rule toggles.
#[derive(Debug, Clone)]
pub struct LanguageProfile {
    /// Two-letter language code ("en"), or "default".
    pub code: String,
    /// Display name.
    pub name: String,
    /// Characters that may end a sentence in this language, in match order.
    pub terminators: Vec<char>,
    /// Lexicon shielding policy.
    pub abbreviation_policy: AbbrevPolicy,
    /// Treat a lone lowercase letter before a period as an initial too.
    pub lowercase_initials: bool,
    /// Run the compound punctuation normalizer ("?!", "!!", emphasis marks).
    /// Also enables splitting at embedded newlines; both are default-Latin
    /// behaviors that non-Latin profiles opt out of.
    pub compound_marks: bool,
    /// Double quotes are written „…“ (or ,,…“) rather than "…".
    pub low_quotes: bool,
    /// Shield the colon inside digital times ("19:30").
    pub digital_time_colon: bool,
    /// Shield non-final Arabic serial commas.
    pub serial_comma: bool,
    /// Shield whitespace-preceded 1–2 digit ordinals ("am 5. Januar").
    pub numeric_ordinals: bool,
    /// Abbreviation lexicon entries.
    pub abbreviations: Vec<AbbrevEntry>,
    /// Words whose appearance after a shielded acronym signals a boundary.
    pub sentence_starters: Vec<String>,
    /// Tokens whose terminal-class punctuation is literal ("Yahoo!").
    pub exclamation_tokens: Vec<String>,
}

impl LanguageProfile {
    /// Parse a profile from its TOML source.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: ProfileConfig = toml::from_str(source)?;
        config.into_profile()
    }

    /// Look up the profile for a language code, falling back to the default
    /// Latin profile for unknown codes.
    pub fn get(code: &str) -> Arc<LanguageProfile> {
        let registry = registry();
        if let Some(profile) = registry.get(code) {
            return profile.clone();
        }
        log::debug!("no profile for language '{code}', using default");
        registry["default"].clone()
    }

    /// Whether `ch` can terminate a sentence in this language.
    pub fn is_terminal(&self, ch: char) -> bool {
        self.terminators.contains(&ch)
    }

    /// Whether `text` contains any terminal mark of this language.
    pub fn has_terminal(&self, text: &str) -> bool {
        text.chars().any(|c| self.is_terminal(c))
    }
}

// ---------------------------------------------------------------------------
// TOML schema

#[derive(Debug, Deserialize)]
struct ProfileConfig {
    metadata: Metadata,
    terminators: Terminators,
    #[serde(default)]
    behavior: Behavior,
    #[serde(default)]
    abbreviations: Abbreviations,
    #[serde(default)]
    boundary: Boundary,
}

#[derive(Debug, Deserialize)]
struct Metadata {
    code: String,
    name: String,
}

#[derive(Debug, Deserialize)]
struct Terminators {
    chars: Vec<char>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
struct Behavior {
    abbreviation_policy: AbbrevPolicy,
    lowercase_initials: bool,
    compound_marks: bool,
    low_quotes: bool,
    digital_time_colon: bool,
    serial_comma: bool,
    numeric_ordinals: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Abbreviations {
    plain: Vec<String>,
    title_prefix: Vec<String>,
    numeric_unit: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Boundary {
    sentence_starters: Vec<String>,
    exclamation_tokens: Vec<String>,
}

impl ProfileConfig {
    fn into_profile(self) -> Result<LanguageProfile> {
        if self.terminators.chars.is_empty() {
            return Err(ProfileError::Invalid {
                code: self.metadata.code,
                reason: "no terminator characters defined".into(),
            });
        }

        let mut abbreviations = Vec::new();
        let tagged = [
            (self.abbreviations.title_prefix, AbbrevCategory::TitlePrefix),
            (self.abbreviations.numeric_unit, AbbrevCategory::NumericUnit),
            (self.abbreviations.plain, AbbrevCategory::Plain),
        ];
        for (tokens, category) in tagged {
            for token in tokens {
                abbreviations.push(AbbrevEntry {
                    token: token.to_lowercase(),
                    category,
                });
            }
        }

        Ok(LanguageProfile {
            code: self.metadata.code,
            name: self.metadata.name,
            terminators: self.terminators.chars,
            abbreviation_policy: self.behavior.abbreviation_policy,
            lowercase_initials: self.behavior.lowercase_initials,
            compound_marks: self.behavior.compound_marks,
            low_quotes: self.behavior.low_quotes,
            digital_time_colon: self.behavior.digital_time_colon,
            serial_comma: self.behavior.serial_comma,
            numeric_ordinals: self.behavior.numeric_ordinals,
            abbreviations,
            sentence_starters: self.boundary.sentence_starters,
            exclamation_tokens: self.boundary.exclamation_tokens,
        })
    }
}

// ---------------------------------------------------------------------------
// Embedded registry

macro_rules! embedded {
    ($($code:literal => $path:literal),* $(,)?) => {
        &[$(($code, include_str!($path))),*]
    };
}

const EMBEDDED: &[(&str, &str)] = embedded! {
    "default" => "../configs/languages/default.toml",
    "en" => "../configs/languages/english.toml",
    "de" => "../configs/languages/german.toml",
    "fr" => "../configs/languages/french.toml",
    "ru" => "../configs/languages/russian.toml",
    "ar" => "../configs/languages/arabic.toml",
    "fa" => "../configs/languages/persian.toml",
    "ur" => "../configs/languages/urdu.toml",
    "hi" => "../configs/languages/hindi.toml",
    "hy" => "../configs/languages/armenian.toml",
    "el" => "../configs/languages/greek.toml",
    "my" => "../configs/languages/burmese.toml",
    "am" => "../configs/languages/amharic.toml",
};

static REGISTRY: OnceLock<HashMap<&'static str, Arc<LanguageProfile>>> = OnceLock::new();

fn registry() -> &'static HashMap<&'static str, Arc<LanguageProfile>> {
    REGISTRY.get_or_init(|| {
        let mut map = HashMap::new();
        for (code, source) in EMBEDDED {
            match LanguageProfile::from_toml_str(source) {
                Ok(profile) => {
                    map.insert(*code, Arc::new(profile));
                }
                Err(e) => {
                    log::warn!("skipping embedded profile '{code}': {e}");
                }
            }
        }
        assert!(map.contains_key("default"), "default profile must parse");
        map
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_embedded_profile_parses() {
        for (code, source) in EMBEDDED {
            let profile = LanguageProfile::from_toml_str(source)
                .unwrap_or_else(|e| panic!("profile '{code}' failed to parse: {e}"));
            assert!(!profile.terminators.is_empty());
        }
    }

    #[test]
    fn unknown_code_falls_back_to_default() {
        let profile = LanguageProfile::get("zz");
        assert_eq!(profile.code, "default");
        assert!(profile.abbreviations.is_empty());
    }

    #[test]
    fn english_profile_has_lexicon_and_starters() {
        let en = LanguageProfile::get("en");
        assert!(en.compound_marks);
        assert!(en.abbreviations.iter().any(|a| a.token == "dr"));
        assert!(en.sentence_starters.iter().any(|w| w == "Why"));
    }

    #[test]
    fn policy_families() {
        assert_eq!(LanguageProfile::get("de").abbreviation_policy, AbbrevPolicy::BeforeWhitespace);
        assert_eq!(LanguageProfile::get("ar").abbreviation_policy, AbbrevPolicy::Always);
        assert_eq!(LanguageProfile::get("ru").abbreviation_policy, AbbrevPolicy::AfterWhitespace);
    }

    #[test]
    fn rejects_empty_terminator_set() {
        let source = r#"
            [metadata]
            code = "xx"
            name = "Empty"

            [terminators]
            chars = []
        "#;
        assert!(LanguageProfile::from_toml_str(source).is_err());
    }
}
