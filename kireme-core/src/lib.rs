//! Rule-based multilingual sentence boundary disambiguation
//!
//! kireme turns a block of text into an ordered sequence of sentences,
//! resolving the ambiguity that a period, question mark or exclamation mark
//! does not always end a sentence (abbreviations, initials, decimals,
//! ellipses, quoted asides). The core is a staged rewrite pipeline that
//! shields non-boundary punctuation behind reversible sentinel codepoints,
//! splits on the remaining language-appropriate terminal marks, and restores
//! the sentinels in the assembled output.
//!
//! ```
//! let sentences = kireme_core::segment("Dr. Smith went home. He left.", "en");
//! assert_eq!(sentences, vec!["Dr. Smith went home.", "He left."]);
//! ```
//!
//! Segmentation is a pure function of (text, language, document-type hint):
//! no I/O, no shared mutable state, no failure mode. Unknown language codes
//! fall back to a default Latin profile and an empty abbreviation lexicon.

#![warn(missing_docs)]

pub mod collab;
pub mod error;
pub mod language;
mod pipeline;
pub mod sentinel;

use std::sync::Arc;

pub use collab::{AbbreviationLexicon, Cleaner, EmbeddedLexicon, ListGuard};
pub use error::{ProfileError, Result};
pub use language::{AbbrevCategory, AbbrevEntry, AbbrevPolicy, LanguageProfile};

use pipeline::AbbrevRules;

/// Configuration for one [`Segmenter`].
#[derive(Debug, Clone)]
pub struct SegmenterConfig {
    /// Two-letter language code; unknown codes use the default Latin profile.
    pub language: String,
    /// Document-type hint, forwarded to an attached [`Cleaner`].
    pub doc_type: Option<String>,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            doc_type: None,
        }
    }
}

/// Sentence segmenter for one language.
///
/// Construction resolves the language profile and compiles the abbreviation
/// rules once; [`segment`](Segmenter::segment) calls are then read-only and
/// safe to run concurrently.
pub struct Segmenter {
    profile: Arc<LanguageProfile>,
    rules: AbbrevRules,
    config: SegmenterConfig,
    cleaner: Option<Box<dyn Cleaner + Send + Sync>>,
    list_guard: Option<Box<dyn ListGuard + Send + Sync>>,
}

impl Segmenter {
    /// Create a segmenter for `language`.
    pub fn new(language: &str) -> Self {
        Self::with_config(SegmenterConfig {
            language: language.to_string(),
            ..SegmenterConfig::default()
        })
    }

    /// Create a segmenter from a full configuration.
    pub fn with_config(config: SegmenterConfig) -> Self {
        let profile = LanguageProfile::get(&config.language);
        let rules = AbbrevRules::new(&profile, &profile.abbreviations);
        Self {
            profile,
            rules,
            config,
            cleaner: None,
            list_guard: None,
        }
    }

    /// Replace the embedded abbreviation lexicon with `lexicon`.
    pub fn with_lexicon(mut self, lexicon: &dyn AbbreviationLexicon) -> Self {
        let entries = lexicon.entries(&self.config.language);
        self.rules = AbbrevRules::new(&self.profile, &entries);
        self
    }

    /// Attach a cleaner to run before segmentation.
    pub fn with_cleaner(mut self, cleaner: impl Cleaner + Send + Sync + 'static) -> Self {
        self.cleaner = Some(Box::new(cleaner));
        self
    }

    /// Attach a list-marker guard to run before segmentation.
    pub fn with_list_guard(mut self, guard: impl ListGuard + Send + Sync + 'static) -> Self {
        self.list_guard = Some(Box::new(guard));
        self
    }

    /// The active language profile.
    pub fn profile(&self) -> &LanguageProfile {
        &self.profile
    }

    /// Segment `text` into sentences.
    ///
    /// Returns an empty sequence for empty or whitespace-only input; never
    /// fails. Every returned sentence is trimmed, sentinel-free and at least
    /// two characters long.
    pub fn segment(&self, text: &str) -> Vec<String> {
        if text.trim().is_empty() {
            return Vec::new();
        }
        let mut text = std::borrow::Cow::Borrowed(text);
        if let Some(cleaner) = &self.cleaner {
            text = std::borrow::Cow::Owned(cleaner.clean(
                &text,
                &self.config.language,
                self.config.doc_type.as_deref(),
            ));
        }
        if let Some(guard) = &self.list_guard {
            text = std::borrow::Cow::Owned(guard.protect_markers(&text));
        }
        pipeline::run(&text, &self.profile, &self.rules)
    }
}

/// Segment `text` with a freshly built segmenter for `language`.
///
/// Convenience wrapper; construct a [`Segmenter`] once when segmenting many
/// texts in the same language.
pub fn segment(text: &str, language: &str) -> Vec<String> {
    Segmenter::new(language).segment(text)
}
