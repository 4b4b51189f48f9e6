//! Collaborator interfaces consumed by the core
//!
//! Cleaning, list-marker protection and the abbreviation lexicon live
//! outside the segmentation core. The core consumes them through these
//! traits; by default it assumes its input is already cleaned and
//! list-protected, and reads the lexicon embedded in the language profile.

use crate::language::{AbbrevEntry, LanguageProfile};

/// Normalizes document-format artifacts and whitespace before segmentation.
///
/// The pipeline assumes its input has already passed through a cleaner;
/// attach one to a [`Segmenter`](crate::Segmenter) to run it in-process.
pub trait Cleaner {
    /// Return the cleaned form of `text`.
    fn clean(&self, text: &str, language: &str, doc_type: Option<&str>) -> String;
}

/// Rewrites numbered/lettered outline markers so they carry the `\r`
/// line-break marker the pipeline's line-splitting step relies on.
pub trait ListGuard {
    /// Return `text` with protected list markers.
    fn protect_markers(&self, text: &str) -> String;
}

/// Supplies categorized abbreviation strings per language.
pub trait AbbreviationLexicon {
    /// Entries for `language`; empty for unsupported languages, which
    /// degrades segmentation to pure punctuation splitting.
    fn entries(&self, language: &str) -> Vec<AbbrevEntry>;
}

/// Lexicon backed by the profiles embedded at compile time.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedLexicon;

impl AbbreviationLexicon for EmbeddedLexicon {
    fn entries(&self, language: &str) -> Vec<AbbrevEntry> {
        LanguageProfile::get(language).abbreviations.clone()
    }
}
