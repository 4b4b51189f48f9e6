//! Output invariants checked over generated input

use kireme_core::{segment, sentinel};
use proptest::prelude::*;

proptest! {
    /// Every output sentence is trimmed, at least two characters long and
    /// free of pipeline sentinels, for any printable ASCII input.
    #[test]
    fn outputs_are_clean(text in "[ -~\n\r\t]{0,200}") {
        for lang in ["en", "de", "ar", "hi", "zz"] {
            for sentence in segment(&text, lang) {
                prop_assert_eq!(sentence.trim(), sentence.as_str());
                prop_assert!(sentence.chars().count() >= 2, "too short: {:?}", sentence);
                for sentinel in sentinel::ALL {
                    prop_assert!(!sentence.contains(*sentinel), "sentinel leaked: {:?}", sentence);
                }
            }
        }
    }

    /// Whitespace-only input always yields the empty sequence.
    #[test]
    fn whitespace_input_yields_nothing(text in "[ \t\n\r]{0,40}") {
        prop_assert!(segment(&text, "en").is_empty());
    }

    /// Word-only text without terminal punctuation comes back as one
    /// trimmed sentence.
    #[test]
    fn unterminated_prose_is_one_sentence(words in proptest::collection::vec("[a-z]{2,8}", 1..8)) {
        let text = words.join(" ");
        prop_assert_eq!(segment(&text, "en"), vec![text]);
    }
}
