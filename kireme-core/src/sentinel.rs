//! Reversible sentinel codepoints used by the rewrite pipeline
//!
//! Every pass that decides a punctuation mark is *not* a sentence boundary
//! replaces it with a sentinel drawn from this table. The codepoints come
//! from blocks that do not occur in ordinary prose (math operators, chess
//! and weather symbols, Canadian syllabics), so a round trip through
//! [`decode`] reproduces the original character sequence byte for byte.
//!
//! Behavior is undefined when the input text itself contains one of these
//! codepoints; they are not pre-escaped.

/// Period shielded by the abbreviation/numeric disambiguator.
pub const SHIELDED_PERIOD: char = '∯';
/// Period with word characters on both sides (emails, bare decimals).
pub const INLINE_PERIOD: char = '∮';
/// Newline embedded inside a physical line.
pub const EMBEDDED_NEWLINE: char = 'ȹ';

/// Inline three-dot ellipsis, mid-sentence.
pub const ELLIPSIS_INLINE: char = 'ƪ';
/// Spaced three-dot ellipsis (" . . . ").
pub const ELLIPSIS_SPACED: char = '♟';
/// Spaced four-dot ellipsis at end of line (". . . .").
pub const ELLIPSIS_FOUR_DOT: char = '♝';
/// Leading two dots of an ellipsis whose final dot is a true boundary.
pub const ELLIPSIS_BOUNDARY: char = '☏';

/// Compound mark "?!".
pub const INTERROBANG: char = '☉';
/// Compound mark "!?".
pub const REVERSE_INTERROBANG: char = '☈';
/// Compound mark "??".
pub const DOUBLE_QUESTION: char = '☇';
/// Compound mark "!!".
pub const DOUBLE_EXCLAMATION: char = '☄';

/// Shielded ideographic full stop 。
pub const SHIELDED_CJK_PERIOD: char = 'ᓰ';
/// Shielded fullwidth full stop ．
pub const SHIELDED_WIDE_PERIOD: char = 'ᓱ';
/// Shielded fullwidth exclamation ！
pub const SHIELDED_WIDE_EXCLAMATION: char = 'ᓳ';
/// Shielded exclamation mark.
pub const SHIELDED_EXCLAMATION: char = 'ᓴ';
/// Shielded question mark.
pub const SHIELDED_QUESTION: char = 'ᓷ';
/// Shielded fullwidth question mark ？
pub const SHIELDED_WIDE_QUESTION: char = 'ᓸ';

/// Colon inside a digital time ("19:30").
pub const TIME_COLON: char = '♭';
/// Arabic comma that chains list items rather than ending a clause.
pub const SERIAL_COMMA: char = '♬';

/// All sentinel codepoints, for invariant checks in tests.
pub const ALL: &[char] = &[
    SHIELDED_PERIOD,
    INLINE_PERIOD,
    EMBEDDED_NEWLINE,
    ELLIPSIS_INLINE,
    ELLIPSIS_SPACED,
    ELLIPSIS_FOUR_DOT,
    ELLIPSIS_BOUNDARY,
    INTERROBANG,
    REVERSE_INTERROBANG,
    DOUBLE_QUESTION,
    DOUBLE_EXCLAMATION,
    SHIELDED_CJK_PERIOD,
    SHIELDED_WIDE_PERIOD,
    SHIELDED_WIDE_EXCLAMATION,
    SHIELDED_EXCLAMATION,
    SHIELDED_QUESTION,
    SHIELDED_WIDE_QUESTION,
    TIME_COLON,
    SERIAL_COMMA,
];

/// Sentinel standing in for a terminal-class mark inside a protected span.
///
/// Returns `None` for characters that are not terminal punctuation.
pub fn shield_terminal(ch: char) -> Option<char> {
    match ch {
        '.' => Some(SHIELDED_PERIOD),
        '。' => Some(SHIELDED_CJK_PERIOD),
        '．' => Some(SHIELDED_WIDE_PERIOD),
        '！' => Some(SHIELDED_WIDE_EXCLAMATION),
        '!' => Some(SHIELDED_EXCLAMATION),
        '?' => Some(SHIELDED_QUESTION),
        '？' => Some(SHIELDED_WIDE_QUESTION),
        _ => None,
    }
}

/// Decode every sentinel in `text` back to the literal sequence it replaced.
pub fn decode(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            SHIELDED_PERIOD | INLINE_PERIOD => out.push('.'),
            EMBEDDED_NEWLINE => out.push('\n'),
            ELLIPSIS_INLINE => out.push_str("..."),
            ELLIPSIS_SPACED => out.push_str(" . . . "),
            ELLIPSIS_FOUR_DOT => out.push_str(". . . ."),
            ELLIPSIS_BOUNDARY => out.push_str(".."),
            INTERROBANG => out.push_str("?!"),
            REVERSE_INTERROBANG => out.push_str("!?"),
            DOUBLE_QUESTION => out.push_str("??"),
            DOUBLE_EXCLAMATION => out.push_str("!!"),
            SHIELDED_CJK_PERIOD => out.push('。'),
            SHIELDED_WIDE_PERIOD => out.push('．'),
            SHIELDED_WIDE_EXCLAMATION => out.push('！'),
            SHIELDED_EXCLAMATION => out.push('!'),
            SHIELDED_QUESTION => out.push('?'),
            SHIELDED_WIDE_QUESTION => out.push('？'),
            TIME_COLON => out.push(':'),
            SERIAL_COMMA => out.push('،'),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_restores_shielded_terminals() {
        let shielded: String = "Go home。 Now！?".chars().map(|c| shield_terminal(c).unwrap_or(c)).collect();
        assert!(!shielded.contains('。'));
        assert_eq!(decode(&shielded), "Go home。 Now！?");
    }

    #[test]
    fn decode_restores_compound_and_ellipsis_marks() {
        let text = format!("What{INTERROBANG} And then{ELLIPSIS_INLINE} nothing{ELLIPSIS_BOUNDARY}.");
        assert_eq!(decode(&text), "What?! And then... nothing...");
    }

    #[test]
    fn sentinels_are_unique() {
        for (i, a) in ALL.iter().enumerate() {
            for b in &ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(decode("Dr. Smith"), "Dr. Smith");
    }
}
