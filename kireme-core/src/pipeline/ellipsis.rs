//! Ellipsis protection
//!
//! Runs on the whole buffer before any other shielding so that abbreviation
//! and decimal rules never eat the dots of an ellipsis. The four renderings
//! get distinct sentinels because they restore to different literal text and
//! differ in whether they end a sentence:
//!
//! - `" . . . "` spaced mid-sentence ellipsis
//! - `". . . ."` spaced four-dot form closing a line
//! - `"...."` inline ellipsis whose final dot is a boundary
//! - `"..."` before a capitalized word: the ellipsis itself is the boundary,
//!   so the last dot is left behind as a literal terminal
//! - `"..."` anywhere else: mid-sentence

use std::sync::LazyLock;

use fancy_regex::Regex as FancyRegex;
use regex::Regex;

use crate::sentinel;

static SPACED_THREE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:\s\.){3}\s").expect("valid pattern"));

static SPACED_FOUR_AT_END: LazyLock<FancyRegex> =
    LazyLock::new(|| FancyRegex::new(r"(?m)(?<=[a-z])(?:\.\s){3}\.(?=$)").expect("valid pattern"));

static THREE_BEFORE_BOUNDARY_DOT: LazyLock<FancyRegex> =
    LazyLock::new(|| FancyRegex::new(r"(?<=\S)\.{3}(?=\.\s[A-Z])").expect("valid pattern"));

static THREE_BEFORE_CAPITAL: LazyLock<FancyRegex> =
    LazyLock::new(|| FancyRegex::new(r"\.\.\.(?=\s+[A-Z])").expect("valid pattern"));

static THREE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.\.\.").expect("valid pattern"));

/// Replace every ellipsis rendering with its sentinel.
pub(crate) fn shield(text: &str) -> String {
    let text = SPACED_THREE.replace_all(text, sentinel::ELLIPSIS_SPACED.to_string());
    let text = SPACED_FOUR_AT_END.replace_all(&text, sentinel::ELLIPSIS_FOUR_DOT.to_string());
    let text =
        THREE_BEFORE_BOUNDARY_DOT.replace_all(&text, sentinel::ELLIPSIS_INLINE.to_string());
    let boundary = format!("{}.", sentinel::ELLIPSIS_BOUNDARY);
    let text = THREE_BEFORE_CAPITAL.replace_all(&text, boundary.as_str());
    THREE
        .replace_all(&text, sentinel::ELLIPSIS_INLINE.to_string())
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentinel::decode;

    #[test]
    fn spaced_ellipsis_round_trips() {
        let shielded = shield("I paused . . . and went on.");
        assert!(shielded.contains(sentinel::ELLIPSIS_SPACED));
        assert_eq!(decode(&shielded), "I paused . . . and went on.");
    }

    #[test]
    fn inline_ellipsis_before_capital_keeps_a_boundary_dot() {
        let shielded = shield("It ended... Then came more.");
        assert!(shielded.contains(&format!("{}.", sentinel::ELLIPSIS_BOUNDARY)));
        assert_eq!(decode(&shielded), "It ended... Then came more.");
    }

    #[test]
    fn bare_inline_ellipsis_is_not_a_boundary() {
        let shielded = shield("well... maybe");
        assert_eq!(shielded, format!("well{} maybe", sentinel::ELLIPSIS_INLINE));
    }

    #[test]
    fn four_dot_inline_form() {
        let shielded = shield("He stopped.... Then left.");
        // three dots shielded, the fourth stays as the boundary
        assert!(shielded.contains(&format!("{}. Then", sentinel::ELLIPSIS_INLINE)));
        assert_eq!(decode(&shielded), "He stopped.... Then left.");
    }

    #[test]
    fn spaced_four_dot_at_line_end() {
        let shielded = shield("and so it goes. . . .");
        assert!(shielded.ends_with(sentinel::ELLIPSIS_FOUR_DOT));
        assert_eq!(decode(&shielded), "and so it goes. . . .");
    }
}
