//! Segmentation across the non-English language profiles

use kireme_core::segment;

#[test]
fn german_ordinal_date_does_not_split() {
    assert_eq!(
        segment("Am 5. Januar ging er heim. Es war kalt.", "de"),
        vec!["Am 5. Januar ging er heim.", "Es war kalt."]
    );
}

#[test]
fn german_low_quotes_hold_together() {
    assert_eq!(
        segment("Sie sagte: „Geh heim. Jetzt.“ und ging.", "de"),
        vec!["Sie sagte: „Geh heim. Jetzt.“ und ging."]
    );
}

#[test]
fn german_abbreviation_before_whitespace() {
    assert_eq!(
        segment("Der Preis bzw. die Kosten stiegen.", "de"),
        vec!["Der Preis bzw. die Kosten stiegen."]
    );
}

#[test]
fn french_title_prefix() {
    assert_eq!(
        segment("M. Dupont est arrivé. Tout va bien.", "fr"),
        vec!["M. Dupont est arrivé.", "Tout va bien."]
    );
}

#[test]
fn russian_abbreviation_after_whitespace() {
    assert_eq!(
        segment("Он пришёл, т.е. добрался вовремя. Все ждали.", "ru"),
        vec!["Он пришёл, т.е. добрался вовремя.", "Все ждали."]
    );
}

#[test]
fn arabic_question_mark_splits() {
    assert_eq!(segment("ما اسمك؟ اسمي أحمد.", "ar"), vec!["ما اسمك؟", "اسمي أحمد."]);
}

#[test]
fn arabic_digital_time_colon_does_not_split() {
    assert_eq!(segment("الموعد 19:30 مساء.", "ar"), vec!["الموعد 19:30 مساء."]);
}

#[test]
fn arabic_serial_comma_chain() {
    let out = segment("اشترى تفاحا، وموزا، وعنبا.", "ar");
    // the chained first comma is not a boundary, the last one is
    assert_eq!(out, vec!["اشترى تفاحا، وموزا،", "وعنبا."]);
}

#[test]
fn arabic_newline_separated_sentences_split() {
    assert_eq!(segment("ذهب أحمد.\nعاد سالم.", "ar"), vec!["ذهب أحمد.", "عاد سالم."]);
}

#[test]
fn hindi_danda_splits() {
    assert_eq!(
        segment("यह पहला वाक्य है। यह दूसरा है।", "hi"),
        vec!["यह पहला वाक्य है।", "यह दूसरा है।"]
    );
}

#[test]
fn armenian_full_stop_splits() {
    assert_eq!(segment("Սա նախադասություն է։ Սա երկրորդն է։", "hy"), vec![
        "Սա նախադասություն է։",
        "Սա երկրորդն է։"
    ]);
}

#[test]
fn greek_question_mark_splits() {
    assert_eq!(segment("Τι κάνεις; Είμαι καλά.", "el"), vec!["Τι κάνεις;", "Είμαι καλά."]);
}

#[test]
fn amharic_full_stop_splits() {
    assert_eq!(segment("ሰላም ለዓለም። እንዴት ነህ?", "am"), vec!["ሰላም ለዓለም።", "እንዴት ነህ?"]);
}

#[test]
fn urdu_full_stop_splits() {
    assert_eq!(segment("اس نے کہا۔ ٹھیک ہے۔", "ur"), vec!["اس نے کہا۔", "ٹھیک ہے۔"]);
}

#[test]
fn burmese_full_stop_splits() {
    assert_eq!(
        segment("မနေ့က သွားခဲ့တယ်။ ဒီနေ့ မသွားဘူး။", "my"),
        vec!["မနေ့က သွားခဲ့တယ်။", "ဒီနေ့ မသွားဘူး။"]
    );
}

#[test]
fn unknown_language_code_uses_default_profile() {
    assert_eq!(
        segment("Une phrase. Une autre phrase.", "xx"),
        vec!["Une phrase.", "Une autre phrase."]
    );
}
