//! Output rendering

use anyhow::Result;
use serde::Serialize;

/// Supported output formats.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// One sentence per line
    Text,
    /// JSON document with the sentence list and a count
    Json,
}

#[derive(Debug, Serialize)]
struct JsonDocument<'a> {
    sentences: &'a [String],
    count: usize,
}

/// Render `sentences` in `format`, with a trailing newline when non-empty.
pub fn render(sentences: &[String], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let mut out = sentences.join("\n");
            if !out.is_empty() {
                out.push('\n');
            }
            Ok(out)
        }
        OutputFormat::Json => {
            let doc = JsonDocument {
                sentences,
                count: sentences.len(),
            };
            let mut out = serde_json::to_string_pretty(&doc)?;
            out.push('\n');
            Ok(out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_format_is_one_sentence_per_line() {
        let sentences = vec!["One.".to_string(), "Two.".to_string()];
        assert_eq!(render(&sentences, OutputFormat::Text).unwrap(), "One.\nTwo.\n");
    }

    #[test]
    fn empty_text_output_has_no_trailing_newline() {
        assert_eq!(render(&[], OutputFormat::Text).unwrap(), "");
    }

    #[test]
    fn json_format_carries_count() {
        let sentences = vec!["One.".to_string()];
        let out = render(&sentences, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["count"], 1);
        assert_eq!(value["sentences"][0], "One.");
    }
}
