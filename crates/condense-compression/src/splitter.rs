//! Sentence boundary detection.
//!
//! A boundary is a terminator (`.`, `!`, `?`) immediately followed by a run of
//! whitespace and then a character that can open a sentence (ASCII uppercase,
//! digit, or quote mark). The terminator stays with the preceding sentence and
//! the whitespace run is dropped.

use condense_core::constants::{SENTENCE_OPENING_QUOTES, SENTENCE_TERMINATORS};

use crate::sentence::{IntentKeywords, Sentence};

fn is_terminator(c: char) -> bool {
    SENTENCE_TERMINATORS.contains(&c)
}

fn opens_sentence(c: char) -> bool {
    c.is_ascii_uppercase() || c.is_ascii_digit() || SENTENCE_OPENING_QUOTES.contains(&c)
}

/// Split `text` into sentence spans, discarding whitespace-only pieces.
///
/// Text without any boundary comes back as a single span.
pub fn split_spans(text: &str) -> Vec<&str> {
    let mut spans = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !is_terminator(c) {
            continue;
        }
        let end = i + c.len_utf8();
        let mut saw_whitespace = false;
        let mut next_start = None;
        while let Some(&(j, d)) = chars.peek() {
            if d.is_whitespace() {
                saw_whitespace = true;
                chars.next();
                continue;
            }
            if saw_whitespace && opens_sentence(d) {
                next_start = Some(j);
            }
            break;
        }
        if let Some(j) = next_start {
            spans.push(&text[start..end]);
            start = j;
        }
    }
    spans.push(&text[start..]);

    spans.retain(|span| !span.trim().is_empty());
    spans
}

/// Split and tokenize `text`, numbering sentences in reading order.
pub fn build_sentences(
    text: &str,
    keywords: &IntentKeywords,
    boost_per_match: f64,
) -> Vec<Sentence> {
    split_spans(text)
        .into_iter()
        .enumerate()
        .map(|(index, span)| Sentence::new(index, span, keywords, boost_per_match))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_terminator_whitespace_capital() {
        let spans = split_spans("First one. Second one! Third one? Fourth.");
        assert_eq!(spans, vec!["First one.", "Second one!", "Third one?", "Fourth."]);
    }

    #[test]
    fn digits_and_quotes_open_sentences() {
        let spans = split_spans("Step one. 2 more to go. \"Quoted\" start. 'Single' too.");
        assert_eq!(
            spans,
            vec!["Step one.", "2 more to go.", "\"Quoted\" start.", "'Single' too."]
        );
    }

    #[test]
    fn lowercase_continuation_is_not_a_boundary() {
        let spans = split_spans("Use e.g. the defaults. Then stop.");
        assert_eq!(spans, vec!["Use e.g. the defaults.", "Then stop."]);
    }

    #[test]
    fn terminator_without_whitespace_is_not_a_boundary() {
        assert_eq!(split_spans("Version 2.0 shipped.Next"), vec!["Version 2.0 shipped.Next"]);
    }

    #[test]
    fn repeated_terminators_split_after_the_last() {
        assert_eq!(split_spans("Wait!! Really?"), vec!["Wait!!", "Really?"]);
    }

    #[test]
    fn whitespace_run_with_newlines_is_dropped() {
        assert_eq!(split_spans("One.\n\n  Two."), vec!["One.", "Two."]);
    }

    #[test]
    fn no_boundary_yields_whole_text() {
        assert_eq!(split_spans("just one long clause"), vec!["just one long clause"]);
    }

    #[test]
    fn whitespace_only_input_yields_nothing() {
        assert!(split_spans("   ").is_empty());
        assert!(split_spans("").is_empty());
    }

    #[test]
    fn multibyte_text_splits_on_char_boundaries() {
        // Only ASCII capitals open a sentence.
        let spans = split_spans("Café ouvert. Ça va. Done.");
        assert_eq!(spans, vec!["Café ouvert. Ça va.", "Done."]);
    }

    #[test]
    fn sentence_indices_are_strictly_increasing() {
        let sentences = build_sentences("A b. C d. E f.", &IntentKeywords::default(), 2.0);
        let indices: Vec<usize> = sentences.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }
}
