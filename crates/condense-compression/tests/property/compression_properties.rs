use condense_compression::splitter::split_spans;
use condense_compression::HeuristicEngine;
use condense_core::models::CompressionRequest;
use proptest::prelude::*;

fn arb_sentence() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{1,8}( [a-z]{1,8}){0,10}[.!?]"
}

fn arb_document() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_sentence(), 1..8).prop_map(|sentences| sentences.join(" "))
}

fn arb_intent() -> impl Strategy<Value = Option<String>> {
    prop::option::of("[a-z]{1,8}( [a-z]{1,8}){0,3}")
}

/// Whether `needle` occurs in `haystack` as an ordered subsequence.
fn is_ordered_subsequence(needle: &[&str], haystack: &[&str]) -> bool {
    let mut rest = haystack.iter();
    needle.iter().all(|n| rest.any(|h| h == n))
}

proptest! {
    #[test]
    fn final_tokens_never_exceed_original(
        text in arb_document(),
        ratio in 0.0f64..=0.9,
        intent in arb_intent(),
    ) {
        let engine = HeuristicEngine::new();
        let mut request = CompressionRequest::new(text, ratio);
        request.intent = intent;
        let result = engine.compress(&request);
        prop_assert!(result.metrics.final_tokens <= result.metrics.original_tokens);
        prop_assert!(!result.compressed_text.is_empty());
    }

    #[test]
    fn zero_ratio_is_identity_on_trimmed_text(text in arb_document(), pad in "[ \t\n]{0,3}") {
        let engine = HeuristicEngine::new();
        let padded = format!("{pad}{text}{pad}");
        let result = engine.compress(&CompressionRequest::new(padded.clone(), 0.0));
        prop_assert_eq!(result.compressed_text.as_str(), padded.trim());
        prop_assert_eq!(result.metrics.final_tokens, result.metrics.original_tokens);
        prop_assert!(result.warnings.is_empty());
    }

    #[test]
    fn target_matches_formula(text in arb_document(), ratio in 0.0f64..=0.9) {
        let engine = HeuristicEngine::new();
        let result = engine.compress(&CompressionRequest::new(text, ratio));
        let original = result.metrics.original_tokens;
        let expected = ((original as f64 * (1.0 - ratio)).round() as usize).max(1);
        prop_assert_eq!(result.metrics.target_tokens, expected);
    }

    #[test]
    fn out_of_range_ratio_matches_default(text in arb_document(), ratio in 0.91f64..50.0) {
        let engine = HeuristicEngine::new();
        let odd = engine.compress(&CompressionRequest::new(text.clone(), ratio));
        let neutral = engine.compress(&CompressionRequest::new(text, 0.3));
        prop_assert_eq!(odd.compressed_text, neutral.compressed_text);
        prop_assert_eq!(odd.metrics.target_tokens, neutral.metrics.target_tokens);
        prop_assert_eq!(odd.metrics.final_tokens, neutral.metrics.final_tokens);
    }

    #[test]
    fn output_sentences_keep_reading_order(
        text in arb_document(),
        ratio in 0.1f64..=0.9,
        intent in arb_intent(),
    ) {
        let engine = HeuristicEngine::new();
        let mut request = CompressionRequest::new(text.clone(), ratio);
        request.intent = intent;
        let result = engine.compress(&request);

        let original = split_spans(&text);
        let emitted = split_spans(&result.compressed_text);
        prop_assert!(
            is_ordered_subsequence(&emitted, &original),
            "emitted {:?} is not an ordered subsequence of {:?}",
            emitted,
            original
        );
    }

    #[test]
    fn compression_is_deterministic(text in arb_document(), ratio in 0.0f64..=0.9) {
        let engine = HeuristicEngine::new();
        let a = engine.compress(&CompressionRequest::new(text.clone(), ratio));
        let b = HeuristicEngine::new().compress(&CompressionRequest::new(text, ratio));
        prop_assert_eq!(a.compressed_text, b.compressed_text);
        prop_assert_eq!(a.warnings, b.warnings);
    }
}
