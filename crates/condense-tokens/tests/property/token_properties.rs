use condense_tokens::{tokenize, ReductionRatio, TokenBudget, TokenCounter};
use proptest::prelude::*;

proptest! {
    #[test]
    fn tokens_are_lowercase_word_runs(text in "\\PC{0,200}") {
        for token in tokenize(&text) {
            prop_assert!(!token.is_empty());
            prop_assert!(token.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'\''));
        }
    }

    #[test]
    fn cached_count_matches_uncached(text in "\\PC{0,200}") {
        let counter = TokenCounter::new(64);
        prop_assert_eq!(counter.count_cached(&text), counter.count(&text));
        prop_assert_eq!(counter.count_cached(&text), counter.count(&text));
    }

    #[test]
    fn tokenization_is_restartable(text in "[a-zA-Z0-9' .,!?]{0,120}") {
        let tokens = tokenize(&text);
        let first: Vec<String> = tokens.clone().collect();
        let second: Vec<String> = tokens.collect();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn target_follows_formula_in_range(original in 0usize..5_000, ratio in 0.0f64..=0.9) {
        let budget = TokenBudget::for_ratio(original, ReductionRatio::resolve(ratio, 0.9, 0.3));
        let expected = ((original as f64 * (1.0 - ratio)).round() as usize).max(1);
        prop_assert_eq!(budget.target, expected);
        prop_assert!(budget.target >= 1);
    }

    #[test]
    fn out_of_range_ratio_behaves_like_default(original in 0usize..5_000, ratio in 0.9001f64..100.0) {
        let odd = TokenBudget::for_ratio(original, ReductionRatio::resolve(ratio, 0.9, 0.3));
        let neutral = TokenBudget::for_ratio(original, ReductionRatio::resolve(0.3, 0.9, 0.3));
        prop_assert_eq!(odd, neutral);
    }
}
