//! Linguistic primitives — sentence segmentation, tokenization, and sentiment
//! polarity. The scorers treat these as pure functions over a string.
//!
//! Polarity is a small lexicon-based estimate standing in for a full sentiment
//! model: the hit difference is damped by total token count, so a single
//! loaded word in a long answer nudges the score instead of saturating it.

/// Words carrying positive tone. Matched against lowercased tokens.
const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "excellent", "strong", "best", "better", "well",
    "improve", "improves", "improved", "improvement", "effective", "efficient",
    "success", "successful", "successfully", "reliable", "robust", "quality",
    "clear", "clean", "helpful", "valuable", "important", "enjoy", "love",
    "passionate", "easy", "benefit", "benefits", "positive",
];

/// Words carrying negative tone.
const NEGATIVE_WORDS: &[&str] = &[
    "bad", "poor", "worse", "worst", "difficult", "hard", "problem", "problems",
    "fail", "failed", "failure", "bug", "bugs", "error", "errors", "wrong",
    "slow", "broken", "issue", "issues", "confusing", "unclear", "weak",
    "negative", "hate", "struggle", "struggled", "mess", "never", "cannot",
];

/// Splits text into sentences on terminal punctuation. Text without any
/// terminator is a single sentence; empty text yields no sentences.
pub fn sentences(text: &str) -> Vec<&str> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Whitespace-delimited tokens, punctuation included.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

pub fn word_count(text: &str) -> usize {
    words(text).count()
}

/// Sentiment polarity in [-1, 1]: negative to positive tone.
/// Returns 0.0 for empty or sentiment-neutral text.
pub fn polarity(text: &str) -> f64 {
    let mut positive = 0i64;
    let mut negative = 0i64;
    let mut total = 0i64;

    for token in words(text) {
        let token = token
            .trim_matches(|c: char| !c.is_alphanumeric())
            .to_lowercase();
        if token.is_empty() {
            continue;
        }
        total += 1;
        if POSITIVE_WORDS.contains(&token.as_str()) {
            positive += 1;
        } else if NEGATIVE_WORDS.contains(&token.as_str()) {
            negative += 1;
        }
    }

    if total == 0 {
        return 0.0;
    }
    (positive - negative) as f64 / total as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentences_splits_on_terminators() {
        let s = sentences("First point. Second point! Third point?");
        assert_eq!(s, vec!["First point", "Second point", "Third point"]);
    }

    #[test]
    fn test_sentences_without_terminator_is_one_sentence() {
        let s = sentences("just one unterminated thought");
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn test_sentences_empty_text_yields_none() {
        assert!(sentences("").is_empty());
        assert!(sentences("...").is_empty());
    }

    #[test]
    fn test_word_count_is_whitespace_delimited() {
        assert_eq!(word_count("one two  three\nfour"), 4);
        assert_eq!(word_count(""), 0);
    }

    #[test]
    fn test_polarity_positive_text() {
        let p = polarity("The results were great and the system is reliable.");
        assert!(p > 0.0, "Polarity was {p}");
    }

    #[test]
    fn test_polarity_negative_text() {
        let p = polarity("It was a bad, broken mess full of bugs.");
        assert!(p < 0.0, "Polarity was {p}");
    }

    #[test]
    fn test_polarity_neutral_text_is_zero() {
        assert_eq!(polarity("The database stores rows in tables."), 0.0);
        assert_eq!(polarity(""), 0.0);
    }

    #[test]
    fn test_polarity_strips_punctuation_before_matching() {
        assert!(polarity("Testing improves quality.") > 0.0);
    }

    #[test]
    fn test_polarity_bounded() {
        for text in ["great great great", "bad bad bad", "x", ""] {
            let p = polarity(text);
            assert!((-1.0..=1.0).contains(&p), "Polarity {p} out of range");
        }
    }
}
