//! Communication clarity scoring — sentence-length fitness, vocabulary
//! diversity, and coherence markers, less a capped filler-word penalty.

use std::collections::HashSet;

use crate::nlp;

/// Discourse-structuring phrases taken as evidence of organized answers.
const COHERENCE_MARKERS: &[&str] = &[
    "first",
    "second",
    "then",
    "next",
    "finally",
    "in conclusion",
    "moreover",
    "furthermore",
];

/// Disfluency tokens. Counted as raw substring occurrences, so "like" inside
/// "likely" also counts — the penalty normalizer was tuned against that.
const FILLER_WORDS: &[&str] = &["um", "uh", "like", "you know", "basically", "actually"];

/// Ideal mean sentence length in words; fitness falls off linearly to zero at
/// 0 and at twice the ideal.
const IDEAL_SENTENCE_WORDS: f64 = 17.5;

/// Coherence saturates at three markers.
const COHERENCE_TARGET: f64 = 3.0;

/// Filler penalty: one tenth per occurrence, capped at 30%.
const MAX_FILLER_PENALTY: f64 = 0.3;

/// Scores a response for communication clarity.
///
/// Coherence markers carry the largest weight (0.4): explicit structure is
/// the strongest cheap signal of an organized answer. The filler penalty is
/// subtractive and capped so disfluency cannot dominate the score; the final
/// result is floored at 0.0.
pub fn score_communication_clarity(response: &str) -> f64 {
    if response.is_empty() {
        return 0.0;
    }

    let sentences = nlp::sentences(response);
    let avg_sentence_len = if sentences.is_empty() {
        0.0
    } else {
        let total_words: usize = sentences.iter().map(|s| nlp::word_count(s)).sum();
        total_words as f64 / sentences.len() as f64
    };
    let sentence_score =
        (1.0 - (avg_sentence_len - IDEAL_SENTENCE_WORDS).abs() / IDEAL_SENTENCE_WORDS)
            .clamp(0.0, 1.0);

    let lower = response.to_lowercase();
    let words: Vec<&str> = lower.split_whitespace().collect();
    let vocabulary_diversity = if words.is_empty() {
        0.0
    } else {
        let unique: HashSet<&&str> = words.iter().collect();
        unique.len() as f64 / words.len() as f64
    };

    let coherence_hits = COHERENCE_MARKERS.iter().filter(|m| lower.contains(*m)).count();
    let coherence_score = (coherence_hits as f64 / COHERENCE_TARGET).min(1.0);

    let filler_count: usize = FILLER_WORDS
        .iter()
        .map(|f| count_occurrences(&lower, f))
        .sum();
    let filler_penalty = (filler_count as f64 / 10.0).min(MAX_FILLER_PENALTY);

    let clarity_score = (sentence_score * 0.3 + vocabulary_diversity * 0.3
        + coherence_score * 0.4)
        - filler_penalty;
    (clarity_score * 10.0).max(0.0)
}

/// Counts every position at which `needle` occurs in `haystack`, overlapping
/// occurrences included.
fn count_occurrences(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() || needle.len() > haystack.len() {
        return 0;
    }
    haystack
        .as_bytes()
        .windows(needle.len())
        .filter(|w| *w == needle.as_bytes())
        .count()
}
