//! Confidence scoring — lexical certainty markers, sentiment, and response
//! length combined into a [0, 10] score.

use serde::Deserialize;

use crate::nlp;

/// Markers of definitive language.
const CONFIDENCE_MARKERS: &[&str] = &[
    "confident",
    "sure",
    "certain",
    "definitely",
    "absolutely",
    "clearly",
];

/// Markers of hedged language. Weighted at half a confidence marker.
const UNCERTAINTY_MARKERS: &[&str] = &[
    "maybe",
    "perhaps",
    "might",
    "possibly",
    "not sure",
    "i think",
    "probably",
];

/// Word count at which the length component saturates.
const FULL_LENGTH_WORDS: f64 = 30.0;

/// Prosodic features extracted from the audio track. Accepted by the scorer
/// but not yet folded into the score; reserved for a future revision that
/// weighs delivery alongside wording.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AudioFeatures {
    pub pitch_variance: Option<f64>,
    pub speech_rate_wpm: Option<f64>,
    pub pause_ratio: Option<f64>,
}

/// Scores a response for confidence of delivery.
///
/// Each marker phrase counts at most once, matched as a case-insensitive
/// substring. The marker balance is normalized by response length so a short
/// answer cannot buy a high score with a single "definitely".
pub fn score_confidence(response: &str, _audio_features: Option<&AudioFeatures>) -> f64 {
    if response.is_empty() {
        return 0.0;
    }

    let lower = response.to_lowercase();

    let confidence_count = CONFIDENCE_MARKERS
        .iter()
        .filter(|m| lower.contains(*m))
        .count() as f64;
    let uncertainty_count = UNCERTAINTY_MARKERS
        .iter()
        .filter(|m| lower.contains(*m))
        .count() as f64;

    let sentiment_norm = (nlp::polarity(response) + 1.0) / 2.0;

    let word_count = nlp::word_count(response) as f64;
    let length_confidence = (word_count / FULL_LENGTH_WORDS).min(1.0);

    let text_confidence = ((confidence_count - uncertainty_count * 0.5)
        / (word_count / 10.0).max(1.0))
    .clamp(0.0, 1.0);

    let confidence_score =
        (text_confidence * 0.4 + sentiment_norm * 0.3 + length_confidence * 0.3) * 10.0;
    confidence_score.min(10.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_response_scores_zero() {
        assert_eq!(score_confidence("", None), 0.0);
    }

    #[test]
    fn test_definitive_language_raises_score() {
        let hedged = "Maybe the cache is the problem, I think, possibly the indexes.";
        let definitive = "The cache is definitely the problem and the fix is clearly the indexes.";
        assert!(score_confidence(definitive, None) > score_confidence(hedged, None));
    }

    #[test]
    fn test_uncertainty_discounts_at_half_weight() {
        // One confidence marker and two uncertainty markers in ten words:
        // text_confidence = (1 - 2*0.5) / 1 = 0.
        let response = "Maybe this works but perhaps definitely not here at all";
        let lower = response.to_lowercase();
        let confidence = CONFIDENCE_MARKERS
            .iter()
            .filter(|m| lower.contains(*m))
            .count();
        let uncertainty = UNCERTAINTY_MARKERS
            .iter()
            .filter(|m| lower.contains(*m))
            .count();
        assert_eq!(confidence, 1);
        assert_eq!(uncertainty, 2);
    }

    #[test]
    fn test_marker_counted_once_per_phrase() {
        let once = score_confidence("definitely works here today fine", None);
        let thrice = score_confidence("definitely definitely definitely works here", None);
        // Same marker presence; both have five words, so only sentiment and
        // length could differ — and neither does.
        assert!((once - thrice).abs() < 1e-9);
    }

    #[test]
    fn test_short_answer_cannot_saturate_on_one_marker() {
        // A near-30-word neutral answer with one marker outscores a bare
        // "Definitely." — the length normalizer dilutes the marker instead.
        let short = "Definitely.";
        let long = format!("Definitely. {}", "The rollout plan covers staging and production. ".repeat(4));
        assert!(score_confidence(&long, None) > score_confidence(short, None));
    }

    #[test]
    fn test_audio_features_are_accepted_but_unused() {
        let features = AudioFeatures {
            pitch_variance: Some(0.4),
            speech_rate_wpm: Some(140.0),
            pause_ratio: Some(0.1),
        };
        let response = "I am certain this design scales.";
        assert_eq!(
            score_confidence(response, Some(&features)),
            score_confidence(response, None)
        );
    }

    #[test]
    fn test_score_bounded_for_arbitrary_input() {
        for response in [
            "",
            "sure",
            "maybe maybe maybe maybe",
            &"definitely absolutely clearly certain sure confident ".repeat(30),
        ] {
            let score = score_confidence(response, None);
            assert!((0.0..=10.0).contains(&score), "Score {score} out of range");
        }
    }
}
