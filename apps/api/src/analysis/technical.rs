//! Technical accuracy scoring — keyword coverage, completeness, and depth
//! markers, weighted into a [0, 10] score.

use crate::nlp;

/// Connective phrases taken as evidence of reasoned, elaborated answers.
const DEPTH_MARKERS: &[&str] = &[
    "because",
    "therefore",
    "however",
    "for example",
    "such as",
    "in contrast",
];

/// Fraction of the domain keyword set that earns full coverage credit.
/// Matching ~30% of the configured vocabulary is treated as complete.
const COVERAGE_TARGET: f64 = 0.3;

/// Word count at which the completeness component saturates.
const FULL_ANSWER_WORDS: f64 = 50.0;

/// Scores a response for technical accuracy against the domain vocabulary.
///
/// Keyword coverage dominates (weight 0.5); completeness and depth are
/// secondary proxies for substance. Each keyword counts at most once no
/// matter how often it appears. Matching is case-insensitive substring
/// containment — "sql" matches inside "postgresql" — which the normalizers
/// were tuned against, so it is preserved as-is.
pub fn score_technical_accuracy(response: &str, keywords: &[String]) -> f64 {
    if response.is_empty() {
        return 0.0;
    }

    let lower = response.to_lowercase();

    let matched = keywords
        .iter()
        .filter(|k| lower.contains(&k.to_lowercase()))
        .count();
    let keyword_score =
        (matched as f64 / (keywords.len() as f64 * COVERAGE_TARGET).max(1.0)).min(1.0);

    let completeness_score = (nlp::word_count(response) as f64 / FULL_ANSWER_WORDS).min(1.0);

    let depth_hits = DEPTH_MARKERS.iter().filter(|m| lower.contains(*m)).count();
    let depth_score = depth_hits as f64 / DEPTH_MARKERS.len() as f64;

    let technical_score =
        (keyword_score * 0.5 + completeness_score * 0.3 + depth_score * 0.2) * 10.0;
    technical_score.min(10.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::lexicon::Lexicon;

    fn software_keywords() -> Vec<String> {
        Lexicon::builtin().keywords_for("Software Development").to_vec()
    }

    #[test]
    fn test_empty_response_scores_zero() {
        assert_eq!(score_technical_accuracy("", &software_keywords()), 0.0);
    }

    #[test]
    fn test_no_keywords_scores_on_completeness_and_depth_only() {
        // Unknown domain → empty keyword set → only the 0.3 and 0.2 terms.
        let response = "I would start by listening very carefully because context matters.";
        let score = score_technical_accuracy(response, &[]);
        // 0.5*0 + 0.3*(10/50) + 0.2*(1/6) = 0.0933... → 0.933...
        assert!((score - 0.933333).abs() < 0.001, "Score was {score}");
    }

    #[test]
    fn test_substring_match_catches_partial_tokens() {
        // "sql" matches inside "postgresql"; preserved imprecision.
        let keywords = vec!["sql".to_string()];
        let with_partial = score_technical_accuracy("We ran postgresql in production", &keywords);
        let without = score_technical_accuracy("We ran mongo in production", &keywords);
        assert!(with_partial > without);
    }

    #[test]
    fn test_keyword_counted_once_per_phrase() {
        let keywords = vec!["git".to_string(), "testing".to_string()];
        let once = score_technical_accuracy("git workflow", &keywords);
        let thrice = score_technical_accuracy("git git git", &keywords);
        // Same single keyword match; only completeness differs (2 vs 3 words).
        let delta = thrice - once;
        assert!((delta - 0.3 * (1.0 / 50.0) * 10.0).abs() < 1e-9, "Delta was {delta}");
    }

    #[test]
    fn test_full_coverage_at_fifty_words_reaches_eight() {
        // 50+ words and every keyword present: keyword and completeness terms
        // both saturate, so the score is at least 8.0 before depth markers.
        let keywords = software_keywords();
        let mut response = keywords.join(" ");
        while nlp::word_count(&response) < 50 {
            response.push_str(" detail");
        }
        let score = score_technical_accuracy(&response, &keywords);
        assert!(score >= 8.0, "Score was {score}");
        assert!(score <= 10.0);
    }

    #[test]
    fn test_git_workflow_answer_scores_keywords_and_depth() {
        let response =
            "Git branches pull requests code review testing debugging because it improves quality";
        let score = score_technical_accuracy(response, &software_keywords());
        // Matches: git, testing, debugging → 3/(20*0.3) = 0.5
        // 12 words → completeness 0.24; "because" → depth 1/6
        // (0.5*0.5 + 0.3*0.24 + 0.2*1/6) * 10 = 3.5533...
        assert!((score - 3.553333).abs() < 0.001, "Score was {score}");
    }

    #[test]
    fn test_score_bounded_for_arbitrary_input() {
        let keywords = software_keywords();
        for response in [
            "",
            "short",
            &"git testing debugging python java react node api sql database ".repeat(40),
            "because therefore however for example such as in contrast",
        ] {
            let score = score_technical_accuracy(response, &keywords);
            assert!((0.0..=10.0).contains(&score), "Score {score} out of range");
        }
    }
}
