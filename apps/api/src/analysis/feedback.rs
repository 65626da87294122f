//! Feedback synthesis — fixed threshold ladders map scores to prose and to
//! strength/improvement tags. The ladders are data tables, not conditionals,
//! so every threshold stays auditable and independently testable.

use crate::analysis::models::{Feedback, InterviewScores};

/// Overall performance tiers, highest first. Lower bounds are inclusive; the
/// final tier catches everything below 4.0.
struct OverallTier {
    floor: f64,
    message: &'static str,
}

const OVERALL_TIERS: &[OverallTier] = &[
    OverallTier {
        floor: 8.0,
        message: "Excellent performance! You demonstrated strong knowledge and communication skills.",
    },
    OverallTier {
        floor: 6.0,
        message: "Good performance with room for improvement in some areas.",
    },
    OverallTier {
        floor: 4.0,
        message: "Average performance. Focus on strengthening your technical knowledge and communication.",
    },
    OverallTier {
        floor: f64::NEG_INFINITY,
        message: "Needs significant improvement. Consider more practice and preparation.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
enum Axis {
    Technical,
    Communication,
    Confidence,
}

impl Axis {
    fn value(self, scores: &InterviewScores) -> f64 {
        match self {
            Axis::Technical => scores.technical,
            Axis::Communication => scores.communication,
            Axis::Confidence => scores.confidence,
        }
    }
}

/// Per-axis rule: inclusive threshold, message pair ("{domain}" is
/// interpolated), and the tags appended to strengths/improvements. Table
/// order fixes the output order of both lists.
struct AxisRule {
    axis: Axis,
    threshold: f64,
    met_message: &'static str,
    met_strength: &'static str,
    missed_message: &'static str,
    missed_improvement: &'static str,
}

const AXIS_RULES: &[AxisRule] = &[
    AxisRule {
        axis: Axis::Technical,
        threshold: 7.0,
        met_message: "Strong technical knowledge in {domain}. Good use of relevant terminology.",
        met_strength: "Strong technical foundation",
        missed_message: "Technical knowledge needs improvement. Study more {domain} concepts and practice explaining them clearly.",
        missed_improvement: "Strengthen technical knowledge",
    },
    AxisRule {
        axis: Axis::Communication,
        threshold: 7.0,
        met_message: "Clear and articulate communication. Good sentence structure and vocabulary.",
        met_strength: "Clear communication",
        missed_message: "Work on communication clarity. Practice explaining concepts more simply and avoid filler words.",
        missed_improvement: "Improve communication clarity",
    },
    AxisRule {
        axis: Axis::Confidence,
        threshold: 7.0,
        met_message: "Confident delivery with good conviction in your answers.",
        met_strength: "Confident presentation",
        missed_message: "Work on building confidence. Practice more and use definitive language.",
        missed_improvement: "Build confidence in delivery",
    },
];

/// Derives narrative feedback from interview-level scores. Deterministic: the
/// same scores and domain always produce the same prose and tags.
pub fn generate_feedback(scores: &InterviewScores, domain: &str) -> Feedback {
    let overall_feedback = OVERALL_TIERS
        .iter()
        .find(|tier| scores.overall >= tier.floor)
        .map(|tier| tier.message.to_string())
        .unwrap_or_default();

    let mut feedback = Feedback {
        overall_feedback,
        technical_feedback: String::new(),
        communication_feedback: String::new(),
        confidence_feedback: String::new(),
        strengths: Vec::new(),
        improvements: Vec::new(),
    };

    for rule in AXIS_RULES {
        let message = if rule.axis.value(scores) >= rule.threshold {
            feedback.strengths.push(rule.met_strength.to_string());
            rule.met_message.replace("{domain}", domain)
        } else {
            feedback.improvements.push(rule.missed_improvement.to_string());
            rule.missed_message.replace("{domain}", domain)
        };
        match rule.axis {
            Axis::Technical => feedback.technical_feedback = message,
            Axis::Communication => feedback.communication_feedback = message,
            Axis::Confidence => feedback.confidence_feedback = message,
        }
    }

    feedback
}
