//! Value objects exchanged between the orchestrator, scorers, and callers.
//! All of them are constructed once and never mutated afterwards.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::transcription::AudioSource;

/// One complete interview submitted for analysis.
#[derive(Debug, Clone, Deserialize)]
pub struct InterviewSubmission {
    pub domain: String,
    pub questions: Vec<String>,
    /// Typed answers keyed by stringified question index ("0", "1", ...).
    #[serde(default)]
    pub responses: HashMap<String, String>,
    /// Recorded answers, index-aligned with `questions`. `None` marks a
    /// question with no recording; the typed answer (if any) is used instead.
    #[serde(default)]
    pub audio_files: Vec<Option<AudioSource>>,
}

/// Per-question scores on the three axes, each in [0.0, 10.0].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionScore {
    pub question: String,
    pub response: String,
    pub technical_score: f64,
    pub communication_score: f64,
    pub confidence_score: f64,
}

/// Interview-level scores: the mean of each per-question axis, rounded to one
/// decimal. `overall` is the mean of the three axis means — not the mean of
/// per-question overalls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewScores {
    pub technical: f64,
    pub communication: f64,
    pub confidence: f64,
    pub overall: f64,
}

/// Narrative feedback derived purely from `InterviewScores` and the domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feedback {
    pub overall_feedback: String,
    pub technical_feedback: String,
    pub communication_feedback: String,
    pub confidence_feedback: String,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
}

/// The terminal analysis artifact returned to callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewResult {
    pub scores: InterviewScores,
    pub feedback: Feedback,
    pub question_analysis: Vec<QuestionScore>,
    pub analysis_timestamp: String,
}
