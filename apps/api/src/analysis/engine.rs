//! Interview orchestrator — resolves each response, runs the three scorers,
//! aggregates interview-level scores, and synthesizes feedback.

use chrono::Utc;
use tracing::debug;

use crate::analysis::clarity::score_communication_clarity;
use crate::analysis::confidence::score_confidence;
use crate::analysis::feedback::generate_feedback;
use crate::analysis::lexicon::Lexicon;
use crate::analysis::models::{
    InterviewResult, InterviewScores, InterviewSubmission, QuestionScore,
};
use crate::analysis::technical::score_technical_accuracy;
use crate::transcription::Transcriber;

/// Analyzes a complete interview. Total over all inputs: a failed
/// transcription or an unknown domain degrades the affected scores but the
/// analysis always completes with a full result.
///
/// `question_analysis` preserves the input question order.
pub async fn analyze_interview(
    submission: &InterviewSubmission,
    lexicon: &Lexicon,
    transcriber: &dyn Transcriber,
) -> InterviewResult {
    let keywords = lexicon.keywords_for(&submission.domain);
    let mut question_analysis = Vec::with_capacity(submission.questions.len());

    for (index, question) in submission.questions.iter().enumerate() {
        let response = resolve_response(submission, index, transcriber).await;

        let technical_score = score_technical_accuracy(&response, keywords);
        let communication_score = score_communication_clarity(&response);
        let confidence_score = score_confidence(&response, None);
        debug!(
            index,
            technical_score, communication_score, confidence_score, "question scored"
        );

        question_analysis.push(QuestionScore {
            question: question.clone(),
            response,
            technical_score,
            communication_score,
            confidence_score,
        });
    }

    let scores = aggregate_scores(&question_analysis);
    let feedback = generate_feedback(&scores, &submission.domain);

    InterviewResult {
        scores,
        feedback,
        question_analysis,
        analysis_timestamp: Utc::now().to_rfc3339(),
    }
}

/// A recording wins over a typed answer for the same question; a failed or
/// absent transcription degrades to an empty response.
async fn resolve_response(
    submission: &InterviewSubmission,
    index: usize,
    transcriber: &dyn Transcriber,
) -> String {
    if let Some(Some(audio)) = submission.audio_files.get(index) {
        return transcriber.transcribe(audio).await;
    }
    submission
        .responses
        .get(&index.to_string())
        .cloned()
        .unwrap_or_default()
}

/// Axis means over all questions, rounded to one decimal for presentation.
/// `overall` is the mean of the three unrounded axis means, then rounded —
/// not the mean of per-question overalls.
fn aggregate_scores(question_analysis: &[QuestionScore]) -> InterviewScores {
    if question_analysis.is_empty() {
        return InterviewScores {
            technical: 0.0,
            communication: 0.0,
            confidence: 0.0,
            overall: 0.0,
        };
    }

    let count = question_analysis.len() as f64;
    let technical: f64 =
        question_analysis.iter().map(|q| q.technical_score).sum::<f64>() / count;
    let communication: f64 =
        question_analysis.iter().map(|q| q.communication_score).sum::<f64>() / count;
    let confidence: f64 =
        question_analysis.iter().map(|q| q.confidence_score).sum::<f64>() / count;
    let overall = (technical + communication + confidence) / 3.0;

    InterviewScores {
        technical: round1(technical),
        communication: round1(communication),
        confidence: round1(confidence),
        overall: round1(overall),
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
