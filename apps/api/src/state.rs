use std::sync::Arc;

use crate::analysis::lexicon::Lexicon;
use crate::questions::QuestionBank;
use crate::transcription::Transcriber;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Domain → keyword sets, loaded once at startup.
    pub lexicon: Arc<Lexicon>,
    /// Per-domain interview question bank.
    pub questions: Arc<QuestionBank>,
    /// Pluggable transcription backend. `HttpTranscriber` when an endpoint is
    /// configured, `NullTranscriber` otherwise.
    pub transcriber: Arc<dyn Transcriber>,
}
