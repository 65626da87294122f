mod analysis;
mod config;
mod errors;
mod nlp;
mod questions;
mod routes;
mod state;
mod transcription;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::lexicon::Lexicon;
use crate::config::Config;
use crate::questions::QuestionBank;
use crate::routes::build_router;
use crate::state::AppState;
use crate::transcription::{HttpTranscriber, NullTranscriber, Transcriber};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Interview Analysis API v{}", env!("CARGO_PKG_VERSION"));

    let lexicon = match &config.lexicon_path {
        Some(path) => Lexicon::from_path(path)
            .with_context(|| format!("Failed to load lexicon override from {path}"))?,
        None => Lexicon::builtin(),
    };
    info!("Lexicon loaded ({} domains)", lexicon.domain_count());

    let questions = match &config.question_bank_path {
        Some(path) => QuestionBank::from_path(path)
            .with_context(|| format!("Failed to load question bank override from {path}"))?,
        None => QuestionBank::builtin(),
    };
    info!("Question bank loaded ({} domains)", questions.domain_count());

    let transcriber: Arc<dyn Transcriber> = match &config.transcribe_endpoint {
        Some(endpoint) => {
            info!("Transcription backend: {endpoint}");
            Arc::new(HttpTranscriber::new(
                endpoint.clone(),
                config.transcribe_api_key.clone(),
            ))
        }
        None => {
            info!("Transcription backend: none (audio answers score as empty)");
            Arc::new(NullTranscriber)
        }
    };

    let state = AppState {
        lexicon: Arc::new(lexicon),
        questions: Arc::new(questions),
        transcriber,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
