//! Audio transcription boundary — turns an audio resource into plain text.
//!
//! Failure is swallowed here by contract: a backend that cannot produce a
//! transcript logs the cause and yields an empty string. The scoring engine
//! treats an empty transcript as an unanswered question, never as an error.

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use bytes::Bytes;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

const MAX_RETRIES: u32 = 3;

/// One recorded answer, as submitted by the platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AudioSource {
    /// A server-local file written by the upload pipeline.
    Path { path: String },
    /// Audio bytes inlined into the request payload.
    Inline { data_base64: String },
}

#[derive(Debug, Error)]
pub enum TranscribeError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("recognition API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("audio read error: {0}")]
    Io(#[from] std::io::Error),

    #[error("audio decode error: {0}")]
    Decode(#[from] base64::DecodeError),
}

/// Pluggable speech-to-text backend, carried in `AppState` as
/// `Arc<dyn Transcriber>`.
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Returns the transcript, or an empty string if recognition failed.
    /// Never errors outward.
    async fn transcribe(&self, audio: &AudioSource) -> String;
}

/// Backend used when no recognition endpoint is configured. Every audio
/// answer degrades to an empty response and scores zero.
pub struct NullTranscriber;

#[async_trait]
impl Transcriber for NullTranscriber {
    async fn transcribe(&self, _audio: &AudioSource) -> String {
        warn!("No transcription endpoint configured; treating audio answer as empty");
        String::new()
    }
}

#[derive(Debug, Deserialize)]
struct TranscriptBody {
    text: String,
}

/// Speech recognition over HTTP: posts the raw audio bytes to the configured
/// endpoint and expects `{"text": "..."}` back. Retries transient failures
/// (transport errors, 429, 5xx) with exponential backoff.
pub struct HttpTranscriber {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl HttpTranscriber {
    pub fn new(endpoint: String, api_key: Option<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(60))
                .build()
                .expect("Failed to build HTTP client"),
            endpoint,
            api_key,
        }
    }

    async fn request(&self, audio: &AudioSource) -> Result<String, TranscribeError> {
        let payload = load_audio_bytes(audio).await?;

        let mut last_error: Option<TranscribeError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s
                let delay = std::time::Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "Transcription attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let mut request = self
                .client
                .post(&self.endpoint)
                .header("content-type", "application/octet-stream")
                .body(payload.clone());
            if let Some(key) = &self.api_key {
                request = request.bearer_auth(key);
            }

            let response = match request.send().await {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(TranscribeError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                last_error = Some(TranscribeError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(TranscribeError::Api {
                    status: status.as_u16(),
                    message: body,
                });
            }

            let transcript: TranscriptBody = response.json().await?;
            debug!("Transcription succeeded ({} chars)", transcript.text.len());
            return Ok(transcript.text);
        }

        Err(last_error.unwrap_or(TranscribeError::Api {
            status: 0,
            message: format!("gave up after {MAX_RETRIES} attempts"),
        }))
    }
}

#[async_trait]
impl Transcriber for HttpTranscriber {
    async fn transcribe(&self, audio: &AudioSource) -> String {
        match self.request(audio).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Audio transcription failed: {e}");
                String::new()
            }
        }
    }
}

async fn load_audio_bytes(audio: &AudioSource) -> Result<Bytes, TranscribeError> {
    match audio {
        AudioSource::Path { path } => Ok(Bytes::from(tokio::fs::read(path).await?)),
        AudioSource::Inline { data_base64 } => Ok(Bytes::from(BASE64.decode(data_base64)?)),
    }
}
