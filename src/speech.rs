//! ElevenLabs speech synthesis and local playback.
//!
//! Synthesis uses the plain HTTP endpoint
//! `POST /v1/text-to-speech/{voice_id}`; the returned MP3 is decoded and
//! played to completion before the call returns, matching the one-call-
//! at-a-time model of the commentary loop.

use std::io::Cursor;

use tracing::{debug, warn};

use crate::error::{CasterError, Result};

const ELEVENLABS_API_BASE: &str = "https://api.elevenlabs.io";
const TTS_MODEL: &str = "eleven_flash_v2";
const OUTPUT_FORMAT: &str = "mp3_44100_128";

/// Text-to-speech output for captions.
///
/// Built disabled when credentials are absent, in which case
/// [`Speaker::speak`] is a silent no-op. That is an expected condition,
/// not an error.
pub struct Speaker {
    inner: Option<SpeakerInner>,
}

struct SpeakerInner {
    client: reqwest::Client,
    api_key: String,
    voice_id: String,
    base_url: String,
}

impl Speaker {
    pub fn new(api_key: Option<String>, voice_id: Option<String>) -> Self {
        let inner = match (api_key, voice_id) {
            (Some(api_key), Some(voice_id)) => Some(SpeakerInner {
                client: reqwest::Client::new(),
                api_key,
                voice_id,
                base_url: ELEVENLABS_API_BASE.to_string(),
            }),
            _ => {
                warn!("ElevenLabs API key or voice ID not set, audio output disabled");
                None
            }
        };
        Self { inner }
    }

    /// A speaker that never produces audio.
    pub fn disabled() -> Self {
        Self { inner: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.inner.is_some()
    }

    /// Synthesize `text` and play it to completion. Failures are logged
    /// and swallowed; a missed line is harmless to the commentary loop.
    pub async fn speak(&self, text: &str) {
        let Some(inner) = &self.inner else { return };
        if let Err(e) = inner.speak(text).await {
            warn!(error = %e, "speech synthesis or playback failed");
        }
    }
}

impl SpeakerInner {
    async fn speak(&self, text: &str) -> Result<()> {
        let url = format!(
            "{}/v1/text-to-speech/{}?output_format={}",
            self.base_url, self.voice_id, OUTPUT_FORMAT
        );
        let body = serde_json::json!({ "text": text, "model_id": TTS_MODEL });

        let response = self
            .client
            .post(&url)
            .header("xi-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| CasterError::Http {
                url: url.clone(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CasterError::UnexpectedStatus {
                url: url.clone(),
                status,
            });
        }

        let audio = response.bytes().await.map_err(|e| CasterError::ResponseBody {
            url: url.clone(),
            source: e,
        })?;
        debug!(bytes = audio.len(), "received synthesized audio");

        play_to_completion(audio.to_vec()).await
    }
}

/// Decode and play an MP3 buffer, returning once playback has finished.
/// Runs on the blocking pool so the deliberately blocking playback does
/// not tie up the async runtime.
async fn play_to_completion(audio: Vec<u8>) -> Result<()> {
    tokio::task::spawn_blocking(move || {
        let (_stream, handle) = rodio::OutputStream::try_default()
            .map_err(|e| CasterError::Audio(e.to_string()))?;
        let sink =
            rodio::Sink::try_new(&handle).map_err(|e| CasterError::Audio(e.to_string()))?;
        let source = rodio::Decoder::new(Cursor::new(audio))
            .map_err(|e| CasterError::Audio(e.to_string()))?;
        sink.append(source);
        sink.sleep_until_end();
        Ok(())
    })
    .await
    .map_err(|e| CasterError::Audio(e.to_string()))?
}
