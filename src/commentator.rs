//! Gemini-backed play-by-play commentator.
//!
//! https://ai.google.dev/api/generate-content

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{CasterError, Result};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Spoken in place of real commentary when the Gemini call fails for any
/// reason. Commentary degrades, it never propagates an error.
pub const FALLBACK_CAPTION: &str =
    "Our commentator seems to be having a technical issue. Please stand by.";

const SYSTEM_PROMPT: &str = "You are a professional League of Legends esports commentator. \
Your job is to provide an exciting and engaging play-by-play commentary. \
Use a vibrant and energetic tone. Focus on the most important events like kills, \
objectives taken (Dragons, Barons, Towers), and teamfights. \
Keep your commentary concise and impactful. Do not state that you are an AI model. \
Don't use any special caracters like *";

/// Stateful chat session with the Gemini API.
///
/// Conversation history is kept across calls so captions stay coherent
/// over the course of a match. Constructed once at startup and owned by
/// the driver; there is no global client state.
#[derive(Debug)]
pub struct Commentator {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
    history: Vec<GeminiContent>,
}

impl Commentator {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            model: model.into(),
            base_url: GEMINI_API_BASE.to_string(),
            history: Vec::new(),
        }
    }

    /// Point the commentator at a different API base URL. Intended for tests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Number of turns retained in the chat history.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Turn a block of game context into a short caption. Failures are
    /// logged and replaced by [`FALLBACK_CAPTION`].
    pub async fn caption(&mut self, context: &str) -> String {
        let prompt = format!(
            "The following events just happened in the game:\n{context}\n\n\
             Provide commentary based only on the major events, make it brief."
        );
        match self.send(&prompt).await {
            Ok(caption) => caption,
            Err(e) => {
                warn!(error = %e, "gemini call failed");
                FALLBACK_CAPTION.to_string()
            }
        }
    }

    async fn send(&mut self, prompt: &str) -> Result<String> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let user_turn = GeminiContent {
            role: "user".to_string(),
            parts: vec![GeminiPart {
                text: prompt.to_string(),
            }],
        };
        let mut contents = self.history.clone();
        contents.push(user_turn.clone());

        let payload = GeminiRequest {
            contents,
            system_instruction: Some(GeminiContent {
                role: "user".to_string(),
                parts: vec![GeminiPart {
                    text: SYSTEM_PROMPT.to_string(),
                }],
            }),
        };

        let response = self
            .client
            .post(&url)
            .header("content-type", "application/json")
            .json(&payload)
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

        let body: GeminiResponse =
            response.json().await.map_err(|e| CasterError::ResponseBody {
                url: url.clone(),
                source: e,
            })?;

        let text = body
            .candidates
            .first()
            .map(|c| {
                c.content
                    .parts
                    .iter()
                    .map(|p| p.text.as_str())
                    .collect::<String>()
            })
            .unwrap_or_default();
        if text.is_empty() {
            return Err(CasterError::EmptyCompletion);
        }

        debug!(chars = text.len(), "received caption");

        // Only successful exchanges enter the history; a failed call must
        // not poison later turns.
        self.history.push(user_turn);
        self.history.push(GeminiContent {
            role: "model".to_string(),
            parts: vec![GeminiPart { text: text.clone() }],
        });

        Ok(text)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<GeminiContent>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct GeminiContent {
    role: String,
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct GeminiPart {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Clone, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Clone, Deserialize)]
struct GeminiCandidate {
    content: GeminiContent,
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn caption_body(text: &str) -> serde_json::Value {
        serde_json::json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": text }] },
                "finishReason": "STOP"
            }]
        })
    }

    #[tokio::test]
    async fn successful_call_returns_the_caption_and_grows_history() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/models/gemini-test:generateContent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(caption_body(
                "What a play from Faker in the mid lane!",
            )))
            .mount(&server)
            .await;

        let mut commentator = Commentator::new("k", "gemini-test").with_base_url(server.uri());
        let caption = commentator.caption("[10:00] Faker killed Doublelift").await;
        assert_eq!(caption, "What a play from Faker in the mid lane!");
        assert_eq!(commentator.history_len(), 2);
    }

    #[tokio::test]
    async fn prompt_wraps_the_context_block() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/models/gemini-test:generateContent"))
            .and(body_partial_json(serde_json::json!({
                "contents": [{
                    "role": "user",
                    "parts": [{ "text": "The following events just happened in the game:\n[30:00] Bjergsen killed Baron Nashor\n\nProvide commentary based only on the major events, make it brief." }]
                }]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(caption_body("Baron down!")))
            .mount(&server)
            .await;

        let mut commentator = Commentator::new("k", "gemini-test").with_base_url(server.uri());
        let caption = commentator.caption("[30:00] Bjergsen killed Baron Nashor").await;
        assert_eq!(caption, "Baron down!");
    }

    #[tokio::test]
    async fn server_error_degrades_to_the_fallback_line() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/models/gemini-test:generateContent"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let mut commentator = Commentator::new("k", "gemini-test").with_base_url(server.uri());
        let caption = commentator.caption("anything").await;
        assert_eq!(caption, FALLBACK_CAPTION);
        assert_eq!(commentator.history_len(), 0);
    }

    #[tokio::test]
    async fn empty_candidates_degrade_to_the_fallback_line() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/models/gemini-test:generateContent"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "candidates": [] })),
            )
            .mount(&server)
            .await;

        let mut commentator = Commentator::new("k", "gemini-test").with_base_url(server.uri());
        assert_eq!(commentator.caption("anything").await, FALLBACK_CAPTION);
    }
}
