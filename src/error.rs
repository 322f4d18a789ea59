/// All errors that can occur while talking to the game client APIs or the
/// commentary backends.
#[derive(thiserror::Error, Debug)]
pub enum CasterError {
    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Server returned a non-success HTTP status code.
    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Failed to read or decode a response body.
    #[error("failed to decode response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// The League client lockfile was missing or malformed.
    #[error("failed to read lockfile at {path}: {reason}")]
    Lockfile { path: String, reason: String },

    /// A required environment variable is not set.
    #[error("missing required environment variable {0}")]
    MissingEnv(&'static str),

    /// The language model returned a response with no usable text.
    #[error("empty completion from language model")]
    EmptyCompletion,

    /// Audio decoding or playback failed.
    #[error("audio error: {0}")]
    Audio(String),
}

pub type Result<T> = std::result::Result<T, CasterError>;
