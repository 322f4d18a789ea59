//! Runtime configuration from environment variables (or a `.env` file),
//! plus the League client lockfile that carries the LCU port and password.

use std::path::Path;

use crate::error::{CasterError, Result};

/// Default lockfile location for a standard Windows install.
const DEFAULT_LOCKFILE_PATH: &str = "C:/Riot Games/League of Legends/lockfile";
const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";
const DEFAULT_POLL_INTERVAL_SECS: u64 = 2;

/// Everything the commentator needs, loaded once at startup.
#[derive(Debug, Clone)]
pub struct CasterConfig {
    pub gemini_api_key: String,
    pub gemini_model: String,
    /// Optional; without both speech keys, audio output is disabled.
    pub elevenlabs_api_key: Option<String>,
    pub voice_id: Option<String>,
    pub lockfile_path: String,
    /// Seconds to wait between loop iterations.
    pub poll_interval_secs: u64,
    /// Emit ambient (no-new-events) commentary every N in-game ticks.
    /// 1 means every idle tick.
    pub ambient_comment_every: u32,
}

impl CasterConfig {
    /// Load configuration, reading a `.env` file first if one exists.
    ///
    /// `GEMINI_API_KEY` is the only required variable. The ElevenLabs
    /// keys are optional and their absence silently disables speech.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let gemini_api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| CasterError::MissingEnv("GEMINI_API_KEY"))?;
        let gemini_model = std::env::var("GEMINI_LLM_MODEL")
            .unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string());
        let elevenlabs_api_key = std::env::var("ELEVENLABS_API_KEY").ok();
        let voice_id = std::env::var("VOICE_ID").ok();
        let lockfile_path = std::env::var("LOL_LOCKFILE_PATH")
            .unwrap_or_else(|_| DEFAULT_LOCKFILE_PATH.to_string());
        let poll_interval_secs = parse_env("POLL_INTERVAL_SECS", DEFAULT_POLL_INTERVAL_SECS);
        let ambient_comment_every = parse_env("AMBIENT_COMMENT_EVERY", 1);

        Ok(Self {
            gemini_api_key,
            gemini_model,
            elevenlabs_api_key,
            voice_id,
            lockfile_path,
            poll_interval_secs,
            ambient_comment_every,
        })
    }
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Connection details parsed from the client lockfile. The file is a
/// single `name:pid:port:password:protocol` line.
#[derive(Debug, Clone)]
pub struct LockfileCredentials {
    pub port: u16,
    pub password: String,
}

impl LockfileCredentials {
    /// Read and parse the lockfile at `path`.
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| CasterError::Lockfile {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::parse(&raw).ok_or_else(|| CasterError::Lockfile {
            path: path.display().to_string(),
            reason: "expected name:pid:port:password:protocol".to_string(),
        })
    }

    fn parse(raw: &str) -> Option<Self> {
        let fields: Vec<&str> = raw.trim().split(':').collect();
        if fields.len() != 5 {
            return None;
        }
        let port = fields[2].parse().ok()?;
        Some(Self {
            port,
            password: fields[3].to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_well_formed_lockfile() {
        let creds = LockfileCredentials::parse("LeagueClient:8724:52361:sekrit:https").unwrap();
        assert_eq!(creds.port, 52361);
        assert_eq!(creds.password, "sekrit");
    }

    #[test]
    fn trailing_newline_is_tolerated() {
        let creds = LockfileCredentials::parse("LeagueClient:8724:52361:sekrit:https\n").unwrap();
        assert_eq!(creds.port, 52361);
    }

    #[test]
    fn rejects_wrong_field_count_or_bad_port() {
        assert!(LockfileCredentials::parse("only:four:fields:here").is_none());
        assert!(LockfileCredentials::parse("LeagueClient:8724:notaport:sekrit:https").is_none());
    }

    #[test]
    fn missing_file_reports_the_path() {
        let err = LockfileCredentials::read("/definitely/not/a/lockfile").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/a/lockfile"));
    }
}
