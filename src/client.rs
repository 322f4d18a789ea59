//! Thin typed clients for the two local game APIs.
//!
//! The LCU API (League Client Update) listens on a per-launch port with
//! basic auth taken from the lockfile; the Live Client Data API is
//! unauthenticated on a fixed port. Both serve a self-signed certificate,
//! so certificate verification is disabled for these loopback calls.

use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::config::LockfileCredentials;
use crate::error::{CasterError, Result};
use crate::model::{
    ActivePlayerSnapshot, ChampSelectSession, EventFeed, GameflowPhase, PlayerSnapshot, Summoner,
};

const LIVE_CLIENT_BASE_URL: &str = "https://127.0.0.1:2999";
const LCU_USERNAME: &str = "riot";

fn insecure_client() -> reqwest::Client {
    reqwest::Client::builder()
        .danger_accept_invalid_certs(true)
        .build()
        .unwrap_or_default()
}

async fn get_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
    auth: Option<&str>,
) -> Result<T> {
    debug!(url, "fetching");

    let mut request = client.get(url);
    if let Some(password) = auth {
        request = request.basic_auth(LCU_USERNAME, Some(password));
    }

    let response = request.send().await.map_err(|e| CasterError::Http {
        url: url.to_owned(),
        source: e,
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(CasterError::UnexpectedStatus {
            url: url.to_owned(),
            status,
        });
    }

    response.json().await.map_err(|e| CasterError::ResponseBody {
        url: url.to_owned(),
        source: e,
    })
}

/// Client for the LCU API: lobby phase, champion select, summoner info.
pub struct LcuClient {
    http: reqwest::Client,
    base_url: String,
    password: String,
}

impl LcuClient {
    /// Build a client from lockfile credentials.
    pub fn new(credentials: &LockfileCredentials) -> Self {
        Self {
            http: insecure_client(),
            base_url: format!("https://127.0.0.1:{}", credentials.port),
            password: credentials.password.clone(),
        }
    }

    /// Point the client at a different base URL. Intended for tests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, endpoint);
        get_json(&self.http, &url, Some(&self.password)).await
    }

    /// Current coarse game/lobby phase. The endpoint returns a bare JSON
    /// string; unknown values come back as [`GameflowPhase::Other`].
    #[instrument(skip(self))]
    pub async fn get_gameflow_phase(&self) -> Result<GameflowPhase> {
        let raw: String = self.get("/lol-gameflow/v1/gameflow-phase").await?;
        Ok(raw.parse().unwrap_or(GameflowPhase::Other(raw)))
    }

    /// Champion select session snapshot.
    #[instrument(skip(self))]
    pub async fn get_champ_select_session(&self) -> Result<ChampSelectSession> {
        self.get("/lol-champ-select/v1/session").await
    }

    /// The summoner logged into this client.
    #[instrument(skip(self))]
    pub async fn get_current_summoner(&self) -> Result<Summoner> {
        self.get("/lol-summoner/v1/current-summoner").await
    }
}

/// Client for the Live Client Data API: in-game events and stats.
pub struct LiveClient {
    http: reqwest::Client,
    base_url: String,
}

impl LiveClient {
    pub fn new() -> Self {
        Self {
            http: insecure_client(),
            base_url: LIVE_CLIENT_BASE_URL.to_string(),
        }
    }

    /// Point the client at a different base URL. Intended for tests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, endpoint);
        get_json(&self.http, &url, None).await
    }

    /// Cumulative list of in-game events since the match started.
    #[instrument(skip(self))]
    pub async fn get_event_feed(&self) -> Result<EventFeed> {
        self.get("/liveclientdata/eventdata").await
    }

    /// All players in the game with basic stats.
    #[instrument(skip(self))]
    pub async fn get_player_list(&self) -> Result<Vec<PlayerSnapshot>> {
        self.get("/liveclientdata/playerlist").await
    }

    /// Detailed stats for the player currently being observed.
    #[instrument(skip(self))]
    pub async fn get_active_player(&self) -> Result<ActivePlayerSnapshot> {
        self.get("/liveclientdata/activeplayer").await
    }
}

impl Default for LiveClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn lcu_for(server: &MockServer) -> LcuClient {
        let credentials = LockfileCredentials {
            port: 0,
            password: "sekrit".to_string(),
        };
        LcuClient::new(&credentials).with_base_url(server.uri())
    }

    #[tokio::test]
    async fn gameflow_phase_parses_the_bare_string() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/lol-gameflow/v1/gameflow-phase"))
            .respond_with(ResponseTemplate::new(200).set_body_json("InProgress"))
            .mount(&server)
            .await;

        let phase = lcu_for(&server).get_gameflow_phase().await.unwrap();
        assert_eq!(phase, GameflowPhase::InProgress);
    }

    #[tokio::test]
    async fn unknown_gameflow_phase_survives() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/lol-gameflow/v1/gameflow-phase"))
            .respond_with(ResponseTemplate::new(200).set_body_json("Reconnect"))
            .mount(&server)
            .await;

        let phase = lcu_for(&server).get_gameflow_phase().await.unwrap();
        assert_eq!(phase, GameflowPhase::Other("Reconnect".to_string()));
    }

    #[tokio::test]
    async fn event_feed_round_trips_through_the_live_client() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/liveclientdata/eventdata"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "Events": [
                    { "EventID": 0, "EventName": "GameStart", "EventTime": 0.0 },
                    { "EventID": 1, "EventName": "MinionsSpawning", "EventTime": 65.0 }
                ]
            })))
            .mount(&server)
            .await;

        let client = LiveClient::new().with_base_url(server.uri());
        let feed = client.get_event_feed().await.unwrap();
        assert_eq!(feed.events.len(), 2);
        assert_eq!(feed.events[1].event_name, "MinionsSpawning");
    }

    #[tokio::test]
    async fn non_success_status_is_a_typed_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/liveclientdata/activeplayer"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = LiveClient::new().with_base_url(server.uri());
        let err = client.get_active_player().await.unwrap_err();
        assert!(matches!(err, CasterError::UnexpectedStatus { .. }));
    }
}
