//! HTTP access to the stats API.

use reqwest::{Client, StatusCode};
use serde_json::Value;

use super::error::ClientError;
use super::normalize::{self, Normalize};
use super::records::{Goalkeeper, League, Player, Team};
use super::summary::LandingSummary;
use crate::config::ClientConfig;

/// Source of dashboard data. Implemented over HTTP by [`ApiClient`].
#[allow(async_fn_in_trait)]
pub trait StatsSource {
    async fn leagues(&self) -> Result<Vec<League>, ClientError>;

    async fn teams(&self, competition_key: i32) -> Result<Vec<Team>, ClientError>;

    async fn players(&self, team_key: i32) -> Result<Vec<Player>, ClientError>;

    /// `Ok(None)` when the player does not exist.
    async fn player(&self, player_key: i32) -> Result<Option<Player>, ClientError>;

    async fn goalkeepers(&self, competition_key: i32) -> Result<Vec<Goalkeeper>, ClientError>;
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ClientError::Builder)?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Pre-aggregated landing totals computed by the server.
    pub async fn summary(&self) -> Result<LandingSummary, ClientError> {
        let url = self.url("/summary");
        let resp = self.send(&url).await?;
        resp.json()
            .await
            .map_err(|source| ClientError::Http { url, source })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(&self, url: &str) -> Result<reqwest::Response, ClientError> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| ClientError::Http {
                url: url.to_string(),
                source,
            })?;

        if !resp.status().is_success() {
            return Err(ClientError::Status {
                status: resp.status(),
                url: url.to_string(),
            });
        }
        Ok(resp)
    }

    async fn get_list<T: Normalize>(&self, path: &str) -> Result<Vec<T>, ClientError> {
        let url = self.url(path);
        let rows: Vec<Value> = self
            .send(&url)
            .await?
            .json()
            .await
            .map_err(|source| ClientError::Http { url, source })?;
        Ok(normalize::normalize_all(&rows)?)
    }
}

impl StatsSource for ApiClient {
    async fn leagues(&self) -> Result<Vec<League>, ClientError> {
        self.get_list("/leagues").await
    }

    async fn teams(&self, competition_key: i32) -> Result<Vec<Team>, ClientError> {
        self.get_list(&format!("/leagues/{competition_key}/teams")).await
    }

    async fn players(&self, team_key: i32) -> Result<Vec<Player>, ClientError> {
        self.get_list(&format!("/teams/{team_key}/players")).await
    }

    async fn player(&self, player_key: i32) -> Result<Option<Player>, ClientError> {
        let url = self.url(&format!("/player/{player_key}"));
        let resp = match self.send(&url).await {
            Ok(resp) => resp,
            Err(ClientError::Status { status, .. }) if status == StatusCode::NOT_FOUND => {
                return Ok(None)
            }
            Err(e) => return Err(e),
        };

        let row: Value = resp
            .json()
            .await
            .map_err(|source| ClientError::Http { url, source })?;
        Ok(Some(normalize::normalize(&row)?))
    }

    async fn goalkeepers(&self, competition_key: i32) -> Result<Vec<Goalkeeper>, ClientError> {
        self.get_list(&format!("/goalkeepers?competitionId={competition_key}"))
            .await
    }
}
