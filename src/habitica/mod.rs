use std::time::Duration;

use reqwest::Client;

use crate::{
    core::RemticaError,
    session::sync::{
        ScoreDirection,
        StatsRemote,
    },
};

pub mod api;
pub mod types;

pub use types::{
    Credentials,
    UserData,
    UserStats,
};

#[cfg(test)]
mod types_tests;

pub fn http_client() -> Result<Client, RemticaError> {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .map_err(|e| RemticaError::Custom(format!("HTTP client build failed: {e}")))
}

/// The one remote the session talks to. Credentials ride along so callers
/// never touch headers themselves.
pub struct HabiticaRemote {
    client: Client,
    base_url: String,
    credentials: Credentials,
}

impl HabiticaRemote {
    pub fn new(
        base_url: impl Into<String>,
        credentials: Credentials,
    ) -> Result<Self, RemticaError> {
        Ok(Self { client: http_client()?, base_url: base_url.into(), credentials })
    }

    /// Full user document, for the startup banner and connectivity check.
    pub async fn fetch_user(&self) -> Result<UserData, RemticaError> {
        api::get_user(&self.client, &self.base_url, &self.credentials).await
    }
}

impl StatsRemote for HabiticaRemote {
    async fn fetch_stats(&self) -> Result<UserStats, RemticaError> {
        Ok(self.fetch_user().await?.stats)
    }

    async fn push_absolute(&self, hp: f64, exp: f64) -> Result<(), RemticaError> {
        api::update_stats(&self.client, &self.base_url, &self.credentials, hp, exp).await
    }

    async fn score_reward(
        &self,
        direction: ScoreDirection,
        amount: f64,
        notes: &str,
    ) -> Result<(), RemticaError> {
        match direction {
            ScoreDirection::Up => {
                api::score_up(&self.client, &self.base_url, &self.credentials, amount, notes).await
            }
            ScoreDirection::Down => {
                api::score_down(&self.client, &self.base_url, &self.credentials, amount, notes)
                    .await
            }
        }
    }
}
