// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the remote Mancala game service.
//!
//! The whole service boundary is two GET endpoints: `/start` begins a fresh
//! session, `/move` submits one move. Both answer with a full game status.
//! Rules, turn order and win detection are the service's business; this
//! crate only moves JSON.

#![deny(unsafe_code)]
#![deny(clippy::all)]
#![allow(async_fn_in_trait)]

use std::time::Duration;

use anyhow::{Context, Result};
use mancala_core::GameStatus;
use reqwest::Url;

#[cfg(any(test, feature = "stub"))]
pub mod stub;

/// The two operations the game service offers.
///
/// The UI worker is generic over this so tests can swap the HTTP backend
/// for [`stub::StubClient`].
pub trait GameService {
    /// Begin a fresh session.
    async fn start(&self) -> Result<GameStatus>;

    /// Submit a move for `player` on pit `pit`.
    async fn play_move(&self, player: &str, pit: u32) -> Result<GameStatus>;
}

/// Client for the real HTTP backend.
pub struct ApiClient {
    http: reqwest::Client,
    base: Url,
}

impl ApiClient {
    /// Build a client against `base_url`, e.g. `http://localhost:8080`.
    pub fn new(base_url: &str) -> Result<Self> {
        let base = Url::parse(base_url)
            .with_context(|| format!("invalid server URL: {base_url}"))?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self { http, base })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base
            .join(path)
            .with_context(|| format!("invalid endpoint path: {path}"))
    }

    async fn fetch_status(&self, url: Url) -> Result<GameStatus> {
        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .with_context(|| format!("request to {url} failed"))?
            .error_for_status()
            .context("game service answered with an error status")?;

        let status: GameStatus = response
            .json()
            .await
            .context("failed to parse game status response")?;
        Ok(status.normalize_winner())
    }
}

impl GameService for ApiClient {
    async fn start(&self) -> Result<GameStatus> {
        let url = self.endpoint("start")?;
        tracing::debug!(%url, "requesting new game session");
        self.fetch_status(url).await
    }

    async fn play_move(&self, player: &str, pit: u32) -> Result<GameStatus> {
        let mut url = self.endpoint("move")?;
        url.query_pairs_mut()
            .append_pair("playerID", player)
            .append_pair("pitID", &pit.to_string());
        tracing::debug!(%url, "submitting move");
        self.fetch_status(url).await
    }
}
