// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mancala Client Core - Wire Types and Session State
//!
//! This crate provides the non-visual half of the Mancala client:
//! - Typed mirrors of the game service's JSON responses
//! - Board partitioning for rendering
//! - The session view-state and its response-to-state mapping
//!
//! All rules live behind the remote service; nothing here validates moves.

#![deny(unsafe_code)]
#![deny(clippy::all)]

pub mod board;
pub mod session;

use serde::{Deserialize, Serialize};

/// Sentinel id the service uses where no real player applies: the winner
/// field before the game starts and after a draw.
pub const EMPTY_PLAYER_ID: &str = "None";

/// Player descriptor as sent by the game service.
///
/// The wire object also carries the player's home-pit id, which this layer
/// never needs; serde drops it on the floor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
}

impl Player {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// True for the service's "no player" sentinel.
    pub fn is_empty(&self) -> bool {
        self.id.is_empty() || self.id == EMPTY_PLAYER_ID
    }
}

/// Kind of a board cell. Wire names are the service's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PitKind {
    /// Ordinary pit a player sows from
    #[serde(rename = "PLAYGROUND")]
    Playground,
    /// A player's scoring pit
    #[serde(rename = "HOME")]
    Home,
}

/// One board cell: stable id, owning player, kind, and stone count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pit {
    pub id: u32,
    #[serde(default)]
    pub owner: Option<Player>,
    #[serde(rename = "pitType")]
    pub kind: PitKind,
    #[serde(rename = "numberOfStones")]
    pub stones: u32,
}

/// Board snapshot: the full ordered pit list. Order is significant, the
/// positions partition into the two players' rows and their home pits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardStatus {
    pub all_pits: Vec<Pit>,
}

/// Full game status as answered by both service endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStatus {
    pub current_board_status: BoardStatus,
    pub legal_move: bool,
    pub next_player: Player,
    pub end_game: bool,
    #[serde(default)]
    pub winner: Option<Player>,
}

impl GameStatus {
    /// Collapse the sentinel empty winner into a real absence.
    ///
    /// The service never omits `winner`; before the game ends and on a draw
    /// it sends `{id: "None", homeID: -1}`. After normalization a draw is
    /// exactly `end_game && winner.is_none()`.
    pub fn normalize_winner(mut self) -> Self {
        if self.winner.as_ref().is_some_and(Player::is_empty) {
            self.winner = None;
        }
        self
    }
}
