// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-process fake of the game service for headless tests.

use std::sync::{Arc, Mutex};

use anyhow::{bail, Result};
use mancala_core::{BoardStatus, GameStatus, Pit, PitKind, Player};

use crate::GameService;

pub const PLAYER_ONE: &str = "PLAYER_1";
pub const PLAYER_TWO: &str = "PLAYER_2";

const PITS_PER_SIDE: u32 = 7;
const STONES_PER_PIT: u32 = 4;

/// Scripted fake shaped like the real Mancala backend.
///
/// `start` answers with a fresh two-sided board; moves echo the board back
/// and alternate the turn. The knobs below script the next response:
/// transport failure, rules rejection, or game end. Clones share state, so
/// a test can keep a handle while the worker owns another.
#[derive(Clone, Default)]
pub struct StubClient {
    inner: Arc<Mutex<StubState>>,
}

#[derive(Default)]
struct StubState {
    board: Vec<Pit>,
    next_player: String,
    fail_next: bool,
    illegal_next: bool,
    finish_next: Option<Option<Player>>,
    requests: u32,
}

impl StubClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the next request at the transport level.
    pub fn fail_next_request(&self) {
        self.inner.lock().unwrap().fail_next = true;
    }

    /// Answer the next move as rejected by the rules.
    pub fn reject_next_move(&self) {
        self.inner.lock().unwrap().illegal_next = true;
    }

    /// Answer the next move with the game ended; `winner` of `None` is a draw.
    pub fn finish_next_move(&self, winner: Option<&str>) {
        self.inner.lock().unwrap().finish_next = Some(winner.map(Player::new));
    }

    /// Number of requests served so far, failures included.
    pub fn request_count(&self) -> u32 {
        self.inner.lock().unwrap().requests
    }
}

fn fresh_board() -> Vec<Pit> {
    (0..PITS_PER_SIDE * 2)
        .map(|id| {
            let home = id % PITS_PER_SIDE == PITS_PER_SIDE - 1;
            let owner = if id < PITS_PER_SIDE {
                PLAYER_ONE
            } else {
                PLAYER_TWO
            };
            Pit {
                id,
                owner: Some(Player::new(owner)),
                kind: if home { PitKind::Home } else { PitKind::Playground },
                stones: if home { 0 } else { STONES_PER_PIT },
            }
        })
        .collect()
}

impl StubState {
    fn snapshot(&self, legal_move: bool, end_game: bool, winner: Option<Player>) -> GameStatus {
        GameStatus {
            current_board_status: BoardStatus {
                all_pits: self.board.clone(),
            },
            legal_move,
            next_player: Player::new(self.next_player.clone()),
            end_game,
            winner,
        }
    }
}

impl GameService for StubClient {
    async fn start(&self) -> Result<GameStatus> {
        let mut state = self.inner.lock().unwrap();
        state.requests += 1;
        if std::mem::take(&mut state.fail_next) {
            bail!("stubbed connection failure");
        }
        state.board = fresh_board();
        state.next_player = PLAYER_ONE.to_string();
        state.illegal_next = false;
        state.finish_next = None;
        Ok(state.snapshot(true, false, None))
    }

    async fn play_move(&self, player: &str, _pit: u32) -> Result<GameStatus> {
        let mut state = self.inner.lock().unwrap();
        state.requests += 1;
        if std::mem::take(&mut state.fail_next) {
            bail!("stubbed connection failure");
        }
        if std::mem::take(&mut state.illegal_next) {
            // Rules rejection: board and turn stay as they were.
            return Ok(state.snapshot(false, false, None));
        }
        if let Some(winner) = state.finish_next.take() {
            return Ok(state.snapshot(true, true, winner));
        }
        state.next_player = if player == PLAYER_ONE {
            PLAYER_TWO.to_string()
        } else {
            PLAYER_ONE.to_string()
        };
        Ok(state.snapshot(true, false, None))
    }
}
