// SPDX-License-Identifier: MIT OR Apache-2.0

//! Session view-state: the single source of truth the UI renders from.
//!
//! The state is replaced wholesale from every successful service response.
//! On a failed request only the `network_error` flag flips; everything else
//! keeps its last-known value so the stale board stays on screen.

use crate::{GameStatus, Pit, Player};

/// Which top-level screen the session is on. Derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing started yet, show the welcome screen
    Welcome,
    /// A game is running, show the board
    Playing,
    /// The game ended, show the result
    Finished,
}

/// View-state for one game session.
///
/// Owned exclusively by the UI app; mutated only through [`apply_status`]
/// and [`mark_network_error`].
///
/// [`apply_status`]: SessionState::apply_status
/// [`mark_network_error`]: SessionState::mark_network_error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    /// Ordered pit list; empty before a session starts
    pub pits: Vec<Pit>,
    /// False exactly when the last submitted move was rejected
    pub legal_move: bool,
    /// Player to move; empty before a session starts
    pub current_player: String,
    pub game_over: bool,
    /// `None` pre-game, mid-game, and on a draw
    pub winner: Option<Player>,
    /// True exactly when the last request failed
    pub network_error: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            pits: Vec::new(),
            legal_move: true,
            current_player: String::new(),
            game_over: false,
            winner: None,
            network_error: false,
        }
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole state from a service response and clear the
    /// network-error flag. Applying the same response twice is a no-op.
    pub fn apply_status(&mut self, status: GameStatus) {
        let status = status.normalize_winner();
        self.pits = status.current_board_status.all_pits;
        self.legal_move = status.legal_move;
        self.current_player = status.next_player.id;
        self.game_over = status.end_game;
        self.winner = status.winner;
        self.network_error = false;
    }

    /// Record a failed request. All other fields keep their stale values.
    pub fn mark_network_error(&mut self) {
        self.network_error = true;
    }

    /// A session exists once the service has named a player or dealt pits.
    pub fn session_started(&self) -> bool {
        !self.current_player.is_empty() || !self.pits.is_empty()
    }

    pub fn phase(&self) -> Phase {
        if self.game_over {
            Phase::Finished
        } else if self.session_started() {
            Phase::Playing
        } else {
            Phase::Welcome
        }
    }

    /// Draw: the game ended and nobody won. Distinct from the pre-game
    /// "no winner yet" because the session has started.
    pub fn is_draw(&self) -> bool {
        self.game_over && self.winner.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BoardStatus, PitKind};

    fn status(next_player: &str, end_game: bool, winner: Option<&str>) -> GameStatus {
        let pits = (0..14)
            .map(|id| Pit {
                id,
                owner: Some(Player::new(if id < 7 { "PLAYER_1" } else { "PLAYER_2" })),
                kind: if id % 7 == 6 {
                    PitKind::Home
                } else {
                    PitKind::Playground
                },
                stones: 4,
            })
            .collect();
        GameStatus {
            current_board_status: BoardStatus { all_pits: pits },
            legal_move: true,
            next_player: Player::new(next_player),
            end_game,
            winner: winner.map(Player::new),
        }
    }

    #[test]
    fn fresh_state_is_welcome() {
        let state = SessionState::new();
        assert!(state.legal_move);
        assert!(!state.session_started());
        assert_eq!(state.phase(), Phase::Welcome);
        assert!(!state.is_draw());
    }

    #[test]
    fn apply_status_replaces_everything() {
        let mut state = SessionState::new();
        state.network_error = true;

        state.apply_status(status("PLAYER_1", false, None));
        assert_eq!(state.pits.len(), 14);
        assert_eq!(state.current_player, "PLAYER_1");
        assert!(!state.network_error);
        assert!(state.session_started());
        assert_eq!(state.phase(), Phase::Playing);
    }

    #[test]
    fn apply_status_is_idempotent() {
        let mut state = SessionState::new();
        state.apply_status(status("PLAYER_2", false, None));
        let once = state.clone();
        state.apply_status(status("PLAYER_2", false, None));
        assert_eq!(state, once);
    }

    #[test]
    fn sentinel_winner_is_a_draw() {
        let mut state = SessionState::new();
        state.apply_status(status("PLAYER_1", true, Some("None")));
        assert!(state.game_over);
        assert!(state.winner.is_none());
        assert!(state.is_draw());
        assert_eq!(state.phase(), Phase::Finished);
    }

    #[test]
    fn named_winner_is_not_a_draw() {
        let mut state = SessionState::new();
        state.apply_status(status("PLAYER_1", true, Some("PLAYER_2")));
        assert_eq!(state.winner, Some(Player::new("PLAYER_2")));
        assert!(!state.is_draw());
    }

    #[test]
    fn network_error_freezes_previous_state() {
        let mut state = SessionState::new();
        state.apply_status(status("PLAYER_1", false, None));
        let before = state.clone();

        state.mark_network_error();
        assert!(state.network_error);
        assert_eq!(state.pits, before.pits);
        assert_eq!(state.current_player, before.current_player);
        assert_eq!(state.game_over, before.game_over);
    }

    #[test]
    fn successful_response_clears_network_error() {
        let mut state = SessionState::new();
        state.mark_network_error();
        state.apply_status(status("PLAYER_1", false, None));
        assert!(!state.network_error);
    }
}
