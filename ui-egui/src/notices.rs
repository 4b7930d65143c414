// SPDX-License-Identifier: MIT OR Apache-2.0

//! Derives the single transient status message from the session state.
//!
//! At most one message is shown at a time; a finished game outranks a
//! network failure, which outranks a rejected move.

use mancala_core::session::SessionState;

use crate::toast_manager::ToastType;

/// The messages the status surface can announce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Winner(String),
    Draw,
    NetworkDown,
    IllegalMove,
}

impl Notice {
    pub fn text(&self) -> String {
        match self {
            Notice::Winner(id) => format!("Winner: {id}"),
            Notice::Draw => "It's a draw!".to_owned(),
            Notice::NetworkDown => "Please recheck network connection.".to_owned(),
            Notice::IllegalMove => "Illegal move!".to_owned(),
        }
    }

    pub fn level(&self) -> ToastType {
        match self {
            Notice::Winner(_) => ToastType::Success,
            Notice::Draw => ToastType::Info,
            Notice::NetworkDown => ToastType::Error,
            Notice::IllegalMove => ToastType::Warning,
        }
    }
}

/// Derive at most one notice from the current state.
pub fn derive_notice(state: &SessionState) -> Option<Notice> {
    if state.game_over {
        Some(match &state.winner {
            Some(winner) => Notice::Winner(winner.id.clone()),
            None => Notice::Draw,
        })
    } else if state.network_error {
        Some(Notice::NetworkDown)
    } else if !state.legal_move {
        Some(Notice::IllegalMove)
    } else {
        None
    }
}

/// Remembers the last derived notice so repeated renders with an unchanged
/// message stay silent; only transitions are dispatched.
#[derive(Debug, Default)]
pub struct NoticeTracker {
    last: Option<Notice>,
}

impl NoticeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the notice to dispatch, if the derived message changed since
    /// the previous call.
    pub fn on_state_change(&mut self, state: &SessionState) -> Option<Notice> {
        let next = derive_notice(state);
        if next == self.last {
            return None;
        }
        self.last = next.clone();
        next
    }
}
