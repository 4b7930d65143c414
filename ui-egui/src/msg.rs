// SPDX-License-Identifier: MIT OR Apache-2.0

//! Message types for UI-worker communication.
//!
//! Every request carries a sequence number; the worker echoes it back so
//! the UI can discard responses that were overtaken by a newer request.

use mancala_core::GameStatus;

/// Messages sent from UI to the request worker
#[derive(Debug, Clone)]
pub enum UiToNet {
    /// Begin a fresh game session (also serves as reset)
    StartGame { seq: u64 },
    /// Submit a move for the acting player
    PlayMove { seq: u64, player: String, pit: u32 },
    /// Shut down the worker
    Shutdown,
}

/// Messages sent from the request worker to the UI
#[derive(Debug, Clone)]
pub enum NetToUi {
    /// A request completed with a fresh game status
    Status { seq: u64, status: GameStatus },
    /// A request failed at the transport level or with an error status
    RequestFailed { seq: u64, message: String },
    /// Acknowledgment that shutdown was processed
    ShutdownAck,
}
