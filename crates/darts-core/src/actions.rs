//! Game commands and the events that result from them.
//!
//! Hosts drive the engine through [`GameAction`] values and receive
//! [`GameEvent`]s describing what actually happened. A command issued when
//! its preconditions do not hold is a silent no-op and produces no events.

use crate::player::PlayerId;
use crate::throws::Throw;
use serde::{Deserialize, Serialize};

/// All commands a host can issue against a running game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameAction {
    /// Record a dart throw for the active player.
    ///
    /// Ignored once the turn's three throws are used or the game is won.
    RecordThrow(Throw),

    /// Advance to the next player.
    ///
    /// Only valid after all three throws of the turn have been used.
    NextPlayer,

    /// Undo the last throw or turn advance
    Undo,
}

/// Events describing the outcome of an action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A throw was recorded for the active player
    ThrowRecorded {
        player: PlayerId,
        /// Display label, e.g. "T20", "D5", "MISS"
        label: String,
        points: u16,
    },

    /// The throw would have taken the player below zero; their score
    /// reverted to the turn's starting value and the turn is used up
    Busted {
        player: PlayerId,
        reverted_to: u16,
    },

    /// Another player sat on the exact score the active player landed on
    /// and was sent back to 365
    OpponentReset {
        /// The player whose score was reset
        player: PlayerId,
        /// The active player who landed on their score
        by: PlayerId,
    },

    /// A player reached exactly zero and won the game
    GameWon { player: PlayerId },

    /// The turn passed to the next player
    TurnEnded {
        player: PlayerId,
        next_player: PlayerId,
    },

    /// The last move was undone and the prior state restored
    MoveUndone,
}
