//! Core game state machine.
//!
//! This module contains the main `GameState` struct and all scoring logic:
//! the bust rule, the win condition, the score-collision reset rule, turn
//! advancement, and the snapshot-based undo history.

use crate::actions::{GameAction, GameEvent};
use crate::player::{Player, PlayerId};
use crate::throws::Throw;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Throws each player gets per turn
pub const THROWS_PER_TURN: u8 = 3;

/// Errors that can occur when constructing game input
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameError {
    #[error("A game needs at least one player")]
    InvalidPlayerCount,

    #[error("Not a dartboard segment: {value} x{multiplier}")]
    InvalidThrow { value: u8, multiplier: u8 },
}

/// A deep copy of the mutable game state, taken before each throw or turn
/// advance so the move can be undone as one atomic step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub players: Vec<Player>,
    pub current_player_index: usize,
    pub current_turn_throws: Vec<String>,
    pub throws_count: u8,
    pub winner: Option<PlayerId>,
}

/// The complete game state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// All players, in turn order
    pub players: Vec<Player>,
    /// Index of the player whose turn it is
    pub current_player_index: usize,
    /// Display labels of the throws made this turn, oldest first
    pub current_turn_throws: Vec<String>,
    /// Throws used this turn. Tracks `current_turn_throws.len()` except
    /// after a bust, which marks the whole turn as used
    pub throws_count: u8,
    /// Winner, once a player reaches exactly zero
    pub winner: Option<PlayerId>,
    /// Undo history, seeded with the initial state at game start
    history: Vec<Snapshot>,
}

impl GameState {
    /// Create a new game with the given number of players.
    ///
    /// Names are used positionally; missing or blank entries default to
    /// `"PLAYER <n>"`. Everyone starts at 365.
    pub fn new(player_count: u8, names: &[String]) -> Result<Self, GameError> {
        if player_count == 0 {
            return Err(GameError::InvalidPlayerCount);
        }

        let players: Vec<Player> = (0..player_count)
            .map(|i| {
                let name = names.get(i as usize).map(String::as_str).unwrap_or("");
                Player::new(i + 1, name)
            })
            .collect();

        let mut state = Self {
            players,
            current_player_index: 0,
            current_turn_throws: Vec::new(),
            throws_count: 0,
            winner: None,
            history: Vec::new(),
        };

        // Seed the history with the pristine state so the first undo after
        // an action returns all the way to the start of the game.
        state.push_snapshot();

        Ok(state)
    }

    /// Get the number of players
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Get a player by ID
    pub fn get_player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    // ==================== Scoring ====================

    /// Record a throw for the active player.
    ///
    /// No-op (returns no events) if the game is already won or the turn's
    /// three throws are used up. Otherwise the pre-throw state is pushed
    /// onto the undo history and the rules run in order: bust, win,
    /// collision reset.
    pub fn record_throw(&mut self, throw: Throw) -> Vec<GameEvent> {
        if self.winner.is_some() || self.throws_count >= THROWS_PER_TURN {
            return Vec::new();
        }

        self.push_snapshot();

        let mut events = Vec::new();
        let label = throw.label();
        let points = throw.points();

        self.current_turn_throws.push(label.clone());
        self.throws_count += 1;

        let player = &mut self.players[self.current_player_index];
        let player_id = player.id;

        events.push(GameEvent::ThrowRecorded {
            player: player_id,
            label,
            points,
        });

        // Bust: going below zero reverts the whole turn's score progress
        // and uses up the remaining throws. The throw label stays in the
        // turn history for display.
        let candidate = i32::from(player.score) - i32::from(points);
        if candidate < 0 {
            player.score = player.turn_start_score;
            let reverted_to = player.score;
            self.throws_count = THROWS_PER_TURN;

            events.push(GameEvent::Busted {
                player: player_id,
                reverted_to,
            });
            return events;
        }
        let candidate = candidate as u16;

        // Win: exactly zero ends the game. The collision rule is skipped.
        if candidate == 0 {
            player.score = 0;
            self.winner = Some(player_id);

            events.push(GameEvent::GameWon { player: player_id });
            return events;
        }

        player.score = candidate;

        // Collision reset: landing on another player's exact score sends
        // them back to 365. Scores are unique at that value afterwards, so
        // at most one player can match.
        if let Some(other) = self
            .players
            .iter_mut()
            .find(|p| p.id != player_id && p.score == candidate)
        {
            other.reset_score();

            events.push(GameEvent::OpponentReset {
                player: other.id,
                by: player_id,
            });
        }

        events
    }

    // ==================== Turn Management ====================

    /// Pass the turn to the next player.
    ///
    /// No-op unless the game is still running and all three throws of the
    /// turn have been used. Freezes the active player's score as the bust
    /// baseline for their next turn.
    pub fn next_player(&mut self) -> Vec<GameEvent> {
        if self.winner.is_some() || self.throws_count < THROWS_PER_TURN {
            return Vec::new();
        }

        self.push_snapshot();

        let player = &mut self.players[self.current_player_index];
        player.turn_start_score = player.score;
        let previous = player.id;

        self.current_player_index = (self.current_player_index + 1) % self.players.len();
        self.current_turn_throws.clear();
        self.throws_count = 0;

        vec![GameEvent::TurnEnded {
            player: previous,
            next_player: self.players[self.current_player_index].id,
        }]
    }

    // ==================== Undo ====================

    /// Undo the last throw or turn advance.
    ///
    /// Restores the most recent snapshot in full, including the winner flag
    /// when a winning throw is undone. No-op if the history is empty.
    pub fn undo_last_move(&mut self) -> Vec<GameEvent> {
        let Some(snapshot) = self.history.pop() else {
            return Vec::new();
        };

        self.players = snapshot.players;
        self.current_player_index = snapshot.current_player_index;
        self.current_turn_throws = snapshot.current_turn_throws;
        self.throws_count = snapshot.throws_count;
        self.winner = snapshot.winner;

        vec![GameEvent::MoveUndone]
    }

    /// Apply a command to the game state
    pub fn apply_action(&mut self, action: GameAction) -> Vec<GameEvent> {
        match action {
            GameAction::RecordThrow(throw) => self.record_throw(throw),
            GameAction::NextPlayer => self.next_player(),
            GameAction::Undo => self.undo_last_move(),
        }
    }

    // ==================== Queries ====================

    /// Check if the game has been won
    pub fn is_game_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Get the winner, if any
    pub fn winner(&self) -> Option<&Player> {
        self.winner.and_then(|id| self.get_player(id))
    }

    /// The player whose turn it is
    pub fn active_player(&self) -> &Player {
        &self.players[self.current_player_index]
    }

    /// All players except the active one, ordered by ascending id.
    ///
    /// The id ordering is a deliberate stable rule for rotation displays,
    /// not seating order relative to the active player.
    pub fn inactive_players_in_turn_order(&self) -> Vec<&Player> {
        let mut inactive: Vec<&Player> = self
            .players
            .iter()
            .enumerate()
            .filter(|(idx, _)| *idx != self.current_player_index)
            .map(|(_, p)| p)
            .collect();
        inactive.sort_by_key(|p| p.id);
        inactive
    }

    /// All players sorted by ascending score, for the victory display
    pub fn standings(&self) -> Vec<&Player> {
        let mut standings: Vec<&Player> = self.players.iter().collect();
        standings.sort_by_key(|p| p.score);
        standings
    }

    /// Whether there is a move to undo
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Whether the turn can be passed to the next player
    pub fn can_advance_turn(&self) -> bool {
        !self.is_game_over() && self.throws_count == THROWS_PER_TURN
    }

    // ==================== Helper Methods ====================

    fn push_snapshot(&mut self) {
        let snapshot = Snapshot {
            players: self.players.clone(),
            current_player_index: self.current_player_index,
            current_turn_throws: self.current_turn_throws.clone(),
            throws_count: self.throws_count,
            winner: self.winner,
        };
        self.history.push(snapshot);
    }
}
