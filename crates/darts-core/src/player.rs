//! Player state for the 365 Darts countdown game.
//!
//! Each player counts down from 365 to exactly zero. Alongside the live
//! score we track the score the player had when their current turn started,
//! which is the value a bust reverts to.

use serde::{Deserialize, Serialize};

/// Player identifier, assigned 1..N at game start and stable for the game
pub type PlayerId = u8;

/// Score every player starts the game with
pub const STARTING_SCORE: u16 = 365;

/// A player in the game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Stable identifier (1-based)
    pub id: PlayerId,
    /// Display name
    pub name: String,
    /// Current score, always within 0..=365
    pub score: u16,
    /// Score at the start of the player's current turn (bust revert target)
    pub turn_start_score: u16,
}

impl Player {
    /// Create a player at the starting score.
    ///
    /// Blank or whitespace-only names get the default `"PLAYER <id>"`.
    pub fn new(id: PlayerId, name: &str) -> Self {
        let trimmed = name.trim();
        let name = if trimmed.is_empty() {
            format!("PLAYER {}", id)
        } else {
            trimmed.to_string()
        };

        Self {
            id,
            name,
            score: STARTING_SCORE,
            turn_start_score: STARTING_SCORE,
        }
    }

    /// Whether this player has reached exactly zero
    pub fn has_won(&self) -> bool {
        self.score == 0
    }

    /// Send this player back to the starting score (collision rule)
    pub(crate) fn reset_score(&mut self) {
        self.score = STARTING_SCORE;
        self.turn_start_score = STARTING_SCORE;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_at_starting_score() {
        let player = Player::new(1, "Alice");
        assert_eq!(player.score, 365);
        assert_eq!(player.turn_start_score, 365);
        assert_eq!(player.name, "Alice");
        assert!(!player.has_won());
    }

    #[test]
    fn test_blank_name_gets_default() {
        assert_eq!(Player::new(1, "").name, "PLAYER 1");
        assert_eq!(Player::new(3, "   ").name, "PLAYER 3");
    }

    #[test]
    fn test_name_is_trimmed() {
        assert_eq!(Player::new(2, "  Bob  ").name, "Bob");
    }

    #[test]
    fn test_reset_score() {
        let mut player = Player::new(1, "Alice");
        player.score = 120;
        player.turn_start_score = 140;
        player.reset_score();
        assert_eq!(player.score, 365);
        assert_eq!(player.turn_start_score, 365);
    }
}
