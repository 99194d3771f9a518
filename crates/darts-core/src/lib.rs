//! 365 Darts - scorekeeping engine for a countdown dart game
//!
//! This crate provides the core game logic for 365 Darts, including:
//! - Throw representation with dartboard segment validation
//! - Player state with per-turn score baselines
//! - Game state machine with full rule enforcement (bust, win, collision reset)
//! - Snapshot-based undo history
//!
//! # Architecture
//!
//! The engine is a pure, synchronous state machine with no I/O of its own.
//! It can be compiled to:
//! - Native Rust for embedding in a host application
//! - WebAssembly for driving a browser scoreboard UI
//!
//! Rendering, persistence, and input collection are host concerns: the host
//! issues commands, re-reads the state for display, and may serialize the
//! whole [`GameState`] (undo history included) to resume a session later.
//!
//! # Modules
//!
//! - [`throws`]: Dart throw type and display-label formatting
//! - [`player`]: Player state and the 365 starting score
//! - [`actions`]: Commands and resulting events
//! - [`game`]: Game state machine
//! - [`engine`]: Game lifecycle (start, reset, restore)

pub mod actions;
pub mod engine;
pub mod game;
pub mod player;
pub mod throws;
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used types
pub use actions::{GameAction, GameEvent};
pub use engine::GameEngine;
pub use game::{GameError, GameState, Snapshot, THROWS_PER_TURN};
pub use player::{Player, PlayerId, STARTING_SCORE};
pub use throws::{format_throw, Throw};
