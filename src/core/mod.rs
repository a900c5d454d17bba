//! Core module - pure game logic with no external dependencies
//!
//! This module contains the whole deterministic simulation: the shape
//! catalog, the padded grid engine, the per-player piece lifecycle, and
//! the two-player match protocol. It has zero dependencies on UI or I/O.

pub mod battle;
pub mod board;
pub mod pieces;
pub mod player;
pub mod rng;
pub mod snapshot;

// Re-export commonly used types
pub use battle::Battle;
pub use board::Board;
pub use pieces::Tetromino;
pub use player::Player;
pub use rng::SimpleRng;
