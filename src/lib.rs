//! Two-player versus Tetris for the terminal.
//!
//! `core` is the deterministic simulation engine (no I/O). `input` and
//! `term` are the keyboard and rendering collaborators wired up by the
//! default binary; they contain no game rules.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
