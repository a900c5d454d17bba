//! Terminal rendering for the two-board battle view.
//!
//! Keeps `core` deterministic and free of I/O: everything here consumes
//! the battle snapshot and draws it with queued crossterm commands. The
//! two 10x20 boards are small enough that a full redraw per frame needs
//! no diffing layer.

pub mod renderer;

pub use renderer::TerminalRenderer;
