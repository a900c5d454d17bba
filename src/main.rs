//! Terminal versus-Tetris runner (default binary).
//!
//! Drives the core one tick at a time: commands apply as key events
//! arrive, gravity fires on its own timer, and lock resolution runs every
//! loop iteration so both seats resolve in order within the same tick.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_tetris_duel::core::Battle;
use tui_tetris_duel::input::{map_key, should_quit};
use tui_tetris_duel::term::TerminalRenderer;
use tui_tetris_duel::types::GRAVITY_MS;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn clock_seed() -> u32 {
    use std::time::{SystemTime, UNIX_EPOCH};
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(d) => d.subsec_nanos() ^ d.as_secs() as u32,
        Err(_) => 1,
    }
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut battle = Battle::new(clock_seed());
    battle.start();

    let gravity_interval = Duration::from_millis(GRAVITY_MS as u64);
    let mut last_gravity = Instant::now();

    loop {
        term.draw(&battle.snapshot())?;

        if !battle.running() {
            // Leave the final frame up until a key press.
            loop {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        return Ok(());
                    }
                }
            }
        }

        // Input with timeout until the next gravity tick.
        let timeout = gravity_interval
            .checked_sub(last_gravity.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some((player, command)) = map_key(key) {
                        battle.apply(player, command);
                    }
                }
            }
        }

        if last_gravity.elapsed() >= gravity_interval {
            last_gravity = Instant::now();
            battle.gravity();
        }

        battle.resolve();
    }
}
