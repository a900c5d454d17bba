//! TerminalRenderer: draws the battle snapshot to a real terminal.
//!
//! Cell colors follow the numeric cell contract (1-7 piece colors, 8
//! garbage, 9 border); the falling pieces are overlaid from snapshot data
//! the same way the locked grid is drawn.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::core::pieces::masks;
use crate::core::snapshot::{BattleSnapshot, PlayerSnapshot};
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH, CELL_EMPTY};

/// Terminal columns per grid cell; 2:1 compensates the glyph aspect ratio.
const CELL_W: u16 = 2;

/// Columns between the two board frames.
const BOARD_GAP: u16 = 6;

const FRAME_W: u16 = BOARD_WIDTH as u16 * CELL_W + 2;
const FRAME_H: u16 = BOARD_HEIGHT as u16 + 2;

pub struct TerminalRenderer {
    stdout: io::Stdout,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Full redraw of both boards plus status lines.
    pub fn draw(&mut self, snapshot: &BattleSnapshot) -> Result<()> {
        self.stdout
            .queue(terminal::Clear(terminal::ClearType::All))?;

        let (term_w, term_h) = terminal::size().unwrap_or((80, 24));
        let total_w = FRAME_W * 2 + BOARD_GAP;
        let start_x = term_w.saturating_sub(total_w) / 2;
        let start_y = term_h.saturating_sub(FRAME_H + 2) / 2;

        self.draw_board(&snapshot.players[0], start_x, start_y, "P1 arrows+enter")?;
        self.draw_board(
            &snapshot.players[1],
            start_x + FRAME_W + BOARD_GAP,
            start_y,
            "P2 wasd+space",
        )?;

        if !snapshot.running {
            let msg = "GAME OVER - press any key";
            let x = start_x + total_w.saturating_sub(msg.len() as u16) / 2;
            self.stdout
                .queue(cursor::MoveTo(x, start_y + FRAME_H + 1))?;
            self.stdout.queue(ResetColor)?;
            self.stdout.queue(Print(msg))?;
        }

        self.stdout.queue(ResetColor)?;
        self.stdout.flush()?;
        Ok(())
    }

    fn draw_board(
        &mut self,
        snap: &PlayerSnapshot,
        origin_x: u16,
        origin_y: u16,
        label: &str,
    ) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(cursor::MoveTo(origin_x, origin_y))?;
        self.stdout.queue(Print(label))?;

        let top = origin_y + 1;

        // Frame
        self.stdout.queue(cursor::MoveTo(origin_x, top))?;
        self.stdout
            .queue(Print(format!("+{}+", "-".repeat((FRAME_W - 2) as usize))))?;
        self.stdout
            .queue(cursor::MoveTo(origin_x, top + FRAME_H - 1))?;
        self.stdout
            .queue(Print(format!("+{}+", "-".repeat((FRAME_W - 2) as usize))))?;

        // Interior with overlay of the falling piece
        let mut grid = snap.grid;
        if let Some(active) = snap.active {
            let mask = masks(active.kind)[active.rotation];
            for (i, row) in mask.iter().enumerate() {
                for (j, &v) in row.iter().enumerate() {
                    let x = active.x as i16 + j as i16;
                    let y = active.y as i16 + i as i16;
                    if v != CELL_EMPTY
                        && x >= 0
                        && y >= 0
                        && (x as usize) < BOARD_WIDTH
                        && (y as usize) < BOARD_HEIGHT
                    {
                        grid[y as usize][x as usize] = v;
                    }
                }
            }
        }

        for (y, row) in grid.iter().enumerate() {
            self.stdout
                .queue(cursor::MoveTo(origin_x, top + 1 + y as u16))?;
            self.stdout.queue(ResetColor)?;
            self.stdout.queue(Print("|"))?;
            for &v in row.iter() {
                if v == CELL_EMPTY {
                    self.stdout.queue(ResetColor)?;
                    self.stdout.queue(Print("  "))?;
                } else {
                    self.stdout.queue(SetBackgroundColor(cell_color(v)))?;
                    self.stdout.queue(SetForegroundColor(Color::Black))?;
                    self.stdout.queue(Print("  "))?;
                }
            }
            self.stdout.queue(ResetColor)?;
            self.stdout.queue(Print("|"))?;
        }

        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Color for a nonzero cell value.
fn cell_color(v: Cell) -> Color {
    match v {
        1 => Color::Rgb { r: 0, g: 255, b: 0 },
        2 => Color::Rgb { r: 255, g: 0, b: 0 },
        3 => Color::Rgb {
            r: 0,
            g: 255,
            b: 255,
        },
        4 => Color::Rgb {
            r: 255,
            g: 255,
            b: 0,
        },
        5 => Color::Rgb {
            r: 255,
            g: 165,
            b: 0,
        },
        6 => Color::Rgb { r: 0, g: 0, b: 255 },
        7 => Color::Rgb {
            r: 128,
            g: 0,
            b: 128,
        },
        8 => Color::Rgb {
            r: 128,
            g: 128,
            b: 128,
        },
        _ => Color::Rgb {
            r: 255,
            g: 192,
            b: 203,
        },
    }
}
