//! Board module - manages the game grid
//!
//! The playfield is a 10x20 interior window inside a fixed array with a
//! 2-cell padding band on every side. Side and bottom padding hold the
//! border sentinel so boundary collisions are ordinary overlap checks; the
//! top band is empty so freshly spawned pieces can sit above the visible
//! window. Piece positions are always unpadded; `pad` is the only place
//! the offset arithmetic lives.

use std::fmt;

use arrayvec::ArrayVec;

use crate::core::pieces::Tetromino;
use crate::types::{
    Cell, BOARD_HEIGHT, BOARD_WIDTH, CELL_BORDER, CELL_EMPTY, CELL_GARBAGE, GARBAGE_GAP_MIN,
    PADDING,
};

/// Storage dimensions including the padding band.
const PADDED_WIDTH: usize = BOARD_WIDTH + 2 * PADDING;
const PADDED_HEIGHT: usize = BOARD_HEIGHT + 2 * PADDING;

/// Translate an unpadded coordinate into padded storage.
///
/// Pieces in the top band have coordinates as low as `-PADDING`, so the
/// result is still signed; a padded coordinate below zero is out of play.
#[inline]
pub fn pad(v: i8) -> i8 {
    v + PADDING as i8
}

/// The game grid - interior window plus sentinel padding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; PADDED_WIDTH]; PADDED_HEIGHT],
}

impl Board {
    /// Create a new empty board with its sentinel border in place
    pub fn new() -> Self {
        let mut cells = [[CELL_EMPTY; PADDED_WIDTH]; PADDED_HEIGHT];

        // Side columns are sentinel for every row, the top band included.
        for row in cells.iter_mut() {
            for x in 0..PADDING {
                row[x] = CELL_BORDER;
                row[PADDED_WIDTH - 1 - x] = CELL_BORDER;
            }
        }

        // Bottom band is sentinel across its full width.
        for y in 0..PADDING {
            cells[PADDED_HEIGHT - 1 - y] = [CELL_BORDER; PADDED_WIDTH];
        }

        Self { cells }
    }

    pub fn width(&self) -> usize {
        BOARD_WIDTH
    }

    pub fn height(&self) -> usize {
        BOARD_HEIGHT
    }

    /// Cell in padded storage; anything outside the array reads as border.
    #[inline]
    fn at(&self, px: i8, py: i8) -> Cell {
        if px < 0 || py < 0 || px as usize >= PADDED_WIDTH || py as usize >= PADDED_HEIGHT {
            return CELL_BORDER;
        }
        self.cells[py as usize][px as usize]
    }

    #[inline]
    fn interior(&self, x: usize, y: usize) -> Cell {
        self.cells[y + PADDING][x + PADDING]
    }

    #[inline]
    fn set_interior(&mut self, x: usize, y: usize, v: Cell) {
        self.cells[y + PADDING][x + PADDING] = v;
    }

    /// Read one interior cell (unpadded coordinates). This is the rendering
    /// contract surface: values are exported exactly as stored.
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        self.interior(x, y)
    }

    /// Write one interior cell. Fixture surface for tests and benches; the
    /// engine itself mutates the grid only through the operations below.
    pub fn set_cell(&mut self, x: usize, y: usize, v: Cell) {
        self.set_interior(x, y, v);
    }

    /// Copy the interior window into a row-major grid.
    pub fn write_grid(&self, out: &mut [[Cell; BOARD_WIDTH]; BOARD_HEIGHT]) {
        for (y, row) in out.iter_mut().enumerate() {
            for (x, cell) in row.iter_mut().enumerate() {
                *cell = self.interior(x, y);
            }
        }
    }

    /// Check whether the piece sits on a legal position: its padded origin
    /// is non-negative and none of its occupied mask cells overlaps a
    /// nonzero grid cell. The origin check is against the padded zero, so a
    /// spawned piece inside the top band (y down to -2) is legal.
    pub fn is_valid(&self, piece: &Tetromino) -> bool {
        let px = pad(piece.x);
        let py = pad(piece.y);
        if px < 0 || py < 0 {
            return false;
        }

        piece.mask().iter().enumerate().all(|(i, row)| {
            row.iter().enumerate().all(|(j, &v)| {
                v == CELL_EMPTY || self.at(px + j as i8, py + i as i8) == CELL_EMPTY
            })
        })
    }

    /// Merge the piece's mask into the grid additively.
    ///
    /// Precondition: the caller has confirmed the position via `is_valid`.
    /// No bounds or overlap checking happens here; placing an overlapping
    /// piece corrupts cell identities.
    pub fn place(&mut self, piece: &Tetromino) {
        let px = pad(piece.x);
        let py = pad(piece.y);

        for (i, row) in piece.mask().iter().enumerate() {
            for (j, &v) in row.iter().enumerate() {
                if v != CELL_EMPTY {
                    self.cells[(py + i as i8) as usize][(px + j as i8) as usize] += v;
                }
            }
        }
    }

    /// Clear full interior rows and return how many there were.
    ///
    /// The full-row indices are recorded once against the pre-clear state,
    /// then applied one at a time in ascending order against the live grid:
    /// zero the recorded row, pull rows `[0, r)` down one, zero the top
    /// row. Earlier shifts are visible to later ones, so k simultaneous
    /// full rows behave like k sequential single-row removals at the
    /// recorded indices, not one atomic compaction.
    pub fn clear_lines(&mut self) -> u32 {
        let mut full: ArrayVec<usize, BOARD_HEIGHT> = ArrayVec::new();
        for y in 0..BOARD_HEIGHT {
            if (0..BOARD_WIDTH).all(|x| self.interior(x, y) != CELL_EMPTY) {
                full.push(y);
            }
        }

        for &line in &full {
            for x in 0..BOARD_WIDTH {
                self.set_interior(x, line, CELL_EMPTY);
            }
            for y in (1..=line).rev() {
                for x in 0..BOARD_WIDTH {
                    let above = self.interior(x, y - 1);
                    self.set_interior(x, y, above);
                }
            }
            for x in 0..BOARD_WIDTH {
                self.set_interior(x, 0, CELL_EMPTY);
            }
        }

        full.len() as u32
    }

    /// True iff any cell of the top interior row is occupied - the
    /// overflow signal used before garbage injection.
    pub fn top_row_occupied(&self) -> bool {
        (0..BOARD_WIDTH).any(|x| self.interior(x, 0) != CELL_EMPTY)
    }

    /// Push the interior up one row (the old top row is lost) and write a
    /// garbage row at the bottom with a single empty column at `gap`.
    pub fn inject_garbage_row(&mut self, gap: usize) {
        debug_assert!((GARBAGE_GAP_MIN..BOARD_WIDTH).contains(&gap));

        for y in 0..BOARD_HEIGHT - 1 {
            for x in 0..BOARD_WIDTH {
                let below = self.interior(x, y + 1);
                self.set_interior(x, y, below);
            }
        }
        for x in 0..BOARD_WIDTH {
            let v = if x == gap { CELL_EMPTY } else { CELL_GARBAGE };
            self.set_interior(x, BOARD_HEIGHT - 1, v);
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Diagnostic dump: one character per interior cell, keyed by cell value.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..BOARD_HEIGHT {
            for x in 0..BOARD_WIDTH {
                let c = match self.interior(x, y) {
                    CELL_EMPTY => '.',
                    v => char::from_digit(v as u32, 10).unwrap_or('?'),
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
