//! Player module - one contestant's piece lifecycle
//!
//! A player owns one board, at most one falling piece, and its own seeded
//! RNG for shape draws and garbage-gap picks. Illegal moves and rotations
//! are reported as booleans, never as errors; overflow (no legal position
//! left) is likewise a boolean signal.

use crate::core::board::Board;
use crate::core::pieces::{random_kind, Tetromino};
use crate::core::rng::SimpleRng;
use crate::types::{Axis, PieceKind, BOARD_WIDTH, GARBAGE_GAP_MIN};

#[derive(Debug, Clone)]
pub struct Player {
    board: Board,
    active: Option<Tetromino>,
    rng: SimpleRng,
}

impl Player {
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(),
            active: None,
            rng: SimpleRng::new(seed),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> Option<Tetromino> {
        self.active
    }

    /// Lock the held piece (if any) into the grid and spawn the next one.
    ///
    /// The lock is unconditional; whether the locked position was legal is
    /// the caller's concern, checked separately via `is_overflowing`. With
    /// `kind` the spawn is forced to that kind, otherwise one is drawn
    /// uniformly from the catalog. Returns the kind used so a caller can
    /// propagate it to the paired player.
    pub fn request_new_piece(&mut self, kind: Option<PieceKind>) -> PieceKind {
        if let Some(piece) = self.active.take() {
            self.board.place(&piece);
        }

        let kind = kind.unwrap_or_else(|| random_kind(&mut self.rng));
        self.active = Some(Tetromino::spawn(kind));
        kind
    }

    /// Tentatively translate the held piece by `delta` along `axis`.
    /// An invalid result is discarded and reported as failure.
    pub fn move_by(&mut self, axis: Axis, delta: i8) -> bool {
        let Some(mut piece) = self.active else {
            return false;
        };

        match axis {
            Axis::X => piece.x += delta,
            Axis::Y => piece.y += delta,
        }

        if self.board.is_valid(&piece) {
            self.active = Some(piece);
            true
        } else {
            false
        }
    }

    pub fn left(&mut self) -> bool {
        self.move_by(Axis::X, -1)
    }

    pub fn right(&mut self) -> bool {
        self.move_by(Axis::X, 1)
    }

    pub fn down(&mut self) -> bool {
        self.move_by(Axis::Y, 1)
    }

    pub fn up(&mut self) -> bool {
        self.move_by(Axis::Y, -1)
    }

    /// Rotate the held piece; an illegal result is corrected by exactly
    /// one inverse rotation, never a positional nudge.
    pub fn rotate(&mut self) -> bool {
        let Some(mut piece) = self.active else {
            return false;
        };

        piece.rotate();
        if self.board.is_valid(&piece) {
            self.active = Some(piece);
            true
        } else {
            false
        }
    }

    /// Drop the held piece as far down as it goes. Does not lock it;
    /// locking happens on the next `request_new_piece`.
    pub fn hard_drop(&mut self) {
        while self.down() {}
    }

    /// Take `n` garbage rows from the opponent. Returns true on overflow,
    /// in which case the remaining rows are not injected.
    ///
    /// Per row: an already-occupied top row overflows immediately;
    /// otherwise the row is injected (gap drawn from this player's RNG)
    /// and the held piece is pushed up until it reaches a valid position.
    /// Running out of headroom while still invalid is also overflow.
    pub fn receive_garbage(&mut self, n: u32) -> bool {
        for _ in 0..n {
            if self.board.top_row_occupied() {
                return true;
            }

            let gap =
                GARBAGE_GAP_MIN + self.rng.next_range((BOARD_WIDTH - GARBAGE_GAP_MIN) as u32) as usize;
            self.board.inject_garbage_row(gap);

            while self.is_piece_invalid() {
                if !self.up() {
                    return true;
                }
            }
        }
        false
    }

    /// True iff the held piece sits on an invalid position - checked right
    /// after a spawn to detect that no legal position was left.
    pub fn is_overflowing(&self) -> bool {
        self.is_piece_invalid()
    }

    fn is_piece_invalid(&self) -> bool {
        match self.active {
            Some(ref piece) => !self.board.is_valid(piece),
            None => false,
        }
    }

    /// Clear full rows, returning how many were full.
    pub fn clear_lines(&mut self) -> u32 {
        self.board.clear_lines()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BOARD_HEIGHT, CELL_EMPTY, CELL_GARBAGE};

    #[test]
    fn test_lock_is_unconditional_even_when_position_is_invalid() {
        let mut player = Player::new(1);
        player.request_new_piece(Some(PieceKind::O));

        // Occupy one of the piece's own cells: O at spawn covers
        // (4..6, 0..2)
        player.board_mut().set_cell(4, 0, 3);
        assert!(player.is_overflowing());

        // The next request still merges the old piece, additively
        player.request_new_piece(Some(PieceKind::T));
        assert_eq!(player.board().cell(4, 0), 3 + PieceKind::O.color());
        assert_eq!(player.board().cell(5, 0), PieceKind::O.color());
        assert_eq!(player.board().cell(4, 1), PieceKind::O.color());
        assert_eq!(player.board().cell(5, 1), PieceKind::O.color());
    }

    #[test]
    fn test_receive_garbage_with_occupied_top_row_injects_nothing() {
        let mut player = Player::new(2);
        player.request_new_piece(Some(PieceKind::T));
        player.board_mut().set_cell(7, 0, CELL_GARBAGE);

        assert!(player.receive_garbage(4));

        // Zero rows arrived: the bottom of the board is untouched
        for y in 1..BOARD_HEIGHT {
            for x in 0..BOARD_WIDTH {
                assert_eq!(player.board().cell(x, y), CELL_EMPTY);
            }
        }
    }

    #[test]
    fn test_receive_garbage_stops_midway_on_overflow() {
        let mut player = Player::new(3);
        player.request_new_piece(Some(PieceKind::O));

        // Stack reaching row 1 leaves room for exactly one more row
        // before the top-row check trips
        for y in 1..BOARD_HEIGHT {
            player.board_mut().set_cell(0, y, CELL_GARBAGE);
        }

        assert!(player.receive_garbage(3));

        // Only the first row of the burst was injected: the marker
        // column now reaches the top row
        assert_ne!(player.board().cell(0, 0), CELL_EMPTY);
    }

    #[test]
    fn test_receive_garbage_zero_rows_is_a_no_op() {
        let mut player = Player::new(4);
        player.request_new_piece(Some(PieceKind::S));

        assert!(!player.receive_garbage(0));
        for y in 0..BOARD_HEIGHT {
            for x in 0..BOARD_WIDTH {
                assert_eq!(player.board().cell(x, y), CELL_EMPTY);
            }
        }
    }
}
