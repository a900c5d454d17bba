//! Pieces module - the shape catalog and the falling piece instance
//!
//! Each kind carries a fixed ordered list of rotation-state masks: small
//! 2-D grids whose nonzero cells are occupied and hold the kind's color
//! identifier. Rotation state is an index into the list, wrapping modulo
//! its length. There is no wall-kick table; an illegal rotation is undone
//! by exactly one inverse rotation and nothing else.

use crate::core::rng::SimpleRng;
use crate::types::{Cell, PieceKind, SPAWN_COL};

/// One rotation state: rows of cell values, bounding-box sized.
pub type Mask = &'static [&'static [Cell]];

/// The ordered rotation states for a piece kind.
pub fn masks(kind: PieceKind) -> &'static [Mask] {
    match kind {
        PieceKind::I => &I_MASKS,
        PieceKind::J => &J_MASKS,
        PieceKind::L => &L_MASKS,
        PieceKind::O => &O_MASKS,
        PieceKind::S => &S_MASKS,
        PieceKind::Z => &Z_MASKS,
        PieceKind::T => &T_MASKS,
    }
}

/// Number of rotation states for a kind.
pub fn state_count(kind: PieceKind) -> usize {
    masks(kind).len()
}

/// Draw one kind uniformly at random.
pub fn random_kind(rng: &mut SimpleRng) -> PieceKind {
    PieceKind::ALL[rng.next_range(PieceKind::ALL.len() as u32) as usize]
}

static I_MASKS: [Mask; 2] = [
    &[
        &[0, 0, 0, 0],
        &[0, 0, 0, 0],
        &[1, 1, 1, 1],
        &[0, 0, 0, 0],
    ],
    &[
        &[0, 0, 1, 0],
        &[0, 0, 1, 0],
        &[0, 0, 1, 0],
        &[0, 0, 1, 0],
    ],
];

static J_MASKS: [Mask; 4] = [
    &[
        &[0, 0, 0],
        &[2, 2, 2],
        &[0, 0, 2],
    ],
    &[
        &[0, 2, 0],
        &[0, 2, 0],
        &[2, 2, 0],
    ],
    &[
        &[2, 0, 0],
        &[2, 2, 2],
        &[0, 0, 0],
    ],
    &[
        &[0, 2, 2],
        &[0, 2, 0],
        &[0, 2, 0],
    ],
];

static L_MASKS: [Mask; 4] = [
    &[
        &[0, 0, 0],
        &[3, 3, 3],
        &[3, 0, 0],
    ],
    &[
        &[3, 3, 0],
        &[0, 3, 0],
        &[0, 3, 0],
    ],
    &[
        &[0, 0, 3],
        &[3, 3, 3],
        &[0, 0, 0],
    ],
    &[
        &[0, 3, 0],
        &[0, 3, 0],
        &[0, 3, 3],
    ],
];

static O_MASKS: [Mask; 1] = [&[
    &[0, 0, 0, 0],
    &[0, 4, 4, 0],
    &[0, 4, 4, 0],
    &[0, 0, 0, 0],
]];

// S and Z alternate between two geometries; the catalog still lists four
// states so their rotation index wraps modulo 4 like the other 3-wide kinds.
const S_FLAT: Mask = &[
    &[0, 0, 0],
    &[0, 5, 5],
    &[5, 5, 0],
];
const S_TALL: Mask = &[
    &[0, 5, 0],
    &[0, 5, 5],
    &[0, 0, 5],
];
static S_MASKS: [Mask; 4] = [S_FLAT, S_TALL, S_FLAT, S_TALL];

const Z_FLAT: Mask = &[
    &[0, 0, 0],
    &[6, 6, 0],
    &[0, 6, 6],
];
const Z_TALL: Mask = &[
    &[0, 0, 6],
    &[0, 6, 6],
    &[0, 6, 0],
];
static Z_MASKS: [Mask; 4] = [Z_FLAT, Z_TALL, Z_FLAT, Z_TALL];

static T_MASKS: [Mask; 4] = [
    &[
        &[0, 0, 0],
        &[7, 7, 7],
        &[0, 7, 0],
    ],
    &[
        &[0, 7, 0],
        &[7, 7, 0],
        &[0, 7, 0],
    ],
    &[
        &[0, 7, 0],
        &[7, 7, 7],
        &[0, 0, 0],
    ],
    &[
        &[0, 7, 0],
        &[0, 7, 7],
        &[0, 7, 0],
    ],
];

/// Active falling piece
///
/// `(x, y)` is the upper-left corner of the current mask's bounding box in
/// unpadded grid coordinates; a freshly spawned piece sits partly or wholly
/// above the visible playfield.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub rotation: usize,
    pub x: i8,
    pub y: i8,
}

impl Tetromino {
    /// Create a new piece at the fixed spawn anchor.
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: 0,
            x: SPAWN_COL,
            y: kind.spawn_row(),
        }
    }

    /// The mask for the current rotation state.
    pub fn mask(&self) -> Mask {
        masks(self.kind)[self.rotation]
    }

    /// Advance the rotation index by one, wrapping. Does not check legality.
    pub fn rotate(&mut self) {
        self.rotation = (self.rotation + 1) % state_count(self.kind);
    }

    /// Step the rotation index back by one, wrapping. Used only to undo a
    /// rotation that produced an illegal position.
    pub fn inverse_rotate(&mut self) {
        let n = state_count(self.kind);
        self.rotation = (self.rotation + n - 1) % n;
    }

    /// Bounding-box height of the current mask.
    pub fn height(&self) -> usize {
        self.mask().len()
    }

    /// Bounding-box width of the current mask.
    pub fn width(&self) -> usize {
        self.mask()[0].len()
    }
}
