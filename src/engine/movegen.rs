//! Movement-pattern generation.
//!
//! Produces the squares a piece can geometrically reach from its cell: leaper
//! offsets for king and knight, rays for the sliders, and the pawn's forward
//! and diagonal squares. This is a teaching aid, not a legal-move generator:
//!
//!   * king and knight targets are not filtered by own-side occupancy;
//!   * a ray includes the first occupied square it meets, friend or foe;
//!   * pawn squares are offered whether or not they are empty / hold an enemy.
//!
//! Nothing here knows about check, turns or captures.

use crate::engine::board::BoardState;
use crate::engine::types::{ChessError, Coord, Piece, PieceKind};

// =========================================================================
// Direction tables
// =========================================================================

/// Knight jumps, sweeping clockwise from two-down-one-right.
pub const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

/// Orthogonal ray directions: right, left, down, up.
pub const ROOK_DIRECTIONS: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Diagonal ray directions.
pub const BISHOP_DIRECTIONS: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

// =========================================================================
// MoveSet
// =========================================================================

/// Destinations in generation order. Never holds an off-board coordinate or
/// the same coordinate twice.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveSet(Vec<Coord>);

impl MoveSet {
    pub fn new() -> Self {
        MoveSet(Vec::new())
    }

    fn with_capacity(capacity: usize) -> Self {
        MoveSet(Vec::with_capacity(capacity))
    }

    /// Append a destination. The generators only ever offer on-board,
    /// not-yet-listed squares.
    fn push(&mut self, coord: Coord) {
        debug_assert!(coord.is_on_board(), "move target {coord} is off the board");
        debug_assert!(!self.0.contains(&coord), "move target {coord} listed twice");
        self.0.push(coord);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.0.contains(&coord)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Coord> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Coord] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<Coord> {
        self.0
    }
}

impl FromIterator<Coord> for MoveSet {
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        let mut set = MoveSet::new();
        for coord in iter {
            set.push(coord);
        }
        set
    }
}

impl<'a> IntoIterator for &'a MoveSet {
    type Item = &'a Coord;
    type IntoIter = std::slice::Iter<'a, Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for MoveSet {
    type Item = Coord;
    type IntoIter = std::vec::IntoIter<Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

// =========================================================================
// Public API
// =========================================================================

/// Squares reachable by the piece standing on `origin`.
///
/// Fails with [`ChessError::OutOfBounds`] when `origin` is off the board and
/// with [`ChessError::EmptyOrigin`] when it holds no piece.
pub fn generate_moves(board: &BoardState, origin: Coord) -> Result<MoveSet, ChessError> {
    let piece = board.at(origin)?.ok_or(ChessError::EmptyOrigin(origin))?;
    moves_for_piece(board, origin, piece)
}

/// Squares reachable by `piece` as if it stood on `origin`, whatever the
/// board actually holds there.
pub fn moves_for_piece(
    board: &BoardState,
    origin: Coord,
    piece: Piece,
) -> Result<MoveSet, ChessError> {
    if !origin.is_on_board() {
        return Err(ChessError::OutOfBounds(origin));
    }

    let mut moves = MoveSet::with_capacity(27);
    match piece.kind {
        PieceKind::King => king_moves(origin, &mut moves),
        PieceKind::Knight => leaper_moves(origin, &KNIGHT_OFFSETS, &mut moves),
        PieceKind::Rook => slider_moves(board, origin, &ROOK_DIRECTIONS, &mut moves)?,
        PieceKind::Bishop => slider_moves(board, origin, &BISHOP_DIRECTIONS, &mut moves)?,
        PieceKind::Queen => {
            slider_moves(board, origin, &ROOK_DIRECTIONS, &mut moves)?;
            slider_moves(board, origin, &BISHOP_DIRECTIONS, &mut moves)?;
        }
        PieceKind::Pawn => pawn_moves(origin, piece, &mut moves),
    }
    Ok(moves)
}

// =========================================================================
// Leapers
// =========================================================================

fn king_moves(origin: Coord, moves: &mut MoveSet) {
    for d_row in -1..=1 {
        for d_col in -1..=1 {
            if d_row == 0 && d_col == 0 {
                continue;
            }
            let to = origin.offset(d_row, d_col);
            if to.is_on_board() {
                moves.push(to);
            }
        }
    }
}

fn leaper_moves(origin: Coord, offsets: &[(i32, i32)], moves: &mut MoveSet) {
    for &(d_row, d_col) in offsets {
        let to = origin.offset(d_row, d_col);
        if to.is_on_board() {
            moves.push(to);
        }
    }
}

// =========================================================================
// Sliders
// =========================================================================

/// Cast one ray per direction. Each ray stops at the board edge, or on the
/// first occupied square (which is included).
fn slider_moves(
    board: &BoardState,
    origin: Coord,
    directions: &[(i32, i32)],
    moves: &mut MoveSet,
) -> Result<(), ChessError> {
    for &(d_row, d_col) in directions {
        let mut to = origin.offset(d_row, d_col);
        while to.is_on_board() {
            moves.push(to);
            if board.is_occupied(to)? {
                break;
            }
            to = to.offset(d_row, d_col);
        }
    }
    Ok(())
}

// =========================================================================
// Pawns
// =========================================================================

fn pawn_moves(origin: Coord, pawn: Piece, moves: &mut MoveSet) {
    let dir = pawn.side.pawn_direction();

    let one = origin.offset(dir, 0);
    if one.is_on_board() {
        moves.push(one);
    }

    if origin.row == pawn.side.pawn_start_row() {
        let two = origin.offset(2 * dir, 0);
        if two.is_on_board() {
            moves.push(two);
        }
    }

    for d_col in [-1, 1] {
        let diag = origin.offset(dir, d_col);
        if diag.is_on_board() {
            moves.push(diag);
        }
    }
}

// =========================================================================
// Tests
// =========================================================================
