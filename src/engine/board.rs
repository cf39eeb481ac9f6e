//! Mailbox board representation.
//!
//! `BoardState` is a passive 8×8 grid of optional pieces. Row 0 is the top of
//! the board (Black's back rank), which is also the first rank of a FEN piece
//! placement, so placement strings map onto rows without flipping.

use crate::engine::types::{BOARD_SIZE, ChessError, Coord, Piece, PieceKind, Side};

/// Back-rank piece order, file `a` to file `h`.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// An 8×8 grid holding at most one piece per cell.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoardState {
    cells: [[Option<Piece>; 8]; 8],
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

impl BoardState {
    /// A board with no pieces.
    pub fn empty() -> Self {
        BoardState::default()
    }

    /// Standard starting layout: Black on rows 0–1, White on rows 6–7.
    pub fn standard() -> Self {
        let mut board = BoardState::empty();
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            board.cells[Side::Black.back_rank() as usize][col] = Some(Piece::black(kind));
            board.cells[Side::White.back_rank() as usize][col] = Some(Piece::white(kind));
            board.cells[Side::Black.pawn_start_row() as usize][col] =
                Some(Piece::black(PieceKind::Pawn));
            board.cells[Side::White.pawn_start_row() as usize][col] =
                Some(Piece::white(PieceKind::Pawn));
        }
        board
    }

    /// An otherwise empty board with a single piece at `coord`.
    pub fn with_single_piece(coord: Coord, piece: Piece) -> Result<Self, ChessError> {
        let mut board = BoardState::empty();
        board.set(coord, Some(piece))?;
        Ok(board)
    }
}

// ---------------------------------------------------------------------------
// Accessors
// ---------------------------------------------------------------------------

impl BoardState {
    #[inline]
    fn check(coord: Coord) -> Result<(usize, usize), ChessError> {
        if coord.is_on_board() {
            Ok((coord.row as usize, coord.col as usize))
        } else {
            Err(ChessError::OutOfBounds(coord))
        }
    }

    /// What piece (if any) is on `coord`?
    pub fn at(&self, coord: Coord) -> Result<Option<Piece>, ChessError> {
        let (row, col) = Self::check(coord)?;
        Ok(self.cells[row][col])
    }

    /// Write a cell, replacing whatever was there.
    pub fn set(&mut self, coord: Coord, piece: Option<Piece>) -> Result<(), ChessError> {
        let (row, col) = Self::check(coord)?;
        self.cells[row][col] = piece;
        Ok(())
    }

    pub fn is_occupied(&self, coord: Coord) -> Result<bool, ChessError> {
        Ok(self.at(coord)?.is_some())
    }

    /// True iff `coord` holds a piece belonging to `side`.
    pub fn is_occupied_by_side(&self, coord: Coord, side: Side) -> Result<bool, ChessError> {
        Ok(self.at(coord)?.is_some_and(|p| p.side == side))
    }

    /// Occupied cells in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter_map(move |(col, cell)| cell.map(|p| (Coord::new(row as i32, col as i32), p)))
        })
    }

    pub fn piece_count(&self) -> usize {
        self.pieces().count()
    }

    /// Rows of cells, top row first. Used by the API to render the grid.
    pub fn rows(&self) -> &[[Option<Piece>; 8]; 8] {
        &self.cells
    }
}

// ---------------------------------------------------------------------------
// Piece placement (FEN field 1)
// ---------------------------------------------------------------------------

impl BoardState {
    /// Parse the piece-placement field of a FEN string, e.g.
    /// `"rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"`.
    ///
    /// Only placement is read: the tutorial has no side to move, castling
    /// rights or clocks. Any number of kings is accepted.
    pub fn from_placement(placement: &str) -> Result<Self, ChessError> {
        let rows: Vec<&str> = placement.trim().split('/').collect();
        if rows.len() != BOARD_SIZE as usize {
            return Err(ChessError::InvalidPlacement(format!(
                "expected 8 ranks, got {}",
                rows.len()
            )));
        }

        let mut board = BoardState::empty();
        for (row, row_str) in rows.iter().enumerate() {
            let mut col: usize = 0;
            for ch in row_str.chars() {
                if col > 7 {
                    return Err(ChessError::InvalidPlacement(format!(
                        "too many squares in rank {}",
                        8 - row
                    )));
                }
                if let Some(digit) = ch.to_digit(10) {
                    if !(1..=8).contains(&digit) {
                        return Err(ChessError::InvalidPlacement(format!(
                            "invalid empty count '{ch}' in rank {}",
                            8 - row
                        )));
                    }
                    col += digit as usize;
                } else if let Some(piece) = Piece::from_char(ch) {
                    board.cells[row][col] = Some(piece);
                    col += 1;
                } else {
                    return Err(ChessError::InvalidPlacement(format!(
                        "invalid character '{ch}' in piece placement"
                    )));
                }
            }
            if col != 8 {
                return Err(ChessError::InvalidPlacement(format!(
                    "rank {} has {} squares instead of 8",
                    8 - row,
                    col
                )));
            }
        }
        Ok(board)
    }

    /// Export the board as a FEN piece-placement field.
    pub fn to_placement(&self) -> String {
        let mut out = String::with_capacity(72);
        for (row, cells) in self.cells.iter().enumerate() {
            let mut empty_count = 0u8;
            for cell in cells {
                match cell {
                    Some(piece) => {
                        if empty_count > 0 {
                            out.push((b'0' + empty_count) as char);
                            empty_count = 0;
                        }
                        out.push(piece.to_char());
                    }
                    None => empty_count += 1,
                }
            }
            if empty_count > 0 {
                out.push((b'0' + empty_count) as char);
            }
            if row < 7 {
                out.push('/');
            }
        }
        out
    }

    /// Render the board as an 8-line string (row 0 at top), useful for debugging.
    pub fn board_string(&self) -> String {
        let mut s = String::with_capacity(200);
        for (row, cells) in self.cells.iter().enumerate() {
            s.push((b'8' - row as u8) as char);
            s.push(' ');
            for (col, cell) in cells.iter().enumerate() {
                s.push(cell.map_or('.', Piece::to_char));
                if col < 7 {
                    s.push(' ');
                }
            }
            s.push('\n');
        }
        s.push_str("  a b c d e f g h");
        s
    }
}

impl std::fmt::Display for BoardState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.board_string())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
