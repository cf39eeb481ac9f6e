use std::fmt;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: i32 = 8;

// ---------------------------------------------------------------------------
// Side
// ---------------------------------------------------------------------------

/// The two sides of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    White,
    Black,
}

impl Side {
    /// Row delta of a single pawn step: White moves toward row 0, Black toward row 7.
    #[inline]
    pub const fn pawn_direction(self) -> i32 {
        match self {
            Side::White => -1,
            Side::Black => 1,
        }
    }

    /// Row a pawn of this side starts on (and may double-step from).
    #[inline]
    pub const fn pawn_start_row(self) -> i32 {
        match self {
            Side::White => 6,
            Side::Black => 1,
        }
    }

    /// Row holding this side's king and rooks in the starting layout.
    #[inline]
    pub const fn back_rank(self) -> i32 {
        match self {
            Side::White => 7,
            Side::Black => 0,
        }
    }

    /// Terminal row a pawn of this side promotes on.
    #[inline]
    pub const fn promotion_row(self) -> i32 {
        match self {
            Side::White => 0,
            Side::Black => 7,
        }
    }

    /// Parse "white"/"black" (case-insensitive).
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "white" | "w" => Some(Side::White),
            "black" | "b" => Some(Side::Black),
            _ => None,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => write!(f, "white"),
            Side::Black => write!(f, "black"),
        }
    }
}

// ---------------------------------------------------------------------------
// PieceKind
// ---------------------------------------------------------------------------

/// The six piece kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceKind {
    /// All piece kinds in guide order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::King,
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Pawn,
    ];

    /// The four kinds a pawn may promote to, in the order they are offered.
    pub const PROMOTION_CHOICES: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    /// Conventional point value. The king has none.
    pub fn value(self) -> Option<u8> {
        match self {
            PieceKind::King => None,
            PieceKind::Queen => Some(9),
            PieceKind::Rook => Some(5),
            PieceKind::Bishop => Some(3),
            PieceKind::Knight => Some(3),
            PieceKind::Pawn => Some(1),
        }
    }

    /// Lowercase English name, as used in URLs and JSON.
    pub fn name(self) -> &'static str {
        match self {
            PieceKind::King => "king",
            PieceKind::Queen => "queen",
            PieceKind::Rook => "rook",
            PieceKind::Bishop => "bishop",
            PieceKind::Knight => "knight",
            PieceKind::Pawn => "pawn",
        }
    }

    /// Parse a piece name or its FEN letter (case-insensitive).
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "king" | "k" => Some(PieceKind::King),
            "queen" | "q" => Some(PieceKind::Queen),
            "rook" | "r" => Some(PieceKind::Rook),
            "bishop" | "b" => Some(PieceKind::Bishop),
            "knight" | "n" => Some(PieceKind::Knight),
            "pawn" | "p" => Some(PieceKind::Pawn),
            _ => None,
        }
    }

    /// Single uppercase letter for White, lowercase for Black.
    pub fn to_char(self, side: Side) -> char {
        let c = match self {
            PieceKind::King => 'k',
            PieceKind::Queen => 'q',
            PieceKind::Rook => 'r',
            PieceKind::Bishop => 'b',
            PieceKind::Knight => 'n',
            PieceKind::Pawn => 'p',
        };
        match side {
            Side::White => c.to_ascii_uppercase(),
            Side::Black => c,
        }
    }

    /// Unicode chess symbol for a piece of this kind on `side`.
    pub fn glyph(self, side: Side) -> char {
        match (self, side) {
            (PieceKind::King, Side::White) => '♔',
            (PieceKind::Queen, Side::White) => '♕',
            (PieceKind::Rook, Side::White) => '♖',
            (PieceKind::Bishop, Side::White) => '♗',
            (PieceKind::Knight, Side::White) => '♘',
            (PieceKind::Pawn, Side::White) => '♙',
            (PieceKind::King, Side::Black) => '♚',
            (PieceKind::Queen, Side::Black) => '♛',
            (PieceKind::Rook, Side::Black) => '♜',
            (PieceKind::Bishop, Side::Black) => '♝',
            (PieceKind::Knight, Side::Black) => '♞',
            (PieceKind::Pawn, Side::Black) => '♟',
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Piece
// ---------------------------------------------------------------------------

/// A piece: what it is and whose it is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub side: Side,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, side: Side) -> Self {
        Piece { kind, side }
    }

    #[inline]
    pub const fn white(kind: PieceKind) -> Self {
        Piece::new(kind, Side::White)
    }

    #[inline]
    pub const fn black(kind: PieceKind) -> Self {
        Piece::new(kind, Side::Black)
    }

    pub fn to_char(self) -> char {
        self.kind.to_char(self.side)
    }

    pub fn glyph(self) -> char {
        self.kind.glyph(self.side)
    }

    /// Parse a FEN piece letter: uppercase is White, lowercase is Black.
    pub fn from_char(c: char) -> Option<Self> {
        let side = if c.is_ascii_uppercase() {
            Side::White
        } else {
            Side::Black
        };
        let kind = match c.to_ascii_lowercase() {
            'k' => PieceKind::King,
            'q' => PieceKind::Queen,
            'r' => PieceKind::Rook,
            'b' => PieceKind::Bishop,
            'n' => PieceKind::Knight,
            'p' => PieceKind::Pawn,
            _ => return None,
        };
        Some(Piece { kind, side })
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.side, self.kind)
    }
}

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// A `(row, col)` board coordinate.
///
/// Row 0 is the top edge (Black's back rank, rank 8) and col 0 is file `a`.
/// A `Coord` may hold off-board values so that misuse can be reported; use
/// [`Coord::is_on_board`] before indexing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Coord { row, col }
    }

    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.row >= 0 && self.row < BOARD_SIZE && self.col >= 0 && self.col < BOARD_SIZE
    }

    /// The coordinate `(d_row, d_col)` away. May land off the board.
    #[inline]
    pub const fn offset(self, d_row: i32, d_col: i32) -> Self {
        Coord::new(self.row + d_row, self.col + d_col)
    }

    /// King-step distance between two coordinates.
    #[inline]
    pub fn chebyshev_distance(self, other: Coord) -> i32 {
        (self.row - other.row).abs().max((self.col - other.col).abs())
    }

    /// Iterate all 64 on-board coordinates in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Coord::new(row, col)))
    }

    /// Parse algebraic notation like "e4".
    pub fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = bytes[0].to_ascii_lowercase().wrapping_sub(b'a') as i32;
        let rank = bytes[1].wrapping_sub(b'1') as i32;
        let coord = Coord::new(BOARD_SIZE - 1 - rank, file);
        coord.is_on_board().then_some(coord)
    }

    /// Algebraic notation like "e4", or `None` when off the board.
    pub fn to_algebraic(self) -> Option<String> {
        if !self.is_on_board() {
            return None;
        }
        let file = (b'a' + self.col as u8) as char;
        let rank = (b'1' + (BOARD_SIZE - 1 - self.row) as u8) as char;
        Some(format!("{file}{rank}"))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

// ---------------------------------------------------------------------------
// ChessError
// ---------------------------------------------------------------------------

/// Domain errors for the engine and the tutor layer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChessError {
    #[error("coordinate {0} is outside the 8x8 board")]
    OutOfBounds(Coord),

    #[error("no piece at {0} to generate moves from")]
    EmptyOrigin(Coord),

    #[error("invalid square notation: {0}")]
    InvalidSquare(String),

    #[error("invalid piece placement: {0}")]
    InvalidPlacement(String),

    #[error("unknown piece: {0}")]
    UnknownPiece(String),

    #[error("unknown side: {0}")]
    UnknownSide(String),

    #[error("unknown scenario: {0}")]
    UnknownScenario(String),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
