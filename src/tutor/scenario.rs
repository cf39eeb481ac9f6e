//! Demonstration layouts.
//!
//! A `Scenario` is a board plus the coordinates the page should draw
//! attention to. Castling and promotion are fixed data here; they are never
//! produced by the move generator. Only the single-piece isolation scenario
//! asks the generator for its targets.

use std::fmt;

use crate::engine::board::BoardState;
use crate::engine::movegen::{MoveSet, generate_moves};
use crate::engine::types::{ChessError, Coord, Piece, PieceKind, Side};

/// Where a piece is placed when shown on its own.
pub const ISOLATION_SQUARE: Coord = Coord::new(3, 3);

/// Column of the pawn in the promotion demonstration.
const PROMOTION_COL: i32 = 4;

/// Terminal-rank columns annotated with promotion choices, paired with
/// [`PieceKind::PROMOTION_CHOICES`].
const PROMOTION_OPTION_COLS: [i32; 4] = [2, 3, 5, 6];

// ---------------------------------------------------------------------------
// ScenarioKind
// ---------------------------------------------------------------------------

/// Which demonstration a board is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScenarioKind {
    /// Full starting layout.
    Standard,
    /// One White piece alone in the middle of the board.
    Isolation(PieceKind),
    /// King and both rooks on `side`'s back rank.
    Castling(Side),
    /// A pawn of `side` one step from promotion.
    Promotion(Side),
}

impl ScenarioKind {
    /// Parse a scenario name: "standard", "castling", "promotion", or a piece
    /// name for an isolation layout. `side` applies to castling and promotion
    /// and defaults to White.
    pub fn parse(name: &str, side: Option<Side>) -> Result<Self, ChessError> {
        let side = side.unwrap_or(Side::White);
        match name.to_lowercase().as_str() {
            "standard" | "start" | "reset" => Ok(ScenarioKind::Standard),
            "castling" => Ok(ScenarioKind::Castling(side)),
            "promotion" => Ok(ScenarioKind::Promotion(side)),
            other => PieceKind::from_name(other)
                .map(ScenarioKind::Isolation)
                .ok_or_else(|| ChessError::UnknownScenario(name.to_string())),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ScenarioKind::Standard => "standard",
            ScenarioKind::Isolation(kind) => kind.name(),
            ScenarioKind::Castling(_) => "castling",
            ScenarioKind::Promotion(_) => "promotion",
        }
    }
}

impl fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScenarioKind::Castling(side) | ScenarioKind::Promotion(side) => {
                write!(f, "{} ({side})", self.name())
            }
            _ => f.write_str(self.name()),
        }
    }
}

// ---------------------------------------------------------------------------
// Scenario
// ---------------------------------------------------------------------------

/// A terminal-rank square labelled with a piece a pawn may promote to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PromotionOption {
    pub coord: Coord,
    pub kind: PieceKind,
}

/// A staged board and what to highlight on it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scenario {
    pub kind: ScenarioKind,
    pub board: BoardState,
    /// Pieces the demonstration is about.
    pub highlighted: Vec<Coord>,
    /// Squares to mark as destinations.
    pub targets: MoveSet,
    pub promotion_options: Vec<PromotionOption>,
}

impl Scenario {
    /// Build the layout for `kind`.
    pub fn build(kind: ScenarioKind) -> Result<Self, ChessError> {
        match kind {
            ScenarioKind::Standard => Ok(Scenario::standard()),
            ScenarioKind::Isolation(piece_kind) => isolation(piece_kind),
            ScenarioKind::Castling(side) => castling(side),
            ScenarioKind::Promotion(side) => promotion(side),
        }
    }

    /// The full starting layout with nothing highlighted.
    pub fn standard() -> Self {
        Scenario::plain(ScenarioKind::Standard, BoardState::standard())
    }

    fn plain(kind: ScenarioKind, board: BoardState) -> Self {
        Scenario {
            kind,
            board,
            highlighted: Vec::new(),
            targets: MoveSet::new(),
            promotion_options: Vec::new(),
        }
    }
}

fn isolation(kind: PieceKind) -> Result<Scenario, ChessError> {
    let board = BoardState::with_single_piece(ISOLATION_SQUARE, Piece::white(kind))?;
    let targets = generate_moves(&board, ISOLATION_SQUARE)?;
    Ok(Scenario {
        highlighted: vec![ISOLATION_SQUARE],
        targets,
        ..Scenario::plain(ScenarioKind::Isolation(kind), board)
    })
}

/// King on the e-file, rooks in both corners. Targets list the king-side king
/// and rook destinations first, then the queen-side ones.
fn castling(side: Side) -> Result<Scenario, ChessError> {
    let row = side.back_rank();
    let king = Coord::new(row, 4);
    let rooks = [Coord::new(row, 7), Coord::new(row, 0)];

    let mut board = BoardState::empty();
    board.set(king, Some(Piece::new(PieceKind::King, side)))?;
    for rook in rooks {
        board.set(rook, Some(Piece::new(PieceKind::Rook, side)))?;
    }

    let targets = [6, 5, 2, 3].into_iter().map(|col| Coord::new(row, col)).collect();
    Ok(Scenario {
        highlighted: vec![king, rooks[0], rooks[1]],
        targets,
        ..Scenario::plain(ScenarioKind::Castling(side), board)
    })
}

fn promotion(side: Side) -> Result<Scenario, ChessError> {
    let last = side.promotion_row();
    let pawn = Coord::new(last - side.pawn_direction(), PROMOTION_COL);
    let board = BoardState::with_single_piece(pawn, Piece::new(PieceKind::Pawn, side))?;

    let promotion_options = PROMOTION_OPTION_COLS
        .iter()
        .zip(PieceKind::PROMOTION_CHOICES)
        .map(|(&col, kind)| PromotionOption {
            coord: Coord::new(last, col),
            kind,
        })
        .collect();

    Ok(Scenario {
        highlighted: vec![pawn],
        targets: std::iter::once(Coord::new(last, PROMOTION_COL)).collect(),
        promotion_options,
        ..Scenario::plain(ScenarioKind::Promotion(side), board)
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
