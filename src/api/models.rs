use serde::{Deserialize, Serialize};

use crate::engine::{ChessError, Coord, MoveSet, Piece, Side};
use crate::tutor::{PieceGuide, PromotionOption, Selection, Session, SpecialMoveGuide};

// ---------------------------------------------------------------------------
// Request models
// ---------------------------------------------------------------------------

/// A board coordinate as sent by the page: either `{row, col}` or
/// `{square: "e2"}`. `square` wins when both are present.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoordInput {
    pub row: Option<i32>,
    pub col: Option<i32>,
    pub square: Option<String>,
}

impl CoordInput {
    pub fn resolve(&self) -> Result<Coord, ChessError> {
        if let Some(ref square) = self.square {
            return Coord::from_algebraic(square)
                .ok_or_else(|| ChessError::InvalidSquare(square.clone()));
        }
        match (self.row, self.col) {
            (Some(row), Some(col)) => Ok(Coord::new(row, col)),
            _ => Err(ChessError::InvalidSquare(
                "expected either `square` or both `row` and `col`".to_string(),
            )),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionRequest {
    pub scenario: Option<String>,
    pub side: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioRequest {
    pub scenario: String,
    pub side: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovesRequest {
    /// FEN piece placement; the standard layout when absent.
    pub placement: Option<String>,
    #[serde(flatten)]
    pub origin: CoordInput,
}

/// Parse an optional side name from a request body.
pub fn parse_side(side: Option<&str>) -> Result<Option<Side>, ChessError> {
    side.map(|s| Side::from_name(s).ok_or_else(|| ChessError::UnknownSide(s.to_string())))
        .transpose()
}

// ---------------------------------------------------------------------------
// Response models
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub engine: String,
    pub sessions: usize,
    pub uptime: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CoordView {
    pub row: i32,
    pub col: i32,
    pub square: String,
}

#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PieceView {
    #[serde(rename = "type")]
    pub piece_type: String,
    pub color: String,
    pub glyph: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionView {
    pub origin: CoordView,
    pub piece: PieceView,
    pub moves: Vec<CoordView>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PromotionOptionView {
    #[serde(flatten)]
    pub coord: CoordView,
    pub piece: String,
    pub glyph: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub id: String,
    pub scenario: String,
    pub board: Vec<Vec<Option<PieceView>>>,
    pub placement: String,
    pub highlighted: Vec<CoordView>,
    pub targets: Vec<CoordView>,
    pub promotion_options: Vec<PromotionOptionView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection: Option<SelectionView>,
    pub created_at: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovesResponse {
    pub origin: CoordView,
    pub piece: PieceView,
    pub moves: Vec<CoordView>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Glyphs {
    pub white: String,
    pub black: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PieceGuideResponse {
    #[serde(rename = "type")]
    pub piece_type: String,
    pub title: String,
    pub description: String,
    pub movement: String,
    pub value: Option<u8>,
    pub value_label: String,
    pub demo_hint: String,
    pub glyphs: Glyphs,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialMoveGuideResponse {
    pub name: String,
    pub title: String,
    pub description: String,
    pub conditions: String,
    pub benefit: String,
    pub demo_hint: String,
}

// ---------------------------------------------------------------------------
// Conversion helpers
// ---------------------------------------------------------------------------

/// Only ever called with coordinates the engine produced, which are on-board.
pub fn coord_view(coord: Coord) -> CoordView {
    CoordView {
        row: coord.row,
        col: coord.col,
        square: coord.to_algebraic().unwrap_or_default(),
    }
}

pub fn piece_view(piece: Piece) -> PieceView {
    PieceView {
        piece_type: piece.kind.name().to_string(),
        color: piece.side.to_string(),
        glyph: piece.glyph().to_string(),
    }
}

fn move_set_view(moves: &MoveSet) -> Vec<CoordView> {
    moves.iter().copied().map(coord_view).collect()
}

pub fn selection_view(selection: &Selection) -> SelectionView {
    SelectionView {
        origin: coord_view(selection.origin),
        piece: piece_view(selection.piece),
        moves: move_set_view(&selection.moves),
    }
}

fn promotion_option_view(option: &PromotionOption) -> PromotionOptionView {
    let glyph = option.kind.glyph(Side::White).to_string();
    PromotionOptionView {
        coord: coord_view(option.coord),
        piece: option.kind.name().to_string(),
        glyph,
    }
}

/// Build the full JSON view of a session.
/// Row 0 of `board` is the top of the board (rank 8).
pub fn session_to_response(session: &Session) -> SessionResponse {
    let scenario = session.scenario();
    let board = session
        .board()
        .rows()
        .iter()
        .map(|row| row.iter().map(|cell| cell.map(piece_view)).collect())
        .collect();

    SessionResponse {
        id: session.id.clone(),
        scenario: scenario.kind.name().to_string(),
        board,
        placement: session.board().to_placement(),
        highlighted: scenario.highlighted.iter().copied().map(coord_view).collect(),
        targets: move_set_view(&scenario.targets),
        promotion_options: scenario
            .promotion_options
            .iter()
            .map(promotion_option_view)
            .collect(),
        selection: session.selection().map(selection_view),
        created_at: session.created_at.to_rfc3339(),
    }
}

pub fn piece_guide_response(guide: &PieceGuide) -> PieceGuideResponse {
    PieceGuideResponse {
        piece_type: guide.kind.name().to_string(),
        title: guide.title.to_string(),
        description: guide.description.to_string(),
        movement: guide.movement.to_string(),
        value: guide.kind.value(),
        value_label: guide.value_label(),
        demo_hint: guide.demo_hint.to_string(),
        glyphs: Glyphs {
            white: guide.kind.glyph(Side::White).to_string(),
            black: guide.kind.glyph(Side::Black).to_string(),
        },
    }
}

pub fn special_move_guide_response(guide: &SpecialMoveGuide) -> SpecialMoveGuideResponse {
    SpecialMoveGuideResponse {
        name: guide.special.name().to_string(),
        title: guide.title.to_string(),
        description: guide.description.to_string(),
        conditions: guide.conditions.to_string(),
        benefit: guide.benefit.to_string(),
        demo_hint: guide.demo_hint.to_string(),
    }
}
