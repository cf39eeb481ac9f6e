//! Static reference text shown next to the board.

use crate::engine::types::PieceKind;

/// Reference card for one piece kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PieceGuide {
    pub kind: PieceKind,
    pub title: &'static str,
    pub description: &'static str,
    pub movement: &'static str,
    /// Hint shown while the piece is displayed on its own.
    pub demo_hint: &'static str,
}

impl PieceGuide {
    /// Human-readable value, e.g. "9 points".
    pub fn value_label(&self) -> String {
        match self.kind.value() {
            None => "priceless".to_string(),
            Some(1) => "1 point".to_string(),
            Some(points) => format!("{points} points"),
        }
    }
}

/// The special moves the tutorial can stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpecialMove {
    Castling,
    Promotion,
}

impl SpecialMove {
    pub const ALL: [SpecialMove; 2] = [SpecialMove::Castling, SpecialMove::Promotion];

    pub fn name(self) -> &'static str {
        match self {
            SpecialMove::Castling => "castling",
            SpecialMove::Promotion => "promotion",
        }
    }
}

/// Reference card for a special move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpecialMoveGuide {
    pub special: SpecialMove,
    pub title: &'static str,
    pub description: &'static str,
    pub conditions: &'static str,
    pub benefit: &'static str,
    pub demo_hint: &'static str,
}

pub fn piece_guide(kind: PieceKind) -> PieceGuide {
    match kind {
        PieceKind::King => PieceGuide {
            kind,
            title: "King",
            description: "The most important piece. It moves one square in any direction: \
                          horizontally, vertically or diagonally. The aim of the game is to \
                          protect your king and threaten the opponent's.",
            movement: "One square in any direction",
            demo_hint: "The king steps onto any one of the highlighted neighbouring squares.",
        },
        PieceKind::Queen => PieceGuide {
            kind,
            title: "Queen",
            description: "The strongest piece. It combines the rook and the bishop and can \
                          travel any distance horizontally, vertically or diagonally.",
            movement: "Any direction, any distance",
            demo_hint: "The queen slides along every highlighted line in all eight directions.",
        },
        PieceKind::Rook => PieceGuide {
            kind,
            title: "Rook",
            description: "A strong piece that moves along ranks and files. It plays a key \
                          role in guarding the king and controlling open lines.",
            movement: "Horizontally and vertically, any distance",
            demo_hint: "The rook moves only in straight lines along its row and column.",
        },
        PieceKind::Bishop => PieceGuide {
            kind,
            title: "Bishop",
            description: "Moves diagonally only. Each player has two bishops, one on light \
                          squares and one on dark squares.",
            movement: "Diagonally, any distance",
            demo_hint: "The bishop moves only along the diagonals.",
        },
        PieceKind::Knight => PieceGuide {
            kind,
            title: "Knight",
            description: "The only piece that can jump over others. It moves in an L shape: \
                          two squares one way and one square at a right angle.",
            movement: "L shape",
            demo_hint: "The knight jumps in an L: two squares one way, then one sideways.",
        },
        PieceKind::Pawn => PieceGuide {
            kind,
            title: "Pawn",
            description: "The smallest piece, but an important one. It moves forward one \
                          square and captures diagonally. On its first move it may advance \
                          two squares.",
            movement: "Forward one square, captures diagonally",
            demo_hint: "The pawn steps forward one square and captures diagonally.",
        },
    }
}

pub fn special_move_guide(special: SpecialMove) -> SpecialMoveGuide {
    match special {
        SpecialMove::Castling => SpecialMoveGuide {
            special,
            title: "Castling",
            description: "A special move in which the king and a rook move together. It \
                          tucks the king away and develops the rook. Castling can be done on \
                          the king side (short) or the queen side (long).",
            conditions: "Neither the king nor the rook has moved, no pieces stand between \
                         them, and the king is not in check.",
            benefit: "Protects the king and develops the rook in a single move.",
            demo_hint: "The king moves two squares toward a rook and the rook hops over it. \
                        The highlighted squares show where both end up.",
        },
        SpecialMove::Promotion => SpecialMoveGuide {
            special,
            title: "Promotion",
            description: "When a pawn reaches the last rank it must be promoted to any piece \
                          except a king. Usually it becomes a queen, the strongest choice.",
            conditions: "The pawn reaches the far end of the board.",
            benefit: "Turns the weakest piece into a very strong one.",
            demo_hint: "On the last rank the pawn may become a queen, rook, bishop or knight.",
        },
    }
}

pub fn all_piece_guides() -> Vec<PieceGuide> {
    PieceKind::ALL.into_iter().map(piece_guide).collect()
}

pub fn all_special_move_guides() -> Vec<SpecialMoveGuide> {
    SpecialMove::ALL.into_iter().map(special_move_guide).collect()
}
