//! One visitor's board.
//!
//! `Session` owns the current staged board and the current selection; every
//! interaction goes through it explicitly and the engine stays stateless.
//! The board is only ever swapped wholesale (`stage` / `reset`), never edited
//! while a selection is being computed.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::engine::board::BoardState;
use crate::engine::movegen::{MoveSet, generate_moves};
use crate::engine::types::{ChessError, Coord, Piece};
use crate::tutor::scenario::{Scenario, ScenarioKind};

/// The piece the visitor clicked and where it can go.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    pub origin: Coord,
    pub piece: Piece,
    pub moves: MoveSet,
}

#[derive(Clone, Debug)]
pub struct Session {
    pub id: String,
    pub created_at: DateTime<Utc>,
    scenario: Scenario,
    selection: Option<Selection>,
}

impl Session {
    /// A session showing the standard starting layout.
    pub fn new() -> Self {
        Self::from_scenario(Scenario::standard())
    }

    /// A session opened directly on a demonstration layout.
    pub fn with_scenario(kind: ScenarioKind) -> Result<Self, ChessError> {
        Ok(Self::from_scenario(Scenario::build(kind)?))
    }

    fn from_scenario(scenario: Scenario) -> Self {
        Session {
            id: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            scenario,
            selection: None,
        }
    }

    // -----------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------

    pub fn board(&self) -> &BoardState {
        &self.scenario.board
    }

    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    // -----------------------------------------------------------------
    // Interaction
    // -----------------------------------------------------------------

    /// Handle a click on `coord`.
    ///
    /// Any previous highlighting is cleared first. Clicking a piece selects it
    /// and computes its moves; clicking an empty square just leaves nothing
    /// selected. Only an off-board coordinate is an error.
    pub fn select(&mut self, coord: Coord) -> Result<Option<&Selection>, ChessError> {
        let occupant = self.scenario.board.at(coord)?;
        self.clear_highlights();

        if let Some(piece) = occupant {
            let moves = generate_moves(&self.scenario.board, coord)?;
            self.selection = Some(Selection {
                origin: coord,
                piece,
                moves,
            });
        }
        Ok(self.selection.as_ref())
    }

    /// Drop the selection and any scenario highlights. The board is untouched.
    pub fn clear_highlights(&mut self) {
        self.selection = None;
        self.scenario.highlighted.clear();
        self.scenario.targets = MoveSet::new();
        self.scenario.promotion_options.clear();
    }

    /// Replace the board with a demonstration layout.
    pub fn stage(&mut self, kind: ScenarioKind) -> Result<(), ChessError> {
        let scenario = Scenario::build(kind)?;
        self.scenario = scenario;
        self.selection = None;
        Ok(())
    }

    /// Back to the full starting layout.
    pub fn reset(&mut self) {
        self.scenario = Scenario::standard();
        self.selection = None;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
