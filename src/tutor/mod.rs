//! The teaching layer on top of the engine: staged layouts, per-visitor
//! sessions and the static reference text.

pub mod guide;
pub mod scenario;
pub mod session;

pub use guide::{PieceGuide, SpecialMove, SpecialMoveGuide, piece_guide, special_move_guide};
pub use scenario::{ISOLATION_SQUARE, PromotionOption, Scenario, ScenarioKind};
pub use session::{Selection, Session};
