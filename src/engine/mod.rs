pub mod board;
pub mod movegen;
pub mod types;

pub use board::BoardState;
pub use movegen::{MoveSet, generate_moves, moves_for_piece};
pub use types::*;
