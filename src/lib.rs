//! Piece movement patterns for a browser chess tutorial.
//!
//! - [`engine`]: board, coordinates and the movement-pattern generator.
//! - [`tutor`]: demonstration layouts, visitor sessions and reference text.
//! - [`api`]: the JSON HTTP surface the page talks to.

pub mod api;
pub mod config;
pub mod engine;
pub mod tutor;
