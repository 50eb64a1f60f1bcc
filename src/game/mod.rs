//! The hold-and-roll matching game.
//!
//! - `face`: faces and the per-game catalog
//! - `token`: one rollable slot
//! - `state`: the host-owned board and the win rule
//! - `engine`: new game, hold and roll transitions

pub mod face;
pub mod token;
pub mod state;
pub mod engine;

pub use face::{Catalog, Face};
pub use token::Token;
pub use state::{is_won, GameState, InvariantViolation};
pub use engine::GameEngine;
