//! # match-dice
//!
//! Engine for a hold-and-roll matching game. A board of tokens each shows a
//! face drawn from a catalog; the player holds tokens between rolls and wins
//! once every token is held and all show the same face.
//!
//! ## Design Principles
//!
//! 1. **Host-Owned State**: The engine never stores the board. Each call takes
//!    a `GameState` and returns the next one.
//!
//! 2. **Synchronous Core**: New game, hold and roll run to completion. The
//!    only async step is fetching a catalog, which happens before the engine
//!    is involved.
//!
//! 3. **No Undefined Faces**: Empty catalogs fail with `Error::EmptyCatalog`
//!    instead of producing tokens with nothing on them.
//!
//! ## Modules
//!
//! - `core`: Token ids, RNG, configuration
//! - `game`: Faces, tokens, board state, the engine
//! - `provider`: Face catalog sources
//! - `session`: Provider + engine + current board for a host
//! - `view`: Renderer-facing snapshots and a text renderer

pub mod core;
pub mod error;
pub mod game;
pub mod provider;
pub mod session;
pub mod view;

// Re-export commonly used types
pub use crate::core::{EngineConfig, GameRng, TokenId, TokenIdAllocator, DEFAULT_TOKEN_COUNT};

pub use crate::error::{Error, Result};

pub use crate::game::{is_won, Catalog, Face, GameEngine, GameState, InvariantViolation, Token};

pub use crate::provider::{sample_with_replacement, FaceCatalogProvider, StaticCatalogProvider};
#[cfg(feature = "pokeapi")]
pub use crate::provider::{PokeApiConfig, PokeApiProvider};

pub use crate::session::Session;

pub use crate::view::{BoardView, ControlLabel, Renderer, TextRenderer, TokenView};
