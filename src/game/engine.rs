//! The game engine: new game, hold, roll.
//!
//! The engine owns only what must persist across calls (RNG, id allocator,
//! config). The board itself is a `GameState` value the host keeps and passes
//! back in; every operation returns the next state and leaves the input
//! untouched.
//!
//! ```
//! use match_dice::core::EngineConfig;
//! use match_dice::game::GameEngine;
//!
//! let mut engine = GameEngine::new(EngineConfig::default().with_seed(42));
//! let state = engine.new_game(["A", "B", "C"]).unwrap();
//! assert_eq!(state.len(), 10);
//!
//! let first = state.tokens()[0].id();
//! let state = engine.toggle_hold(&state, first);
//! let state = engine.roll(&state).unwrap();
//! assert_eq!(state.tokens()[0].id(), first);
//! ```

use tracing::{debug, info, trace};

use super::face::{Catalog, Face};
use super::state::GameState;
use super::token::Token;
use crate::core::{EngineConfig, GameRng, TokenId, TokenIdAllocator};
use crate::error::{Error, Result};

/// Runs the hold-and-roll rules over host-owned `GameState` values.
#[derive(Clone, Debug)]
pub struct GameEngine {
    config: EngineConfig,
    rng: GameRng,
    ids: TokenIdAllocator,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl GameEngine {
    /// Create an engine from its configuration.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        let rng = config.rng();
        Self {
            config,
            rng,
            ids: TokenIdAllocator::new(),
        }
    }

    /// Engine configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Number of tokens on every board this engine produces.
    #[must_use]
    pub fn token_count(&self) -> usize {
        self.config.token_count
    }

    /// Start a new game over `faces`.
    ///
    /// An empty sequence (how a failed provider reports "nothing") fails with
    /// `EmptyCatalog`.
    pub fn new_game<I, F>(&mut self, faces: I) -> Result<GameState>
    where
        I: IntoIterator<Item = F>,
        F: Into<Face>,
    {
        let catalog = Catalog::new(faces)?;
        self.start(catalog)
    }

    /// Start a new game over an already validated catalog.
    pub fn start(&mut self, catalog: Catalog) -> Result<GameState> {
        let tokens = (0..self.config.token_count)
            .map(|_| self.fresh_token(&catalog))
            .collect::<Result<Vec<_>>>()?;

        debug!(tokens = tokens.len(), faces = catalog.len(), "new game");
        Ok(GameState::new(catalog, tokens))
    }

    /// Flip the held flag of the token with `id`.
    ///
    /// An id that is not on the board is a no-op.
    #[must_use]
    pub fn toggle_hold(&self, state: &GameState, id: TokenId) -> GameState {
        let Some(index) = state.position(id) else {
            trace!(%id, "toggle_hold: unknown token");
            return state.clone();
        };

        let mut tokens = state.tokens().clone();
        let toggled = tokens[index].toggled();
        trace!(%id, held = toggled.is_held(), "toggle_hold");
        tokens.set(index, toggled);

        let next = GameState::new(state.catalog().clone(), tokens);
        if next.is_won() {
            info!(face = %next.tokens()[0].face(), "game won");
        }
        next
    }

    /// Roll every unheld token.
    ///
    /// Rolling a won board starts a new game over the same catalog instead.
    /// Otherwise each unheld token is replaced by a new token with a fresh
    /// id and a fresh draw; held tokens are kept as they are.
    ///
    /// Boards of the wrong size or with broken invariants are rejected.
    /// Boards from another engine are accepted; new ids skip past theirs.
    pub fn roll(&mut self, state: &GameState) -> Result<GameState> {
        self.admit(state)?;
        if state.is_won() {
            debug!("roll after win starts a new game");
            return self.start(state.catalog().clone());
        }

        let catalog = state.catalog();
        let tokens = state
            .tokens()
            .iter()
            .map(|token| {
                if token.is_held() {
                    Ok(token.clone())
                } else {
                    self.fresh_token(catalog)
                }
            })
            .collect::<Result<Vec<_>>>()?;

        let next = GameState::new(catalog.clone(), tokens);
        debug!(
            held = next.held_count(),
            rerolled = next.len() - next.held_count(),
            "rolled"
        );
        if next.is_won() {
            info!(face = %next.tokens()[0].face(), "game won");
        }
        Ok(next)
    }

    fn admit(&mut self, state: &GameState) -> Result<()> {
        if state.len() != self.config.token_count {
            return Err(Error::BoardSizeMismatch {
                expected: self.config.token_count,
                found: state.len(),
            });
        }
        state.check_invariants()?;
        if let Some(max) = state.max_token_id() {
            self.ids.reserve_through(max);
        }
        Ok(())
    }

    fn fresh_token(&mut self, catalog: &Catalog) -> Result<Token> {
        let face = catalog.draw(&mut self.rng)?;
        Ok(Token::new(self.ids.alloc(), face))
    }
}
