//! Host-side game loop.
//!
//! `Session` glues a provider to an engine and keeps the current board:
//!
//! 1. `start` awaits the provider, then starts a game over what it returned
//! 2. `toggle_hold` / `roll` forward user actions to the engine
//! 3. `restart` fetches a fresh catalog for a new game
//! 4. `view` hands a snapshot to the renderer
//!
//! Methods take `&mut self`, so user actions are applied one at a time.
//! Provider failures propagate to the caller untouched; the session keeps
//! its previous board (if any) so the host can offer a retry.

use tracing::warn;

use crate::core::{EngineConfig, TokenId};
use crate::error::Result;
use crate::game::{GameEngine, GameState};
use crate::provider::FaceCatalogProvider;
use crate::view::{BoardView, ControlLabel, Renderer};

/// One player's game against one provider.
#[derive(Debug)]
pub struct Session<P> {
    engine: GameEngine,
    provider: P,
    state: Option<GameState>,
}

impl<P: FaceCatalogProvider> Session<P> {
    #[must_use]
    pub fn new(config: EngineConfig, provider: P) -> Self {
        Self {
            engine: GameEngine::new(config),
            provider,
            state: None,
        }
    }

    /// Fetch a catalog and start the first game over it.
    pub async fn start(&mut self) -> Result<&GameState> {
        self.fetch_and_play("start").await
    }

    /// Start a new game over a freshly fetched catalog.
    ///
    /// Unlike `roll` on a won board, the previous catalog is not reused.
    /// On failure the previous board is kept.
    pub async fn restart(&mut self) -> Result<&GameState> {
        self.fetch_and_play("restart").await
    }

    async fn fetch_and_play(&mut self, action: &'static str) -> Result<&GameState> {
        let faces = self.provider.fetch_catalog().await.inspect_err(|err| {
            warn!(error = %err, action, "could not fetch face catalog");
        })?;
        let state = self.engine.new_game(faces)?;
        Ok(&*self.state.insert(state))
    }

    /// Current board, if a game was started.
    #[must_use]
    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    #[must_use]
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Toggle a token. No-op before the first game or for unknown ids.
    pub fn toggle_hold(&mut self, id: TokenId) -> Option<&GameState> {
        let next = self.engine.toggle_hold(self.state.as_ref()?, id);
        Some(&*self.state.insert(next))
    }

    /// Press the roll control. Returns `None` before the first game.
    ///
    /// On a won board this starts a new game over the same catalog.
    pub fn roll(&mut self) -> Option<Result<&GameState>> {
        let current = self.state.as_ref()?;
        Some(match self.engine.roll(current) {
            Ok(next) => Ok(&*self.state.insert(next)),
            Err(err) => Err(err),
        })
    }

    /// Label for the roll control; `Roll` before the first game.
    #[must_use]
    pub fn control_label(&self) -> ControlLabel {
        self.state
            .as_ref()
            .map_or(ControlLabel::Roll, ControlLabel::for_state)
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.state.as_ref().is_some_and(GameState::is_won)
    }

    /// Snapshot of the current board.
    #[must_use]
    pub fn view(&self) -> Option<BoardView<'_>> {
        self.state.as_ref().map(BoardView::of)
    }

    /// Render the current board with `renderer`.
    pub fn render<R: Renderer>(&self, renderer: &mut R) -> Option<R::Output> {
        self.view().map(|view| renderer.render(&view))
    }
}
