//! What a renderer needs from a board.
//!
//! `BoardView` is a read-only snapshot: per-token face and held flag, the
//! label of the single roll control, and whether to show the win decoration.
//! Renderers implement `Renderer` and never touch `GameState` directly.

use serde::Serialize;

use crate::core::TokenId;
use crate::game::{Face, GameState};

pub mod text;

pub use text::TextRenderer;

/// Label of the one trigger control.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ControlLabel {
    /// Board not won yet: the control rerolls unheld tokens.
    Roll,
    /// Board won: the control starts over.
    NewGame,
}

impl ControlLabel {
    #[must_use]
    pub fn for_state(state: &GameState) -> Self {
        if state.is_won() {
            Self::NewGame
        } else {
            Self::Roll
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Roll => "Roll",
            Self::NewGame => "New Game",
        }
    }
}

impl std::fmt::Display for ControlLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One token as a renderer sees it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TokenView<'a> {
    pub id: TokenId,
    pub face: &'a Face,
    pub held: bool,
}

/// Everything needed to draw one frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BoardView<'a> {
    pub tokens: Vec<TokenView<'a>>,
    pub control: ControlLabel,
    /// Show the win decoration.
    pub celebrate: bool,
}

impl<'a> BoardView<'a> {
    #[must_use]
    pub fn of(state: &'a GameState) -> Self {
        Self {
            tokens: state
                .tokens()
                .iter()
                .map(|t| TokenView {
                    id: t.id(),
                    face: t.face(),
                    held: t.is_held(),
                })
                .collect(),
            control: ControlLabel::for_state(state),
            celebrate: state.is_won(),
        }
    }
}

/// Draws boards.
pub trait Renderer {
    type Output;

    fn render(&mut self, view: &BoardView<'_>) -> Self::Output;
}
