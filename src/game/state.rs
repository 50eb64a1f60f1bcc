//! Game state: the board a host owns between engine calls.
//!
//! ## GameState
//!
//! - The active catalog (fixed until the next new game)
//! - The ordered tokens
//! - The derived `won` flag
//!
//! `won` is computed in every constructor and tokens are only reachable
//! through shared references, so the flag can never go stale. Deserialized
//! states recompute it as well.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::face::Catalog;
use super::token::Token;
use crate::core::TokenId;

/// Check the win condition over an ordered token sequence.
///
/// True iff there is at least one token, every token is held, and every
/// face equals the first token's face.
///
/// ```
/// use match_dice::core::TokenId;
/// use match_dice::game::{is_won, Face, Token};
///
/// let a = Token::new(TokenId(0), Face::from("A")).with_held(true);
/// let b = Token::new(TokenId(1), Face::from("A")).with_held(true);
/// assert!(is_won(&[a.clone(), b]));
///
/// let loose = Token::new(TokenId(2), Face::from("A"));
/// assert!(!is_won(&[a, loose]));
///
/// let empty: Vec<Token> = Vec::new();
/// assert!(!is_won(&empty));
/// ```
#[must_use]
pub fn is_won<'a, I>(tokens: I) -> bool
where
    I: IntoIterator<Item = &'a Token>,
{
    let mut iter = tokens.into_iter();
    let Some(first) = iter.next() else {
        return false;
    };
    first.is_held() && iter.all(|t| t.is_held() && t.face() == first.face())
}

/// Ways a hand-built or deserialized state can be inconsistent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("token id {0} appears more than once")]
    DuplicateId(TokenId),

    #[error("{id} shows face {face:?} which is not in the catalog")]
    FaceNotInCatalog { id: TokenId, face: String },

    #[error("won flag is {flag} but tokens say {expected}")]
    StaleWinFlag { flag: bool, expected: bool },
}

/// Board state for one game.
///
/// Cloning is O(1): tokens and catalog live in persistent vectors.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StateParts")]
pub struct GameState {
    catalog: Catalog,
    tokens: Vector<Token>,
    won: bool,
}

#[derive(Deserialize)]
struct StateParts {
    catalog: Catalog,
    tokens: Vector<Token>,
}

impl From<StateParts> for GameState {
    fn from(parts: StateParts) -> Self {
        Self::new(parts.catalog, parts.tokens)
    }
}

impl GameState {
    /// Assemble a state from a catalog and tokens, computing `won`.
    #[must_use]
    pub fn new(catalog: Catalog, tokens: impl IntoIterator<Item = Token>) -> Self {
        let tokens: Vector<Token> = tokens.into_iter().collect();
        let won = is_won(&tokens);
        Self {
            catalog,
            tokens,
            won,
        }
    }

    /// The catalog faces are drawn from in this game.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Tokens in board order.
    #[must_use]
    pub fn tokens(&self) -> &Vector<Token> {
        &self.tokens
    }

    /// Number of tokens (N).
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// True for a zero-token board.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// True when every token is held and shows the same face.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.won
    }

    /// Find a token by id.
    #[must_use]
    pub fn token(&self, id: TokenId) -> Option<&Token> {
        self.tokens.iter().find(|t| t.id() == id)
    }

    /// Board position of a token.
    #[must_use]
    pub fn position(&self, id: TokenId) -> Option<usize> {
        self.tokens.iter().position(|t| t.id() == id)
    }

    /// Largest token id on the board.
    #[must_use]
    pub fn max_token_id(&self) -> Option<TokenId> {
        self.tokens.iter().map(Token::id).max()
    }

    /// Number of held tokens.
    #[must_use]
    pub fn held_count(&self) -> usize {
        self.tokens.iter().filter(|t| t.is_held()).count()
    }

    /// Verify the structural invariants of this state.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let mut seen = FxHashSet::default();
        for token in &self.tokens {
            if !seen.insert(token.id()) {
                return Err(InvariantViolation::DuplicateId(token.id()));
            }
            if !self.catalog.contains(token.face()) {
                return Err(InvariantViolation::FaceNotInCatalog {
                    id: token.id(),
                    face: token.face().to_string(),
                });
            }
        }

        let expected = is_won(&self.tokens);
        if self.won != expected {
            return Err(InvariantViolation::StaleWinFlag {
                flag: self.won,
                expected,
            });
        }
        Ok(())
    }
}
