//! Tokens - one rollable slot on the board.

use serde::{Deserialize, Serialize};

use super::face::Face;
use crate::core::TokenId;

/// A token on the board.
///
/// Tokens are values: the engine never edits one in place, it replaces it.
/// Holding produces a copy with the flag flipped; rerolling produces a
/// brand new token with a new id.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    id: TokenId,
    face: Face,
    held: bool,
}

impl Token {
    /// Create an unheld token.
    #[must_use]
    pub fn new(id: TokenId, face: Face) -> Self {
        Self {
            id,
            face,
            held: false,
        }
    }

    /// Same token with the held flag set to `held`.
    #[must_use]
    pub fn with_held(mut self, held: bool) -> Self {
        self.held = held;
        self
    }

    /// Same token with the held flag flipped.
    #[must_use]
    pub fn toggled(&self) -> Self {
        self.clone().with_held(!self.held)
    }

    /// Identity of this token; changes only when the token is rerolled.
    #[must_use]
    pub fn id(&self) -> TokenId {
        self.id
    }

    /// Face currently shown.
    #[must_use]
    pub fn face(&self) -> &Face {
        &self.face
    }

    /// Whether the next roll leaves this token alone.
    #[must_use]
    pub fn is_held(&self) -> bool {
        self.held
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_token_is_unheld() {
        let token = Token::new(TokenId(1), Face::from("A"));
        assert!(!token.is_held());
        assert_eq!(token.id(), TokenId(1));
        assert_eq!(token.face().as_str(), "A");
    }

    #[test]
    fn test_toggle_twice_restores() {
        let token = Token::new(TokenId(1), Face::from("A"));
        let held = token.toggled();
        assert!(held.is_held());
        assert_eq!(held.id(), token.id());
        assert_eq!(held.face(), token.face());
        assert_eq!(held.toggled(), token);
    }

    #[test]
    fn test_serialization() {
        let token = Token::new(TokenId(4), Face::from("B")).with_held(true);
        let json = serde_json::to_string(&token).unwrap();
        assert_eq!(json, r#"{"id":4,"face":"B","held":true}"#);
        let back: Token = serde_json::from_str(&json).unwrap();
        assert_eq!(back, token);
    }
}
