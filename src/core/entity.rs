//! Token identification.
//!
//! Every token gets a `TokenId` when it is created. Ids are handed out by a
//! monotonically increasing `TokenIdAllocator` owned by the engine, so an id
//! is never reused, not even across games.
//!
//! ## Usage
//!
//! ```
//! use match_dice::core::{TokenId, TokenIdAllocator};
//!
//! let mut ids = TokenIdAllocator::new();
//! let first = ids.alloc();
//! let second = ids.alloc();
//!
//! assert_ne!(first, second);
//! assert_eq!(first, TokenId(0));
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a token.
///
/// A rerolled token is a new token with a new id; renderers can key on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TokenId(pub u64);

impl TokenId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl From<u64> for TokenId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for TokenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token({})", self.0)
    }
}

/// Hands out fresh token ids.
#[derive(Clone, Debug, Default)]
pub struct TokenIdAllocator {
    next: u64,
}

impl TokenIdAllocator {
    /// Create an allocator starting at id 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a new token ID.
    pub fn alloc(&mut self) -> TokenId {
        let id = TokenId(self.next);
        self.next += 1;
        id
    }

    /// Make sure every later id is greater than `id`.
    ///
    /// Used when a board built elsewhere already holds ids.
    pub fn reserve_through(&mut self, id: TokenId) {
        self.next = self.next.max(id.0.saturating_add(1));
    }

    /// Number of ids handed out so far.
    #[must_use]
    pub fn allocated(&self) -> u64 {
        self.next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alloc_is_sequential() {
        let mut ids = TokenIdAllocator::new();
        assert_eq!(ids.alloc(), TokenId(0));
        assert_eq!(ids.alloc(), TokenId(1));
        assert_eq!(ids.alloc(), TokenId(2));
        assert_eq!(ids.allocated(), 3);
    }

    #[test]
    fn test_alloc_never_repeats() {
        let mut ids = TokenIdAllocator::new();
        let mut seen = rustc_hash::FxHashSet::default();
        for _ in 0..1000 {
            assert!(seen.insert(ids.alloc()));
        }
    }

    #[test]
    fn test_reserve_through_skips_taken_ids() {
        let mut ids = TokenIdAllocator::new();
        ids.reserve_through(TokenId(7));
        assert_eq!(ids.alloc(), TokenId(8));

        // Never moves backwards
        ids.reserve_through(TokenId(2));
        assert_eq!(ids.alloc(), TokenId(9));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", TokenId(42)), "Token(42)");
    }

    #[test]
    fn test_serialization() {
        let id = TokenId(123);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "123");
        let deserialized: TokenId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
