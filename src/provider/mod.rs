//! Face catalog providers.
//!
//! A provider supplies the faces a new game draws from. Fetching is the only
//! asynchronous step in the game: the host awaits `fetch_catalog` to
//! completion and only then hands the result to the engine.
//!
//! Providers report failure as `Error::SourceUnavailable`. They never fall
//! back to an empty list on their own; an empty list reaching the engine
//! fails with `Error::EmptyCatalog`.

use async_trait::async_trait;

use crate::core::GameRng;
use crate::error::Result;
use crate::game::Face;

pub mod fixed;
#[cfg(feature = "pokeapi")]
pub mod pokeapi;

pub use fixed::StaticCatalogProvider;
#[cfg(feature = "pokeapi")]
pub use pokeapi::{PokeApiConfig, PokeApiProvider};

/// Source of faces for new games.
#[async_trait]
pub trait FaceCatalogProvider: Send + Sync {
    /// Produce the faces for one game.
    async fn fetch_catalog(&self) -> Result<Vec<Face>>;
}

#[async_trait]
impl<P: FaceCatalogProvider + ?Sized> FaceCatalogProvider for Box<P> {
    async fn fetch_catalog(&self) -> Result<Vec<Face>> {
        (**self).fetch_catalog().await
    }
}

/// Pick `count` entries independently and uniformly, repeats allowed.
///
/// Returns an empty vec when `entries` is empty.
pub fn sample_with_replacement<T: Clone>(entries: &[T], count: usize, rng: &mut GameRng) -> Vec<T> {
    (0..count)
        .filter_map(|_| rng.choose(entries).cloned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_count() {
        let mut rng = GameRng::new(42);
        let entries: Vec<u32> = (0..1000).collect();
        let picked = sample_with_replacement(&entries, 6, &mut rng);
        assert_eq!(picked.len(), 6);
        assert!(picked.iter().all(|p| entries.contains(p)));
    }

    #[test]
    fn test_sample_allows_repeats() {
        let mut rng = GameRng::new(1);
        let picked = sample_with_replacement(&["only"], 4, &mut rng);
        assert_eq!(picked, vec!["only"; 4]);
    }

    #[test]
    fn test_sample_from_nothing() {
        let mut rng = GameRng::new(1);
        let empty: [u8; 0] = [];
        assert!(sample_with_replacement(&empty, 6, &mut rng).is_empty());
    }
}
