//! Engine configuration.

use serde::{Deserialize, Serialize};

use super::rng::GameRng;

/// Number of tokens in a game unless configured otherwise.
pub const DEFAULT_TOKEN_COUNT: usize = 10;

/// Engine configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Number of tokens on the board (N). Fixed for the engine's lifetime.
    pub token_count: usize,

    /// Random seed for face draws.
    /// `None` seeds from OS entropy; the same seed replays the same games.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            token_count: DEFAULT_TOKEN_COUNT,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Create a new config with a custom token count.
    pub fn with_token_count(mut self, count: usize) -> Self {
        self.token_count = count;
        self
    }

    /// Create a new config with a custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the RNG this config describes.
    #[must_use]
    pub fn rng(&self) -> GameRng {
        match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        }
    }
}
