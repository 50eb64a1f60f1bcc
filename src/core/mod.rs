//! Core engine types: token ids, RNG, configuration.

pub mod entity;
pub mod rng;
pub mod config;

pub use entity::{TokenId, TokenIdAllocator};
pub use rng::GameRng;
pub use config::{EngineConfig, DEFAULT_TOKEN_COUNT};
