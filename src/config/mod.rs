//! Engine-side view of finished create parameters.
//!
//! - `GameConfig`: match-wide limits and seed, with engine defaults
//! - `PlayerConfig`: per-player toggles
//! - `InitialConfig`: a descriptor merged over those defaults

pub mod game;
pub mod initial;

pub use game::{GameConfig, PlayerConfig};
pub use initial::InitialConfig;
