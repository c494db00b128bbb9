//! Resolved match settings with engine defaults.

use serde::{Deserialize, Serialize};

use crate::attrs::ErrorLevel;
use crate::core::GameRng;

/// Match-wide settings after defaults have been filled in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// How rule errors are treated.
    pub error_level: ErrorLevel,

    /// Seed for every random choice in the match.
    pub random_seed: u64,

    pub initial_hands_count: u32,
    pub max_hands_count: u32,
    pub max_pile_count: u32,
    pub max_rounds_count: u32,
    pub max_supports_count: u32,
    pub max_summons_count: u32,
    pub initial_dice_count: u32,
    pub max_dice_count: u32,
}

impl GameConfig {
    pub const DEFAULT_INITIAL_HANDS_COUNT: u32 = 5;
    pub const DEFAULT_MAX_HANDS_COUNT: u32 = 10;
    pub const DEFAULT_MAX_PILE_COUNT: u32 = 200;
    pub const DEFAULT_MAX_ROUNDS_COUNT: u32 = 15;
    pub const DEFAULT_MAX_SUPPORTS_COUNT: u32 = 4;
    pub const DEFAULT_MAX_SUMMONS_COUNT: u32 = 4;
    pub const DEFAULT_INITIAL_DICE_COUNT: u32 = 8;
    pub const DEFAULT_MAX_DICE_COUNT: u32 = 16;

    /// Engine defaults with a fixed seed.
    #[must_use]
    pub fn with_seed(random_seed: u64) -> Self {
        Self {
            error_level: ErrorLevel::Strict,
            random_seed,
            initial_hands_count: Self::DEFAULT_INITIAL_HANDS_COUNT,
            max_hands_count: Self::DEFAULT_MAX_HANDS_COUNT,
            max_pile_count: Self::DEFAULT_MAX_PILE_COUNT,
            max_rounds_count: Self::DEFAULT_MAX_ROUNDS_COUNT,
            max_supports_count: Self::DEFAULT_MAX_SUPPORTS_COUNT,
            max_summons_count: Self::DEFAULT_MAX_SUMMONS_COUNT,
            initial_dice_count: Self::DEFAULT_INITIAL_DICE_COUNT,
            max_dice_count: Self::DEFAULT_MAX_DICE_COUNT,
        }
    }
}

impl Default for GameConfig {
    /// Engine defaults with a seed drawn from OS entropy.
    fn default() -> Self {
        Self::with_seed(GameRng::entropy_seed())
    }
}

/// Per-player toggles. All off by default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Keep the pile in deck order.
    pub no_shuffle: bool,
    /// Every rolled die is omni.
    pub always_omni: bool,
    /// Tuning may convert dice of any type, not just non-matching ones.
    pub allow_tuning_any_dice: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::with_seed(42);
        assert_eq!(config.random_seed, 42);
        assert_eq!(config.error_level, ErrorLevel::Strict);
        assert_eq!(config.initial_hands_count, 5);
        assert_eq!(config.max_hands_count, 10);
        assert_eq!(config.max_pile_count, 200);
        assert_eq!(config.max_rounds_count, 15);
        assert_eq!(config.max_supports_count, 4);
        assert_eq!(config.max_summons_count, 4);
        assert_eq!(config.initial_dice_count, 8);
        assert_eq!(config.max_dice_count, 16);
    }

    #[test]
    fn test_default_matches_with_seed() {
        let config = GameConfig::default();
        assert_eq!(config, GameConfig::with_seed(config.random_seed));
    }

    #[test]
    fn test_player_config_default() {
        let player = PlayerConfig::default();
        assert!(!player.no_shuffle);
        assert!(!player.always_omni);
        assert!(!player.allow_tuning_any_dice);
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::with_seed(7);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
