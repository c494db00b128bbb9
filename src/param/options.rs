//! Optional constructor arguments for [`CreateParam`](super::CreateParam).

use serde::{Deserialize, Serialize};

use crate::core::{Deck, PlayerPair, Who};

/// Everything that can be supplied when creating a [`CreateParam`](super::CreateParam).
///
/// Each field left as `None` is simply not written. Applying options is
/// equivalent to calling the matching setters, in field order, right
/// after allocation.
///
/// Options can be loaded from any serde format:
///
/// ```
/// use gitcg::param::CreateOptions;
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let json = r#"{ "version": "v4.1.0", "random_seed": 7, "always_omni": [true, false] }"#;
/// let options: CreateOptions = serde_json::from_str(json)?;
/// assert_eq!(options.random_seed, Some(7));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CreateOptions {
    /// Player 0's deck.
    pub deck0: Option<Deck>,
    /// Player 1's deck.
    pub deck1: Option<Deck>,
    /// Ruleset version string.
    pub version: Option<String>,

    pub random_seed: Option<i64>,
    pub initial_hands_count: Option<i64>,
    pub max_hands_count: Option<i64>,
    pub max_rounds_count: Option<i64>,
    pub max_supports_count: Option<i64>,
    pub max_summons_count: Option<i64>,
    pub initial_dice_count: Option<i64>,
    pub max_dice_count: Option<i64>,

    /// Disable pile shuffling, per player.
    pub no_shuffle: Option<PlayerPair<bool>>,
    /// Always roll omni dice, per player.
    pub always_omni: Option<PlayerPair<bool>>,
    /// Allow tuning dice of any type, per player.
    pub allow_tuning_any_dice: Option<PlayerPair<bool>>,
}

impl CreateOptions {
    /// Options that write nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a player's deck.
    #[must_use]
    pub fn with_deck(mut self, who: Who, deck: Deck) -> Self {
        match who {
            Who::Player0 => self.deck0 = Some(deck),
            Who::Player1 => self.deck1 = Some(deck),
        }
        self
    }

    /// Set the ruleset version.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    #[must_use]
    pub fn with_random_seed(mut self, seed: i64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_initial_hands_count(mut self, count: i64) -> Self {
        self.initial_hands_count = Some(count);
        self
    }

    #[must_use]
    pub fn with_max_hands_count(mut self, count: i64) -> Self {
        self.max_hands_count = Some(count);
        self
    }

    #[must_use]
    pub fn with_max_rounds_count(mut self, count: i64) -> Self {
        self.max_rounds_count = Some(count);
        self
    }

    #[must_use]
    pub fn with_max_supports_count(mut self, count: i64) -> Self {
        self.max_supports_count = Some(count);
        self
    }

    #[must_use]
    pub fn with_max_summons_count(mut self, count: i64) -> Self {
        self.max_summons_count = Some(count);
        self
    }

    #[must_use]
    pub fn with_initial_dice_count(mut self, count: i64) -> Self {
        self.initial_dice_count = Some(count);
        self
    }

    #[must_use]
    pub fn with_max_dice_count(mut self, count: i64) -> Self {
        self.max_dice_count = Some(count);
        self
    }

    /// Disable shuffling for (player0, player1).
    #[must_use]
    pub fn with_no_shuffle(mut self, player0: bool, player1: bool) -> Self {
        self.no_shuffle = Some(PlayerPair::new(player0, player1));
        self
    }

    /// Always provide omni dice for (player0, player1).
    #[must_use]
    pub fn with_always_omni(mut self, player0: bool, player1: bool) -> Self {
        self.always_omni = Some(PlayerPair::new(player0, player1));
        self
    }

    /// Allow tuning any dice for (player0, player1).
    #[must_use]
    pub fn with_allow_tuning_any_dice(mut self, player0: bool, player1: bool) -> Self {
        self.allow_tuning_any_dice = Some(PlayerPair::new(player0, player1));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let options = CreateOptions::default();
        assert_eq!(options.deck0, None);
        assert_eq!(options.version, None);
        assert_eq!(options.no_shuffle, None);
    }

    #[test]
    fn test_builder_pattern() {
        let options = CreateOptions::new()
            .with_deck(Who::Player1, Deck::new([4u32, 5, 6], [202u32]))
            .with_version("v1")
            .with_max_dice_count(12)
            .with_no_shuffle(true, false);

        assert_eq!(options.deck0, None);
        assert_eq!(options.deck1.unwrap().characters.len(), 3);
        assert_eq!(options.version.as_deref(), Some("v1"));
        assert_eq!(options.max_dice_count, Some(12));
        assert_eq!(options.no_shuffle, Some(PlayerPair::new(true, false)));
    }

    #[test]
    fn test_serialization() {
        let options = CreateOptions::new()
            .with_deck(Who::Player0, Deck::new([1u32, 2, 3], [101u32; 2]))
            .with_random_seed(42)
            .with_allow_tuning_any_dice(false, true);

        let json = serde_json::to_string(&options).unwrap();
        let deserialized: CreateOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(options, deserialized);
    }

    #[test]
    fn test_pair_must_have_two_entries() {
        let err = serde_json::from_str::<CreateOptions>(r#"{ "no_shuffle": [true] }"#);
        assert!(err.is_err());
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let err = serde_json::from_str::<CreateOptions>(r#"{ "max_dice": 8 }"#);
        assert!(err.is_err());
    }
}
