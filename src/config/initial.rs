//! Resolving a finished descriptor into the settings a match starts from.
//!
//! This is the consuming side of the builder. The builder never checks
//! completeness or ranges; `InitialConfig::resolve` does, and it is the
//! only place `MissingField` and `InvalidConfig` come from.

use serde::{Deserialize, Serialize};

use super::{GameConfig, PlayerConfig};
use crate::attrs::{Attr, AttrKey};
use crate::core::{Deck, DeckSlot, DefinitionId, GameRng, PlayerPair, Who};
use crate::error::{Error, Result};
use crate::store::Descriptor;

/// Everything needed to lay out the initial game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitialConfig {
    /// Ruleset version. `None` means the engine's current version.
    pub version: Option<String>,

    /// Both players' decks.
    pub decks: PlayerPair<Deck>,

    /// Match-wide settings.
    pub game: GameConfig,

    /// Per-player toggles.
    pub players: PlayerPair<PlayerConfig>,
}

impl InitialConfig {
    /// Merge a descriptor over engine defaults.
    ///
    /// Both players need characters and cards. Counts must fit `u32`.
    /// Deck sizes are not checked. A missing seed is drawn from entropy.
    pub fn resolve(descriptor: &Descriptor) -> Result<Self> {
        let decks = PlayerPair::new(
            resolve_deck(descriptor, Who::Player0)?,
            resolve_deck(descriptor, Who::Player1)?,
        );

        let mut game = GameConfig::with_seed(0);
        let mut seeded = false;
        let mut version = None;
        let mut players = PlayerPair::<PlayerConfig>::default();

        for attr in descriptor.attrs() {
            match attr {
                Attr::DataVersion(v) => version = Some(v.clone()),
                Attr::ErrorLevel(level) => game.error_level = *level,
                // Negative seeds are reinterpreted, not rejected.
                Attr::RandomSeed(seed) => {
                    game.random_seed = *seed as u64;
                    seeded = true;
                }
                Attr::InitialHandsCount(v) => game.initial_hands_count = count(attr.key(), *v)?,
                Attr::MaxHandsCount(v) => game.max_hands_count = count(attr.key(), *v)?,
                Attr::MaxPileCount(v) => game.max_pile_count = count(attr.key(), *v)?,
                Attr::MaxRoundsCount(v) => game.max_rounds_count = count(attr.key(), *v)?,
                Attr::MaxSupportsCount(v) => game.max_supports_count = count(attr.key(), *v)?,
                Attr::MaxSummonsCount(v) => game.max_summons_count = count(attr.key(), *v)?,
                Attr::InitialDiceCount(v) => game.initial_dice_count = count(attr.key(), *v)?,
                Attr::MaxDiceCount(v) => game.max_dice_count = count(attr.key(), *v)?,
                Attr::NoShuffle(who, v) => players[*who].no_shuffle = *v,
                Attr::AlwaysOmni(who, v) => players[*who].always_omni = *v,
                Attr::AllowTuningAnyDice(who, v) => players[*who].allow_tuning_any_dice = *v,
            }
        }
        if !seeded {
            game.random_seed = GameRng::entropy_seed();
        }

        Ok(Self {
            version,
            decks,
            game,
            players,
        })
    }

    /// A player's starting pile.
    ///
    /// Shuffled from the match seed on a per-player stream, unless the
    /// player's `no_shuffle` toggle is set.
    #[must_use]
    pub fn initial_pile(&self, who: Who) -> Vec<DefinitionId> {
        let mut pile = self.decks[who].cards.clone();
        if !self.players[who].no_shuffle {
            GameRng::new(self.game.random_seed)
                .for_player(who)
                .shuffle(&mut pile);
        }
        pile
    }

    /// Serialize for handing to an out-of-process engine.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Inverse of [`to_bytes`](Self::to_bytes).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

fn resolve_deck(descriptor: &Descriptor, who: Who) -> Result<Deck> {
    let (characters_field, cards_field) = match who {
        Who::Player0 => ("characters[0]", "cards[0]"),
        Who::Player1 => ("characters[1]", "cards[1]"),
    };
    let characters = descriptor
        .deck_slot(who, DeckSlot::Characters)
        .ok_or(Error::MissingField(characters_field))?;
    let cards = descriptor
        .deck_slot(who, DeckSlot::Cards)
        .ok_or(Error::MissingField(cards_field))?;
    Ok(Deck::new(characters.iter().copied(), cards.iter().copied()))
}

fn count(key: AttrKey, value: i64) -> Result<u32> {
    u32::try_from(value).map_err(|_| Error::InvalidConfig {
        field: key.name(),
        reason: format!("{value} is not a valid count"),
    })
}
