//! The create-param builder.

use tracing::debug;

use super::CreateOptions;
use crate::attrs::{Attr, AttrValue};
use crate::config::InitialConfig;
use crate::core::{Deck, DeckSlot, DefinitionId, PlayerPair, Who};
use crate::error::{Error, Result};
use crate::store::{Descriptor, MemoryStore, ParamStore};

/// Strongly-typed builder for the parameters of a new GI-TCG game state.
///
/// Owns exactly one handle in its store. The handle is released when the
/// builder is dropped, including when construction fails part way.
/// `CreateParam` is deliberately not `Clone`.
///
/// ## Example
///
/// ```
/// use gitcg::{CreateOptions, CreateParam, Deck, Who};
/// use gitcg::attrs::{Attr, AttrKey};
///
/// # fn main() -> gitcg::Result<()> {
/// let mut param = CreateParam::create(
///     CreateOptions::new()
///         .with_deck(Who::Player0, Deck::new([1u32, 2, 3], [101u32; 30]))
///         .with_version("v1"),
/// )?;
/// param.set_characters(1, [4u32, 5, 6])?.set_random_seed(42)?;
///
/// let descriptor = param.descriptor()?;
/// assert_eq!(descriptor.get(AttrKey::RandomSeed), Some(&Attr::RandomSeed(42)));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct CreateParam<S: ParamStore = MemoryStore> {
    store: S,
    handle: S::Handle,
}

impl CreateParam<MemoryStore> {
    /// Allocate an empty builder in a private in-memory store.
    pub fn new() -> Result<Self> {
        Self::with_store(MemoryStore::new())
    }

    /// Allocate a builder in a private in-memory store and apply `options`.
    pub fn create(options: CreateOptions) -> Result<Self> {
        Self::create_in(MemoryStore::new(), options)
    }

    /// Snapshot of everything written so far.
    pub fn descriptor(&self) -> Result<Descriptor> {
        self.store.descriptor(self.handle)
    }

    /// Consume the builder, returning the finished descriptor.
    pub fn into_descriptor(self) -> Result<Descriptor> {
        self.finalize(|store, handle| store.descriptor(handle))
    }

    /// Consume the builder and resolve the descriptor the way the engine
    /// does when a match starts.
    pub fn into_initial_config(self) -> Result<InitialConfig> {
        self.finalize(|store, handle| {
            store.with_descriptor(handle, InitialConfig::resolve)?
        })
    }
}

impl<S: ParamStore> CreateParam<S> {
    /// Allocate an empty builder in `store`.
    pub fn with_store(store: S) -> Result<Self> {
        let handle = store.allocate()?;
        debug!(?handle, "created create-param builder");
        Ok(Self { store, handle })
    }

    /// Allocate a builder in `store` and apply `options`.
    ///
    /// On error the partially built handle is released before returning.
    pub fn create_in(store: S, options: CreateOptions) -> Result<Self> {
        let mut param = Self::with_store(store)?;
        param.apply(options)?;
        Ok(param)
    }

    /// Apply every option that is set, in a fixed order: decks (player 0
    /// characters, cards, then player 1), version, the scalar counts, then
    /// the per-player toggles.
    pub fn apply(&mut self, options: CreateOptions) -> Result<&mut Self> {
        let CreateOptions {
            deck0,
            deck1,
            version,
            random_seed,
            initial_hands_count,
            max_hands_count,
            max_rounds_count,
            max_supports_count,
            max_summons_count,
            initial_dice_count,
            max_dice_count,
            no_shuffle,
            always_omni,
            allow_tuning_any_dice,
        } = options;

        if let Some(deck) = deck0 {
            self.set_deck(Who::Player0, &deck)?;
        }
        if let Some(deck) = deck1 {
            self.set_deck(Who::Player1, &deck)?;
        }
        if let Some(version) = version {
            self.set_version(version)?;
        }

        let scalars = [
            random_seed.map(Attr::RandomSeed),
            initial_hands_count.map(Attr::InitialHandsCount),
            max_hands_count.map(Attr::MaxHandsCount),
            max_rounds_count.map(Attr::MaxRoundsCount),
            max_supports_count.map(Attr::MaxSupportsCount),
            max_summons_count.map(Attr::MaxSummonsCount),
            initial_dice_count.map(Attr::InitialDiceCount),
            max_dice_count.map(Attr::MaxDiceCount),
        ];
        for attr in scalars.into_iter().flatten() {
            self.set_attr(attr)?;
        }

        if let Some(pair) = no_shuffle {
            self.set_pair(Attr::NoShuffle, pair)?;
        }
        if let Some(pair) = always_omni {
            self.set_pair(Attr::AlwaysOmni, pair)?;
        }
        if let Some(pair) = allow_tuning_any_dice {
            self.set_pair(Attr::AllowTuningAnyDice, pair)?;
        }
        Ok(self)
    }

    /// Replace a player's character list.
    ///
    /// `who` must be 0 or 1; anything else fails with
    /// [`Error::InvalidArgument`] and writes nothing.
    pub fn set_characters<W, I>(&mut self, who: W, characters: I) -> Result<&mut Self>
    where
        W: TryInto<Who>,
        Error: From<W::Error>,
        I: IntoIterator,
        I::Item: Into<DefinitionId>,
    {
        self.write_slot(who, DeckSlot::Characters, characters)
    }

    /// Replace a player's action card list.
    ///
    /// Same player check as [`set_characters`](Self::set_characters).
    pub fn set_cards<W, I>(&mut self, who: W, cards: I) -> Result<&mut Self>
    where
        W: TryInto<Who>,
        Error: From<W::Error>,
        I: IntoIterator,
        I::Item: Into<DefinitionId>,
    {
        self.write_slot(who, DeckSlot::Cards, cards)
    }

    /// Copy both halves of a deck into a player's slots, characters first.
    pub fn set_deck(&mut self, who: Who, deck: &Deck) -> Result<&mut Self> {
        for slot in DeckSlot::BOTH {
            self.store.set_deck(self.handle, who, slot, deck.slot(slot))?;
        }
        Ok(self)
    }

    /// Record the ruleset version. Not validated here.
    pub fn set_version(&mut self, version: impl Into<String>) -> Result<&mut Self> {
        self.set_attr(Attr::DataVersion(version.into()))
    }

    pub fn set_random_seed(&mut self, seed: i64) -> Result<&mut Self> {
        self.set_attr(Attr::RandomSeed(seed))
    }

    pub fn set_initial_hands_count(&mut self, count: i64) -> Result<&mut Self> {
        self.set_attr(Attr::InitialHandsCount(count))
    }

    pub fn set_max_hands_count(&mut self, count: i64) -> Result<&mut Self> {
        self.set_attr(Attr::MaxHandsCount(count))
    }

    pub fn set_max_rounds_count(&mut self, count: i64) -> Result<&mut Self> {
        self.set_attr(Attr::MaxRoundsCount(count))
    }

    pub fn set_max_supports_count(&mut self, count: i64) -> Result<&mut Self> {
        self.set_attr(Attr::MaxSupportsCount(count))
    }

    pub fn set_max_summons_count(&mut self, count: i64) -> Result<&mut Self> {
        self.set_attr(Attr::MaxSummonsCount(count))
    }

    pub fn set_initial_dice_count(&mut self, count: i64) -> Result<&mut Self> {
        self.set_attr(Attr::InitialDiceCount(count))
    }

    pub fn set_max_dice_count(&mut self, count: i64) -> Result<&mut Self> {
        self.set_attr(Attr::MaxDiceCount(count))
    }

    /// Disable pile shuffling for (player0, player1).
    pub fn set_no_shuffle(&mut self, player0: bool, player1: bool) -> Result<&mut Self> {
        self.set_pair(Attr::NoShuffle, PlayerPair::new(player0, player1))
    }

    /// Always provide omni dice for (player0, player1).
    pub fn set_always_omni(&mut self, player0: bool, player1: bool) -> Result<&mut Self> {
        self.set_pair(Attr::AlwaysOmni, PlayerPair::new(player0, player1))
    }

    /// Allow tuning any die type for (player0, player1).
    pub fn set_allow_tuning_any_dice(&mut self, player0: bool, player1: bool) -> Result<&mut Self> {
        self.set_pair(Attr::AllowTuningAnyDice, PlayerPair::new(player0, player1))
    }

    /// Write a typed attribute. Every named setter goes through here.
    pub fn set_attr(&mut self, attr: Attr) -> Result<&mut Self> {
        self.store.set_attr(self.handle, attr.key(), attr.to_value())?;
        Ok(self)
    }

    /// Write an attribute by raw key code.
    ///
    /// Fails with [`Error::UnrecognizedKey`] or [`Error::TypeMismatch`]
    /// without touching the store. Toggle keys store a flag, not the
    /// integer: `5` is recorded as `true` and reads back as `1`.
    pub fn set_raw_attr(&mut self, code: u32, value: impl Into<AttrValue>) -> Result<&mut Self> {
        let attr = Attr::from_raw(code, value.into())?;
        self.set_attr(attr)
    }

    /// The store this builder writes into.
    ///
    /// Borrowing the store does not give a way to free the owned handle:
    ///
    /// ```compile_fail,E0133
    /// use gitcg::{CreateParam, ParamStore};
    ///
    /// let param = CreateParam::new().unwrap();
    /// param.store().release(param.handle());
    /// ```
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The handle this builder owns.
    pub fn handle(&self) -> S::Handle {
        self.handle
    }

    /// Hand the backing resource to `consume`, then release it.
    ///
    /// The handle is released whether or not `consume` succeeds. `consume`
    /// may read through the store but cannot free the handle, because
    /// [`ParamStore::release`] is `unsafe`.
    pub fn finalize<T>(self, consume: impl FnOnce(&S, S::Handle) -> Result<T>) -> Result<T> {
        consume(&self.store, self.handle)
    }

    fn write_slot<W, I>(&mut self, who: W, slot: DeckSlot, ids: I) -> Result<&mut Self>
    where
        W: TryInto<Who>,
        Error: From<W::Error>,
        I: IntoIterator,
        I::Item: Into<DefinitionId>,
    {
        let who = who.try_into()?;
        let ids: Vec<DefinitionId> = ids.into_iter().map(Into::into).collect();
        self.store.set_deck(self.handle, who, slot, &ids)?;
        Ok(self)
    }

    // Both entries are written before control returns to the caller.
    fn set_pair(&mut self, make: fn(Who, bool) -> Attr, values: PlayerPair<bool>) -> Result<&mut Self> {
        for (who, value) in values.iter() {
            self.set_attr(make(who, *value))?;
        }
        Ok(self)
    }
}

impl<S: ParamStore> Drop for CreateParam<S> {
    fn drop(&mut self) {
        debug!(handle = ?self.handle, "releasing create-param builder");
        // SAFETY: `handle` was allocated by `with_store`, is owned by this
        // builder alone, and `drop` runs at most once.
        unsafe { self.store.release(self.handle) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrs::AttrKey;

    fn ids(raw: &[u32]) -> Vec<DefinitionId> {
        raw.iter().copied().map(DefinitionId).collect()
    }

    #[test]
    fn test_new_is_empty() {
        let param = CreateParam::new().unwrap();
        assert!(param.descriptor().unwrap().is_empty());
        assert_eq!(param.store().live_handles(), 1);
    }

    #[test]
    fn test_set_characters_round_trip() {
        let mut param = CreateParam::new().unwrap();
        param.set_characters(0, [3u32, 1, 2]).unwrap();
        param.set_cards(Who::Player1, [7u32, 7, 8]).unwrap();

        let descriptor = param.descriptor().unwrap();
        assert_eq!(descriptor.characters(Who::Player0), Some(ids(&[3, 1, 2]).as_slice()));
        assert_eq!(descriptor.cards(Who::Player1), Some(ids(&[7, 7, 8]).as_slice()));
        assert_eq!(descriptor.cards(Who::Player0), None);
    }

    #[test]
    fn test_invalid_player_writes_nothing() {
        let mut param = CreateParam::new().unwrap();
        param.set_version("v1").unwrap();

        let err = param.set_characters(2, [1u32]).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(2)));
        let err = param.set_cards(-1i64, [1u32]).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(-1)));

        let descriptor = param.descriptor().unwrap();
        assert_eq!(descriptor.keys().collect::<Vec<_>>(), vec![AttrKey::DataVersion]);
        assert_eq!(descriptor.characters(Who::Player0), None);
        assert_eq!(descriptor.cards(Who::Player1), None);
    }

    #[test]
    fn test_last_write_wins() {
        let mut param = CreateParam::new().unwrap();
        param.set_max_rounds_count(15).unwrap();
        param.set_max_rounds_count(3).unwrap();
        param.set_characters(1, [1u32, 2, 3]).unwrap();
        param.set_characters(1, [9u32]).unwrap();

        let descriptor = param.descriptor().unwrap();
        assert_eq!(descriptor.get(AttrKey::MaxRoundsCount), Some(&Attr::MaxRoundsCount(3)));
        assert_eq!(descriptor.characters(Who::Player1), Some(ids(&[9]).as_slice()));
    }

    #[test]
    fn test_paired_setters_write_both_players() {
        let mut param = CreateParam::new().unwrap();
        param
            .set_no_shuffle(true, false)
            .unwrap()
            .set_always_omni(false, true)
            .unwrap()
            .set_allow_tuning_any_dice(true, true)
            .unwrap();

        let descriptor = param.descriptor().unwrap();
        assert_eq!(descriptor.get(AttrKey::NoShuffle0), Some(&Attr::NoShuffle(Who::Player0, true)));
        assert_eq!(descriptor.get(AttrKey::NoShuffle1), Some(&Attr::NoShuffle(Who::Player1, false)));
        assert_eq!(descriptor.get(AttrKey::AlwaysOmni0), Some(&Attr::AlwaysOmni(Who::Player0, false)));
        assert_eq!(descriptor.get(AttrKey::AlwaysOmni1), Some(&Attr::AlwaysOmni(Who::Player1, true)));
        assert_eq!(descriptor.keys().count(), 6);
    }

    #[test]
    fn test_raw_attr_escape_hatch() {
        let mut param = CreateParam::new().unwrap();
        param.set_raw_attr(AttrKey::MaxPileCount.code(), 120i64).unwrap();
        param.set_raw_attr(AttrKey::ErrorLevel.code(), "skipPhase").unwrap();

        assert!(matches!(
            param.set_raw_attr(0, 1i64),
            Err(Error::UnrecognizedKey(0))
        ));
        assert!(matches!(
            param.set_raw_attr(AttrKey::DataVersion.code(), 5i64),
            Err(Error::TypeMismatch { key: AttrKey::DataVersion, .. })
        ));

        let descriptor = param.descriptor().unwrap();
        assert_eq!(descriptor.get(AttrKey::MaxPileCount), Some(&Attr::MaxPileCount(120)));
        assert_eq!(descriptor.get(AttrKey::DataVersion), None);
    }

    #[test]
    fn test_raw_toggle_normalized() {
        let mut param = CreateParam::new().unwrap();
        param.set_raw_attr(AttrKey::NoShuffle0.code(), 5i64).unwrap();
        param.set_raw_attr(AttrKey::AlwaysOmni1.code(), -3i64).unwrap();
        param.set_raw_attr(AttrKey::AllowTuningAnyDice0.code(), 0i64).unwrap();

        let descriptor = param.descriptor().unwrap();
        let no_shuffle = descriptor.get(AttrKey::NoShuffle0).unwrap();
        assert_eq!(no_shuffle, &Attr::NoShuffle(Who::Player0, true));
        assert_eq!(no_shuffle.as_int(), Some(1));
        assert_eq!(
            descriptor.get(AttrKey::AlwaysOmni1).and_then(Attr::as_int),
            Some(1)
        );
        assert_eq!(
            descriptor.get(AttrKey::AllowTuningAnyDice0).and_then(Attr::as_int),
            Some(0)
        );
    }

    #[test]
    fn test_drop_releases_handle() {
        let store = MemoryStore::new();
        let handle = {
            let param = CreateParam::with_store(store.clone()).unwrap();
            param.handle()
        };
        assert!(!store.is_live(handle));
    }

    #[test]
    fn test_into_descriptor_releases_handle() {
        let store = MemoryStore::new();
        let mut param = CreateParam::with_store(store.clone()).unwrap();
        param.set_max_dice_count(16).unwrap();

        let descriptor = param.into_descriptor().unwrap();
        assert_eq!(descriptor.get(AttrKey::MaxDiceCount), Some(&Attr::MaxDiceCount(16)));
        assert_eq!(store.live_handles(), 0);
    }

    #[test]
    fn test_finalize_releases_on_error() {
        let store = MemoryStore::new();
        let param = CreateParam::with_store(store.clone()).unwrap();

        let result: Result<()> = param.finalize(|_, _| Err(Error::MissingField("characters[0]")));
        assert!(matches!(result, Err(Error::MissingField(_))));
        assert_eq!(store.live_handles(), 0);
    }
}
