//! The accumulated contents of one create-param handle.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::attrs::{Attr, AttrKey};
use crate::core::{DeckSlot, DefinitionId, PlayerPair, Who};
use crate::error::Result;

/// A bag of optional, typed create parameters.
///
/// Every field is optional and every write replaces the previous value for
/// the same key or deck slot. Nothing here checks completeness; see
/// [`InitialConfig::resolve`](crate::config::InitialConfig::resolve).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Descriptor {
    characters: PlayerPair<Option<Vec<DefinitionId>>>,
    cards: PlayerPair<Option<Vec<DefinitionId>>>,
    attrs: BTreeMap<AttrKey, Attr>,
}

impl Descriptor {
    /// Create an empty descriptor.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace a player's character or card list.
    pub fn set_deck(&mut self, who: Who, slot: DeckSlot, ids: &[DefinitionId]) {
        let target = match slot {
            DeckSlot::Characters => &mut self.characters[who],
            DeckSlot::Cards => &mut self.cards[who],
        };
        *target = Some(ids.to_vec());
    }

    /// Store an attribute, returning the value it replaced.
    pub fn insert(&mut self, attr: Attr) -> Option<Attr> {
        self.attrs.insert(attr.key(), attr)
    }

    /// Get the attribute stored under `key`.
    #[must_use]
    pub fn get(&self, key: AttrKey) -> Option<&Attr> {
        self.attrs.get(&key)
    }

    /// A player's character list, if assigned.
    #[must_use]
    pub fn characters(&self, who: Who) -> Option<&[DefinitionId]> {
        self.characters[who].as_deref()
    }

    /// A player's card list, if assigned.
    #[must_use]
    pub fn cards(&self, who: Who) -> Option<&[DefinitionId]> {
        self.cards[who].as_deref()
    }

    /// A player's list for the given slot, if assigned.
    #[must_use]
    pub fn deck_slot(&self, who: Who, slot: DeckSlot) -> Option<&[DefinitionId]> {
        match slot {
            DeckSlot::Characters => self.characters(who),
            DeckSlot::Cards => self.cards(who),
        }
    }

    /// Attributes in key-code order.
    pub fn attrs(&self) -> impl Iterator<Item = &Attr> {
        self.attrs.values()
    }

    /// Keys that have been set, in key-code order.
    pub fn keys(&self) -> impl Iterator<Item = AttrKey> + '_ {
        self.attrs.keys().copied()
    }

    /// True if nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
            && self.characters.iter().all(|(_, ids)| ids.is_none())
            && self.cards.iter().all(|(_, ids)| ids.is_none())
    }

    /// Serialize for handing across a process boundary.
    pub fn encode(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Inverse of [`encode`](Self::encode).
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}
