//! Core value types: players, decks, and the seeded RNG.

pub mod deck;
pub mod player;
pub mod rng;

pub use deck::{Deck, DeckSlot, DefinitionId};
pub use player::{PlayerPair, Who};
pub use rng::GameRng;
