//! # gitcg
//!
//! Typed construction of the parameters that seed a GI-TCG game state.
//!
//! ## Design Principles
//!
//! 1. **Permissive Accumulation**: The builder records whatever it is given.
//!    Deck sizes, ranges, and completeness are checked only when the
//!    descriptor is resolved for a match.
//!
//! 2. **Typed Keys**: Every recognized key has exactly one value type, baked
//!    into the `Attr` enum. Mistyped values are only possible through the
//!    raw escape hatch, which reports them as errors.
//!
//! 3. **Single Owner**: A `CreateParam` owns one store handle and releases
//!    it exactly once on drop. It cannot be cloned.
//!
//! ## Modules
//!
//! - `core`: Players, decks, definition ids, seeded RNG
//! - `attrs`: Recognized keys, raw values, typed attributes
//! - `store`: The `ParamStore` boundary, descriptors, in-memory store
//! - `param`: `CreateParam` builder and `CreateOptions`
//! - `config`: Resolving a descriptor over engine defaults
//! - `python`: PyO3 bindings (feature `python`)

pub mod attrs;
pub mod config;
pub mod core;
pub mod error;
pub mod param;
pub mod store;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{Deck, DeckSlot, DefinitionId, GameRng, PlayerPair, Who};

pub use crate::attrs::{Attr, AttrKey, AttrValue, ErrorLevel, ValueKind};

pub use crate::store::{Descriptor, Handle, MemoryStore, ParamStore};

pub use crate::param::{CreateOptions, CreateParam};

pub use crate::config::{GameConfig, InitialConfig, PlayerConfig};

pub use crate::error::{Error, Result};
