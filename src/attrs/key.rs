//! Recognized attribute keys and raw attribute values.
//!
//! `AttrKey` is the closed key space the engine understands. Each key has
//! a stable numeric code and accepts exactly one [`ValueKind`].
//!
//! `AttrValue` is the untyped form a value takes at the store boundary.

use serde::{Deserialize, Serialize};

use crate::core::Who;
use crate::error::{Error, Result};

/// Semantic type a key accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    /// Integer value. Boolean toggles are integers (0 = off).
    Int,
    /// String value.
    Text,
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueKind::Int => f.write_str("integer"),
            ValueKind::Text => f.write_str("string"),
        }
    }
}

/// A recognized attribute key.
///
/// Discriminants are the boundary codes accepted by
/// [`AttrKey::from_code`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum AttrKey {
    /// Ruleset (data) version string.
    DataVersion = 1,
    /// Random seed.
    RandomSeed = 2,
    /// Cards drawn into the opening hand.
    InitialHandsCount = 3,
    /// Hand size limit.
    MaxHandsCount = 4,
    /// Round limit before the match is a draw.
    MaxRoundsCount = 5,
    /// Support zone capacity.
    MaxSupportsCount = 6,
    /// Summon zone capacity.
    MaxSummonsCount = 7,
    /// Dice rolled each round.
    InitialDiceCount = 8,
    /// Dice limit.
    MaxDiceCount = 9,
    /// Disable pile shuffling for player 0.
    NoShuffle0 = 10,
    /// Disable pile shuffling for player 1.
    NoShuffle1 = 11,
    /// Only roll omni dice for player 0.
    AlwaysOmni0 = 12,
    /// Only roll omni dice for player 1.
    AlwaysOmni1 = 13,
    /// Let player 0 tune any die type.
    AllowTuningAnyDice0 = 14,
    /// Let player 1 tune any die type.
    AllowTuningAnyDice1 = 15,
    /// Pile size limit.
    MaxPileCount = 16,
    /// How the engine treats rule errors.
    ErrorLevel = 17,
}

impl AttrKey {
    /// Every recognized key, in code order.
    pub const ALL: [AttrKey; 17] = [
        AttrKey::DataVersion,
        AttrKey::RandomSeed,
        AttrKey::InitialHandsCount,
        AttrKey::MaxHandsCount,
        AttrKey::MaxRoundsCount,
        AttrKey::MaxSupportsCount,
        AttrKey::MaxSummonsCount,
        AttrKey::InitialDiceCount,
        AttrKey::MaxDiceCount,
        AttrKey::NoShuffle0,
        AttrKey::NoShuffle1,
        AttrKey::AlwaysOmni0,
        AttrKey::AlwaysOmni1,
        AttrKey::AllowTuningAnyDice0,
        AttrKey::AllowTuningAnyDice1,
        AttrKey::MaxPileCount,
        AttrKey::ErrorLevel,
    ];

    /// Boundary code of this key.
    #[must_use]
    pub const fn code(self) -> u32 {
        self as u32
    }

    /// Look up a key by boundary code.
    pub fn from_code(code: u32) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|key| key.code() == code)
            .ok_or(Error::UnrecognizedKey(code))
    }

    /// The value type this key accepts.
    #[must_use]
    pub const fn kind(self) -> ValueKind {
        match self {
            AttrKey::DataVersion | AttrKey::ErrorLevel => ValueKind::Text,
            _ => ValueKind::Int,
        }
    }

    /// `no_shuffle` key for a player.
    #[must_use]
    pub const fn no_shuffle(who: Who) -> Self {
        match who {
            Who::Player0 => AttrKey::NoShuffle0,
            Who::Player1 => AttrKey::NoShuffle1,
        }
    }

    /// `always_omni` key for a player.
    #[must_use]
    pub const fn always_omni(who: Who) -> Self {
        match who {
            Who::Player0 => AttrKey::AlwaysOmni0,
            Who::Player1 => AttrKey::AlwaysOmni1,
        }
    }

    /// `allow_tuning_any_dice` key for a player.
    #[must_use]
    pub const fn allow_tuning_any_dice(who: Who) -> Self {
        match who {
            Who::Player0 => AttrKey::AllowTuningAnyDice0,
            Who::Player1 => AttrKey::AllowTuningAnyDice1,
        }
    }

    /// Snake-case name, as used in logs and error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            AttrKey::DataVersion => "data_version",
            AttrKey::RandomSeed => "random_seed",
            AttrKey::InitialHandsCount => "initial_hands_count",
            AttrKey::MaxHandsCount => "max_hands_count",
            AttrKey::MaxRoundsCount => "max_rounds_count",
            AttrKey::MaxSupportsCount => "max_supports_count",
            AttrKey::MaxSummonsCount => "max_summons_count",
            AttrKey::InitialDiceCount => "initial_dice_count",
            AttrKey::MaxDiceCount => "max_dice_count",
            AttrKey::NoShuffle0 => "no_shuffle[0]",
            AttrKey::NoShuffle1 => "no_shuffle[1]",
            AttrKey::AlwaysOmni0 => "always_omni[0]",
            AttrKey::AlwaysOmni1 => "always_omni[1]",
            AttrKey::AllowTuningAnyDice0 => "allow_tuning_any_dice[0]",
            AttrKey::AllowTuningAnyDice1 => "allow_tuning_any_dice[1]",
            AttrKey::MaxPileCount => "max_pile_count",
            AttrKey::ErrorLevel => "error_level",
        }
    }
}

impl std::fmt::Display for AttrKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Untyped attribute value as it crosses the store boundary.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttrValue {
    /// Integer value.
    Int(i64),
    /// String value.
    Text(String),
}

impl AttrValue {
    /// The kind of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            AttrValue::Int(_) => ValueKind::Int,
            AttrValue::Text(_) => ValueKind::Text,
        }
    }

    /// Get as integer if this is an Int value.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            AttrValue::Int(v) => Some(*v),
            AttrValue::Text(_) => None,
        }
    }
}

impl std::fmt::Display for AttrValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttrValue::Int(v) => write!(f, "integer {v}"),
            AttrValue::Text(s) => write!(f, "string {s:?}"),
        }
    }
}

impl From<i64> for AttrValue {
    fn from(v: i64) -> Self {
        AttrValue::Int(v)
    }
}

impl From<i32> for AttrValue {
    fn from(v: i32) -> Self {
        AttrValue::Int(i64::from(v))
    }
}

impl From<bool> for AttrValue {
    fn from(v: bool) -> Self {
        AttrValue::Int(i64::from(v))
    }
}

impl From<String> for AttrValue {
    fn from(v: String) -> Self {
        AttrValue::Text(v)
    }
}

impl From<&str> for AttrValue {
    fn from(v: &str) -> Self {
        AttrValue::Text(v.to_string())
    }
}
