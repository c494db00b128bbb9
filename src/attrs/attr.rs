//! Typed attributes: one variant per recognized key.
//!
//! Every named setter on [`CreateParam`](crate::param::CreateParam) builds
//! an `Attr`, so a value can never be written under a key that expects a
//! different type. `Attr::new` is the single place where an untyped
//! `(AttrKey, AttrValue)` pair is checked.

use serde::{Deserialize, Serialize};

use super::key::{AttrKey, AttrValue, ValueKind};
use crate::core::Who;
use crate::error::{Error, Result};

/// How strictly the engine treats rule errors during a match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorLevel {
    /// Any rule error aborts the match.
    #[default]
    Strict,
    /// Errors while previewing actions are ignored.
    ToleratePreview,
    /// A phase that raises an error is skipped.
    SkipPhase,
}

impl ErrorLevel {
    /// Wire name of this level.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorLevel::Strict => "strict",
            ErrorLevel::ToleratePreview => "toleratePreview",
            ErrorLevel::SkipPhase => "skipPhase",
        }
    }

    /// Parse a wire name.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "strict" => Some(ErrorLevel::Strict),
            "toleratePreview" => Some(ErrorLevel::ToleratePreview),
            "skipPhase" => Some(ErrorLevel::SkipPhase),
            _ => None,
        }
    }
}

impl std::fmt::Display for ErrorLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A key together with a value of the type that key expects.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attr {
    DataVersion(String),
    RandomSeed(i64),
    InitialHandsCount(i64),
    MaxHandsCount(i64),
    MaxRoundsCount(i64),
    MaxSupportsCount(i64),
    MaxSummonsCount(i64),
    InitialDiceCount(i64),
    MaxDiceCount(i64),
    MaxPileCount(i64),
    NoShuffle(Who, bool),
    AlwaysOmni(Who, bool),
    AllowTuningAnyDice(Who, bool),
    ErrorLevel(ErrorLevel),
}

impl Attr {
    /// Check an untyped pair against the key's expected type.
    ///
    /// Fails with [`Error::TypeMismatch`] if the value has the wrong kind,
    /// or if a string key only accepts a fixed set of names.
    ///
    /// Per-player toggles are normalized: any non-zero integer becomes
    /// `true` and reads back as `1`, so the original integer is not kept.
    pub fn new(key: AttrKey, value: AttrValue) -> Result<Self> {
        let mismatch = |value: &AttrValue, expected: &'static str| Error::TypeMismatch {
            key,
            expected,
            found: value.to_string(),
        };

        let attr = match (key, value) {
            (AttrKey::DataVersion, AttrValue::Text(v)) => Attr::DataVersion(v),
            (AttrKey::ErrorLevel, AttrValue::Text(v)) => match ErrorLevel::parse(&v) {
                Some(level) => Attr::ErrorLevel(level),
                None => {
                    return Err(mismatch(
                        &AttrValue::Text(v),
                        "one of \"strict\", \"toleratePreview\", \"skipPhase\"",
                    ))
                }
            },
            (AttrKey::RandomSeed, AttrValue::Int(v)) => Attr::RandomSeed(v),
            (AttrKey::InitialHandsCount, AttrValue::Int(v)) => Attr::InitialHandsCount(v),
            (AttrKey::MaxHandsCount, AttrValue::Int(v)) => Attr::MaxHandsCount(v),
            (AttrKey::MaxRoundsCount, AttrValue::Int(v)) => Attr::MaxRoundsCount(v),
            (AttrKey::MaxSupportsCount, AttrValue::Int(v)) => Attr::MaxSupportsCount(v),
            (AttrKey::MaxSummonsCount, AttrValue::Int(v)) => Attr::MaxSummonsCount(v),
            (AttrKey::InitialDiceCount, AttrValue::Int(v)) => Attr::InitialDiceCount(v),
            (AttrKey::MaxDiceCount, AttrValue::Int(v)) => Attr::MaxDiceCount(v),
            (AttrKey::MaxPileCount, AttrValue::Int(v)) => Attr::MaxPileCount(v),
            (AttrKey::NoShuffle0, AttrValue::Int(v)) => Attr::NoShuffle(Who::Player0, v != 0),
            (AttrKey::NoShuffle1, AttrValue::Int(v)) => Attr::NoShuffle(Who::Player1, v != 0),
            (AttrKey::AlwaysOmni0, AttrValue::Int(v)) => Attr::AlwaysOmni(Who::Player0, v != 0),
            (AttrKey::AlwaysOmni1, AttrValue::Int(v)) => Attr::AlwaysOmni(Who::Player1, v != 0),
            (AttrKey::AllowTuningAnyDice0, AttrValue::Int(v)) => {
                Attr::AllowTuningAnyDice(Who::Player0, v != 0)
            }
            (AttrKey::AllowTuningAnyDice1, AttrValue::Int(v)) => {
                Attr::AllowTuningAnyDice(Who::Player1, v != 0)
            }
            (key, value) => {
                let expected = match key.kind() {
                    ValueKind::Int => "integer",
                    ValueKind::Text => "string",
                };
                return Err(mismatch(&value, expected));
            }
        };
        Ok(attr)
    }

    /// Check a raw `(code, value)` pair.
    ///
    /// Fails with [`Error::UnrecognizedKey`] before looking at the value.
    pub fn from_raw(code: u32, value: AttrValue) -> Result<Self> {
        Self::new(AttrKey::from_code(code)?, value)
    }

    /// The key this attribute is stored under.
    #[must_use]
    pub const fn key(&self) -> AttrKey {
        match self {
            Attr::DataVersion(_) => AttrKey::DataVersion,
            Attr::RandomSeed(_) => AttrKey::RandomSeed,
            Attr::InitialHandsCount(_) => AttrKey::InitialHandsCount,
            Attr::MaxHandsCount(_) => AttrKey::MaxHandsCount,
            Attr::MaxRoundsCount(_) => AttrKey::MaxRoundsCount,
            Attr::MaxSupportsCount(_) => AttrKey::MaxSupportsCount,
            Attr::MaxSummonsCount(_) => AttrKey::MaxSummonsCount,
            Attr::InitialDiceCount(_) => AttrKey::InitialDiceCount,
            Attr::MaxDiceCount(_) => AttrKey::MaxDiceCount,
            Attr::MaxPileCount(_) => AttrKey::MaxPileCount,
            Attr::NoShuffle(who, _) => AttrKey::no_shuffle(*who),
            Attr::AlwaysOmni(who, _) => AttrKey::always_omni(*who),
            Attr::AllowTuningAnyDice(who, _) => AttrKey::allow_tuning_any_dice(*who),
            Attr::ErrorLevel(_) => AttrKey::ErrorLevel,
        }
    }

    /// Untyped value, as written across the boundary.
    #[must_use]
    pub fn to_value(&self) -> AttrValue {
        match self {
            Attr::DataVersion(v) => AttrValue::Text(v.clone()),
            Attr::ErrorLevel(level) => AttrValue::Text(level.as_str().to_string()),
            Attr::RandomSeed(v)
            | Attr::InitialHandsCount(v)
            | Attr::MaxHandsCount(v)
            | Attr::MaxRoundsCount(v)
            | Attr::MaxSupportsCount(v)
            | Attr::MaxSummonsCount(v)
            | Attr::InitialDiceCount(v)
            | Attr::MaxDiceCount(v)
            | Attr::MaxPileCount(v) => AttrValue::Int(*v),
            Attr::NoShuffle(_, v) | Attr::AlwaysOmni(_, v) | Attr::AllowTuningAnyDice(_, v) => {
                AttrValue::from(*v)
            }
        }
    }

    /// Integer payload, if the key is numeric (toggles read as 0/1).
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        self.to_value().as_int()
    }
}
