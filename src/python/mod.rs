//! Python bindings for building GI-TCG create parameters.
//!
//! # Quick Start
//!
//! ```python
//! import gitcg
//!
//! deck0 = gitcg.Deck(characters=[1411, 1510, 2103], cards=[311503] * 30)
//! deck1 = gitcg.Deck(characters=[1609, 2203, 1608], cards=[312004] * 30)
//!
//! param = gitcg.CreateParam(deck0, deck1, "v4.1.0", random_seed=42, no_shuffle=(1, 0))
//! param.set_attr(gitcg.ATTR_MAX_PILE_COUNT, 120)
//! param.set_attr(gitcg.ATTR_PLAYER_ALWAYS_OMNI_1, 1)
//! ```

use pyo3::exceptions::{PyKeyError, PyRuntimeError, PyTypeError, PyValueError};
use pyo3::prelude::*;

mod py_core;
mod py_create_param;

pub use py_core::*;
pub use py_create_param::*;

use crate::attrs::AttrKey;
use crate::error::Error;

impl From<Error> for PyErr {
    fn from(err: Error) -> Self {
        let message = err.to_string();
        match err {
            Error::InvalidArgument(_) | Error::InvalidConfig { .. } => PyValueError::new_err(message),
            Error::UnrecognizedKey(_) | Error::MissingField(_) => PyKeyError::new_err(message),
            Error::TypeMismatch { .. } => PyTypeError::new_err(message),
            Error::StaleHandle(_) | Error::Encoding(_) => PyRuntimeError::new_err(message),
        }
    }
}

/// Short module-level name of a key's code, e.g. `ATTR_NO_SHUFFLE0`.
fn attr_constant_name(key: AttrKey) -> String {
    format!("ATTR_{}", key.name().replace(['[', ']'], "").to_uppercase())
}

/// Name the key's code had in the low-level binding, grouped by where the
/// engine stores it. Existing `set_attr(ATTR_..., value)` callers use these.
const fn low_level_constant_name(key: AttrKey) -> &'static str {
    match key {
        AttrKey::DataVersion => "ATTR_CREATEPARAM_DATA_VERSION",
        AttrKey::RandomSeed => "ATTR_STATE_CONFIG_RANDOM_SEED",
        AttrKey::InitialHandsCount => "ATTR_STATE_CONFIG_INITIAL_HANDS_COUNT",
        AttrKey::MaxHandsCount => "ATTR_STATE_CONFIG_MAX_HANDS_COUNT",
        AttrKey::MaxRoundsCount => "ATTR_STATE_CONFIG_MAX_ROUNDS_COUNT",
        AttrKey::MaxSupportsCount => "ATTR_STATE_CONFIG_MAX_SUPPORTS_COUNT",
        AttrKey::MaxSummonsCount => "ATTR_STATE_CONFIG_MAX_SUMMONS_COUNT",
        AttrKey::InitialDiceCount => "ATTR_STATE_CONFIG_INITIAL_DICE_COUNT",
        AttrKey::MaxDiceCount => "ATTR_STATE_CONFIG_MAX_DICE_COUNT",
        AttrKey::MaxPileCount => "ATTR_STATE_CONFIG_MAX_PILE_COUNT",
        AttrKey::ErrorLevel => "ATTR_STATE_CONFIG_ERROR_LEVEL",
        AttrKey::NoShuffle0 => "ATTR_CREATEPARAM_NO_SHUFFLE_0",
        AttrKey::NoShuffle1 => "ATTR_CREATEPARAM_NO_SHUFFLE_1",
        AttrKey::AlwaysOmni0 => "ATTR_PLAYER_ALWAYS_OMNI_0",
        AttrKey::AlwaysOmni1 => "ATTR_PLAYER_ALWAYS_OMNI_1",
        AttrKey::AllowTuningAnyDice0 => "ATTR_PLAYER_ALLOW_TUNING_ANY_DICE_0",
        AttrKey::AllowTuningAnyDice1 => "ATTR_PLAYER_ALLOW_TUNING_ANY_DICE_1",
    }
}

/// gitcg: typed construction of GI-TCG initial state parameters.
#[pymodule]
fn gitcg(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyDeck>()?;
    m.add_class::<PyCreateParam>()?;

    for key in AttrKey::ALL {
        m.add(low_level_constant_name(key), key.code())?;
        m.add(attr_constant_name(key).as_str(), key.code())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attr_constant_names() {
        assert_eq!(attr_constant_name(AttrKey::DataVersion), "ATTR_DATA_VERSION");
        assert_eq!(attr_constant_name(AttrKey::AlwaysOmni1), "ATTR_ALWAYS_OMNI1");
        assert_eq!(attr_constant_name(AttrKey::MaxPileCount), "ATTR_MAX_PILE_COUNT");
    }

    #[test]
    fn test_low_level_constant_names() {
        assert_eq!(
            low_level_constant_name(AttrKey::DataVersion),
            "ATTR_CREATEPARAM_DATA_VERSION"
        );
        assert_eq!(
            low_level_constant_name(AttrKey::RandomSeed),
            "ATTR_STATE_CONFIG_RANDOM_SEED"
        );
        assert_eq!(
            low_level_constant_name(AttrKey::NoShuffle0),
            "ATTR_CREATEPARAM_NO_SHUFFLE_0"
        );
        assert_eq!(
            low_level_constant_name(AttrKey::AlwaysOmni1),
            "ATTR_PLAYER_ALWAYS_OMNI_1"
        );
        assert_eq!(
            low_level_constant_name(AttrKey::AllowTuningAnyDice0),
            "ATTR_PLAYER_ALLOW_TUNING_ANY_DICE_0"
        );
    }

    #[test]
    fn test_constant_names_unique() {
        let mut names: Vec<String> = AttrKey::ALL
            .into_iter()
            .flat_map(|key| [low_level_constant_name(key).to_string(), attr_constant_name(key)])
            .collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 2 * AttrKey::ALL.len());
    }
}
