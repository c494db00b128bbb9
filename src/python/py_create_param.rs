//! CreateParam bindings for Python.

use pyo3::exceptions::PyTypeError;
use pyo3::prelude::*;

use crate::attrs::{AttrKey, AttrValue};
use crate::core::{PlayerPair, Who};
use crate::param::{CreateOptions, CreateParam};

use super::py_core::{raw_ids, PyDeck};

/// Python wrapper for CreateParam.
///
/// The backing handle is released when the Python object is collected.
#[pyclass(name = "CreateParam")]
pub struct PyCreateParam(CreateParam);

fn toggle_pair(pair: Option<(i64, i64)>) -> Option<PlayerPair<bool>> {
    pair.map(|(player0, player1)| PlayerPair::new(player0 != 0, player1 != 0))
}

#[pymethods]
impl PyCreateParam {
    /// Create parameters from 0-2 decks, a version string, and optional
    /// state configuration overrides.
    ///
    /// Decks not given here can be set later with `set_characters` and
    /// `set_cards`. `no_shuffle`, `always_omni` and
    /// `allow_tuning_any_dice` take a `(player0, player1)` pair.
    #[new]
    #[pyo3(signature = (
        deck0 = None,
        deck1 = None,
        version = None,
        *,
        random_seed = None,
        initial_hands_count = None,
        max_hands_count = None,
        max_rounds_count = None,
        max_supports_count = None,
        max_summons_count = None,
        initial_dice_count = None,
        max_dice_count = None,
        no_shuffle = None,
        always_omni = None,
        allow_tuning_any_dice = None
    ))]
    #[allow(clippy::too_many_arguments)]
    fn new(
        deck0: Option<PyDeck>,
        deck1: Option<PyDeck>,
        version: Option<String>,
        random_seed: Option<i64>,
        initial_hands_count: Option<i64>,
        max_hands_count: Option<i64>,
        max_rounds_count: Option<i64>,
        max_supports_count: Option<i64>,
        max_summons_count: Option<i64>,
        initial_dice_count: Option<i64>,
        max_dice_count: Option<i64>,
        no_shuffle: Option<(i64, i64)>,
        always_omni: Option<(i64, i64)>,
        allow_tuning_any_dice: Option<(i64, i64)>,
    ) -> PyResult<Self> {
        let options = CreateOptions {
            deck0: deck0.map(|d| d.0),
            deck1: deck1.map(|d| d.0),
            version,
            random_seed,
            initial_hands_count,
            max_hands_count,
            max_rounds_count,
            max_supports_count,
            max_summons_count,
            initial_dice_count,
            max_dice_count,
            no_shuffle: toggle_pair(no_shuffle),
            always_omni: toggle_pair(always_omni),
            allow_tuning_any_dice: toggle_pair(allow_tuning_any_dice),
        };
        Ok(Self(CreateParam::create(options)?))
    }

    fn set_characters(&mut self, who: i64, characters: Vec<u32>) -> PyResult<()> {
        self.0.set_characters(who, characters)?;
        Ok(())
    }

    fn set_cards(&mut self, who: i64, cards: Vec<u32>) -> PyResult<()> {
        self.0.set_cards(who, cards)?;
        Ok(())
    }

    /// Set an attribute by raw key code. `value` must be an int or a str.
    ///
    /// Toggle keys keep only whether the value is non-zero; `get_attr`
    /// returns 0 or 1 for them.
    fn set_attr(&mut self, key: u32, value: &Bound<'_, PyAny>) -> PyResult<()> {
        let value = if let Ok(v) = value.extract::<i64>() {
            AttrValue::Int(v)
        } else if let Ok(v) = value.extract::<String>() {
            AttrValue::Text(v)
        } else {
            return Err(PyTypeError::new_err(format!(
                "attribute value must be int or str, got {}",
                value.get_type().name()?
            )));
        };
        self.0.set_raw_attr(key, value)?;
        Ok(())
    }

    fn set_version(&mut self, version: String) -> PyResult<()> {
        self.0.set_version(version)?;
        Ok(())
    }

    fn set_random_seed(&mut self, random_seed: i64) -> PyResult<()> {
        self.0.set_random_seed(random_seed)?;
        Ok(())
    }

    fn set_initial_hands_count(&mut self, initial_hands_count: i64) -> PyResult<()> {
        self.0.set_initial_hands_count(initial_hands_count)?;
        Ok(())
    }

    fn set_max_hands_count(&mut self, max_hands_count: i64) -> PyResult<()> {
        self.0.set_max_hands_count(max_hands_count)?;
        Ok(())
    }

    fn set_max_rounds_count(&mut self, max_rounds_count: i64) -> PyResult<()> {
        self.0.set_max_rounds_count(max_rounds_count)?;
        Ok(())
    }

    fn set_max_supports_count(&mut self, max_supports_count: i64) -> PyResult<()> {
        self.0.set_max_supports_count(max_supports_count)?;
        Ok(())
    }

    fn set_max_summons_count(&mut self, max_summons_count: i64) -> PyResult<()> {
        self.0.set_max_summons_count(max_summons_count)?;
        Ok(())
    }

    fn set_initial_dice_count(&mut self, initial_dice_count: i64) -> PyResult<()> {
        self.0.set_initial_dice_count(initial_dice_count)?;
        Ok(())
    }

    fn set_max_dice_count(&mut self, max_dice_count: i64) -> PyResult<()> {
        self.0.set_max_dice_count(max_dice_count)?;
        Ok(())
    }

    fn set_no_shuffle(&mut self, player0_value: i64, player1_value: i64) -> PyResult<()> {
        self.0.set_no_shuffle(player0_value != 0, player1_value != 0)?;
        Ok(())
    }

    fn set_always_omni(&mut self, player0_value: i64, player1_value: i64) -> PyResult<()> {
        self.0.set_always_omni(player0_value != 0, player1_value != 0)?;
        Ok(())
    }

    fn set_allow_tuning_any_dice(&mut self, player0_value: i64, player1_value: i64) -> PyResult<()> {
        self.0
            .set_allow_tuning_any_dice(player0_value != 0, player1_value != 0)?;
        Ok(())
    }

    /// Character ids set for a player, or None.
    fn characters(&self, who: i64) -> PyResult<Option<Vec<u32>>> {
        let who = Who::new(who)?;
        Ok(self.0.descriptor()?.characters(who).map(raw_ids))
    }

    /// Card ids set for a player, or None.
    fn cards(&self, who: i64) -> PyResult<Option<Vec<u32>>> {
        let who = Who::new(who)?;
        Ok(self.0.descriptor()?.cards(who).map(raw_ids))
    }

    /// Value stored under a raw key code, or None.
    fn get_attr(&self, py: Python<'_>, key: u32) -> PyResult<Option<PyObject>> {
        let key = AttrKey::from_code(key)?;
        let value = self.0.descriptor()?.get(key).map(|attr| match attr.to_value() {
            AttrValue::Int(v) => v.into_py(py),
            AttrValue::Text(s) => s.into_py(py),
        });
        Ok(value)
    }

    /// Serialized descriptor, for handing to an out-of-process engine.
    fn to_bytes(&self) -> PyResult<Vec<u8>> {
        Ok(self.0.descriptor()?.encode()?)
    }

    fn __repr__(&self) -> PyResult<String> {
        let descriptor = self.0.descriptor()?;
        let keys: Vec<&str> = descriptor.keys().map(AttrKey::name).collect();
        Ok(format!("CreateParam(attrs={keys:?})"))
    }
}
