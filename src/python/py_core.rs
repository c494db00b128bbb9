//! Core type bindings for Python.

use pyo3::prelude::*;

use crate::core::{Deck, DefinitionId};

/// Python wrapper for Deck.
///
/// A standard deck has 3 characters and 30 action cards. Both lists hold
/// definition ids.
#[pyclass(name = "Deck")]
#[derive(Clone, Debug)]
pub struct PyDeck(pub Deck);

#[pymethods]
impl PyDeck {
    #[new]
    fn new(characters: Vec<u32>, cards: Vec<u32>) -> Self {
        Self(Deck::new(characters, cards))
    }

    #[getter]
    fn characters(&self) -> Vec<u32> {
        self.0.characters.iter().map(|id| id.raw()).collect()
    }

    #[getter]
    fn cards(&self) -> Vec<u32> {
        self.0.cards.iter().map(|id| id.raw()).collect()
    }

    fn __repr__(&self) -> String {
        format!(
            "Deck(characters={:?}, cards=<{} cards>)",
            self.characters(),
            self.0.cards.len()
        )
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

pub(super) fn raw_ids(ids: &[DefinitionId]) -> Vec<u32> {
    ids.iter().map(|id| id.raw()).collect()
}
