//! In-process reference implementation of [`ParamStore`].

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use rustc_hash::FxHashMap;
use tracing::{debug, trace, warn};

use super::{Descriptor, Handle, ParamStore};
use crate::attrs::{Attr, AttrKey, AttrValue};
use crate::core::{DeckSlot, DefinitionId, Who};
use crate::error::{Error, Result};

#[derive(Debug)]
struct Table {
    next: u64,
    live: FxHashMap<u64, Descriptor>,
}

impl Default for Table {
    fn default() -> Self {
        // Handle 0 is never issued.
        Self {
            next: 1,
            live: FxHashMap::default(),
        }
    }
}

/// A shared table of live descriptors.
///
/// Clones share the same table, so a store can be handed to several
/// builders and inspected afterwards.
///
/// ```
/// use gitcg::{CreateParam, MemoryStore};
///
/// let store = MemoryStore::new();
/// {
///     let mut param = CreateParam::with_store(store.clone()).unwrap();
///     param.set_version("v4.1.0").unwrap();
///     assert_eq!(store.live_handles(), 1);
/// }
/// assert_eq!(store.live_handles(), 0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    table: Arc<Mutex<Table>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn table(&self) -> MutexGuard<'_, Table> {
        // A panic mid-write leaves at most one descriptor half-updated; the
        // table itself stays consistent.
        self.table.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `f` against the descriptor behind `handle`.
    pub fn with_descriptor<T>(&self, handle: Handle, f: impl FnOnce(&Descriptor) -> T) -> Result<T> {
        let table = self.table();
        let descriptor = table
            .live
            .get(&handle.raw())
            .ok_or(Error::StaleHandle(handle.raw()))?;
        Ok(f(descriptor))
    }

    /// Copy of the descriptor behind `handle`.
    pub fn descriptor(&self, handle: Handle) -> Result<Descriptor> {
        self.with_descriptor(handle, Descriptor::clone)
    }

    /// Number of handles allocated and not yet released.
    #[must_use]
    pub fn live_handles(&self) -> usize {
        self.table().live.len()
    }

    /// Whether `handle` is currently allocated.
    #[must_use]
    pub fn is_live(&self, handle: Handle) -> bool {
        self.table().live.contains_key(&handle.raw())
    }

    fn with_descriptor_mut<T>(
        &self,
        handle: Handle,
        f: impl FnOnce(&mut Descriptor) -> T,
    ) -> Result<T> {
        let mut table = self.table();
        match table.live.get_mut(&handle.raw()) {
            Some(descriptor) => Ok(f(descriptor)),
            None => {
                warn!(handle = %handle, "write to stale create-param handle");
                Err(Error::StaleHandle(handle.raw()))
            }
        }
    }
}

impl ParamStore for MemoryStore {
    type Handle = Handle;

    fn allocate(&self) -> Result<Handle> {
        let mut table = self.table();
        let handle = Handle(table.next);
        table.next += 1;
        table.live.insert(handle.raw(), Descriptor::new());
        debug!(handle = %handle, live = table.live.len(), "allocated create-param handle");
        Ok(handle)
    }

    fn set_attr(&self, handle: Handle, key: AttrKey, value: AttrValue) -> Result<()> {
        let attr = Attr::new(key, value).map_err(|err| {
            warn!(handle = %handle, %key, error = %err, "rejected attribute");
            err
        })?;
        trace!(handle = %handle, ?attr, "set attribute");
        self.with_descriptor_mut(handle, |descriptor| {
            descriptor.insert(attr);
        })
    }

    fn set_deck(&self, handle: Handle, who: Who, slot: DeckSlot, ids: &[DefinitionId]) -> Result<()> {
        trace!(handle = %handle, %who, slot = slot.code(), count = ids.len(), "set deck");
        self.with_descriptor_mut(handle, |descriptor| descriptor.set_deck(who, slot, ids))
    }

    unsafe fn release(&self, handle: Handle) {
        let mut table = self.table();
        if table.live.remove(&handle.raw()).is_some() {
            debug!(handle = %handle, live = table.live.len(), "released create-param handle");
        } else {
            warn!(handle = %handle, "release of unknown create-param handle ignored");
        }
    }
}
