//! The key/value boundary create parameters are written into.
//!
//! A `ParamStore` owns backing resources identified by handles. The
//! builder allocates one handle, writes through `set_attr` / `set_deck`,
//! and releases it exactly once. Stores are free to live on the other side
//! of an FFI boundary; [`MemoryStore`] keeps everything in process.
//!
//! ## Contract
//!
//! - `set_attr` rejects unknown keys and mistyped values with
//!   [`Error::TypeMismatch`](crate::Error::TypeMismatch).
//! - `release` is `unsafe`: releasing a handle twice is a caller bug.
//!   [`CreateParam`](crate::CreateParam) is the only safe owner and releases
//!   from `Drop`.

pub mod descriptor;
pub mod memory;

pub use descriptor::Descriptor;
pub use memory::MemoryStore;

use serde::{Deserialize, Serialize};

use crate::attrs::{AttrKey, AttrValue};
use crate::core::{DeckSlot, DefinitionId, Who};
use crate::error::Result;

/// Opaque handle to one descriptor inside a [`MemoryStore`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Handle(pub u64);

impl Handle {
    /// Get the raw handle value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for Handle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Backing store for create parameters.
///
/// Methods take `&self`; implementations synchronise internally. A single
/// handle is never written from more than one thread at a time.
pub trait ParamStore {
    /// Identifies one backing resource.
    type Handle: Copy + Eq + std::fmt::Debug;

    /// Create an empty backing resource.
    fn allocate(&self) -> Result<Self::Handle>;

    /// Write one attribute, replacing any previous value for `key`.
    fn set_attr(&self, handle: Self::Handle, key: AttrKey, value: AttrValue) -> Result<()>;

    /// Replace one player's character or card list.
    fn set_deck(
        &self,
        handle: Self::Handle,
        who: Who,
        slot: DeckSlot,
        ids: &[DefinitionId],
    ) -> Result<()>;

    /// Free a backing resource.
    ///
    /// Safe code never calls this. [`CreateParam`](crate::CreateParam) owns
    /// its handle and releases it from `Drop`, so it cannot be reached twice
    /// through the builder:
    ///
    /// ```compile_fail,E0133
    /// use gitcg::{CreateParam, ParamStore};
    ///
    /// # fn main() -> gitcg::Result<()> {
    /// let param = CreateParam::new()?;
    /// param.finalize(|store, handle| {
    ///     store.release(handle);
    ///     Ok(())
    /// })?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Safety
    ///
    /// `handle` must have come from this store's `allocate`, must be owned
    /// by the caller, and must not have been released already. Stores on the
    /// far side of an FFI boundary may free native memory here.
    unsafe fn release(&self, handle: Self::Handle);
}
